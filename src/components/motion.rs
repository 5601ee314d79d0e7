use yew::prelude::*;

use crate::animation::{Loop, Pose, Transition};
use crate::hooks::{use_in_view, InViewOptions};

/// Inline style for an element at `initial` or at rest, with its transition.
pub fn pose_style(initial: Pose, transition: Transition, shown: bool) -> String {
    let pose = if shown { Pose::REST } else { initial };
    format!("{} {}", pose.style(), transition.css())
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Pose before the element has been seen
    #[prop_or(Pose::hidden_below(50.0))]
    pub initial: Pose,
    #[prop_or_default]
    pub transition: Transition,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or("0px")]
    pub margin: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Moves its children from `initial` to rest when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(
        node.clone(),
        InViewOptions {
            once: props.once,
            margin: props.margin,
        },
    );
    let style = pose_style(props.initial, props.transition, shown);

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PosedProps {
    #[prop_or(Pose::hidden_below(50.0))]
    pub initial: Pose,
    #[prop_or_default]
    pub transition: Transition,
    /// Visibility decided by the parent
    pub shown: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Like [`Reveal`], but follows a parent's visibility instead of observing itself.
#[function_component(Posed)]
pub fn posed(props: &PosedProps) -> Html {
    let style = pose_style(props.initial, props.transition, props.shown);

    html! {
        <div class={classes!("reveal", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoopingProps {
    /// Keyframe class from the global stylesheet, e.g. `loop-float`
    pub animation: &'static str,
    pub timing: Loop,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in an endlessly repeating keyframe animation.
#[function_component(Looping)]
pub fn looping(props: &LoopingProps) -> Html {
    let style = format!("{} {}", props.timing.css(), props.style);
    html! {
        <div class={classes!(props.animation, props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_style_switches_to_rest_when_shown() {
        let initial = Pose::hidden_below(50.0);
        let transition = Transition::new(0.5);

        let hidden = pose_style(initial, transition, false);
        assert!(hidden.starts_with(&initial.style()));
        assert!(hidden.ends_with(&transition.css()));

        let shown = pose_style(initial, transition, true);
        assert!(shown.starts_with(&Pose::REST.style()));
        assert_ne!(hidden, shown);
    }
}
