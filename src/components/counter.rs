use yew::prelude::*;

use crate::animation::format::static_text;
use crate::animation::{AnimationTarget, CountPolicy};
use crate::config::COUNTER_DURATION_MS;
use crate::hooks::use_animated_counter;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(COUNTER_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or(CountPolicy::Frame)]
    pub policy: CountPolicy,
}

/// A number that counts up from zero the first time it scrolls into view.
///
/// Bad parameters are logged and the target is shown as plain text.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    match AnimationTarget::new(props.value, props.duration_ms) {
        Ok(target) => html! {
            <CountingNumber target={target.with_suffix(&props.suffix)} policy={props.policy} />
        },
        Err(e) => {
            log::error!("counter not animated: {}", e);
            html! { <span class="tabular-nums">{ static_text(props.value, &props.suffix) }</span> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct CountingNumberProps {
    target: AnimationTarget,
    policy: CountPolicy,
}

#[function_component(CountingNumber)]
fn counting_number(props: &CountingNumberProps) -> Html {
    let node = use_node_ref();
    let view = use_animated_counter(node.clone(), props.target.clone(), props.policy);

    html! {
        <span ref={node} class="tabular-nums">{ view.text }</span>
    }
}
