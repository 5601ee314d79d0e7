use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    /// Translucent white, for use on gradients
    Glass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Regular,
    Large,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Renders a link instead of a `<button>` when set
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let variant = match props.variant {
        ButtonVariant::Solid => "btn-solid",
        ButtonVariant::Outline => "btn-outline",
        ButtonVariant::Glass => "btn-glass",
    };
    let size = match props.size {
        ButtonSize::Regular => None,
        ButtonSize::Large => Some("btn-lg"),
    };
    let class = classes!("btn", variant, size, props.class.clone());

    match &props.href {
        Some(href) if href.starts_with("http") => html! {
            <a class={class} href={href.clone()} target="_blank" rel="noopener noreferrer">
                { for props.children.iter() }
            </a>
        },
        Some(href) => html! {
            <a class={class} href={href.clone()}>
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button class={class}>
                { for props.children.iter() }
            </button>
        },
    }
}
