use yew::prelude::*;

/// Font Awesome glyphs used across the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Award,
    Building,
    ClipboardCheck,
    Clock,
    Crown,
    GraduationCap,
    Globe,
    Heart,
    Hotel,
    Message,
    Play,
    Shield,
    Sparkles,
    Star,
    Trophy,
    Users,
    Zap,
}

impl IconKind {
    pub fn class(&self) -> &'static str {
        match self {
            IconKind::ArrowRight => "fa-solid fa-arrow-right",
            IconKind::Award => "fa-solid fa-award",
            IconKind::Building => "fa-solid fa-building",
            IconKind::ClipboardCheck => "fa-solid fa-clipboard-check",
            IconKind::Clock => "fa-solid fa-clock",
            IconKind::Crown => "fa-solid fa-crown",
            IconKind::GraduationCap => "fa-solid fa-graduation-cap",
            IconKind::Globe => "fa-solid fa-globe",
            IconKind::Heart => "fa-solid fa-heart",
            IconKind::Hotel => "fa-solid fa-hotel",
            IconKind::Message => "fa-solid fa-message",
            IconKind::Play => "fa-solid fa-play",
            IconKind::Shield => "fa-solid fa-shield-halved",
            IconKind::Sparkles => "fa-solid fa-wand-magic-sparkles",
            IconKind::Star => "fa-solid fa-star",
            IconKind::Trophy => "fa-solid fa-trophy",
            IconKind::Users => "fa-solid fa-users",
            IconKind::Zap => "fa-solid fa-bolt",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <i class={classes!(props.kind.class(), props.class.clone())} aria-hidden="true"></i>
    }
}
