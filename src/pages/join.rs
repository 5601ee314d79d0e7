use yew::prelude::*;

use crate::animation::motion::stagger;
use crate::animation::{Easing, Loop, Pose, Transition};
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, Icon, IconKind, Looping, Reveal,
};
use crate::config::{SiteConfig, REVEAL_MARGIN};

struct Benefit {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
}

const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: IconKind::Crown,
        title: "VIP Treatment",
        description: "Enjoy exclusive privileges and premium access to all hotel amenities",
    },
    Benefit {
        icon: IconKind::Users,
        title: "Amazing Community",
        description: "Connect with like-minded individuals who share your passion for excellence",
    },
    Benefit {
        icon: IconKind::Star,
        title: "Career Growth",
        description: "Advance through our ranks and develop valuable leadership skills",
    },
    Benefit {
        icon: IconKind::Zap,
        title: "Regular Events",
        description: "Participate in exciting activities and special hotel-wide events",
    },
    Benefit {
        icon: IconKind::Heart,
        title: "Supportive Environment",
        description: "Experience a welcoming culture that values every member's contribution",
    },
    Benefit {
        icon: IconKind::Message,
        title: "Active Community",
        description: "Engage with our vibrant discord community and stay connected",
    },
];

// (value, label)
const QUICK_STATS: &[(&str, &str)] = &[
    ("12K+", "Happy Members"),
    ("24/7", "Active Community"),
    ("5★", "Experience Rating"),
];

// (icon, loop delay, position class)
const BACKDROP_ICONS: &[(IconKind, f64, &str)] = &[
    (IconKind::Crown, 0.0, "pos-join-1"),
    (IconKind::Star, 2.0, "pos-join-2"),
    (IconKind::Users, 4.0, "pos-join-3"),
    (IconKind::Heart, 6.0, "pos-join-4"),
];

#[derive(Properties, PartialEq)]
struct BenefitCardProps {
    icon: IconKind,
    title: AttrValue,
    description: AttrValue,
    delay: f64,
}

#[function_component(BenefitCard)]
fn benefit_card(props: &BenefitCardProps) -> Html {
    html! {
        <Reveal
            initial={Pose::hidden_below(50.0).tilt(-15.0, 0.0)}
            transition={Transition::new(0.8).delay(props.delay)}
            margin={REVEAL_MARGIN}
        >
            <Card class="benefit-card hover-tilt">
                <CardContent class="centered">
                    <div class="icon-badge icon-badge-sm hover-spin">
                        <Icon kind={props.icon} />
                    </div>
                    <h3 class="benefit-title">{ props.title.clone() }</h3>
                    <p class="benefit-text">{ props.description.clone() }</p>
                </CardContent>
            </Card>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct PulsingButtonProps {
    #[prop_or_default]
    variant: ButtonVariant,
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Children,
}

/// Large call-to-action with a breathing highlight behind its label.
#[function_component(PulsingButton)]
fn pulsing_button(props: &PulsingButtonProps) -> Html {
    html! {
        <div class="hover-grow">
            <Button
                variant={props.variant}
                size={ButtonSize::Large}
                href={props.href.clone()}
                class={classes!("btn-pulsing", props.class.clone())}
            >
                <Looping animation="loop-breathe" timing={Loop::new(2.0, 0.0)} class="btn-pulse-layer" />
                <span class="btn-label">{ for props.children.iter() }</span>
            </Button>
        </div>
    }
}

#[function_component(Join)]
pub fn join() -> Html {
    let config = SiteConfig::get();

    html! {
        <section class="section section-join" id="join">
            <div class="section-backdrop">
                <Looping animation="loop-orbit" timing={Loop::new(20.0, 0.0)} class="blob blob-blue blob-lg pos-blob-tl" />
                <Looping animation="loop-orbit-reverse" timing={Loop::new(25.0, 0.0)} class="blob blob-pink pos-blob-br" />
            </div>

            { for BACKDROP_ICONS.iter().map(|(kind, delay, position)| html! {
                <Looping animation="loop-drift-spin" timing={Loop::new(6.0, *delay)} class={classes!("backdrop-icon", *position)}>
                    <Icon kind={*kind} />
                </Looping>
            }) }

            <div class="section-inner">
                <div class="section-header">
                    <Reveal initial={Pose::hidden_below(30.0)} transition={Transition::new(1.0)} once={false}>
                        <h2 class="section-title light">{"Ready to Join?"}</h2>
                    </Reveal>
                    <Reveal initial={Pose::hidden_below(20.0)} transition={Transition::new(1.0).delay(0.2)} once={false}>
                        <p class="section-lead light">
                            { format!(
                                "Become part of the most prestigious hotel group in {}. \
                                 Experience luxury, build friendships, and create unforgettable memories.",
                                config.platform
                            ) }
                        </p>
                    </Reveal>

                    <Reveal initial={Pose::hidden_below(30.0)} transition={Transition::new(1.0).delay(0.4)} once={false} class="button-row">
                        <PulsingButton href={config.group_url.clone()} class="btn-white">
                            <Icon kind={IconKind::Users} class="btn-icon-left" />
                            {"Join Roblox Group"}
                            <Icon kind={IconKind::ArrowRight} class="btn-icon-right" />
                        </PulsingButton>
                        <PulsingButton variant={ButtonVariant::Outline} href={config.discord_url.clone()}>
                            <Icon kind={IconKind::Message} class="btn-icon-left" />
                            {"Discord Server"}
                        </PulsingButton>
                    </Reveal>

                    <Reveal initial={Pose::hidden().scale(0.9)} transition={Transition::new(1.0).delay(0.6)} once={false} class="quick-stats">
                        { for QUICK_STATS.iter().enumerate().map(|(i, (value, label))| html! {
                            <>
                                if i > 0 {
                                    <div class="quick-stat-divider"></div>
                                }
                                <div class="quick-stat">
                                    <Looping animation="loop-pop" timing={Loop::new(0.5, stagger(0.0, 0.1, i))} class="quick-stat-value">
                                        { *value }
                                    </Looping>
                                    <div class="quick-stat-label">{ *label }</div>
                                </div>
                            </>
                        }) }
                    </Reveal>
                </div>

                <Reveal transition={Transition::new(1.0)} class="benefits">
                    <div class="section-header">
                        <h3 class="subsection-title light">{ format!("Why Choose {}?", config.brand) }</h3>
                        <p class="section-lead light">{"Discover the exclusive benefits that make our community special"}</p>
                    </div>
                    <div class="card-grid">
                        { for BENEFITS.iter().enumerate().map(|(i, b)| html! {
                            <BenefitCard
                                icon={b.icon}
                                title={b.title}
                                description={b.description}
                                delay={stagger(0.0, 0.1, i)}
                            />
                        }) }
                    </div>
                </Reveal>

                <Reveal transition={Transition::new(1.0)} once={false}>
                    <Card class="final-cta centered">
                        <CardContent class="banner-body">
                            <Reveal
                                initial={Pose::REST.scale(0.0)}
                                transition={Transition::new(0.8).easing(Easing::Spring)}
                                once={false}
                                class="avatar-badge avatar-badge-gradient"
                            >
                                <Icon kind={IconKind::Crown} />
                            </Reveal>
                            <h3 class="banner-title">{"Your Luxury Journey Starts Here"}</h3>
                            <p class="banner-text muted">
                                { format!(
                                    "Don't just dream about luxury, live it. Join {} today and \
                                     experience what it means to be part of something extraordinary.",
                                    config.brand
                                ) }
                            </p>
                            <div class="hover-grow">
                                <Button size={ButtonSize::Large} class="btn-gradient" href={config.group_url.clone()}>
                                    {"Start Your Journey"}
                                    <Looping animation="loop-nudge" timing={Loop::new(1.5, 0.0)} class="inline-icon">
                                        <Icon kind={IconKind::ArrowRight} />
                                    </Looping>
                                </Button>
                            </div>
                        </CardContent>
                    </Card>
                </Reveal>
            </div>
        </section>
    }
}
