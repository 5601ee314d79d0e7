use yew::prelude::*;

use crate::animation::motion::stagger;
use crate::animation::{Easing, Loop, Pose, Transition};
use crate::components::motion::pose_style;
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, Icon, IconKind, Looping, Posed,
    Reveal,
};
use crate::config::{SiteConfig, REVEAL_MARGIN};
use crate::hooks::{use_in_view, InViewOptions};

struct Experience {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    featured: bool,
    gradient: &'static str,
}

const EXPERIENCES: &[Experience] = &[
    Experience {
        icon: IconKind::Building,
        title: "Work At A Hotel Roleplay",
        description: "Our flagship experience where luxury meets immersive roleplay. Step into the shoes of hotel staff or be a pampered guest in our premium facilities.",
        features: &[
            "Realistic hotel operations and management",
            "Multiple job roles and career progression",
            "Luxury suites and premium amenities",
            "Professional training programs",
            "Guest satisfaction system",
        ],
        featured: true,
        gradient: "gradient-blue",
    },
    Experience {
        icon: IconKind::Users,
        title: "Rank Center",
        description: "Advance your career within the Wyatt Hotels hierarchy. Earn promotions through dedication and exceptional service.",
        features: &[
            "Clear promotion pathways",
            "Performance-based advancement",
            "Leadership opportunities",
            "Recognition programs",
        ],
        featured: false,
        gradient: "gradient-purple",
    },
    Experience {
        icon: IconKind::GraduationCap,
        title: "Training Center",
        description: "Master the art of hospitality with comprehensive training programs designed to elevate your service skills.",
        features: &[
            "Interactive training modules",
            "Skill development workshops",
            "Certification programs",
            "Mentorship opportunities",
        ],
        featured: false,
        gradient: "gradient-green",
    },
    Experience {
        icon: IconKind::ClipboardCheck,
        title: "Quiz Center",
        description: "Test your knowledge and demonstrate your expertise in hotel operations and guest service excellence.",
        features: &[
            "Comprehensive knowledge assessments",
            "Skill validation tests",
            "Achievement tracking",
            "Competitive leaderboards",
        ],
        featured: false,
        gradient: "gradient-orange",
    },
];

#[derive(Properties, PartialEq)]
struct ExperienceCardProps {
    index: usize,
    delay: f64,
}

#[function_component(ExperienceCard)]
fn experience_card(props: &ExperienceCardProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), InViewOptions::with_margin(REVEAL_MARGIN));
    let Some(exp) = EXPERIENCES.get(props.index) else {
        return html! {};
    };

    let initial = Pose::hidden_below(50.0).tilt(-15.0, if exp.featured { 0.0 } else { -10.0 });
    let style = pose_style(initial, Transition::new(0.8).delay(props.delay), shown);

    let outer = classes!("experience", exp.featured.then_some("experience-featured"));
    let card = if exp.featured { "experience-card-featured" } else { "experience-card" };

    html! {
        <div ref={node} class={outer} style={style}>
            <Card class={classes!(card, "hover-lift")}>
                <CardContent class="experience-body">
                    if exp.featured {
                        <div class="experience-decor">
                            <Looping animation="loop-spin" timing={Loop::new(20.0, 0.0)} class="decor-orb decor-orb-tr" />
                            <Looping animation="loop-spin-reverse" timing={Loop::new(25.0, 0.0)} class="decor-orb decor-orb-bl" />
                        </div>
                    }
                    <div class="experience-header">
                        <div class={classes!("icon-badge", "hover-wiggle", (!exp.featured).then_some(exp.gradient), exp.featured.then_some("icon-badge-glass"))}>
                            <Icon kind={exp.icon} />
                        </div>
                        if exp.featured {
                            <Posed
                                initial={Pose::REST.scale(0.0)}
                                transition={Transition::new(0.5).delay(props.delay + 0.3)}
                                shown={shown}
                                class="featured-pill"
                            >
                                <Icon kind={IconKind::Star} class="pill-star" />
                                <span>{"Featured"}</span>
                            </Posed>
                        }
                    </div>

                    <h3 class="experience-title">{ exp.title }</h3>
                    <p class="experience-text">{ exp.description }</p>

                    <ul class="experience-features">
                        { for exp.features.iter().enumerate().map(|(i, feature)| html! {
                            <li>
                                <Posed
                                    initial={Pose::hidden().x(-20.0)}
                                    transition={Transition::new(0.5).delay(stagger(props.delay + 0.2, 0.1, i))}
                                    shown={shown}
                                    class="feature-row"
                                >
                                    <span class="feature-dot hover-turn"></span>
                                    <span>{ *feature }</span>
                                </Posed>
                            </li>
                        }) }
                    </ul>

                    <Button
                        variant={if exp.featured { ButtonVariant::Glass } else { ButtonVariant::Solid }}
                        class={classes!("btn-block", "hover-grow")}
                    >
                        <Icon kind={IconKind::Play} class="btn-icon-left" />
                        { if exp.featured { "Play Now" } else { "Explore" } }
                        <Icon kind={IconKind::ArrowRight} class="btn-icon-right" />
                    </Button>
                </CardContent>
            </Card>
        </div>
    }
}

#[function_component(Experiences)]
pub fn experiences() -> Html {
    let config = SiteConfig::get();
    let owner_node = use_node_ref();
    let owner_shown = use_in_view(owner_node.clone(), InViewOptions::default());

    html! {
        <section class="section section-experiences" id="experiences">
            <div class="section-backdrop faint">
                <Looping animation="loop-orbit" timing={Loop::new(15.0, 0.0)} class="blob blob-blue pos-blob-tr" />
                <Looping animation="loop-orbit-reverse" timing={Loop::new(20.0, 0.0)} class="blob blob-cyan blob-lg pos-blob-bl" />
            </div>

            <div class="section-inner">
                <div class="section-header">
                    <Reveal initial={Pose::hidden_below(30.0)} transition={Transition::new(1.0)} once={false}>
                        <h2 class="section-title gradient-text">{"Our Experiences"}</h2>
                    </Reveal>
                    <Reveal initial={Pose::hidden_below(20.0)} transition={Transition::new(1.0).delay(0.2)} once={false}>
                        <p class="section-lead">
                            {"Discover a world of immersive experiences designed to deliver the ultimate \
                              in virtual hospitality and professional development."}
                        </p>
                    </Reveal>
                </div>

                <div class="experience-grid">
                    { for (0..EXPERIENCES.len()).map(|i| html! {
                        <ExperienceCard index={i} delay={stagger(0.0, 0.2, i)} />
                    }) }
                </div>

                <div ref={owner_node}>
                    <Posed transition={Transition::new(1.0)} shown={owner_shown}>
                        <Card class="banner banner-gradient centered">
                            <CardContent class="banner-body">
                                <div class="experience-decor">
                                    <Looping animation="loop-spin" timing={Loop::new(30.0, 0.0)} class="decor-orb decor-orb-xl decor-orb-tr" />
                                    <Looping animation="loop-spin-reverse" timing={Loop::new(25.0, 0.0)} class="decor-orb decor-orb-lg decor-orb-bl" />
                                </div>
                                <Posed
                                    initial={Pose::REST.scale(0.0)}
                                    transition={Transition::new(0.8).easing(Easing::Spring)}
                                    shown={owner_shown}
                                    class="avatar-badge"
                                >
                                    <Icon kind={IconKind::Users} />
                                </Posed>
                                <h3 class="banner-title">{"Join Our Community"}</h3>
                                <p class="banner-text">
                                    {"Led by "}<span class="strong">{ config.owner.clone() }</span>
                                </p>
                                <p class="banner-text muted">
                                    { format!(
                                        "Experience the difference that passionate leadership and community-driven excellence makes. \
                                         Join thousands of members who have made {} their virtual home.",
                                        config.brand
                                    ) }
                                </p>
                                <div class="button-row hover-grow">
                                    <Button size={ButtonSize::Large} class="btn-white" href={config.group_url.clone()}>
                                        {"Join Roblox Group"}
                                        <Icon kind={IconKind::ArrowRight} class="btn-icon-right" />
                                    </Button>
                                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Large} href={config.games_url.clone()}>
                                        {"View All Games"}
                                    </Button>
                                </div>
                            </CardContent>
                        </Card>
                    </Posed>
                </div>
            </div>
        </section>
    }
}
