use yew::prelude::*;

use crate::animation::motion::stagger;
use crate::animation::{Easing, Loop, Pose, Transition};
use crate::components::{Card, CardContent, Icon, IconKind, Looping, Reveal};
use crate::config::SiteConfig;

struct Feature {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Crown,
        title: "Luxury Experience",
        description: "Immerse yourself in the finest Roblox hospitality with our premium amenities and world-class service standards.",
    },
    Feature {
        icon: IconKind::Hotel,
        title: "Spacious Rooms",
        description: "Our meticulously designed rooms offer comfort and elegance, providing the perfect retreat for every guest.",
    },
    Feature {
        icon: IconKind::Users,
        title: "12K+ Community",
        description: "Join our thriving community of luxury travelers and hospitality enthusiasts from around the globe.",
    },
    Feature {
        icon: IconKind::Star,
        title: "Premium Service",
        description: "Experience service that exceeds expectations with our dedicated team committed to your satisfaction.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Safe & Secure",
        description: "Your safety and security are our top priorities, ensuring a worry-free and peaceful stay.",
    },
    Feature {
        icon: IconKind::Award,
        title: "Award Winning",
        description: "Recognized for excellence in hospitality and innovation in the Roblox gaming community.",
    },
];

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    icon: IconKind,
    title: AttrValue,
    description: AttrValue,
    delay: f64,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <Reveal transition={Transition::new(0.8).delay(props.delay)}>
            <Card class="feature-card hover-tilt">
                <CardContent class="centered">
                    <div class="icon-badge icon-badge-round hover-spin">
                        <Icon kind={props.icon} />
                    </div>
                    <h3 class="card-title">{ props.title.clone() }</h3>
                    <p class="card-text">{ props.description.clone() }</p>
                </CardContent>
            </Card>
        </Reveal>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let config = SiteConfig::get();
    let heading = |delay: f64| Transition::new(0.8).delay(delay).easing(Easing::EaseOut);

    html! {
        <section class="section section-about" id="about">
            <div class="section-backdrop">
                <Looping animation="loop-breathe" timing={Loop::new(8.0, 0.0)} class="blob blob-blue pos-blob-tl" />
                <Looping animation="loop-breathe-reverse" timing={Loop::new(10.0, 1.0)} class="blob blob-cyan pos-blob-br" />
            </div>

            <div class="section-inner">
                <div class="section-header">
                    // children follow the container: 0.3s initial delay, 0.2s stagger
                    <Reveal transition={heading(stagger(0.3, 0.2, 0))}>
                        <h2 class="section-title gradient-text">{ format!("About {}", config.brand) }</h2>
                    </Reveal>
                    <Reveal transition={heading(stagger(0.3, 0.2, 1))}>
                        <p class="section-lead">
                            { format!(
                                "Experience unparalleled luxury and hospitality in the world of {}. \
                                 {} sets the standard for premium accommodation, exceptional service, \
                                 and unforgettable experiences that go beyond imagination.",
                                config.platform, config.brand
                            ) }
                        </p>
                    </Reveal>
                </div>

                <div class="card-grid">
                    { for FEATURES.iter().enumerate().map(|(i, f)| html! {
                        <FeatureCard
                            icon={f.icon}
                            title={f.title}
                            description={f.description}
                            delay={stagger(0.0, 0.2, i)}
                        />
                    }) }
                </div>

                <Reveal initial={Pose::hidden().scale(0.9)}>
                    <div class="banner banner-blue centered hover-grow-subtle">
                        <h3 class="banner-title loop-glow-text">{ config.tagline.clone() }</h3>
                        <Reveal initial={Pose::hidden_below(20.0)} transition={Transition::new(0.8).delay(0.3)}>
                            <p class="banner-text">
                                {"We believe that every guest deserves an extraordinary experience. From the moment you step into our virtual doors, \
                                  you become part of our family. Our commitment to excellence, attention to detail, and passion for hospitality \
                                  creates memories that last a lifetime."}
                            </p>
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
