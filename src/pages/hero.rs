use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::animation::scroll::Parallax;
use crate::animation::{CountPolicy, Easing, Loop, Pose, Transition};
use crate::components::{
    AnimatedCounter, Button, ButtonSize, ButtonVariant, Icon, IconKind, Looping, Reveal,
};
use crate::config::SiteConfig;
use crate::hooks::use_section_progress;

const PARTICLE_COUNT: usize = 50;

/// One rising dot of the background particle field
#[derive(Clone, Copy, PartialEq)]
struct Particle {
    left_pct: f64,
    top_pct: f64,
    timing: Loop,
}

impl Particle {
    fn scatter() -> Vec<Particle> {
        (0..PARTICLE_COUNT)
            .map(|_| Particle {
                left_pct: Math::random() * 100.0,
                top_pct: Math::random() * 100.0,
                timing: Loop::new(Math::random() * 3.0 + 2.0, Math::random() * 2.0),
            })
            .collect()
    }
}

// (icon, loop delay, position class)
const FLOATING_ICONS: &[(IconKind, f64, &str)] = &[
    (IconKind::Star, 0.5, "pos-icon-1"),
    (IconKind::Crown, 1.5, "pos-icon-2"),
    (IconKind::Hotel, 2.5, "pos-icon-3"),
    (IconKind::Sparkles, 3.5, "pos-icon-4"),
    (IconKind::Award, 1.0, "pos-icon-5"),
    (IconKind::Zap, 3.0, "pos-icon-6"),
];

// (shape class, duration, delay, position class)
const FLOATING_SHAPES: &[(&str, f64, f64, &str)] = &[
    ("shape-orb", 6.0, 0.0, "pos-shape-1"),
    ("shape-diamond", 8.0, 1.0, "pos-shape-2"),
    ("shape-orb shape-orb-lg", 10.0, 2.0, "pos-shape-3"),
];

fn entrance(delay_s: f64) -> Transition {
    Transition::new(1.0).delay(delay_s)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = SiteConfig::get();
    let node = use_node_ref();
    let progress = use_section_progress(node.clone());
    let parallax = Parallax::from_progress(progress);
    let particles = use_state(Particle::scatter);

    html! {
        <section ref={node} class="hero" id="top">
            <div class="hero-background" style={parallax.style()}></div>

            <div class="particle-field">
                { for particles.iter().map(|p| html! {
                    <div
                        class="particle loop-rise"
                        style={format!("left: {:.2}%; top: {:.2}%; {}", p.left_pct, p.top_pct, p.timing.css())}
                    ></div>
                }) }
            </div>

            { for FLOATING_SHAPES.iter().map(|(shape, duration, delay, position)| html! {
                <Looping animation="loop-float" timing={Loop::new(*duration, *delay)} class={classes!("floating-shape", *position)}>
                    <div class={classes!("shape", *shape)}></div>
                </Looping>
            }) }

            { for FLOATING_ICONS.iter().map(|(kind, delay, position)| html! {
                <Looping animation="loop-pulse-icon" timing={Loop::new(4.0, *delay)} class={classes!("floating-icon", *position)}>
                    <Icon kind={*kind} />
                </Looping>
            }) }

            <div class="hero-content">
                <Reveal transition={entrance(0.5)}>
                    <Reveal
                        initial={Pose::REST.scale(0.0).rotate(-180.0)}
                        transition={Transition::new(1.0).delay(0.8).easing(Easing::Spring)}
                    >
                        <img class="hero-logo loop-pulse-glow" src={config.logo_url.clone()} alt={format!("{} Logo", config.brand)} width="120" height="120" />
                    </Reveal>
                </Reveal>

                <Reveal initial={Pose::hidden_below(30.0)} transition={entrance(1.0)}>
                    <h1 class="hero-title loop-glow-text">{ config.brand.clone() }</h1>
                    <Reveal initial={Pose::hidden()} transition={entrance(1.5)}>
                        <p class="hero-platform">{ config.platform.clone() }</p>
                    </Reveal>
                </Reveal>

                <Reveal initial={Pose::hidden_below(20.0)} transition={entrance(1.8)}>
                    <Looping animation="loop-bob" timing={Loop::new(4.0, 0.0)}>
                        <p class="hero-tagline">{ format!("\"{}\"", config.tagline) }</p>
                    </Looping>
                    <Reveal initial={Pose::hidden()} transition={entrance(2.2)}>
                        <p class="hero-subtitle">
                            {"Luxury hotel experience, spacious rooms, service beyond imagination"}
                        </p>
                    </Reveal>
                </Reveal>

                <Reveal initial={Pose::hidden().scale(0.8)} transition={entrance(2.5)}>
                    <div class="glass hero-stat hover-grow">
                        <Icon kind={IconKind::Users} class="hero-stat-icon" />
                        <div>
                            <div class="hero-stat-value">
                                <AnimatedCounter
                                    value={12.0}
                                    suffix="K+"
                                    policy={CountPolicy::increment()}
                                />
                            </div>
                            <div class="hero-stat-label">{"Members"}</div>
                        </div>
                    </div>
                </Reveal>

                <Reveal initial={Pose::hidden_below(30.0)} transition={entrance(3.0)} class="hero-cta-group">
                    <Button variant={ButtonVariant::Glass} size={ButtonSize::Large} href="#experiences" class="hover-grow">
                        {"Experience Luxury"}
                        <Looping animation="loop-nudge" timing={Loop::new(1.5, 0.0)} class="inline-icon">
                            <Icon kind={IconKind::ArrowRight} />
                        </Looping>
                    </Button>
                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Large} href="#join" class="hover-grow">
                        {"Join Our Community"}
                    </Button>
                </Reveal>

                <Reveal initial={Pose::hidden()} transition={entrance(4.0)} class="scroll-indicator">
                    <Looping animation="loop-bounce" timing={Loop::new(2.0, 0.0)} class="scroll-mouse">
                        <Looping animation="loop-bounce-deep" timing={Loop::new(2.0, 0.0)} class="scroll-wheel" />
                    </Looping>
                </Reveal>
            </div>
        </section>
    }
}
