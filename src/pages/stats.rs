use yew::prelude::*;

use crate::animation::motion::stagger;
use crate::animation::{Loop, Pose, Transition};
use crate::components::{AnimatedCounter, Icon, IconKind, Looping, Reveal};

struct Stat {
    icon: IconKind,
    value: f64,
    suffix: &'static str,
    label: &'static str,
    description: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        icon: IconKind::Users,
        value: 12000.0,
        suffix: "+",
        label: "Active Members",
        description: "Growing community of luxury hotel enthusiasts and Roblox players worldwide",
    },
    Stat {
        icon: IconKind::Star,
        value: 98.0,
        suffix: "%",
        label: "Satisfaction Rate",
        description: "Exceptional guest satisfaction scores reflecting our commitment to excellence",
    },
    Stat {
        icon: IconKind::Building,
        value: 25.0,
        suffix: "+",
        label: "Hotel Locations",
        description: "Premium hotel properties across multiple Roblox experiences and worlds",
    },
    Stat {
        icon: IconKind::Trophy,
        value: 150.0,
        suffix: "+",
        label: "Awards Won",
        description: "Recognition for outstanding service and innovation in virtual hospitality",
    },
    Stat {
        icon: IconKind::Clock,
        value: 24.0,
        suffix: "/7",
        label: "Support Available",
        description: "Round-the-clock customer service ensuring seamless experiences",
    },
    Stat {
        icon: IconKind::Globe,
        value: 45.0,
        suffix: "+",
        label: "Countries Served",
        description: "Global reach connecting players from diverse cultures and backgrounds",
    },
];

#[derive(Properties, PartialEq)]
struct StatCardProps {
    icon: IconKind,
    value: f64,
    suffix: AttrValue,
    label: AttrValue,
    description: AttrValue,
    delay: f64,
    /// Offset for the sparkle loop so cards don't blink in sync
    sparkle_delay: f64,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <Reveal
            initial={Pose::hidden_below(50.0).scale(0.9)}
            transition={Transition::new(0.8).delay(props.delay)}
        >
            <div class="stat-card hover-tilt">
                <div class="stat-card-wash"></div>
                <div class="stat-card-body">
                    <div class="icon-badge hover-spin">
                        <Icon kind={props.icon} />
                    </div>
                    <Looping animation="loop-heartbeat" timing={Loop::new(2.0, 0.0)} class="stat-value">
                        // frame-timed: floor(elapsed / 2s * value)
                        <AnimatedCounter value={props.value} suffix={props.suffix.clone()} />
                    </Looping>
                    <h3 class="stat-label">{ props.label.clone() }</h3>
                    <p class="stat-description">{ props.description.clone() }</p>
                </div>
                <Looping animation="loop-sparkle" timing={Loop::new(2.0, props.sparkle_delay)} class="sparkle" />
            </div>
        </Reveal>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="section section-stats" id="stats">
            <div class="section-backdrop">
                <Looping animation="loop-drift" timing={Loop::new(12.0, 0.0)} class="blob blob-blue pos-blob-ql" />
                <Looping animation="loop-drift-reverse" timing={Loop::new(15.0, 2.0)} class="blob blob-cyan blob-lg pos-blob-qr" />
            </div>

            <div class="section-inner">
                <Reveal class="section-header">
                    <h2 class="section-title">
                        <span class="gradient-text gradient-text-moving loop-shimmer">{"Our Achievements"}</span>
                    </h2>
                    <Reveal initial={Pose::hidden_below(20.0)} transition={Transition::new(0.8).delay(0.3)}>
                        <p class="section-lead">
                            {"Numbers that reflect our commitment to excellence and the trust our community places in us."}
                        </p>
                    </Reveal>
                </Reveal>

                <div class="card-grid">
                    { for STATS.iter().enumerate().map(|(i, s)| html! {
                        <StatCard
                            icon={s.icon}
                            value={s.value}
                            suffix={s.suffix}
                            label={s.label}
                            description={s.description}
                            delay={stagger(0.0, 0.2, i)}
                            sparkle_delay={stagger(0.0, 0.35, i)}
                        />
                    }) }
                </div>

                <Reveal initial={Pose::hidden().scale(0.9)} transition={Transition::new(0.8).delay(0.5)}>
                    <div class="banner banner-gradient centered hover-grow-subtle">
                        <div class="banner-rings">
                            <span class="ring ring-1"></span>
                            <span class="ring ring-2"></span>
                            <span class="ring ring-3"></span>
                        </div>
                        <h3 class="banner-title loop-glow-text">{"Leading the Future"}</h3>
                        <Reveal initial={Pose::hidden_below(20.0)} transition={Transition::new(0.8).delay(0.7)}>
                            <p class="banner-text">
                                {"As pioneers in virtual hospitality, we continue to set new standards for luxury experiences in the Roblox metaverse, \
                                  creating unforgettable moments for every guest who walks through our digital doors."}
                            </p>
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
