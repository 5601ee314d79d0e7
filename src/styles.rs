//! Page-wide stylesheet, mounted once through stylist.
//!
//! Entrance animations are inline (see `components::motion::Reveal`). The
//! endless `loop-*` animations live here as keyframes; `Looping` only sets
//! their duration and delay.

use stylist::GlobalStyle;

pub const GLOBAL: &str = r#"
html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, Roboto, Helvetica, Arial, sans-serif;
    color: #1f2937;
    background: #ffffff;
    overflow-x: hidden;
}

.landing-page {
    min-height: 100vh;
}

.tabular-nums {
    font-variant-numeric: tabular-nums;
}

.centered {
    text-align: center;
}

.glass {
    background: rgba(255, 255, 255, 0.15);
    border: 1px solid rgba(255, 255, 255, 0.25);
    backdrop-filter: blur(16px);
    border-radius: 1rem;
}

.reveal {
    will-change: opacity, transform;
}

.card {
    height: 100%;
    border-radius: 1.25rem;
    background: linear-gradient(135deg, #ffffff, #eff6ff);
    border: 1px solid #bfdbfe;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    overflow: hidden;
}

.card-content {
    position: relative;
    padding: 2rem;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.6rem 1.4rem;
    border-radius: 0.75rem;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    text-decoration: none;
    border: 1px solid transparent;
    transition: background 0.3s ease, transform 0.2s ease;
}

.btn-lg {
    padding: 1rem 2rem;
    font-size: 1.125rem;
    border-radius: 1rem;
}

.btn-block {
    width: 100%;
    padding: 1.25rem;
}

.btn-solid {
    color: #ffffff;
    background: linear-gradient(90deg, #3b82f6, #22d3ee);
}

.btn-solid:hover {
    background: linear-gradient(90deg, #2563eb, #06b6d4);
}

.btn-outline {
    color: #ffffff;
    background: transparent;
    border-color: rgba(255, 255, 255, 0.5);
}

.btn-outline:hover {
    background: rgba(255, 255, 255, 0.1);
}

.btn-glass {
    color: #ffffff;
    background: rgba(255, 255, 255, 0.2);
    border-color: rgba(255, 255, 255, 0.3);
    backdrop-filter: blur(8px);
}

.btn-glass:hover {
    background: rgba(255, 255, 255, 0.3);
}

.btn-white {
    color: #2563eb;
    background: #ffffff;
    font-weight: 700;
}

.btn-white:hover {
    background: #f3f4f6;
}

.btn-gradient {
    padding: 1.5rem 4rem;
    font-size: 1.25rem;
    font-weight: 700;
}

.btn-pulsing {
    position: relative;
    overflow: hidden;
    padding: 1.5rem 3rem;
    font-size: 1.25rem;
}

.btn-pulse-layer {
    position: absolute;
    inset: 0;
    opacity: 0;
    background: linear-gradient(90deg, #60a5fa, #22d3ee);
    transition: opacity 0.3s ease;
}

.btn-pulsing:hover .btn-pulse-layer {
    opacity: 0.2;
}

.btn-label {
    position: relative;
    z-index: 1;
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
}

.btn-icon-left {
    margin-right: 0.25rem;
}

.btn-icon-right {
    margin-left: 0.25rem;
    transition: transform 0.3s ease;
}

.btn:hover .btn-icon-right {
    transform: translateX(4px);
}

.inline-icon {
    display: inline-block;
    margin-left: 0.5rem;
}

.button-row {
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
    justify-content: center;
    align-items: center;
    margin-bottom: 4rem;
}

.hover-grow {
    transition: transform 0.3s ease;
}

.hover-grow:hover {
    transform: scale(1.05) translateY(-2px);
}

.hover-grow:active {
    transform: scale(0.95);
}

.hover-grow-subtle {
    transition: transform 0.4s ease;
}

.hover-grow-subtle:hover {
    transform: scale(1.02);
}

.hover-tilt {
    transition: transform 0.5s ease, box-shadow 0.5s ease;
}

.hover-tilt:hover {
    transform: perspective(800px) scale(1.05) rotateY(5deg);
    box-shadow: 0 25px 50px rgba(59, 130, 246, 0.3);
}

.hover-lift {
    transition: transform 0.4s ease, box-shadow 0.4s ease;
}

.hover-lift:hover {
    transform: perspective(800px) translateY(-10px) rotateX(2deg) rotateY(3deg);
    box-shadow: 0 30px 60px rgba(59, 130, 246, 0.3);
}

.hover-spin {
    transition: transform 0.8s ease;
}

.hover-tilt:hover .hover-spin {
    transform: scale(1.2) rotate(360deg);
}

.hover-wiggle {
    transition: transform 0.3s ease;
}

.hover-wiggle:hover {
    transform: scale(1.2) rotate(10deg);
}

.hover-turn {
    transition: transform 0.3s ease;
}

.hover-turn:hover {
    transform: scale(1.3) rotate(90deg);
}

.icon-badge {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.5rem auto;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
    color: #ffffff;
    border-radius: 1rem;
    background: linear-gradient(135deg, #3b82f6, #06b6d4);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
}

.icon-badge-round {
    border-radius: 9999px;
}

.icon-badge-sm {
    width: 3rem;
    height: 3rem;
    font-size: 1.25rem;
    border-radius: 0.75rem;
}

.icon-badge-glass {
    background: rgba(255, 255, 255, 0.2);
    box-shadow: none;
}

.gradient-blue {
    background: linear-gradient(135deg, #2563eb, #06b6d4);
}

.gradient-purple {
    background: linear-gradient(135deg, #a855f7, #f472b6);
}

.gradient-green {
    background: linear-gradient(135deg, #22c55e, #34d399);
}

.gradient-orange {
    background: linear-gradient(135deg, #f97316, #f87171);
}

.hero {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
}

.hero-background {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, #3b82f6, #22d3ee, #2563eb);
    background-size: 200% 200%;
    animation: gradient-shift 8s ease infinite;
}

.particle-field {
    position: absolute;
    inset: 0;
    overflow: hidden;
}

.particle {
    position: absolute;
    width: 4px;
    height: 4px;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.3);
}

.floating-shape {
    position: absolute;
    display: flex;
    align-items: center;
    justify-content: center;
}

.shape {
    backdrop-filter: blur(4px);
}

.shape-orb {
    width: 5rem;
    height: 5rem;
    border-radius: 9999px;
    background: linear-gradient(135deg, rgba(255, 255, 255, 0.2), rgba(255, 255, 255, 0.05));
}

.shape-orb-lg {
    width: 6rem;
    height: 6rem;
    background: linear-gradient(135deg, rgba(147, 197, 253, 0.2), rgba(165, 243, 252, 0.2));
}

.shape-diamond {
    width: 4rem;
    height: 4rem;
    border-radius: 0.5rem;
    transform: rotate(45deg);
    background: linear-gradient(135deg, rgba(103, 232, 249, 0.3), rgba(96, 165, 250, 0.3));
}

.pos-shape-1 { top: 5rem; left: 2.5rem; }
.pos-shape-2 { top: 10rem; right: 5rem; }
.pos-shape-3 { bottom: 10rem; left: 5rem; }

.floating-icon {
    position: absolute;
    font-size: 2rem;
    color: rgba(255, 255, 255, 0.4);
}

.pos-icon-1 { top: 8rem; left: 25%; }
.pos-icon-2 { top: 5rem; right: 33%; }
.pos-icon-3 { bottom: 8rem; right: 25%; }
.pos-icon-4 { bottom: 5rem; left: 33%; }
.pos-icon-5 { top: 50%; left: 2.5rem; }
.pos-icon-6 { top: 50%; right: 2.5rem; }

.hero-content {
    position: relative;
    z-index: 10;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 0 1rem;
    text-align: center;
    color: #ffffff;
}

.hero-logo {
    display: block;
    margin: 0 auto 1.5rem auto;
    border-radius: 1rem;
}

.hero-title {
    margin: 0 0 0.5rem 0;
    font-size: clamp(3.5rem, 10vw, 8rem);
    font-weight: 800;
}

.hero-platform {
    margin: 0 0 1rem 0;
    font-size: 1.5rem;
    font-weight: 300;
    color: rgba(255, 255, 255, 0.8);
}

.hero-tagline {
    margin: 0;
    font-size: 1.5rem;
    color: rgba(255, 255, 255, 0.9);
}

.hero-subtitle {
    max-width: 56rem;
    margin: 1rem auto 2rem auto;
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.8);
}

.hero-stat {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    padding: 2rem;
    margin-bottom: 3rem;
}

.hero-stat-icon {
    font-size: 2rem;
    color: rgba(255, 255, 255, 0.8);
}

.hero-stat-value {
    font-size: 3rem;
    font-weight: 700;
}

.hero-stat-label {
    color: rgba(255, 255, 255, 0.8);
}

.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}

.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    margin-left: -0.75rem;
}

.scroll-mouse {
    width: 1.5rem;
    height: 2.5rem;
    display: flex;
    justify-content: center;
    border: 2px solid rgba(255, 255, 255, 0.5);
    border-radius: 9999px;
}

.scroll-wheel {
    width: 0.25rem;
    height: 0.75rem;
    margin-top: 0.5rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.7);
}

.section {
    position: relative;
    padding: 6rem 0;
    overflow: hidden;
}

.section-about {
    background: linear-gradient(180deg, #f9fafb, #ffffff);
}

.section-stats {
    background: linear-gradient(180deg, #ffffff, rgba(239, 246, 255, 0.3), #ffffff);
}

.section-experiences {
    background: linear-gradient(135deg, #f9fafb, #eff6ff, #ecfeff);
}

.section-join {
    background: linear-gradient(135deg, #1e3a8a, #312e81, #581c87);
}

.section-backdrop {
    position: absolute;
    inset: 0;
}

.section-backdrop.faint {
    opacity: 0.3;
}

.section-inner {
    position: relative;
    z-index: 10;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section-header {
    text-align: center;
    margin-bottom: 4rem;
}

.section-title {
    margin: 0 0 1.5rem 0;
    font-size: clamp(3rem, 6vw, 4.5rem);
    font-weight: 800;
}

.subsection-title {
    margin: 0 0 1rem 0;
    font-size: 2.25rem;
    font-weight: 700;
}

.section-lead {
    max-width: 48rem;
    margin: 0 auto;
    font-size: 1.25rem;
    line-height: 1.7;
    color: #4b5563;
}

.light {
    color: rgba(255, 255, 255, 0.85);
}

.section-title.light {
    color: #ffffff;
}

.gradient-text {
    background: linear-gradient(90deg, #2563eb, #3b82f6, #06b6d4);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}

.gradient-text-moving {
    background: linear-gradient(90deg, #2563eb, #06b6d4, #2563eb);
    background-size: 200% auto;
    -webkit-background-clip: text;
    background-clip: text;
}

.blob {
    position: absolute;
    width: 16rem;
    height: 16rem;
    border-radius: 9999px;
    filter: blur(64px);
}

.blob-lg {
    width: 24rem;
    height: 24rem;
}

.blob-blue {
    background: linear-gradient(135deg, rgba(96, 165, 250, 0.2), rgba(34, 211, 238, 0.1));
}

.blob-cyan {
    background: linear-gradient(135deg, rgba(34, 211, 238, 0.2), rgba(96, 165, 250, 0.1));
}

.blob-pink {
    background: linear-gradient(90deg, rgba(168, 85, 247, 0.3), rgba(236, 72, 153, 0.3));
}

.pos-blob-tl { top: 5rem; left: 2.5rem; }
.pos-blob-br { bottom: 5rem; right: 2.5rem; }
.pos-blob-tr { top: 5rem; right: 5rem; }
.pos-blob-bl { bottom: 5rem; left: 5rem; }
.pos-blob-ql { top: 25%; left: 25%; }
.pos-blob-qr { bottom: 25%; right: 25%; }

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 2rem;
    margin-bottom: 5rem;
}

.card-title {
    margin: 0 0 1rem 0;
    font-size: 1.25rem;
    font-weight: 700;
    transition: color 0.3s ease;
}

.feature-card:hover .card-title {
    color: #2563eb;
}

.card-text {
    margin: 0;
    line-height: 1.7;
    color: #4b5563;
}

.banner {
    position: relative;
    overflow: hidden;
    padding: 3rem;
    border-radius: 1.5rem;
    color: #ffffff;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.banner-blue {
    background: linear-gradient(90deg, #3b82f6, #06b6d4);
}

.banner-gradient {
    background: linear-gradient(90deg, #3b82f6, #2563eb, #06b6d4);
    border: none;
}

.banner-body {
    padding: 3rem;
    color: #ffffff;
}

.banner-title {
    margin: 0 0 1.5rem 0;
    font-size: 2.5rem;
    font-weight: 700;
}

.banner-text {
    max-width: 48rem;
    margin: 0 auto 1rem auto;
    font-size: 1.25rem;
    line-height: 1.7;
}

.muted {
    opacity: 0.8;
}

.strong {
    font-weight: 600;
}

.banner-rings {
    position: absolute;
    inset: 0;
    opacity: 0.1;
}

.ring {
    position: absolute;
    border: 1px solid #ffffff;
    border-radius: 9999px;
}

.ring-1 { top: 2.5rem; left: 2.5rem; width: 5rem; height: 5rem; }
.ring-2 { bottom: 2.5rem; right: 2.5rem; width: 4rem; height: 4rem; }
.ring-3 { top: 50%; left: 25%; width: 3rem; height: 3rem; }

.stat-card {
    position: relative;
    overflow: hidden;
    padding: 2rem;
    border-radius: 1rem;
    background: #ffffff;
    border: 1px solid #dbeafe;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.stat-card-wash {
    position: absolute;
    inset: 0;
    opacity: 0;
    background: linear-gradient(135deg, #eff6ff, #ecfeff);
    transition: opacity 0.5s ease;
}

.stat-card:hover .stat-card-wash {
    opacity: 1;
}

.stat-card-body {
    position: relative;
    z-index: 1;
}

.stat-card .icon-badge {
    margin-left: 0;
}

.stat-value {
    margin-bottom: 0.5rem;
    font-size: 3rem;
    font-weight: 700;
    color: #1f2937;
    transition: color 0.3s ease;
}

.stat-card:hover .stat-value {
    color: #2563eb;
}

.stat-label {
    margin: 0 0 0.5rem 0;
    font-size: 1.25rem;
    font-weight: 600;
    color: #374151;
}

.stat-description {
    margin: 0;
    font-size: 0.875rem;
    line-height: 1.6;
    color: #4b5563;
}

.sparkle {
    position: absolute;
    top: 1rem;
    right: 1rem;
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: #60a5fa;
    visibility: hidden;
}

.stat-card:hover .sparkle {
    visibility: visible;
}

.experience-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
    gap: 2rem;
    margin-bottom: 5rem;
}

.experience-featured {
    grid-column: span 2;
}

.experience-card {
    border: none;
    background: #ffffff;
}

.experience-card-featured {
    border: none;
    color: #ffffff;
    background: linear-gradient(135deg, #2563eb, #06b6d4);
}

.experience-decor {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    pointer-events: none;
}

.decor-orb {
    position: absolute;
    width: 10rem;
    height: 10rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.3);
    filter: blur(24px);
}

.decor-orb-lg { width: 15rem; height: 15rem; }
.decor-orb-xl { width: 20rem; height: 20rem; }
.decor-orb-tr { top: -2.5rem; right: -2.5rem; }
.decor-orb-bl { bottom: -2.5rem; left: -2.5rem; }

.experience-header {
    position: relative;
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    margin-bottom: 1.5rem;
}

.experience-header .icon-badge {
    margin: 0;
}

.featured-pill {
    display: flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 500;
    background: rgba(255, 255, 255, 0.2);
}

.pill-star {
    color: #fde047;
}

.experience-title {
    margin: 0 0 1rem 0;
    font-size: 1.5rem;
    font-weight: 700;
}

.experience-text {
    margin: 0 0 1.5rem 0;
    font-size: 1.125rem;
    line-height: 1.7;
    opacity: 0.9;
}

.experience-features {
    list-style: none;
    margin: 0 0 2rem 0;
    padding: 0;
}

.experience-features li {
    margin-bottom: 0.75rem;
}

.feature-row {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.feature-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: linear-gradient(90deg, #3b82f6, #22d3ee);
}

.experience-card-featured .feature-dot {
    background: rgba(255, 255, 255, 0.7);
}

.avatar-badge {
    width: 6rem;
    height: 6rem;
    margin: 0 auto 1.5rem auto;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 3rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.2);
}

.avatar-badge-gradient {
    width: 5rem;
    height: 5rem;
    font-size: 2.5rem;
    background: linear-gradient(90deg, #60a5fa, #22d3ee);
}

.backdrop-icon {
    position: absolute;
    font-size: 2rem;
    color: #60a5fa;
    opacity: 0.2;
}

.pos-join-1 { top: 10%; left: 10%; }
.pos-join-2 { top: 20%; right: 15%; }
.pos-join-3 { bottom: 30%; left: 5%; }
.pos-join-4 { bottom: 20%; right: 10%; }

.quick-stats {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 3rem;
    margin-bottom: 5rem;
    color: rgba(255, 255, 255, 0.7);
}

.quick-stat {
    text-align: center;
}

.quick-stat-value {
    margin-bottom: 0.25rem;
    font-size: 1.875rem;
    font-weight: 700;
    color: #ffffff;
}

.quick-stat-label {
    font-size: 0.875rem;
}

.quick-stat-divider {
    width: 1px;
    height: 3rem;
    background: rgba(255, 255, 255, 0.3);
}

.benefits {
    margin-bottom: 5rem;
}

.benefit-card {
    background: rgba(255, 255, 255, 0.8);
    border: none;
    backdrop-filter: blur(12px);
}

.benefit-title {
    margin: 0 0 0.5rem 0;
    font-size: 1.125rem;
    font-weight: 600;
    color: #1f2937;
}

.benefit-text {
    margin: 0;
    font-size: 0.875rem;
    color: #4b5563;
}

.final-cta {
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    backdrop-filter: blur(12px);
}

.loop-float { animation: float 6s ease-in-out infinite; }
.loop-pulse-icon { animation: pulse-icon 4s ease-in-out infinite; }
.loop-rise { animation: rise 3s ease-out infinite; }
.loop-pulse-glow { animation: pulse-glow 2s ease-in-out infinite; }
.loop-glow-text { animation: glow-text 3s ease-in-out infinite; }
.loop-bob { animation: bob 4s ease-in-out infinite; }
.loop-nudge { animation: nudge 1.5s ease-in-out infinite; }
.loop-bounce { animation: bounce 2s ease-in-out infinite; }
.loop-bounce-deep { animation: bounce-deep 2s ease-in-out infinite; }
.loop-breathe { animation: breathe 8s ease-in-out infinite; }
.loop-breathe-reverse { animation: breathe 10s ease-in-out infinite reverse; }
.loop-drift { animation: drift 12s ease-in-out infinite; }
.loop-drift-reverse { animation: drift 15s ease-in-out infinite reverse; }
.loop-heartbeat { animation: heartbeat 2s ease-in-out infinite; }
.loop-sparkle { animation: sparkle 2s ease-in-out infinite; }
.loop-shimmer { animation: shimmer 5s linear infinite; }
.loop-spin { animation: spin 20s linear infinite; }
.loop-spin-reverse { animation: spin 25s linear infinite reverse; }
.loop-orbit { animation: orbit 15s ease-in-out infinite; }
.loop-orbit-reverse { animation: orbit 20s ease-in-out infinite reverse; }
.loop-drift-spin { animation: drift-spin 6s ease-in-out infinite; }
.loop-pop { animation: pop 0.5s ease-in-out 1; }

@keyframes gradient-shift {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}

@keyframes float {
    0% { transform: translate(-10px, -20px) scale(1) rotate(0deg); }
    50% { transform: translate(10px, -60px) scale(1.2) rotate(180deg); }
    100% { transform: translate(-10px, -20px) scale(1) rotate(360deg); }
}

@keyframes pulse-icon {
    0% { opacity: 0.4; transform: scale(1) rotate(0deg); }
    50% { opacity: 1; transform: scale(1.3) rotate(180deg); }
    100% { opacity: 0.4; transform: scale(1) rotate(360deg); }
}

@keyframes rise {
    0% { opacity: 0; transform: translateY(-50px); }
    50% { opacity: 1; }
    100% { opacity: 0; transform: translateY(-100px); }
}

@keyframes pulse-glow {
    0% { box-shadow: 0 0 20px rgba(255, 255, 255, 0.4); }
    50% { box-shadow: 0 0 40px rgba(255, 255, 255, 0.8); }
    100% { box-shadow: 0 0 20px rgba(255, 255, 255, 0.4); }
}

@keyframes glow-text {
    0% { text-shadow: 0 0 20px rgba(255, 255, 255, 0.5); }
    50% { text-shadow: 0 0 40px rgba(255, 255, 255, 0.8); }
    100% { text-shadow: 0 0 20px rgba(255, 255, 255, 0.5); }
}

@keyframes bob {
    0% { transform: translateY(0); }
    50% { transform: translateY(-5px); }
    100% { transform: translateY(0); }
}

@keyframes nudge {
    0% { transform: translateX(0); }
    50% { transform: translateX(5px); }
    100% { transform: translateX(0); }
}

@keyframes bounce {
    0% { transform: translateY(0); }
    50% { transform: translateY(10px); }
    100% { transform: translateY(0); }
}

@keyframes bounce-deep {
    0% { transform: translateY(0); }
    50% { transform: translateY(12px); }
    100% { transform: translateY(0); }
}

@keyframes breathe {
    0% { opacity: 0.3; transform: scale(1); }
    50% { opacity: 0.5; transform: scale(1.2); }
    100% { opacity: 0.3; transform: scale(1); }
}

@keyframes drift {
    0% { transform: translate(0, 0) scale(1); }
    50% { transform: translate(50px, -30px) scale(1.3); }
    100% { transform: translate(0, 0) scale(1); }
}

@keyframes heartbeat {
    0% { transform: scale(1); }
    50% { transform: scale(1.05); }
    100% { transform: scale(1); }
}

@keyframes sparkle {
    0% { opacity: 0; transform: scale(0); }
    50% { opacity: 1; transform: scale(1); }
    100% { opacity: 0; transform: scale(0); }
}

@keyframes shimmer {
    0% { background-position: 0% center; }
    50% { background-position: 100% center; }
    100% { background-position: 0% center; }
}

@keyframes spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@keyframes orbit {
    0% { opacity: 0.2; transform: scale(1) rotate(0deg); }
    50% { opacity: 0.4; transform: scale(1.3) rotate(180deg); }
    100% { opacity: 0.2; transform: scale(1) rotate(360deg); }
}

@keyframes drift-spin {
    0% { transform: translateY(-20px) rotate(0deg) scale(1); }
    50% { transform: translateY(20px) rotate(180deg) scale(1.2); }
    100% { transform: translateY(-20px) rotate(360deg) scale(1); }
}

@keyframes pop {
    0% { transform: scale(1); }
    50% { transform: scale(1.1); }
    100% { transform: scale(1); }
}

@media (max-width: 768px) {
    .experience-featured {
        grid-column: auto;
    }
    .quick-stats {
        gap: 1.5rem;
    }
    .section {
        padding: 4rem 0;
    }
    .btn-pulsing, .btn-gradient {
        padding: 1rem 2rem;
    }
}
"#;

/// Registers the stylesheet with the document. Parse errors are returned, not panicked on.
pub fn mount() -> Result<GlobalStyle, stylist::Error> {
    GlobalStyle::new(GLOBAL)
}
