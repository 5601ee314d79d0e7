use yew::prelude::*;

use super::about::About;
use super::experiences::Experiences;
use super::hero::Hero;
use super::join::Join;
use super::stats::Stats;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <Hero />
            <About />
            <Stats />
            <Experiences />
            <Join />
        </main>
    }
}
