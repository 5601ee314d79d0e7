use yew::prelude::*;

pub mod animation;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod pages;
mod styles;

use pages::Home;

#[function_component]
pub fn App() -> Html {
    // Mounted once and kept for the lifetime of the app
    let _global_style = use_state(|| match styles::mount() {
        Ok(style) => Some(style),
        Err(e) => {
            log::error!("failed to mount global stylesheet: {}", e);
            None
        }
    });

    html! {
        <Home />
    }
}
