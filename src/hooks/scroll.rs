use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::animation::scroll::section_progress;

fn measure(node: &NodeRef) -> f64 {
    node.cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            section_progress(rect.top(), rect.height())
        })
        .unwrap_or(0.0)
}

/// Scroll progress of `node` past the top of the viewport, 0.0 to 1.0.
#[hook]
pub fn use_section_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node| {
                let node = node.clone();
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let progress = progress.clone();
                        let node = node.clone();
                        move || progress.set(measure(&node))
                    });
                    match window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => {
                            // Initial measurement
                            progress.set(measure(&node));
                            Box::new(move || {
                                let _ = window.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            })
                        }
                        Err(e) => {
                            log::warn!("scroll listener not attached: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            node,
        );
    }

    *progress
}
