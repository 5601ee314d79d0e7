use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::animation::Visibility;

#[derive(Clone, Debug, PartialEq)]
pub struct InViewOptions {
    /// Stop watching after the first intersection
    pub once: bool,
    /// CSS margin applied to the viewport, negative values shrink it
    pub margin: &'static str,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            once: true,
            margin: "0px",
        }
    }
}

impl InViewOptions {
    pub fn with_margin(margin: &'static str) -> Self {
        Self {
            margin,
            ..Default::default()
        }
    }
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer and its callback alive; disconnects when dropped.
struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer_supported(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

fn observe(
    node: &NodeRef,
    options: &InViewOptions,
    visible: UseStateHandle<bool>,
) -> Option<ObserverHandle> {
    let Some(element) = node.cast::<Element>() else {
        log::warn!("in-view target is not mounted, showing it immediately");
        visible.set(true);
        return None;
    };
    let window = web_sys::window()?;
    if !observer_supported(&window) {
        log::warn!("IntersectionObserver unavailable, showing content immediately");
        visible.set(true);
        return None;
    }

    let latch = Rc::new(RefCell::new(Visibility::new(options.once)));
    let callback = {
        let visible = visible.clone();
        EntriesCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let mut latch = latch.borrow_mut();
            if latch.observe(intersecting) {
                visible.set(latch.is_visible());
            }
            if latch.is_settled() {
                observer.disconnect();
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_root_margin(options.margin);
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some(ObserverHandle {
                observer,
                _callback: callback,
            })
        }
        Err(e) => {
            log::warn!("failed to create IntersectionObserver: {:?}", e);
            visible.set(true);
            None
        }
    }
}

/// `true` once `node` has intersected the viewport (or while it does, without `once`).
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let handle = observe(node, options, visible);
                move || drop(handle)
            },
            (node, options),
        );
    }

    *visible
}
