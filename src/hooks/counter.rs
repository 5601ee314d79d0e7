use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::in_view::{use_in_view, InViewOptions};
use crate::animation::{
    AnimationTarget, CountPolicy, Counter, CounterDriver, Phase, Step, Timer,
};

/// What the owning component renders
#[derive(Clone, Debug, PartialEq)]
pub struct CounterView {
    pub text: String,
    pub phase: Phase,
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A self-rescheduling `requestAnimationFrame` loop. Cancelled on drop.
struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

impl FrameLoop {
    /// Runs `on_frame` every frame until it returns `false`.
    fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next = {
            let pending = pending.clone();
            let callback = callback.clone();
            FrameCallback::new(move |timestamp: f64| {
                pending.set(None);
                if on_frame(timestamp) {
                    if let Some(cb) = callback.borrow().as_ref() {
                        pending.set(request_frame(cb));
                    }
                }
            })
        };
        pending.set(request_frame(&next));
        *callback.borrow_mut() = Some(next);

        Self { pending, callback }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // breaks the callback -> slot -> callback cycle
        self.callback.borrow_mut().take();
    }
}

enum Ticker {
    Frames(FrameLoop),
    Interval(Interval),
}

impl Timer for Ticker {
    fn cancel(self) {
        // may be called from inside the ticker's own callback, so the
        // closure is dropped after it returns
        wasm_bindgen_futures::spawn_local(async move { drop(self) });
    }
}

type SharedDriver = Rc<RefCell<CounterDriver<Ticker>>>;

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Runs one tick and pushes a changed value to the host; `false` once the
/// driver has let go of its timer.
fn tick(driver: &SharedDriver, shown: &UseStateHandle<u64>, now_ms: f64) -> bool {
    let (step, changed, ticking) = {
        let mut driver = driver.borrow_mut();
        let step = driver.on_tick(now_ms);
        (step, driver.changed_value(), driver.is_ticking())
    };
    if let Step::Completed(value) = step {
        log::debug!("counter reached {}", value);
    }
    if let Some(value) = changed {
        shown.set(value);
    }
    ticking
}

fn start(driver: SharedDriver, shown: UseStateHandle<u64>) -> bool {
    let on_tick = {
        let driver = driver.clone();
        move |now: f64| tick(&driver, &shown, now)
    };

    let mut driver = driver.borrow_mut();
    driver.on_visible(now_ms(), move |policy| match policy {
        CountPolicy::Frame => Ticker::Frames(FrameLoop::start(on_tick)),
        CountPolicy::Increment { tick_ms } => Ticker::Interval(Interval::new(tick_ms, move || {
            on_tick(now_ms());
        })),
    })
}

/// Counts from 0 to `target` once `node` first scrolls into view.
///
/// No timer exists until then. The timer is released when the count
/// completes, and cancelled if the component unmounts first.
#[hook]
pub fn use_animated_counter(
    node: NodeRef,
    target: AnimationTarget,
    policy: CountPolicy,
) -> CounterView {
    let visible = use_in_view(node, InViewOptions::default());
    let driver = use_mut_ref(move || CounterDriver::new(Counter::new(target, policy)));
    // mirrors the driver's value; setting it is what re-renders the host
    let shown = use_state_eq(|| 0u64);

    {
        let driver = driver.clone();
        let shown = shown.clone();
        use_effect_with_deps(
            move |visible| {
                let started = *visible && start(driver.clone(), shown);
                move || {
                    if started {
                        driver.borrow_mut().cancel();
                    }
                }
            },
            visible,
        );
    }

    let driver = driver.borrow();
    let counter = driver.counter();
    CounterView {
        text: counter.display(),
        phase: counter.phase(),
    }
}
