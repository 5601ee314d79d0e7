//! Timer lifecycle around a [`Counter`].
//!
//! The driver owns whatever keeps the counter ticking (an animation-frame
//! loop or an interval in the browser, a stub in tests) and decides when it
//! exists:
//!
//! - no timer before the host element is seen,
//! - exactly one timer from the first sighting,
//! - the timer is released on the step that completes the count,
//! - [`CounterDriver::cancel`] releases it early, after which ticks do nothing.

use crate::animation::counter::{CountPolicy, Counter, Step};

/// Something that schedules ticks until it is cancelled.
pub trait Timer {
    fn cancel(self);
}

#[derive(Debug)]
pub struct CounterDriver<T: Timer> {
    counter: Counter,
    timer: Option<T>,
    rendered: u64,
}

impl<T: Timer> CounterDriver<T> {
    pub fn new(counter: Counter) -> Self {
        Self {
            counter,
            timer: None,
            rendered: 0,
        }
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// `true` while a timer is held.
    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    /// Reveals the counter and starts its timer with `start`.
    ///
    /// `start` is only called the first time; returns whether it was.
    pub fn on_visible(&mut self, now_ms: f64, start: impl FnOnce(CountPolicy) -> T) -> bool {
        if !self.counter.reveal(now_ms) {
            return false;
        }
        self.timer = Some(start(self.counter.policy()));
        true
    }

    /// One timer callback. Ticks that arrive without a held timer are ignored.
    pub fn on_tick(&mut self, now_ms: f64) -> Step {
        if self.timer.is_none() {
            return Step::Idle;
        }
        let step = self.counter.step(now_ms);
        if let Step::Completed(_) = step {
            self.cancel();
        }
        step
    }

    /// Releases the timer, if any.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    /// The current value if it differs from the last one handed out.
    pub fn changed_value(&mut self) -> Option<u64> {
        let current = self.counter.current();
        if current == self.rendered {
            return None;
        }
        self.rendered = current;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::animation::AnimationTarget;

    #[derive(Default)]
    struct Log {
        started: Cell<usize>,
        cancelled: Cell<usize>,
    }

    struct StubTimer(Rc<Log>);

    impl Timer for StubTimer {
        fn cancel(self) {
            self.0.cancelled.set(self.0.cancelled.get() + 1);
        }
    }

    fn driver(value: f64, policy: CountPolicy) -> (CounterDriver<StubTimer>, Rc<Log>) {
        let target = AnimationTarget::new(value, 1000.0).unwrap();
        (
            CounterDriver::new(Counter::new(target, policy)),
            Rc::new(Log::default()),
        )
    }

    fn start(log: &Rc<Log>) -> impl FnOnce(CountPolicy) -> StubTimer {
        let log = log.clone();
        move |_| {
            log.started.set(log.started.get() + 1);
            StubTimer(log)
        }
    }

    #[test]
    fn no_timer_until_visible() {
        let (mut d, log) = driver(100.0, CountPolicy::increment());
        for now in [0.0, 50.0, 5000.0] {
            assert_eq!(d.on_tick(now), Step::Idle);
        }
        assert!(!d.is_ticking());
        assert_eq!(log.started.get(), 0);
        assert_eq!(d.counter().current(), 0);
        assert_eq!(d.changed_value(), None);
    }

    #[test]
    fn starts_one_timer_on_first_sighting() {
        let (mut d, log) = driver(100.0, CountPolicy::increment());
        assert!(d.on_visible(0.0, start(&log)));
        assert!(!d.on_visible(10.0, start(&log)));
        assert!(d.is_ticking());
        assert_eq!(log.started.get(), 1);
    }

    #[test]
    fn completion_releases_the_timer() {
        let (mut d, log) = driver(25.0, CountPolicy::increment());
        d.on_visible(0.0, start(&log));

        let mut ticks = 0;
        while d.is_ticking() {
            ticks += 1;
            d.on_tick(0.0);
        }
        assert_eq!(ticks, 25);
        assert_eq!(log.cancelled.get(), 1);
        assert_eq!(d.on_tick(0.0), Step::Idle);
        assert!(d.counter().is_complete());
    }

    #[test]
    fn cancel_mid_count_stops_updates() {
        let (mut d, log) = driver(100.0, CountPolicy::increment());
        d.on_visible(0.0, start(&log));
        for _ in 0..40 {
            d.on_tick(0.0);
        }
        assert_eq!(d.counter().current(), 40);

        d.cancel();
        assert!(!d.is_ticking());
        assert_eq!(log.cancelled.get(), 1);
        for _ in 0..10 {
            assert_eq!(d.on_tick(0.0), Step::Idle);
        }
        assert_eq!(d.counter().current(), 40);

        // a second cancel and a later sighting are no-ops
        d.cancel();
        assert!(!d.on_visible(100.0, start(&log)));
        assert_eq!(log.cancelled.get(), 1);
        assert_eq!(log.started.get(), 1);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let (mut d, log) = driver(0.0, CountPolicy::Frame);
        d.on_visible(0.0, start(&log));
        assert_eq!(d.on_tick(16.0), Step::Completed(0));
        assert!(!d.is_ticking());
        assert_eq!(log.cancelled.get(), 1);
    }

    #[test]
    fn repeated_frames_report_a_value_once() {
        let (mut d, log) = driver(1000.0, CountPolicy::Frame);
        d.on_visible(0.0, start(&log));

        d.on_tick(0.0);
        assert_eq!(d.changed_value(), None);

        d.on_tick(500.0);
        assert_eq!(d.changed_value(), Some(500));
        d.on_tick(500.0);
        assert_eq!(d.changed_value(), None);

        d.on_tick(1000.0);
        assert_eq!(d.changed_value(), Some(1000));
        assert_eq!(d.changed_value(), None);
    }
}
