//! Count-up animation for the numbers shown in the hero and stats sections.
//!
//! A [`Counter`] holds at 0 until [`Counter::reveal`] is called (the host
//! element was seen in the viewport), then climbs to its target under one of
//! two [`CountPolicy`] variants and stops for good.
//!
//! ```text
//! NotStarted --reveal--> Animating --current == target--> Completed
//! ```
//!
//! Nothing here touches the browser. The hooks in `crate::hooks::counter`
//! own the timers and feed timestamps in.

use crate::animation::format;
use crate::error::AnimationError;

/// Tick interval for [`CountPolicy::Increment`] when the caller has no preference.
pub const DEFAULT_TICK_MS: u32 = 50;

/// Largest whole number an `f64` holds exactly (2^53).
pub const MAX_EXACT_TARGET: f64 = 9_007_199_254_740_992.0;

/// `value` as a `u64` if it is a finite, non-negative whole number that
/// survives the conversion unchanged.
pub fn exact_whole(value: f64) -> Option<u64> {
    if value.is_finite() && (0.0..=MAX_EXACT_TARGET).contains(&value) && value.fract() == 0.0 {
        Some(value as u64)
    } else {
        None
    }
}

/// What a counter animates toward. Validated once, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTarget {
    value: u64,
    suffix: String,
    duration_ms: f64,
}

impl AnimationTarget {
    /// Builds a target, rejecting negative, fractional and non-finite values,
    /// values above [`MAX_EXACT_TARGET`], and durations that are not strictly
    /// positive.
    pub fn new(value: f64, duration_ms: f64) -> Result<Self, AnimationError> {
        if !value.is_finite() || value < 0.0 || value > MAX_EXACT_TARGET {
            return Err(AnimationError::InvalidTarget(value));
        }
        if value.fract() != 0.0 {
            return Err(AnimationError::FractionalTarget(value));
        }
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(AnimationError::InvalidDuration(duration_ms));
        }
        let Some(value) = exact_whole(value) else {
            return Err(AnimationError::InvalidTarget(value));
        };
        Ok(Self {
            value,
            suffix: String::new(),
            duration_ms,
        })
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

/// How the displayed value moves toward the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPolicy {
    /// `floor(elapsed / duration * target)` sampled on every animation frame.
    Frame,
    /// Adds `ceil(target / 100)` every `tick_ms`, ignoring the duration.
    Increment { tick_ms: u32 },
}

impl CountPolicy {
    pub fn increment() -> Self {
        CountPolicy::Increment {
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Animating,
    Completed,
}

/// Result of one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Not revealed yet, or already finished. Nothing changed.
    Idle,
    /// Still animating; carries the current value.
    Running(u64),
    /// Reached the target on this step. Returned exactly once.
    Completed(u64),
}

/// Amount added per tick under [`CountPolicy::Increment`].
pub fn increment_for(value: u64) -> u64 {
    value.div_ceil(100)
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: AnimationTarget,
    policy: CountPolicy,
    phase: Phase,
    current: u64,
    started_at: Option<f64>,
}

impl Counter {
    pub fn new(target: AnimationTarget, policy: CountPolicy) -> Self {
        Self {
            target,
            policy,
            phase: Phase::NotStarted,
            current: 0,
            started_at: None,
        }
    }

    /// Marks the host element as seen at `now_ms` and starts the timeline.
    ///
    /// Returns `true` only for the call that moves the counter out of
    /// `NotStarted`; later calls (re-entering the viewport) are ignored.
    pub fn reveal(&mut self, now_ms: f64) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::Animating;
        self.started_at = Some(now_ms);
        true
    }

    /// Advances according to the counter's policy.
    pub fn step(&mut self, now_ms: f64) -> Step {
        match self.policy {
            CountPolicy::Frame => self.sample(now_ms),
            CountPolicy::Increment { .. } => self.tick(),
        }
    }

    /// Frame policy: position on the timeline anchored at reveal time.
    pub fn sample(&mut self, now_ms: f64) -> Step {
        let started_at = match (self.phase, self.started_at) {
            (Phase::Animating, Some(t)) => t,
            _ => return Step::Idle,
        };
        let value = self.target.value;
        let duration = self.target.duration_ms;
        let elapsed = (now_ms - started_at).max(0.0);

        let next = if elapsed >= duration {
            value
        } else {
            ((elapsed / duration) * value as f64).floor() as u64
        };
        self.advance(next.min(value))
    }

    /// Increment policy: one fixed step.
    pub fn tick(&mut self) -> Step {
        if self.phase != Phase::Animating {
            return Step::Idle;
        }
        let value = self.target.value;
        let next = self
            .current
            .saturating_add(increment_for(value))
            .min(value);
        self.advance(next)
    }

    fn advance(&mut self, next: u64) -> Step {
        // a clock that jumps backwards must not make the number go down
        self.current = self.current.max(next);
        if self.current == self.target.value {
            self.phase = Phase::Completed;
            Step::Completed(self.current)
        } else {
            Step::Running(self.current)
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn policy(&self) -> CountPolicy {
        self.policy
    }

    pub fn target(&self) -> &AnimationTarget {
        &self.target
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Current value as displayed, e.g. `12,000+`.
    pub fn display(&self) -> String {
        format::with_suffix(self.current, &self.target.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(value: f64, duration_ms: f64) -> AnimationTarget {
        AnimationTarget::new(value, duration_ms).unwrap()
    }

    #[test]
    fn rejects_bad_targets() {
        assert_eq!(
            AnimationTarget::new(-1.0, 2000.0),
            Err(AnimationError::InvalidTarget(-1.0))
        );
        assert!(matches!(
            AnimationTarget::new(f64::NAN, 2000.0),
            Err(AnimationError::InvalidTarget(_))
        ));
        assert!(matches!(
            AnimationTarget::new(f64::INFINITY, 2000.0),
            Err(AnimationError::InvalidTarget(_))
        ));
        assert_eq!(
            AnimationTarget::new(12.5, 2000.0),
            Err(AnimationError::FractionalTarget(12.5))
        );
    }

    #[test]
    fn rejects_bad_durations() {
        assert_eq!(
            AnimationTarget::new(10.0, 0.0),
            Err(AnimationError::InvalidDuration(0.0))
        );
        assert_eq!(
            AnimationTarget::new(10.0, -5.0),
            Err(AnimationError::InvalidDuration(-5.0))
        );
        assert!(AnimationTarget::new(10.0, f64::NAN).is_err());
    }

    #[test]
    fn zero_target_is_valid() {
        let mut counter = Counter::new(target(0.0, 1000.0), CountPolicy::Frame);
        assert!(counter.reveal(0.0));
        assert_eq!(counter.step(0.0), Step::Completed(0));
        assert_eq!(counter.step(500.0), Step::Idle);
    }

    #[test]
    fn holds_at_zero_until_revealed() {
        let mut counter = Counter::new(target(100.0, 1000.0), CountPolicy::Frame);
        for now in [0.0, 500.0, 5000.0] {
            assert_eq!(counter.step(now), Step::Idle);
        }
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.phase(), Phase::NotStarted);
        assert_eq!(counter.display(), "0");
    }

    #[test]
    fn frame_policy_halfway_and_exact_finish() {
        let mut counter = Counter::new(
            target(12000.0, 2000.0).with_suffix("+"),
            CountPolicy::Frame,
        );
        counter.reveal(100.0);
        assert_eq!(counter.step(100.0), Step::Running(0));
        assert_eq!(counter.step(1100.0), Step::Running(6000));
        assert_eq!(counter.step(2100.0), Step::Completed(12000));
        assert_eq!(counter.display(), "12,000+");
    }

    #[test]
    fn frame_policy_overshoot_clamps() {
        let mut counter = Counter::new(target(98.0, 2000.0).with_suffix("%"), CountPolicy::Frame);
        counter.reveal(0.0);
        assert_eq!(counter.step(10_000.0), Step::Completed(98));
        assert_eq!(counter.display(), "98%");
    }

    #[test]
    fn frame_policy_ignores_clock_going_backwards() {
        let mut counter = Counter::new(target(1000.0, 1000.0), CountPolicy::Frame);
        counter.reveal(0.0);
        assert_eq!(counter.step(600.0), Step::Running(600));
        assert_eq!(counter.step(300.0), Step::Running(600));
        assert_eq!(counter.step(-50.0), Step::Running(600));
    }

    #[test]
    fn increment_policy_counts_by_one_for_small_targets() {
        let mut counter = Counter::new(target(25.0, 2000.0), CountPolicy::increment());
        counter.reveal(0.0);

        let mut ticks = 0;
        let mut last = 0;
        loop {
            ticks += 1;
            match counter.tick() {
                Step::Running(v) => {
                    assert_eq!(v, last + 1);
                    last = v;
                }
                Step::Completed(v) => {
                    assert_eq!(v, 25);
                    break;
                }
                Step::Idle => panic!("counter went idle before completing"),
            }
        }
        assert_eq!(ticks, 25);
        assert_eq!(ticks * DEFAULT_TICK_MS, 1250);
    }

    #[test]
    fn default_increment_ticks_every_50ms() {
        assert_eq!(
            CountPolicy::increment(),
            CountPolicy::Increment { tick_ms: 50 }
        );
        assert_eq!(DEFAULT_TICK_MS, 50);
    }

    #[test]
    fn increment_policy_clamps_last_step() {
        assert_eq!(increment_for(12000), 120);
        assert_eq!(increment_for(150), 2);
        assert_eq!(increment_for(12), 1);
        assert_eq!(increment_for(0), 0);

        let mut counter = Counter::new(target(150.0, 1.0), CountPolicy::increment());
        counter.reveal(0.0);
        let mut steps = Vec::new();
        while let Step::Running(v) | Step::Completed(v) = counter.tick() {
            steps.push(v);
        }
        assert_eq!(steps.len(), 75);
        assert_eq!(steps.last(), Some(&150));
    }

    #[test]
    fn reveal_fires_once() {
        let mut counter = Counter::new(target(10.0, 100.0), CountPolicy::Frame);
        assert!(counter.reveal(0.0));
        assert!(!counter.reveal(50.0));
        assert_eq!(counter.step(100.0), Step::Completed(10));
        assert!(!counter.reveal(200.0));
        assert_eq!(counter.phase(), Phase::Completed);
    }

    #[test]
    fn completed_counter_stays_put() {
        let mut counter = Counter::new(target(5.0, 10.0), CountPolicy::increment());
        counter.reveal(0.0);
        while !counter.is_complete() {
            counter.tick();
        }
        for _ in 0..10 {
            assert_eq!(counter.tick(), Step::Idle);
            assert_eq!(counter.step(1e9), Step::Idle);
        }
        assert_eq!(counter.current(), 5);
    }

    #[test]
    fn rejects_targets_beyond_exact_range() {
        assert_eq!(
            AnimationTarget::new(1e20, 1000.0),
            Err(AnimationError::InvalidTarget(1e20))
        );
        assert!(AnimationTarget::new(MAX_EXACT_TARGET * 2.0, 1000.0).is_err());

        let largest = target(MAX_EXACT_TARGET, 1000.0);
        assert_eq!(largest.value(), 9_007_199_254_740_992);

        let mut counter = Counter::new(largest, CountPolicy::Frame);
        counter.reveal(0.0);
        assert_eq!(counter.step(1000.0), Step::Completed(9_007_199_254_740_992));
        assert_eq!(counter.display(), "9,007,199,254,740,992");
    }

    #[test]
    fn exact_whole_only_accepts_lossless_values() {
        assert_eq!(exact_whole(12000.0), Some(12000));
        assert_eq!(exact_whole(0.0), Some(0));
        assert_eq!(exact_whole(12.5), None);
        assert_eq!(exact_whole(-1.0), None);
        assert_eq!(exact_whole(f64::NAN), None);
        assert_eq!(exact_whole(1e20), None);
    }

    #[test]
    fn suffix_shows_once_completed() {
        let t = target(24.0, 2000.0).with_suffix("/7");
        let mut counter = Counter::new(t, CountPolicy::Frame);
        counter.reveal(0.0);
        counter.step(2000.0);
        assert_eq!(counter.display(), "24/7");
    }
}
