//! Property-based tests for the count-up animation core
//!
//! Uses proptest to check the counter's ordering and completion guarantees
//! over arbitrary targets and clocks.

use proptest::prelude::*;
use wyatt_hotels::animation::counter::increment_for;
use wyatt_hotels::animation::format::group_thousands;
use wyatt_hotels::animation::scroll::{map_range, section_progress};
use wyatt_hotels::animation::{
    AnimationTarget, CountPolicy, Counter, CounterDriver, Phase, Step, Timer,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Whole-number targets in the range the site actually displays and beyond
fn target_value_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        3 => 0..1_000u64,
        2 => 1_000..1_000_000u64,
    ]
}

fn duration_strategy() -> impl Strategy<Value = f64> {
    (1u32..10_000).prop_map(f64::from)
}

/// Frame timestamps relative to reveal, possibly unsorted and repeated
fn frame_times_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..20_000).prop_map(f64::from), 1..60)
}

struct NoopTimer;

impl Timer for NoopTimer {
    fn cancel(self) {}
}

fn counter(value: u64, duration_ms: f64, policy: CountPolicy) -> Counter {
    let target = AnimationTarget::new(value as f64, duration_ms).unwrap();
    Counter::new(target, policy)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The shown value never decreases, whatever order frames arrive in
    #[test]
    fn frame_values_never_decrease(
        value in target_value_strategy(),
        duration in duration_strategy(),
        times in frame_times_strategy(),
    ) {
        let mut c = counter(value, duration, CountPolicy::Frame);
        c.reveal(0.0);

        let mut last = 0;
        for t in times {
            c.step(t);
            prop_assert!(c.current() >= last);
            prop_assert!(c.current() <= value);
            last = c.current();
        }
    }

    /// Any frame at or after the full duration lands exactly on the target
    #[test]
    fn frame_reaches_target_after_duration(
        value in target_value_strategy(),
        duration in duration_strategy(),
        start in 0u32..100_000,
        overshoot in 0u32..5_000,
    ) {
        let start = f64::from(start);
        let mut c = counter(value, duration, CountPolicy::Frame);
        c.reveal(start);

        let step = c.step(start + duration + f64::from(overshoot));
        prop_assert_eq!(step, Step::Completed(value));
        prop_assert_eq!(c.phase(), Phase::Completed);
        prop_assert_eq!(c.current(), value);
    }

    /// Frame value matches floor(elapsed / duration * target) before the end
    #[test]
    fn frame_value_is_proportional(
        value in 1..1_000_000u64,
        duration in duration_strategy(),
        fraction in 0.0f64..1.0,
    ) {
        let elapsed = (duration * fraction).floor();
        prop_assume!(elapsed < duration);

        let mut c = counter(value, duration, CountPolicy::Frame);
        c.reveal(0.0);
        c.step(elapsed);

        let expected = ((elapsed / duration) * value as f64).floor() as u64;
        prop_assert_eq!(c.current(), expected);
    }

    /// Fixed increments finish in at most 100 ticks and land on the target
    #[test]
    fn increments_finish_within_a_hundred_ticks(value in target_value_strategy()) {
        let mut c = counter(value, 2000.0, CountPolicy::increment());
        c.reveal(0.0);

        let mut ticks = 0;
        let mut last = 0;
        loop {
            ticks += 1;
            match c.step(0.0) {
                Step::Running(v) => {
                    prop_assert!(v > last || value == 0);
                    last = v;
                }
                Step::Completed(v) => {
                    prop_assert_eq!(v, value);
                    break;
                }
                Step::Idle => prop_assert!(false, "idle while animating"),
            }
            prop_assert!(ticks <= 100);
        }

        if value > 0 {
            let expected = value.div_ceil(increment_for(value));
            prop_assert_eq!(ticks as u64, expected);
        }
    }

    /// Nothing moves until the element has been seen
    #[test]
    fn holds_at_zero_before_reveal(
        value in target_value_strategy(),
        times in frame_times_strategy(),
    ) {
        for policy in [CountPolicy::Frame, CountPolicy::increment()] {
            let mut c = counter(value, 2000.0, policy);
            for t in &times {
                prop_assert_eq!(c.step(*t), Step::Idle);
            }
            prop_assert_eq!(c.current(), 0);
            prop_assert_eq!(c.phase(), Phase::NotStarted);
        }
    }

    /// Once complete, further steps and reveals change nothing
    #[test]
    fn completion_is_final(
        value in target_value_strategy(),
        times in frame_times_strategy(),
    ) {
        for policy in [CountPolicy::Frame, CountPolicy::increment()] {
            let mut c = counter(value, 1.0, policy);
            c.reveal(0.0);
            while !c.is_complete() {
                c.step(10.0);
            }
            let text = c.display();

            prop_assert!(!c.reveal(0.0));
            for t in &times {
                prop_assert_eq!(c.step(*t), Step::Idle);
            }
            prop_assert_eq!(c.current(), value);
            prop_assert_eq!(c.display(), text.clone());
        }
    }

    /// Cancelling mid-count freezes the value and holds no timer
    #[test]
    fn cancel_freezes_the_count(
        value in 1..10_000u64,
        before in 0usize..150,
        after in 1usize..50,
    ) {
        let mut driver = CounterDriver::new(counter(value, 2000.0, CountPolicy::increment()));
        prop_assert!(driver.on_visible(0.0, |_| NoopTimer));
        for _ in 0..before {
            driver.on_tick(0.0);
        }
        let frozen = driver.counter().current();

        driver.cancel();
        for _ in 0..after {
            prop_assert_eq!(driver.on_tick(0.0), Step::Idle);
        }
        prop_assert!(!driver.is_ticking());
        prop_assert_eq!(driver.counter().current(), frozen);
    }

    /// Grouping only inserts commas
    #[test]
    fn grouping_preserves_digits(n in any::<u64>()) {
        let grouped = group_thousands(n);
        let digits: String = grouped.chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(digits, n.to_string());
        prop_assert!(grouped.split(',').skip(1).all(|g| g.len() == 3));
    }

    /// Mapped values stay inside the output range
    #[test]
    fn map_range_is_clamped(
        value in -1_000.0f64..1_000.0,
        from_lo in -100.0f64..100.0,
        from_len in 0.1f64..100.0,
        to_a in -100.0f64..100.0,
        to_b in -100.0f64..100.0,
    ) {
        let out = map_range(value, (from_lo, from_lo + from_len), (to_a, to_b));
        let (lo, hi) = if to_a <= to_b { (to_a, to_b) } else { (to_b, to_a) };
        prop_assert!(out >= lo - 1e-9 && out <= hi + 1e-9);
    }

    #[test]
    fn section_progress_is_a_fraction(
        top in -10_000.0f64..10_000.0,
        height in -100.0f64..5_000.0,
    ) {
        let p = section_progress(top, height);
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
