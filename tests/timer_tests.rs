//! Timer behaviour against a manually driven clock.

mod common;

use common::ManualClock;
use proptest::prelude::*;
use stopwatch::{make_timer, Duration, HiResClock, TimePoint, Timer};

type Instant = TimePoint<ManualClock>;

#[test]
fn relative_timer_expires_after_duration() {
    ManualClock::set(1_000);
    let timer = Timer::<ManualClock>::new(ManualClock::ticks(250));
    assert_eq!(timer.expiry(), Instant::from_ticks(1_250));

    ManualClock::advance(249);
    assert!(!timer.done());
    assert_eq!(timer.remaining(), ManualClock::ticks(1));

    ManualClock::advance(1);
    assert!(timer.done());
    assert!(timer.remaining().is_zero());
}

#[test]
fn deadline_fixed_at_construction() {
    ManualClock::set(10);
    let timer = make_timer::<ManualClock>(ManualClock::ticks(5));
    ManualClock::set(500);
    // Querying later does not move the deadline.
    assert_eq!(timer.expiry(), Instant::from_ticks(15));
    assert!(timer.done());
}

#[test]
fn remaining_after_expiry_is_zero() {
    let timer = Timer::at(Instant::from_ticks(100));
    assert_eq!(timer.remaining_at(Instant::from_ticks(10_000)), Duration::ZERO);
    assert_eq!(timer.checked_remaining_at(Instant::from_ticks(10_000)), None);
}

#[test]
fn zero_duration_hires_timer_is_done() {
    let timer = Timer::<HiResClock>::new(Duration::ZERO);
    assert!(timer.done());
}

#[test]
fn timers_are_independent_values() {
    ManualClock::set(0);
    let a = Timer::<ManualClock>::new(ManualClock::ticks(10));
    let b = a;
    let c = Timer::<ManualClock>::new(ManualClock::ticks(20));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

proptest! {
    #[test]
    fn done_iff_now_at_or_after_expiry(start in 0u64..1 << 40, d in 0u64..1 << 20, now in 0u64..1 << 41) {
        ManualClock::set(start);
        let timer = Timer::<ManualClock>::new(ManualClock::ticks(d));
        let expiry = start + d;
        prop_assert_eq!(timer.done_at(Instant::from_ticks(now)), now >= expiry);
    }

    #[test]
    fn remaining_is_exact_difference(t in 0u64..1 << 40, now in 0u64..1 << 40) {
        let timer = Timer::at(Instant::from_ticks(t));
        prop_assert!(timer.remaining_at(Instant::from_ticks(t)).is_zero());
        let expected = t.saturating_sub(now);
        prop_assert_eq!(timer.remaining_at(Instant::from_ticks(now)).ticks(), expected);
        if now <= t {
            prop_assert_eq!(
                timer.checked_remaining_at(Instant::from_ticks(now)),
                Some(ManualClock::ticks(t - now))
            );
        }
    }
}
