//! Deterministic clock for tests.

use std::cell::Cell;

use stopwatch::{Clock, Duration, Period, TimePoint};

thread_local! {
    static NOW: Cell<u64> = const { Cell::new(0) };
}

/// Clock that only moves when told to. State is per test thread.
pub struct ManualClock;

#[allow(dead_code)]
impl ManualClock {
    pub fn set(ticks: u64) {
        NOW.with(|now| now.set(ticks));
    }

    pub fn advance(ticks: u64) {
        NOW.with(|now| now.set(now.get() + ticks));
    }

    pub fn ticks(ticks: u64) -> Duration<ManualClock> {
        Duration::from_ticks(ticks)
    }
}

impl Clock for ManualClock {
    type Rep = u64;

    const PERIOD: Period = Period::MICRO;

    const NAME: &'static str = "manual";

    fn now() -> TimePoint<Self> {
        TimePoint::from_ticks(NOW.with(Cell::get))
    }
}
