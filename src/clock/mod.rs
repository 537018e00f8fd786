//! Clock contract shared by every timing source.
//!
//! A clock is a zero-sized marker type implementing [`Clock`]. It is never
//! instantiated; it only fixes the tick representation, the tick period and
//! the `now()` operation. Durations and time points carry the clock as a type
//! parameter, so readings from different clocks cannot be mixed.
//!
//! Two clocks ship with the crate:
//! - [`HiResClock`] - raw CPU counter ticks (`rdtscp` / `cntvct_el0`)
//! - [`SteadyClock`] - `std::time::Instant` in nanoseconds

mod duration;
mod hires;
mod period;
mod rep;
mod steady;
mod time_point;

pub use duration::Duration;
pub use hires::{CounterReading, HiResClock};
pub use period::Period;
pub use rep::Rep;
pub use steady::SteadyClock;
pub use time_point::TimePoint;

/// A source of monotonically non-decreasing time points.
///
/// Implementors are marker types. `now()` must be non-blocking, free of side
/// effects and usable without any setup.
///
/// Successive readings on one thread of execution against the same counter
/// never decrease. Nothing is promised about readings taken on different
/// cores unless the platform synchronizes its counters.
pub trait Clock: Sized + 'static {
    /// Unsigned integer holding raw tick counts.
    type Rep: Rep;

    /// Length of one tick relative to one second.
    const PERIOD: Period;

    /// Short name used in reports and log events.
    const NAME: &'static str;

    /// Read the current time.
    fn now() -> TimePoint<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_constants() {
        assert_eq!(HiResClock::PERIOD, Period::ONE);
        assert_eq!(SteadyClock::PERIOD, Period::NANO);
        assert_ne!(HiResClock::NAME, SteadyClock::NAME);
    }

    #[test]
    fn test_clock_markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<HiResClock>(), 0);
        assert_eq!(std::mem::size_of::<SteadyClock>(), 0);
        assert_eq!(
            std::mem::size_of::<TimePoint<HiResClock>>(),
            std::mem::size_of::<u64>()
        );
    }
}
