//! Monotonic clock backed by `std::time::Instant`.

use std::sync::OnceLock;
use std::time::Instant;

use super::{Clock, Duration, Period, TimePoint};

/// Nanosecond clock built on the operating system's monotonic clock.
///
/// The epoch is the first time any `SteadyClock` reading is taken in the
/// process. Ticks are nanoseconds, so durations convert losslessly to and
/// from [`std::time::Duration`] within `u64` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SteadyClock;

fn epoch() -> Instant {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    *EPOCH.get_or_init(Instant::now)
}

impl Clock for SteadyClock {
    type Rep = u64;

    const PERIOD: Period = Period::NANO;

    const NAME: &'static str = "steady";

    #[inline]
    fn now() -> TimePoint<Self> {
        let nanos = epoch().elapsed().as_nanos();
        TimePoint::from_ticks(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl Duration<SteadyClock> {
    /// Convert to a standard library duration.
    pub fn to_std(self) -> std::time::Duration {
        std::time::Duration::from_nanos(self.ticks())
    }
}

/// Clamps at `u64::MAX` nanoseconds (about 584 years).
impl From<std::time::Duration> for Duration<SteadyClock> {
    fn from(d: std::time::Duration) -> Self {
        Duration::from_ticks(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }
}

impl From<Duration<SteadyClock>> for std::time::Duration {
    fn from(d: Duration<SteadyClock>) -> Self {
        d.to_std()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_tracks_sleep() {
        let start = SteadyClock::now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let elapsed = SteadyClock::now() - start;
        assert!(elapsed.to_std() >= std::time::Duration::from_millis(2));
    }

    #[test]
    fn test_std_conversion() {
        let d = Duration::<SteadyClock>::from(std::time::Duration::from_micros(3));
        assert_eq!(d.ticks(), 3_000);
        assert_eq!(std::time::Duration::from(d), std::time::Duration::from_micros(3));

        let huge = Duration::<SteadyClock>::from(std::time::Duration::MAX);
        assert_eq!(huge, Duration::MAX);
    }
}
