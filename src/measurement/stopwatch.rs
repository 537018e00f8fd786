//! Timing of a single invocation.

use std::hint::black_box;

use crate::clock::{Clock, Duration};

/// Measure one call of `f` on clock `C`.
///
/// Reads the clock, runs `f` to completion, reads the clock again and
/// returns the difference. The return value of `f` goes through
/// [`black_box`] so the call cannot be optimized out. A panic in `f`
/// unwinds through here and no duration is produced.
///
/// ```
/// use stopwatch::{time, HiResClock};
///
/// let elapsed = time::<HiResClock, _, _>(|| (0..100u64).sum::<u64>());
/// assert!(elapsed.ticks() < u64::MAX);
/// ```
#[inline]
pub fn time<C, F, T>(f: F) -> Duration<C>
where
    C: Clock,
    F: FnOnce() -> T,
{
    let start = C::now();
    black_box(f());
    C::now() - start
}

/// Measure one call of a fallible `f` on clock `C`.
///
/// On `Err` the error is returned unchanged and the closing clock read is
/// skipped: only successful calls are measured.
#[inline]
pub fn try_time<C, F, T, E>(f: F) -> Result<Duration<C>, E>
where
    C: Clock,
    F: FnOnce() -> Result<T, E>,
{
    let start = C::now();
    black_box(f()?);
    Ok(C::now() - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{HiResClock, SteadyClock};

    #[test]
    fn test_time_noop() {
        let elapsed = time::<HiResClock, _, _>(|| ());
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_time_covers_work() {
        let elapsed = time::<SteadyClock, _, _>(|| {
            std::thread::sleep(std::time::Duration::from_millis(2));
        });
        assert!(elapsed.to_std() >= std::time::Duration::from_millis(2));
    }

    #[test]
    fn test_try_time_propagates_error() {
        let result = try_time::<HiResClock, _, (), _>(|| Err("boom"));
        assert_eq!(result, Err("boom"));

        let ok = try_time::<HiResClock, _, _, &str>(|| Ok(42));
        assert!(ok.is_ok());
    }

    #[test]
    #[should_panic(expected = "unit of work failed")]
    fn test_time_propagates_panic() {
        time::<HiResClock, _, ()>(|| panic!("unit of work failed"));
    }
}
