//! Deadlines on any [`Clock`].

use crate::clock::{Clock, Duration, SteadyClock, TimePoint};

/// An immutable deadline on clock `C`.
///
/// A timer has one piece of state, its expiry, fixed at construction. All
/// queries are pure functions of the expiry and a "now" that is either
/// passed in or read from `C` at call time. To move a deadline, build a new
/// timer.
///
/// # Example
///
/// ```
/// use stopwatch::{Duration, SteadyClock, Timer};
///
/// let timer = Timer::<SteadyClock>::new(Duration::from(std::time::Duration::from_secs(60)));
/// assert!(!timer.done());
/// assert!(timer.remaining() > Duration::ZERO);
/// ```
pub struct Timer<C: Clock = SteadyClock> {
    expiry: TimePoint<C>,
}

impl<C: Clock> Timer<C> {
    /// Deadline `duration` after the current time.
    ///
    /// The deadline is anchored when the timer is built, not when it is
    /// first queried.
    #[inline]
    pub fn new(duration: Duration<C>) -> Self {
        Self::at(C::now() + duration)
    }

    /// Deadline at an absolute instant.
    #[inline]
    pub const fn at(expiry: TimePoint<C>) -> Self {
        Self { expiry }
    }

    /// The instant this timer expires.
    #[inline]
    pub fn expiry(&self) -> TimePoint<C> {
        self.expiry
    }

    /// Whether the deadline has passed, reading the clock now.
    #[inline]
    pub fn done(&self) -> bool {
        self.done_at(C::now())
    }

    /// Whether the deadline has passed at `now`.
    #[inline]
    pub fn done_at(&self, now: TimePoint<C>) -> bool {
        now >= self.expiry
    }

    /// Time left until the deadline, reading the clock now.
    #[inline]
    pub fn remaining(&self) -> Duration<C> {
        self.remaining_at(C::now())
    }

    /// Time left until the deadline as seen from `now`.
    ///
    /// Zero once `now` is at or past the expiry: durations are unsigned and
    /// clamp rather than wrap.
    #[inline]
    pub fn remaining_at(&self, now: TimePoint<C>) -> Duration<C> {
        self.expiry - now
    }

    /// Like [`remaining_at`](Self::remaining_at), but `None` once `now` is
    /// strictly past the expiry.
    #[inline]
    pub fn checked_remaining_at(&self, now: TimePoint<C>) -> Option<Duration<C>> {
        self.expiry.checked_duration_since(now)
    }
}

/// Build a [`Timer`] expiring `duration` from now on clock `C`.
#[inline]
pub fn make_timer<C: Clock>(duration: Duration<C>) -> Timer<C> {
    Timer::new(duration)
}

impl<C: Clock> Clone for Timer<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Clock> Copy for Timer<C> {}

impl<C: Clock> PartialEq for Timer<C> {
    fn eq(&self, other: &Self) -> bool {
        self.expiry == other.expiry
    }
}

impl<C: Clock> Eq for Timer<C> {}

impl<C: Clock> std::fmt::Debug for Timer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer").field("expiry", &self.expiry).finish()
    }
}
