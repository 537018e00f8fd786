//! Absolute instants tagged by their clock.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Serialize, Serializer};

use super::{Clock, Duration};

/// An instant on clock `C`, stored as the duration since the clock's epoch.
///
/// The clock type parameter keeps instants of different clocks from being
/// compared or subtracted. Subtracting a later instant from an earlier one
/// yields [`Duration::ZERO`]; see [`checked_duration_since`](Self::checked_duration_since).
pub struct TimePoint<C: Clock> {
    since_epoch: Duration<C>,
}

impl<C: Clock> TimePoint<C> {
    /// The clock's epoch.
    pub const EPOCH: Self = Self::from_duration_since_epoch(Duration::ZERO);

    /// Build an instant from its offset to the epoch.
    #[inline]
    pub const fn from_duration_since_epoch(since_epoch: Duration<C>) -> Self {
        Self { since_epoch }
    }

    /// Build an instant from a raw counter value.
    #[inline]
    pub const fn from_ticks(ticks: C::Rep) -> Self {
        Self::from_duration_since_epoch(Duration::from_ticks(ticks))
    }

    /// Offset from the clock's epoch.
    #[inline]
    pub fn duration_since_epoch(self) -> Duration<C> {
        self.since_epoch
    }

    /// Raw counter value.
    #[inline]
    pub fn ticks(self) -> C::Rep {
        self.since_epoch.ticks()
    }

    /// `self - earlier`, or `None` if `earlier` is after `self`.
    #[inline]
    pub fn checked_duration_since(self, earlier: Self) -> Option<Duration<C>> {
        self.since_epoch.checked_sub(earlier.since_epoch)
    }

    /// `self - earlier`, clamped at zero.
    #[inline]
    pub fn saturating_duration_since(self, earlier: Self) -> Duration<C> {
        self.since_epoch.saturating_sub(earlier.since_epoch)
    }

    /// `self + d`, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, d: Duration<C>) -> Option<Self> {
        self.since_epoch
            .checked_add(d)
            .map(Self::from_duration_since_epoch)
    }
}

impl<C: Clock> Clone for TimePoint<C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Clock> Copy for TimePoint<C> {}

impl<C: Clock> PartialEq for TimePoint<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.since_epoch == other.since_epoch
    }
}

impl<C: Clock> Eq for TimePoint<C> {}

impl<C: Clock> PartialOrd for TimePoint<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Clock> Ord for TimePoint<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.since_epoch.cmp(&other.since_epoch)
    }
}

impl<C: Clock> Hash for TimePoint<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.since_epoch.hash(state);
    }
}

impl<C: Clock> fmt::Debug for TimePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimePoint")
            .field("clock", &C::NAME)
            .field("ticks", &self.ticks())
            .finish()
    }
}

impl<C: Clock> Add<Duration<C>> for TimePoint<C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration<C>) -> Self {
        Self::from_duration_since_epoch(self.since_epoch + rhs)
    }
}

impl<C: Clock> AddAssign<Duration<C>> for TimePoint<C> {
    #[inline]
    fn add_assign(&mut self, rhs: Duration<C>) {
        *self = *self + rhs;
    }
}

impl<C: Clock> Sub<Duration<C>> for TimePoint<C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Duration<C>) -> Self {
        Self::from_duration_since_epoch(self.since_epoch - rhs)
    }
}

impl<C: Clock> SubAssign<Duration<C>> for TimePoint<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration<C>) {
        *self = *self - rhs;
    }
}

impl<C: Clock> Sub for TimePoint<C> {
    type Output = Duration<C>;

    #[inline]
    fn sub(self, rhs: Self) -> Duration<C> {
        self.saturating_duration_since(rhs)
    }
}

impl<C: Clock> Serialize for TimePoint<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.since_epoch.serialize(serializer)
    }
}
