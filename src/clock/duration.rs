//! Spans of clock ticks.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Serialize, Serializer};

use super::{Clock, Rep};

/// A span of ticks of clock `C`.
///
/// The representation is `C::Rep`, which is unsigned, so a duration is
/// never negative. Arithmetic operators clamp instead of wrapping: `-`
/// bottoms out at zero and `+` tops out at `Rep::MAX`. Use
/// [`checked_sub`](Self::checked_sub) to tell a zero result from an
/// underflow.
pub struct Duration<C: Clock> {
    ticks: C::Rep,
    _clock: PhantomData<fn() -> C>,
}

impl<C: Clock> Duration<C> {
    /// The zero-length duration.
    pub const ZERO: Self = Self::from_ticks(<C::Rep as Rep>::ZERO);

    /// The longest representable duration.
    pub const MAX: Self = Self::from_ticks(<C::Rep as Rep>::MAX);

    /// Wrap a raw tick count.
    #[inline]
    pub const fn from_ticks(ticks: C::Rep) -> Self {
        Self {
            ticks,
            _clock: PhantomData,
        }
    }

    /// Raw tick count.
    #[inline]
    pub fn ticks(self) -> C::Rep {
        self.ticks
    }

    /// Whether this duration is zero ticks long.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.ticks == <C::Rep as Rep>::ZERO
    }

    /// `self + rhs`, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.ticks.checked_add(rhs.ticks).map(Self::from_ticks)
    }

    /// `self - rhs`, or `None` if `rhs` is longer than `self`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.ticks.checked_sub(rhs.ticks).map(Self::from_ticks)
    }

    /// `self - rhs`, clamped at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::from_ticks(self.ticks.saturating_sub(rhs.ticks))
    }

    /// `self + rhs`, clamped at [`Duration::MAX`].
    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self::from_ticks(self.ticks.saturating_add(rhs.ticks))
    }
}

// Manual impls: derives would demand the same traits of the clock marker.

impl<C: Clock> Clone for Duration<C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Clock> Copy for Duration<C> {}

impl<C: Clock> Default for Duration<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: Clock> PartialEq for Duration<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ticks == other.ticks
    }
}

impl<C: Clock> Eq for Duration<C> {}

impl<C: Clock> PartialOrd for Duration<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Clock> Ord for Duration<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.ticks.cmp(&other.ticks)
    }
}

impl<C: Clock> Hash for Duration<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ticks.hash(state);
    }
}

impl<C: Clock> fmt::Debug for Duration<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duration")
            .field("clock", &C::NAME)
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl<C: Clock> fmt::Display for Duration<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.ticks)
    }
}

impl<C: Clock> Add for Duration<C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl<C: Clock> AddAssign for Duration<C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Clock> Sub for Duration<C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl<C: Clock> SubAssign for Duration<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Clock> Sum for Duration<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, C: Clock> Sum<&'a Duration<C>> for Duration<C> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Serialized as the bare tick count.
impl<C: Clock> Serialize for Duration<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ticks.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::HiResClock;

    type Ticks = Duration<HiResClock>;

    #[test]
    fn test_subtraction_clamps_at_zero() {
        let short = Ticks::from_ticks(3);
        let long = Ticks::from_ticks(10);
        assert_eq!(long - short, Ticks::from_ticks(7));
        assert_eq!(short - long, Ticks::ZERO);
        assert_eq!(short.checked_sub(long), None);
    }

    #[test]
    fn test_addition_clamps_at_max() {
        assert_eq!(Ticks::MAX + Ticks::from_ticks(1), Ticks::MAX);
        assert_eq!(Ticks::MAX.checked_add(Ticks::from_ticks(1)), None);
    }

    #[test]
    fn test_sum_and_ordering() {
        let spans = [Ticks::from_ticks(5), Ticks::from_ticks(1), Ticks::from_ticks(4)];
        let total: Ticks = spans.iter().sum();
        assert_eq!(total.ticks(), 10);
        assert_eq!(spans.iter().max(), Some(&Ticks::from_ticks(5)));
        assert!(Ticks::default().is_zero());
    }

    #[test]
    fn test_serializes_as_ticks() {
        let json = serde_json::to_string(&Ticks::from_ticks(42)).unwrap();
        assert_eq!(json, "42");
    }
}
