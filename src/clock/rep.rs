//! Tick representation types.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::Serialize;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer usable as a clock's tick representation.
///
/// Sealed: implemented for `u32`, `u64` and `u128` only.
pub trait Rep:
    sealed::Sealed
    + Copy
    + Ord
    + Hash
    + Default
    + Debug
    + Display
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// Zero ticks.
    const ZERO: Self;
    /// Largest tick count.
    const MAX: Self;

    /// Addition returning `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// Subtraction returning `None` on underflow.
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    /// Addition clamped at `MAX`.
    fn saturating_add(self, rhs: Self) -> Self;
    /// Subtraction clamped at zero.
    fn saturating_sub(self, rhs: Self) -> Self;
    /// Widening conversion used by reports.
    fn as_u128(self) -> u128;
}

macro_rules! impl_rep {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Rep for $t {
            const ZERO: Self = 0;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }

            #[inline]
            fn as_u128(self) -> u128 {
                self as u128
            }
        }
    )*};
}

impl_rep!(u32, u64, u128);
