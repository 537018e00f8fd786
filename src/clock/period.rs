//! Rational tick periods.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Length of one clock tick as a fraction of a second.
///
/// The cycle counter clock uses [`Period::ONE`] as a nominal, uncalibrated
/// unit: its ticks are opaque and cannot be turned into seconds without a
/// frequency measurement, which this crate does not do.
///
/// Equality is by value, not by representation: `2/4` equals `1/2`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    /// Numerator, in seconds.
    pub num: u64,
    /// Denominator. Never zero.
    pub den: u64,
}

impl Period {
    /// One tick per second unit.
    pub const ONE: Period = Period::new(1, 1);
    /// Milliseconds.
    pub const MILLI: Period = Period::new(1, 1_000);
    /// Microseconds.
    pub const MICRO: Period = Period::new(1, 1_000_000);
    /// Nanoseconds.
    pub const NANO: Period = Period::new(1, 1_000_000_000);

    /// Build a period of `num / den` seconds, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero. In a `const` context this is a compile error.
    pub const fn new(num: u64, den: u64) -> Self {
        assert!(den != 0, "period denominator must be non-zero");
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// `num / den` in lowest terms.
    pub const fn reduced(self) -> Self {
        Self::new(self.num, self.den)
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl PartialEq for Period {
    fn eq(&self, other: &Self) -> bool {
        self.num as u128 * other.den as u128 == other.num as u128 * self.den as u128
    }
}

impl Eq for Period {}

impl Hash for Period {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduced();
        reduced.num.hash(state);
        reduced.den.hash(state);
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}s", self.num, self.den)
    }
}

/// Wire shape of [`Period`], checked before use.
#[derive(Deserialize)]
struct RawPeriod {
    num: u64,
    den: u64,
}

impl TryFrom<RawPeriod> for Period {
    type Error = &'static str;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        if raw.den == 0 {
            return Err("period denominator must be non-zero");
        }
        Ok(Period::new(raw.num, raw.den))
    }
}
