//! Serializable summaries of sampling runs.

pub mod json;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, Duration, Period, Rep};

/// A sorted sample set together with the clock it was taken on.
///
/// Samples are stored as raw ticks. Turning them into seconds needs
/// `period`, and for the cycle counter clock also an externally measured
/// counter frequency.
///
/// Deserializing rejects a sample list that is not in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleReport")]
pub struct SampleReport {
    /// Clock name, e.g. `rdtscp`.
    pub clock: String,
    /// Tick period of that clock.
    pub period: Period,
    /// Samples in ticks, ascending.
    pub samples: Vec<u128>,
}

/// Wire shape of [`SampleReport`], checked before use.
#[derive(Deserialize)]
struct RawSampleReport {
    clock: String,
    period: Period,
    samples: Vec<u128>,
}

impl TryFrom<RawSampleReport> for SampleReport {
    type Error = &'static str;

    fn try_from(raw: RawSampleReport) -> Result<Self, Self::Error> {
        if !raw.samples.windows(2).all(|w| w[0] <= w[1]) {
            return Err("report samples must be in ascending order");
        }
        Ok(Self {
            clock: raw.clock,
            period: raw.period,
            samples: raw.samples,
        })
    }
}

impl SampleReport {
    /// Build a report from samples taken on clock `C`.
    ///
    /// The samples are sorted again here, so any slice is accepted.
    pub fn new<C: Clock>(samples: &[Duration<C>]) -> Self {
        let mut ticks: Vec<u128> = samples.iter().map(|d| d.ticks().as_u128()).collect();
        ticks.sort_unstable();
        Self {
            clock: C::NAME.to_string(),
            period: C::PERIOD,
            samples: ticks,
        }
    }

    /// Number of samples.
    pub fn count(&self) -> usize {
        self.samples.len()
    }
}
