//! Configuration for [`Sampler`](crate::Sampler).

/// Configuration options for `Sampler`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of timed invocations per run (default: 100).
    ///
    /// Zero is allowed: the run returns no samples and never calls the
    /// unit of work.
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { samples: 100 }
    }
}
