//! Measurement of units of work.
//!
//! - [`time`] / [`try_time`] - one invocation, one duration
//! - [`sample`] / [`try_sample`] / [`Sampler`] - many invocations, sorted
//!
//! All of them are generic over the [`Clock`](crate::Clock) they read.
//! The sampler defaults to [`HiResClock`](crate::HiResClock), whose ticks
//! are raw counter increments rather than nanoseconds.
//!
//! Nothing here runs warmup iterations, pins threads or discards outliers.
//! That is left to the harness calling in.

mod sampler;
mod stopwatch;

pub use sampler::{sample, sample_hires, try_sample, Sampler};
pub use stopwatch::{time, try_time};
