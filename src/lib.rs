//! # stopwatch
//!
//! Microbenchmark timing primitives.
//!
//! This crate provides:
//! - A [`Clock`] contract with typed [`Duration`]s and [`TimePoint`]s
//! - [`HiResClock`], reading the CPU cycle counter (`rdtscp` on x86_64,
//!   `cntvct_el0` on aarch64)
//! - [`Timer`], an immutable deadline on any clock
//! - [`time`] and [`sample`], timing one or many invocations of a closure
//!
//! ## Units
//!
//! `HiResClock` durations are raw counter ticks. The counter frequency is
//! not calibrated, so compare ticks with ticks; do not read them as
//! nanoseconds. [`SteadyClock`] ticks are nanoseconds.
//!
//! ## Quick Start
//!
//! ```
//! use stopwatch::{sample_hires, Sampler};
//!
//! // Compile-time sample count, cycle counter clock.
//! let samples = sample_hires::<101, _, _>(|| std::hint::black_box(3u64).pow(7));
//! let median = samples[50];
//! println!("median: {median}");
//!
//! // Runtime sample count.
//! let samples = Sampler::new().samples(1_000).run(|| std::hint::black_box(1 + 1));
//! assert_eq!(samples.len(), 1_000);
//! ```
//!
//! Warmup, outlier handling and statistics beyond sorting are left to the
//! caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod timer;

// Functional modules
pub mod clock;
pub mod measurement;
pub mod output;

// Re-exports for public API
pub use clock::{Clock, CounterReading, Duration, HiResClock, Period, Rep, SteadyClock, TimePoint};
pub use config::Config;
pub use measurement::{sample, sample_hires, time, try_sample, try_time, Sampler};
pub use output::SampleReport;
pub use timer::{make_timer, Timer};
