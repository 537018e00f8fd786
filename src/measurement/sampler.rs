//! Repeated timing with sorted results.
//!
//! A run measures every invocation back to back into a preallocated buffer
//! and sorts only once the last measurement is taken, so sorting cost never
//! lands between two samples. Results come back ascending, ready for the
//! caller to pick a median or percentile.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::clock::{Clock, Duration, HiResClock};
use crate::config::Config;

use super::stopwatch::{time, try_time};

/// Time `f` `N` times on clock `C` and return the durations sorted ascending.
///
/// `N == 0` returns an empty array without calling `f`. A panic in `f`
/// aborts the run and no samples are returned.
///
/// ```
/// use stopwatch::{sample, HiResClock};
///
/// let samples = sample::<16, HiResClock, _, _>(|| std::hint::black_box(2u64).pow(10));
/// assert!(samples.windows(2).all(|w| w[0] <= w[1]));
/// let median = samples[samples.len() / 2];
/// # let _ = median;
/// ```
pub fn sample<const N: usize, C, F, T>(mut f: F) -> [Duration<C>; N]
where
    C: Clock,
    F: FnMut() -> T,
{
    let mut samples = [Duration::ZERO; N];
    infallible(fill(&mut samples, || Ok(time::<C, _, _>(&mut f))));
    samples
}

/// [`sample`] on the default [`HiResClock`].
pub fn sample_hires<const N: usize, F, T>(f: F) -> [Duration<HiResClock>; N]
where
    F: FnMut() -> T,
{
    sample::<N, HiResClock, F, T>(f)
}

/// Time a fallible `f` `N` times on clock `C`.
///
/// The first `Err` ends the run: it is returned unchanged, `f` is not
/// called again, and the samples gathered so far are discarded.
pub fn try_sample<const N: usize, C, F, T, E>(mut f: F) -> Result<[Duration<C>; N], E>
where
    C: Clock,
    F: FnMut() -> Result<T, E>,
{
    let mut samples = [Duration::ZERO; N];
    fill(&mut samples, || try_time::<C, _, _, _>(&mut f))?;
    Ok(samples)
}

/// Builder for sampling runs whose count is chosen at runtime.
///
/// ```
/// use stopwatch::Sampler;
///
/// let samples = Sampler::new().samples(32).run(|| std::hint::black_box(1 + 1));
/// assert_eq!(samples.len(), 32);
/// ```
pub struct Sampler<C: Clock = HiResClock> {
    config: Config,
    _clock: PhantomData<fn() -> C>,
}

impl Sampler<HiResClock> {
    /// Sampler on the cycle counter with default configuration.
    pub fn new() -> Self {
        Self::with_clock()
    }
}

impl Default for Sampler<HiResClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Sampler<C> {
    /// Sampler on clock `C` with default configuration.
    pub fn with_clock() -> Self {
        Self::from_config(Config::default())
    }

    /// Sampler on clock `C` with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            _clock: PhantomData,
        }
    }

    /// Set the number of samples per run.
    pub fn samples(mut self, n: usize) -> Self {
        self.config.samples = n;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Time `f` once per configured sample and return the durations sorted
    /// ascending.
    pub fn run<F, T>(&self, mut f: F) -> Vec<Duration<C>>
    where
        F: FnMut() -> T,
    {
        let mut samples = vec![Duration::ZERO; self.config.samples];
        infallible(fill(&mut samples, || Ok(time::<C, _, _>(&mut f))));
        samples
    }

    /// Fallible counterpart of [`run`](Self::run); stops at the first `Err`.
    pub fn try_run<F, T, E>(&self, mut f: F) -> Result<Vec<Duration<C>>, E>
    where
        F: FnMut() -> Result<T, E>,
    {
        let mut samples = vec![Duration::ZERO; self.config.samples];
        fill(&mut samples, || try_time::<C, _, _, _>(&mut f))?;
        Ok(samples)
    }
}

impl<C: Clock> Clone for Sampler<C> {
    fn clone(&self) -> Self {
        Self::from_config(self.config.clone())
    }
}

impl<C: Clock> std::fmt::Debug for Sampler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler")
            .field("clock", &C::NAME)
            .field("config", &self.config)
            .finish()
    }
}

/// Measure into every slot, then sort. Nothing but `measure` runs between
/// two measurements.
fn fill<C, M, E>(slots: &mut [Duration<C>], mut measure: M) -> Result<(), E>
where
    C: Clock,
    M: FnMut() -> Result<Duration<C>, E>,
{
    tracing::debug!(clock = C::NAME, samples = slots.len(), "sampling started");

    for slot in slots.iter_mut() {
        *slot = measure()?;
    }
    slots.sort_unstable();

    tracing::debug!(
        clock = C::NAME,
        samples = slots.len(),
        min = ?slots.first(),
        max = ?slots.last(),
        "sampling finished"
    );
    Ok(())
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_sample_len_and_order() {
        let samples = sample_hires::<64, _, _>(|| std::hint::black_box(7u64).count_ones());
        assert_eq!(samples.len(), 64);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_samples_never_call() {
        let calls = Cell::new(0usize);
        let samples = sample_hires::<0, _, _>(|| calls.set(calls.get() + 1));
        assert!(samples.is_empty());
        assert_eq!(calls.get(), 0);

        let samples = Sampler::new().samples(0).run(|| calls.set(calls.get() + 1));
        assert!(samples.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_try_sample_stops_at_first_error() {
        let calls = Cell::new(0usize);
        let result = try_sample::<10, HiResClock, _, _, _>(|| {
            calls.set(calls.get() + 1);
            if calls.get() == 4 {
                Err(calls.get())
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(4));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_builder_config() {
        let sampler = Sampler::new().samples(250);
        assert_eq!(sampler.config().samples, 250);
        assert_eq!(Sampler::default().config(), &Config::default());
        assert_eq!(sampler.run(|| ()).len(), 250);
    }

    #[test]
    fn test_fill_sorts_after_measuring() {
        let mut next = [5u64, 1, 4, 1, 3].into_iter();
        let mut slots = [Duration::<HiResClock>::ZERO; 5];
        infallible(fill(&mut slots, || {
            Ok(Duration::from_ticks(next.next().unwrap_or_default()))
        }));
        let ticks: Vec<u64> = slots.iter().map(|d| d.ticks()).collect();
        assert_eq!(ticks, vec![1, 1, 3, 4, 5]);
    }
}
