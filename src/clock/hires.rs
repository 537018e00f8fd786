//! Hardware cycle counter clock.
//!
//! Reads the CPU timestamp counter with an ordered read:
//! - x86_64: `rdtscp`, which waits for all prior instructions to complete
//!   and also returns `IA32_TSC_AUX` (the processor id set by the OS)
//! - aarch64: `isb; mrs cntvct_el0`, the virtual counter behind an
//!   instruction barrier
//!
//! Any other target fails to compile. There is no runtime fallback.
//!
//! Ticks are raw counter increments. Their frequency is hardware-specific
//! (core clock on x86_64, a fixed SoC timer on aarch64) and is not measured
//! here, so [`HiResClock::PERIOD`](super::Clock::PERIOD) is the nominal
//! [`Period::ONE`].

use std::sync::atomic::{compiler_fence, Ordering};

use super::{Clock, Period, TimePoint};

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("HiResClock needs a cycle counter instruction: only x86_64 and aarch64 are supported");

/// Clock reading the CPU cycle counter.
///
/// Each read has a fixed cost of tens of cycles because of the ordering it
/// enforces. Account for it when interpreting very short durations.
///
/// Counters are per core. Readings are non-decreasing on one core; values
/// taken on different cores are only comparable if the platform keeps the
/// counters in sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HiResClock;

/// A raw counter read together with the auxiliary value the instruction
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReading {
    /// 64-bit counter value.
    pub ticks: u64,
    /// Processor id from `IA32_TSC_AUX`, on platforms whose read provides one.
    pub aux: Option<u32>,
}

impl HiResClock {
    /// Read the counter and the auxiliary processor id.
    ///
    /// Comparing `aux` of two readings tells whether they were taken on the
    /// same core, and therefore whether their difference is meaningful.
    #[inline]
    pub fn read() -> CounterReading {
        compiler_fence(Ordering::SeqCst);
        let reading = read_counter();
        compiler_fence(Ordering::SeqCst);
        reading
    }
}

impl Clock for HiResClock {
    type Rep = u64;

    const PERIOD: Period = Period::ONE;

    #[cfg(target_arch = "x86_64")]
    const NAME: &'static str = "rdtscp";
    #[cfg(target_arch = "aarch64")]
    const NAME: &'static str = "cntvct_el0";

    #[inline]
    fn now() -> TimePoint<Self> {
        TimePoint::from_ticks(Self::read().ticks)
    }
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn read_counter() -> CounterReading {
    let hi: u32;
    let lo: u32;
    let aux: u32;
    // SAFETY: rdtscp only writes edx:eax and ecx. It is present on every
    // x86_64 CPU this crate targets.
    unsafe {
        std::arch::asm!(
            "rdtscp",
            out("edx") hi,
            out("eax") lo,
            out("ecx") aux,
            options(nostack, nomem, preserves_flags),
        );
    }
    CounterReading {
        ticks: ((hi as u64) << 32) | lo as u64,
        aux: Some(aux),
    }
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn read_counter() -> CounterReading {
    let ticks: u64;
    // SAFETY: cntvct_el0 is readable from EL0 on every supported OS.
    unsafe {
        // isb keeps earlier instructions from retiring after the read
        std::arch::asm!(
            "isb",
            "mrs {}, cntvct_el0",
            out(reg) ticks,
            options(nostack, nomem, preserves_flags),
        );
    }
    CounterReading { ticks, aux: None }
}
