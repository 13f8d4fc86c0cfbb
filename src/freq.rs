//! Clock frequency and cycle-to-duration conversion.
//!
//! `Frequency` is a ticks-per-second rate backed by `NonZeroU32`, so a zero
//! rate is unrepresentable rather than a runtime error. Conversion from an
//! extended cycle count to a `core::time::Duration` is exact to the nanosecond
//! for the full 64-bit cycle range.

use core::num::NonZeroU32;
use core::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A positive clock rate in ticks per second.
///
/// Zero is ruled out at the type level: conversion code divides by the rate
/// and relies on it being positive, so there is no error path to report a
/// bad frequency at use time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(NonZeroU32);

impl Frequency {
    /// A frequency in hertz.
    ///
    /// Panics if `hz` is zero. Intended for constant construction
    /// (`Frequency::hz(64_000_000)`), where the panic becomes a compile error.
    pub const fn hz(hz: u32) -> Self {
        match NonZeroU32::new(hz) {
            Some(rate) => Self(rate),
            None => panic!("frequency must be positive"),
        }
    }

    /// A frequency in kilohertz. Panics on zero or on overflow above
    /// `u32::MAX` Hz.
    pub const fn khz(khz: u32) -> Self {
        match khz.checked_mul(1_000) {
            Some(hz) => Self::hz(hz),
            None => panic!("frequency overflows u32 hertz"),
        }
    }

    /// A frequency in megahertz. Panics on zero or on overflow above
    /// `u32::MAX` Hz.
    pub const fn mhz(mhz: u32) -> Self {
        match mhz.checked_mul(1_000_000) {
            Some(hz) => Self::hz(hz),
            None => panic!("frequency overflows u32 hertz"),
        }
    }

    /// A frequency from an already checked non-zero rate.
    pub const fn from_raw(hz: NonZeroU32) -> Self {
        Self(hz)
    }

    /// The rate in hertz.
    pub const fn raw(self) -> u32 {
        self.0.get()
    }

    /// Elapsed time represented by `cycles` ticks at this rate.
    ///
    /// Whole seconds are split off before the sub-second remainder is scaled
    /// to nanoseconds in 128-bit arithmetic, so no cycle count up to
    /// `u64::MAX` can overflow or lose whole-tick precision. Fractions of a
    /// nanosecond are truncated.
    pub const fn duration_from_cycles(self, cycles: u64) -> Duration {
        let hz = self.0.get() as u64;

        let secs = cycles / hz;
        let rem = cycles % hz;
        let nanos = (rem as u128 * NANOS_PER_SEC / hz as u128) as u32;

        Duration::new(secs, nanos)
    }
}

#[cfg(feature = "fugit")]
impl From<fugit::HertzU32> for Frequency {
    /// Panics if the fugit rate is zero, matching [`Frequency::hz`].
    fn from(rate: fugit::HertzU32) -> Self {
        Self::hz(rate.to_Hz())
    }
}
