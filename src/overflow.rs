//! Overflow extension for wrapping hardware counters.
//!
//! `OverflowCounter` turns the stream of raw readings from a fixed-width,
//! periodically wrapping counter into a single monotonically non-decreasing
//! 64-bit count by tracking how many times the hardware has wrapped.

/// Widens a wrapping `WIDTH`-bit counter into a monotonic 64-bit count.
///
/// A wrap is inferred whenever a reading is smaller than the previous one, so
/// the extended count is correct only if [`update`](Self::update) is called at
/// least once per wrap period of the hardware counter. Two wraps between calls
/// are indistinguishable from one and silently lose a period; bounding the
/// polling interval is the caller's responsibility.
///
/// Invariant: the value returned from `update` equals
/// `overflows * 2^WIDTH + raw`, and never decreases between resets.
///
/// `WIDTH` must be in `1..=32`. The extended count cannot itself wrap: even at
/// `WIDTH = 32` it would take 2^32 hardware wraps, far beyond any device's
/// operational lifetime at realistic clock rates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverflowCounter<const WIDTH: u32 = 32> {
    /// Last raw reading seen by `update`.
    last: u32,

    /// Number of wraps inferred since construction or the last `reset`.
    overflows: u32,
}

impl<const WIDTH: u32> OverflowCounter<WIDTH> {
    /// One full period of the raw counter: `2^WIDTH`.
    const PERIOD: u64 = 1 << WIDTH;

    /// Create a counter with zero wraps and a zero last reading.
    pub const fn new() -> Self {
        assert!(WIDTH >= 1 && WIDTH <= 32, "counter width out of range");

        Self {
            last: 0,
            overflows: 0,
        }
    }

    /// Feed the next raw reading and return the extended count.
    ///
    /// A reading smaller than the previous one is interpreted as exactly one
    /// wraparound. A reading equal to the previous one means no elapsed ticks
    /// (or a stopped counter) and infers no wrap.
    ///
    /// The reading must fit in `WIDTH` bits; a wider value indicates the
    /// extender was constructed with the wrong width for its hardware.
    pub fn update(&mut self, raw: u32) -> u64 {
        debug_assert!(
            WIDTH == 32 || u64::from(raw) < Self::PERIOD,
            "raw reading exceeds counter width"
        );

        if raw < self.last {
            self.overflows += 1;
        }
        self.last = raw;

        self.count()
    }

    /// Extended count as of the last `update`, without a new reading.
    pub fn count(&self) -> u64 {
        u64::from(self.overflows) * Self::PERIOD + u64::from(self.last)
    }

    /// Forget all wraps and the last reading.
    ///
    /// The hardware register must be zeroed at the same logical moment,
    /// otherwise the first reading afterwards is interpreted against stale
    /// state. The two zeroings are not atomic with respect to a concurrent
    /// reader on another execution context; such a reader may compute one
    /// transiently wrong count.
    pub fn reset(&mut self) {
        self.last = 0;
        self.overflows = 0;
    }
}
