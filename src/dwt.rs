//! Cycle source backed by the Cortex-M Data Watchpoint and Trace unit.
//!
//! The DWT's CYCCNT register free-runs at the CPU clock and wraps at 32 bits,
//! which is exactly the shape [`CycleSource`](crate::CycleSource) expects.
//! Available on Cortex-M3 and above; Cortex-M0/M0+ have no cycle counter.

use cortex_m::peripheral::{DCB, DWT};

use crate::driver::CycleCounter;
use crate::freq::Frequency;
use crate::source::CycleSource;

/// CYCCNTENA bit of the DWT control register.
const ENABLE_CYCLE_COUNT: u32 = 1 << 0;

/// The DWT cycle counter as a [`CycleSource`].
///
/// Taking ownership of the `DWT` peripheral singleton makes this the only
/// place that touches CYCCNT, so the usual single-owner driver rules apply
/// without extra locking.
pub struct DwtSource {
    dwt: DWT,
}

impl core::fmt::Debug for DwtSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DwtSource")
            .field("counting", &self.is_counting())
            .finish_non_exhaustive()
    }
}

impl DwtSource {
    /// Claim the DWT as a cycle source.
    ///
    /// Sets TRCENA in the Debug Exception and Monitor Control Register (the
    /// trace blocks are clock-gated until it is set) and unlocks the DWT on
    /// cores that power up with software access locked. The counter is left
    /// in whatever run state it was in; wrap it in a
    /// [`CycleCounter`] to reset and start it.
    pub fn new(dcb: &mut DCB, dwt: DWT) -> Self {
        dcb.enable_trace();
        DWT::unlock();

        Self { dwt }
    }

    /// Shorthand for wrapping this source in a running uptime counter.
    ///
    /// `cpu_frequency` is the core clock rate; re-register it on the returned
    /// counter if the clock tree is reconfigured later.
    pub fn into_counter(self, cpu_frequency: Frequency) -> CycleCounter<Self> {
        CycleCounter::new(self, cpu_frequency)
    }

    /// Release the DWT peripheral.
    pub fn free(self) -> DWT {
        self.dwt
    }
}

impl CycleSource for DwtSource {
    fn read(&self) -> u32 {
        self.dwt.cyccnt.read()
    }

    fn reset(&mut self) {
        unsafe { self.dwt.cyccnt.write(0) }
    }

    fn start(&mut self) {
        unsafe { self.dwt.ctrl.modify(|ctrl| ctrl | ENABLE_CYCLE_COUNT) }
    }

    fn stop(&mut self) {
        unsafe { self.dwt.ctrl.modify(|ctrl| ctrl & !ENABLE_CYCLE_COUNT) }
    }

    fn is_counting(&self) -> bool {
        self.dwt.ctrl.read() & ENABLE_CYCLE_COUNT != 0
    }
}
