//! Counter driver orchestration.
//!
//! `CycleCounter` ties a hardware [`CycleSource`] to the overflow extension
//! and frequency conversion, implementing the generic [`Counter`] contract.

use crate::counter::{Control, Counter};
use crate::freq::Frequency;
use crate::overflow::OverflowCounter;
use crate::source::CycleSource;

/// Uptime counter over a free-running 32-bit hardware cycle source.
///
/// Construction resets the hardware and starts it counting, so a freshly
/// built driver is already running with zero elapsed time.
///
/// The driver owns its source, overflow state, and frequency exclusively and
/// takes `&mut self` for every state-changing operation. Sharing one instance
/// between a main loop and an interrupt handler requires external mutual
/// exclusion; in particular, `control(Reset)` zeroes the hardware register and
/// the software wrap count as two separate writes, and a concurrent `uptime()`
/// interleaved between them can observe one transiently wrong value.
///
/// `uptime()` must be called at least once per wrap period of the source
/// (2^32 ticks; about 26 s at 168 MHz) or elapsed wraps go uncounted.
pub struct CycleCounter<S: CycleSource> {
    /// The hardware register being sampled.
    source: S,

    /// Rate the source ticks at; replaceable via `register_frequency`.
    frequency: Frequency,

    /// Wrap tracking for the 32-bit raw readings.
    extender: OverflowCounter<32>,
}

impl<S: CycleSource> CycleCounter<S> {
    /// Build a driver over `source` ticking at `frequency`.
    ///
    /// Performs an implicit reset followed by an implicit start: the counter
    /// leaves the constructor running from zero.
    pub fn new(source: S, frequency: Frequency) -> Self {
        let mut counter = Self {
            source,
            frequency,
            extender: OverflowCounter::new(),
        };

        counter.control(Control::Reset);
        counter.control(Control::Start);

        counter
    }

    /// Replace the frequency used to convert cycles to elapsed time.
    ///
    /// Use this when the clock driving the source has been reconfigured and
    /// no longer matches the rate supplied at construction. Takes effect on
    /// the next `uptime()` call. Already-elapsed cycles are not rescaled, so
    /// the reported uptime jumps discontinuously in proportion to the rate
    /// change; callers that feed this uptime to other subsystems must account
    /// for that.
    pub fn register_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    /// The currently registered conversion frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Borrow the underlying source, e.g. to drive a simulated counter in
    /// tests.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Release the underlying hardware source.
    pub fn free(self) -> S {
        self.source
    }
}

impl<S: CycleSource> Counter for CycleCounter<S> {
    fn is_running(&self) -> bool {
        self.source.is_counting()
    }

    fn control(&mut self, op: Control) {
        match op {
            Control::Start => self.source.start(),
            Control::Stop => self.source.stop(),
            Control::Reset => {
                self.source.reset();
                self.extender.reset();
            }
        }
    }

    fn uptime(&mut self) -> core::time::Duration {
        let cycles = self.extender.update(self.source.read());
        self.frequency.duration_from_cycles(cycles)
    }
}

impl<S: CycleSource> core::fmt::Debug for CycleCounter<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CycleCounter")
            .field("frequency", &self.frequency)
            .field("extender", &self.extender)
            .field("running", &self.source.is_counting())
            .finish_non_exhaustive()
    }
}
