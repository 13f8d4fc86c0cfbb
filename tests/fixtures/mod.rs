//! Shared test fixtures: a software-simulated cycle counter.

#![allow(dead_code)]

use upcycle::CycleSource;

/// Software stand-in for a free-running 32-bit hardware counter.
///
/// Ticks only when explicitly advanced, so tests control elapsed time
/// deterministically. Wraps at 32 bits like the real register.
pub struct SimCounter {
    value: u32,
    enabled: bool,
}

impl SimCounter {
    /// A stopped counter at zero, as hardware comes out of reset.
    pub fn new() -> Self {
        Self {
            value: 0,
            enabled: false,
        }
    }

    /// A counter holding an arbitrary stale value, e.g. from before the
    /// driver claimed it.
    pub fn with_value(value: u32, enabled: bool) -> Self {
        Self { value, enabled }
    }

    /// Simulate `ticks` clock edges. Ignored while the counter is stopped,
    /// matching a gated hardware clock.
    pub fn advance(&mut self, ticks: u32) {
        if self.enabled {
            self.value = self.value.wrapping_add(ticks);
        }
    }

    /// Jump the register to an exact raw value (enabled or not), for placing
    /// the counter just below a wrap boundary.
    pub fn set_raw(&mut self, value: u32) {
        self.value = value;
    }
}

impl Default for SimCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleSource for SimCounter {
    fn read(&self) -> u32 {
        self.value
    }

    fn reset(&mut self) {
        self.value = 0;
    }

    fn start(&mut self) {
        self.enabled = true;
    }

    fn stop(&mut self) {
        self.enabled = false;
    }

    fn is_counting(&self) -> bool {
        self.enabled
    }
}
