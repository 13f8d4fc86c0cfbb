//! Generic counter contract consumed by timing and scheduling code.
//!
//! Schedulers, timeouts, and profiling helpers depend on this trait rather
//! than on a concrete driver, so any counting peripheral that can report a
//! monotonic uptime can stand in for any other.

use core::time::Duration;

/// Control operations accepted by a [`Counter`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    /// Enable counting; no-op if already running.
    Start,

    /// Disable counting, freezing the current value; no-op if already stopped.
    Stop,

    /// Zero the elapsed count. Does not change the running/stopped state.
    Reset,
}

/// A controllable monotonic uptime counter.
///
/// All operations are infallible, non-blocking, and complete in bounded time.
/// No persisted state outlives the counter instance.
pub trait Counter {
    /// Whether the counter is currently accumulating ticks.
    fn is_running(&self) -> bool;

    /// Apply a control operation.
    fn control(&mut self, op: Control);

    /// Elapsed time since construction or the last [`Control::Reset`].
    ///
    /// Non-decreasing between resets while polled at least once per wrap
    /// period of the underlying hardware.
    fn uptime(&mut self) -> Duration;
}
