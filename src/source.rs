//! Cycle source abstraction for platform-agnostic counter hardware.
//!
//! The `CycleSource` trait models a single free-running hardware register that
//! wraps at a fixed bit width (32 bits on the hardware side of this design).
//! Implementations exist for real peripherals (e.g. the Cortex-M DWT behind the
//! `cortex-m` feature) and for software-simulated counters in tests.

/// Platform-agnostic free-running cycle counter register.
///
/// Every operation is infallible and non-blocking: sampling or controlling a
/// memory-mapped counter register has no failure path, so no error channel is
/// exposed. Implementations where a control operation could fail do not fit
/// this contract.
///
/// The register must count upward and wrap from its maximum back to zero while
/// enabled, and freeze at its current value while disabled.
pub trait CycleSource {
    /// Sample the current raw counter value.
    ///
    /// May be called at any time, whether counting is enabled or not.
    fn read(&self) -> u32;

    /// Zero the hardware register.
    ///
    /// Does not change whether the counter is running.
    fn reset(&mut self);

    /// Enable counting. Idempotent: enabling a running counter is a no-op.
    fn start(&mut self);

    /// Disable counting, freezing the register at its current value.
    /// Idempotent: disabling a stopped counter is a no-op.
    fn stop(&mut self);

    /// Whether the hardware is currently counting.
    fn is_counting(&self) -> bool;
}
