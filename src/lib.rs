//! # upcycle
//!
//! Monotonic uptime for embedded systems from a wrapping hardware cycle counter.
//!
//! **Key features:**
//! - **Overflow extension** - Widens a wrapping N-bit counter into a monotonic 64-bit count
//! - **Zero allocation** - Plain value types, no heap, no `Result` noise on infallible paths
//! - **Runtime frequency updates** - Re-register the clock rate after PLL reconfiguration
//! - **Flexible hardware seam** - Platform-agnostic `CycleSource` trait, testable off-target
//! - **Optional platforms** - DWT-backed source for Cortex-M behind the `cortex-m` feature
//!
//! The central loop is: sample the raw register, extend it past wraparound with
//! [`OverflowCounter`], scale by the registered [`Frequency`] into a
//! `core::time::Duration`. The wrap inference assumes the counter is polled at
//! least once per wrap period; see [`OverflowCounter::update`].
//!
//! ## Optional Features
//!
//! - `cortex-m` - `DwtSource`, a cycle source over the Cortex-M DWT CYCCNT register
//! - `fugit` - `From<fugit::HertzU32>` conversion for `Frequency`
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

// Hardware seam
pub mod source;

// Overflow extension
pub mod overflow;

// Frequency and cycle-to-duration conversion
pub mod freq;

// Generic counter contract
pub mod counter;

// Driver orchestration
pub mod driver;

// Platform sources (feature-gated)
#[cfg(feature = "cortex-m")]
pub mod dwt;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Hardware seam
pub use source::CycleSource;

// Overflow extension
pub use overflow::OverflowCounter;

// Frequency
pub use freq::Frequency;

// Counter contract
pub use counter::{Control, Counter};

// Driver
pub use driver::CycleCounter;

// Optional feature re-exports
#[cfg(feature = "cortex-m")]
pub use dwt::DwtSource;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
