//! Common types shared across the co-simulation model.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Simulated Time:** A strong nanosecond type for scheduling and quantum accounting.
//! 2. **Error Handling:** The fatal elaboration error type.

/// Simulated-time type.
pub mod time;

/// Fatal elaboration errors.
pub mod error;

pub use error::SetupError;
pub use time::SimTime;

/// Returns a mask covering the low `width` bits of a 64-bit field.
///
/// Widths of 64 or more cover the whole word. Pin-level payload fields are
/// u64-backed and masked to their configured width on every drive and sample,
/// so a narrow interface can never leak high bits.
#[inline]
pub const fn bit_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}
