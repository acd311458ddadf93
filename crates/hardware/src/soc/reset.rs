//! Power-on reset sequencing.
//!
//! This module drives the one-shot reset applied at the start of every run.
//! It provides:
//! 1. **Sequencing:** Reset asserted from t=0, released once at a fixed
//!    simulated time, never re-asserted.
//! 2. **Derived Output:** The active-low complement, updated in the same step
//!    as the primary line so no observer ever sees the pair disagree.

use crate::common::SimTime;

/// Simulated time at which the power-on reset deasserts.
pub const RESET_RELEASE: SimTime = SimTime::from_ns(1_000_000);

/// One-shot power-on reset state.
#[derive(Clone, Copy, Debug)]
pub struct ResetSequencer {
    asserted: bool,
    released: bool,
}

impl ResetSequencer {
    /// Starts the sequence with reset asserted.
    pub const fn new() -> Self {
        Self {
            asserted: true,
            released: false,
        }
    }

    /// Active-high reset level.
    #[inline]
    pub const fn rst(&self) -> bool {
        self.asserted
    }

    /// Active-low complement; always `!rst()`.
    #[inline]
    pub const fn rst_n(&self) -> bool {
        !self.asserted
    }

    /// Whether the one-shot release has happened.
    #[inline]
    pub const fn released(&self) -> bool {
        self.released
    }

    /// Releases the reset. Idempotent; the line never re-asserts.
    pub fn release(&mut self) {
        self.asserted = false;
        self.released = true;
    }
}

impl Default for ResetSequencer {
    fn default() -> Self {
        Self::new()
    }
}
