//! Time-quantum accounting.
//!
//! This module enforces the bounded skew between this model and the external
//! execution engine. It provides:
//! 1. **The Bound:** Local time may run at most one quantum past the last
//!    timestamp the engine has acknowledged.
//! 2. **Sync Bookkeeping:** After each exchange the run limit extends to the
//!    acknowledged time plus one quantum.

use crate::common::SimTime;

/// Tracks how far local time may advance before the next synchronization.
#[derive(Clone, Copy, Debug)]
pub struct QuantumKeeper {
    quantum: SimTime,
    limit: SimTime,
    sync_count: u64,
}

impl QuantumKeeper {
    /// Builds a keeper for a positive quantum. The first sync is due once
    /// local time passes one quantum.
    pub const fn new(quantum: SimTime) -> Self {
        Self {
            quantum,
            limit: quantum,
            sync_count: 0,
        }
    }

    /// The configured quantum.
    #[inline]
    pub const fn quantum(&self) -> SimTime {
        self.quantum
    }

    /// Local time up to which the model may run without syncing.
    #[inline]
    pub const fn limit(&self) -> SimTime {
        self.limit
    }

    /// Number of synchronization exchanges performed so far.
    #[inline]
    pub const fn sync_count(&self) -> u64 {
        self.sync_count
    }

    /// Whether advancing local time to `t` requires a sync first.
    #[inline]
    pub fn needs_sync(&self, t: SimTime) -> bool {
        t > self.limit
    }

    /// Records one completed exchange: the engine acknowledged `acked`, so
    /// the model may now run to `acked + quantum`.
    ///
    /// The limit never moves backwards even if an acknowledgement arrives
    /// out of order.
    pub fn acknowledged(&mut self, acked: SimTime) {
        self.sync_count += 1;
        let new_limit = acked + self.quantum;
        if new_limit > self.limit {
            self.limit = new_limit;
        }
    }
}
