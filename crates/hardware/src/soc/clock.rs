//! Fabric clock domains.
//!
//! This module models the four programmable fabric clocks (FCLK0..FCLK3). It
//! provides:
//! 1. **Domain State:** Per-domain period, level, and edge counter.
//! 2. **Edge Times:** Drift-free edge scheduling; edge `k` fires at
//!    `floor(k * period / 2)` so odd periods stay exact over any run length.
//! 3. **Disabled Domains:** A non-positive configured period pins the output
//!    low for the whole run.
//!
//! Domains hold no timers of their own; the owning model schedules their
//! toggle events through the central event queue.

use crate::common::SimTime;

/// One fabric clock domain.
///
/// All domains start low at t=0; the first rising edge of an enabled domain
/// lands at half the period.
#[derive(Clone, Copy, Debug)]
pub struct ClockDomain {
    /// Full period in nanoseconds; zero marks a disabled domain.
    period: u64,
    /// Current output level.
    level: bool,
    /// Number of edges produced so far.
    edges: u64,
}

impl ClockDomain {
    /// Builds a domain from its configured period.
    ///
    /// Non-positive periods produce a disabled domain whose output never
    /// leaves low.
    pub const fn from_period_ns(period_ns: i64) -> Self {
        let period = if period_ns > 0 { period_ns as u64 } else { 0 };
        Self {
            period,
            level: false,
            edges: 0,
        }
    }

    /// Whether this domain generates edges at all.
    #[inline]
    pub const fn enabled(&self) -> bool {
        self.period > 0
    }

    /// Current output level.
    #[inline]
    pub const fn level(&self) -> bool {
        self.level
    }

    /// Full period in nanoseconds (zero when disabled).
    #[inline]
    pub const fn period_ns(&self) -> u64 {
        self.period
    }

    /// Time of the next edge, or `None` for a disabled domain.
    ///
    /// Edge `k` (1-based) fires at `floor(k * period / 2)`: accumulating the
    /// product instead of a rounded half-period keeps odd periods from
    /// drifting.
    pub const fn next_edge(&self) -> Option<SimTime> {
        if self.period == 0 {
            return None;
        }
        Some(SimTime::from_ns((self.edges + 1) * self.period / 2))
    }

    /// Applies one edge: flips the level and advances the edge counter.
    ///
    /// Returns the new level. Must not be called on a disabled domain; the
    /// scheduler never produces toggle events for one.
    pub fn toggle(&mut self) -> bool {
        debug_assert!(self.period > 0, "toggle on a disabled clock domain");
        self.edges += 1;
        self.level = !self.level;
        self.level
    }
}
