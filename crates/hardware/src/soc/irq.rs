//! Fabric-to-PS interrupt fan-in.
//!
//! This module carries the 16 fabric interrupt lines into the execution
//! engine. It provides:
//! 1. **Fan-In:** Bit `i` of the input vector maps to destination line `i`;
//!    lines are level-sensitive and independent.
//! 2. **Atomic Updates:** Every application forwards all 16 levels as one
//!    unit, so the engine never observes a half-applied vector.

use crate::sim::engine::ExecutionEngine;

/// Number of fabric interrupt lines.
pub const IRQ_LINES: usize = 16;

/// Latched fabric interrupt levels.
#[derive(Clone, Copy, Debug, Default)]
pub struct IrqFanIn {
    lines: [bool; IRQ_LINES],
}

impl IrqFanIn {
    /// Builds the fan-in with every line low.
    pub const fn new() -> Self {
        Self {
            lines: [false; IRQ_LINES],
        }
    }

    /// Current level of one line.
    #[inline]
    pub const fn level(&self, line: usize) -> bool {
        self.lines[line]
    }

    /// Applies an input vector, forwarding every line to the engine.
    ///
    /// All 16 levels are delivered on every call, changed or not, so the
    /// operation is idempotent and the destination always holds a complete
    /// snapshot of the vector.
    pub fn apply(&mut self, vector: u16, engine: &mut dyn ExecutionEngine) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            *line = vector & (1 << i) != 0;
            engine.set_irq(i, *line);
        }
    }
}
