//! Hardware structure of the processing system.
//!
//! This module contains the modelled hardware itself. It includes:
//! 1. **The Top Level:** [`Zynq7Ps`], owning every block below.
//! 2. **Interfaces:** The eight AXI slot descriptions and their pin-level
//!    adapters.
//! 3. **Support Blocks:** Fabric clocks, the power-on reset sequencer, and
//!    the interrupt fan-in.

/// Pin-level AXI adapters.
pub mod bridge;

/// Fabric clock domains.
pub mod clock;

/// Interface slots and widths.
pub mod interface;

/// Interrupt fan-in.
pub mod irq;

/// Top-level model.
pub mod ps;

/// Power-on reset sequencing.
pub mod reset;

/// Bus transaction records.
pub mod txn;

pub use interface::{InterfaceSpec, InterfaceWidths, Role, Slot};
pub use ps::Zynq7Ps;
