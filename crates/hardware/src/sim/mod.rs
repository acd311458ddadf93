//! Simulation machinery.
//!
//! This module holds everything about advancing simulated time. It includes:
//! 1. **Scheduling:** The central event queue.
//! 2. **Quantum Accounting:** The bounded-skew keeper for the engine link.
//! 3. **The Engine Seam:** The [`ExecutionEngine`](engine::ExecutionEngine)
//!    trait and its remote and in-process implementations.

/// Execution-engine link.
pub mod engine;

/// Time-quantum accounting.
pub mod quantum;

/// Discrete-event scheduling.
pub mod scheduler;

pub use engine::{ExecutionEngine, LockstepEngine, RemoteEngine};
pub use quantum::QuantumKeeper;
pub use scheduler::{Event, EventQueue};
