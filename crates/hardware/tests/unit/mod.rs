//! # Unit Components
//!
//! This module serves as the central hub for the model's unit tests. It
//! organizes fine-grained tests for the individual building blocks of the
//! co-simulation model.


/// Unit tests for the fabric clock domains.
pub mod clock;

/// Unit tests for configuration structures, deserialization, and defaults.
pub mod config;

/// Unit tests for the interface slot table and width validation.
pub mod interface;

/// Unit tests for the fabric interrupt fan-in.
pub mod irq;

/// Unit tests for time-quantum accounting, standalone and against a running
/// model.
pub mod quantum;


/// Unit tests for whole-model construction, validation failures, and the
/// run loop.
pub mod system;
