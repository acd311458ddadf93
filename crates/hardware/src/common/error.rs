//! Fatal elaboration errors.
//!
//! This module defines the error type surfaced while the model is being
//! constructed. It provides:
//! 1. **Setup Errors:** Every condition that must abort elaboration before simulated time advances.
//! 2. **Propagation:** Integration with standard Rust error traits via `thiserror`.
//!
//! There is deliberately no runtime-recoverable error class: once elaboration
//! has succeeded the topology is fixed, and any later inconsistency is a
//! programming defect reported through an assertion failure rather than a
//! `Result`.

use thiserror::Error;

/// Errors that abort model construction.
///
/// All variants are fatal; the caller cannot retry or degrade. They surface
/// from [`Zynq7Ps::new`](crate::soc::Zynq7Ps::new) and the configuration
/// validation helpers before the first event is scheduled.
#[derive(Debug, Error)]
pub enum SetupError {
    /// FCLK0 is the mandatory clock domain; its period must be positive.
    #[error("mandatory clock FCLK0 requires a positive period, got {0} ns")]
    MandatoryClockDisabled(i64),

    /// The global synchronization quantum must be a positive duration.
    #[error("synchronization quantum must be positive")]
    ZeroQuantum,

    /// A configured channel width is outside the representable range.
    #[error("interface {slot}: {field} width {value} is invalid ({reason})")]
    InvalidWidth {
        /// Name of the interface slot the width belongs to.
        slot: &'static str,
        /// Name of the width field (e.g. `"data"`).
        field: &'static str,
        /// The rejected value.
        value: u32,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The execution-engine endpoint does not use a supported scheme.
    #[error("malformed engine endpoint `{0}`; expected `unix:<path>`")]
    MalformedEndpoint(String),

    /// The execution-engine endpoint could not be reached at setup.
    ///
    /// There is no disconnected operating mode; the connection must exist
    /// before the first quantum begins.
    #[error("execution engine endpoint `{endpoint}` is unreachable")]
    EndpointUnreachable {
        /// The endpoint that was tried.
        endpoint: String,
        /// The underlying connection failure.
        #[source]
        source: std::io::Error,
    },
}
