//! Gateway error types.

use thiserror::Error;

/// Errors surfaced by an external gateway operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The collaborator could not be reached.
    #[error("gateway unavailable: {reason}")]
    Unavailable {
        /// Transport-level description of the failure.
        reason: String,
    },

    /// The collaborator answered but refused the operation.
    #[error("gateway rejected the request with status {status}")]
    Rejected {
        /// Protocol status reported by the collaborator.
        status: u16,
    },
}
