//! Error types for the store boundary.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors originating at the external store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The external store could not be reached or rejected the request.
    ///
    /// Forwarded verbatim to callers; this layer does not retry.
    #[error("transport error: {0}")]
    Transport(String),

    /// A path segment violated the addressing rules.
    #[error("invalid path segment: {reason}")]
    InvalidSegment {
        /// Why the segment was rejected.
        reason: String,
    },
}

impl StoreError {
    /// Creates a transport error from any displayable cause.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}
