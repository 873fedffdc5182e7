//! Error types for accessor operations.

use thiserror::Error;
use treebase_store::{StoreError, TreePath};

/// Result type for accessor operations.
pub type AccessorResult<T> = Result<T, AccessorError>;

/// Errors that can occur in accessor operations.
#[derive(Debug, Error)]
pub enum AccessorError {
    /// A value could not be serialized to a field mapping.
    ///
    /// Raised before any I/O is attempted; applies to create and both
    /// update operations.
    #[error("encode error: {message}")]
    Encode {
        /// Description of the serialization failure.
        message: String,
    },

    /// A fetched snapshot could not be deserialized as the requested
    /// type.
    #[error("decode error: {message}")]
    Decode {
        /// Description of the deserialization failure.
        message: String,
    },

    /// No value exists at the requested location.
    #[error("no value found at {path}")]
    NotFound {
        /// The location that was read.
        path: TreePath,
    },

    /// An entity reported an empty path.
    ///
    /// Entity-level operations require at least one path segment.
    #[error("entity reported an empty path")]
    EmptyPath,

    /// Error forwarded verbatim from the external store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
