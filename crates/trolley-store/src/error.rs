//! Store error types.

use thiserror::Error;

/// Errors that can occur when talking to the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize or deserialize a document.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store reported a failure.
    ///
    /// The reason is carried through verbatim so callers can surface
    /// it to the user unchanged.
    #[error("{0}")]
    Backend(String),
}
