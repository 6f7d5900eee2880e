//! Error taxonomy for the supplier directory.
//!
//! Read-side parse failures of the durable list are deliberately NOT part of
//! this taxonomy: a missing or corrupt list file is recovered as an empty
//! list by the store, never surfaced to callers.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A required submission field was absent or blank. Maps to a
    /// client-error response at the HTTP boundary.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// Asset write or list read/write failure. Maps to a server-error
    /// response; no partial-state rollback is attempted.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// List serialization failed on write.
    #[error("failed to serialize supplier list: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Advisory lock on the list file could not be taken.
    #[error("store lock failed: {reason}")]
    Lock { reason: String },
}

impl DirectoryError {
    /// Whether this error is the caller's fault (HTTP 400) rather than the
    /// server's (HTTP 500).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
