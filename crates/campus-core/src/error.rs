// Rust guideline compliant 2026-02-06

//! Error types for the Campus core library.

use crate::models::Status;
use thiserror::Error;

/// Result type alias for Campus operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Campus operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed entity data.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Identity or task id collision.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// Caller lacks the capability for the attempted operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Illegal status change.
    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// Status the task currently holds.
        from: Status,
        /// Status the caller attempted to reach.
        to: Status,
    },

    /// Cycle detected in the task tree.
    #[error("Cycle detected: {0:?}")]
    CycleDetected(Vec<String>),

    /// Presented credential does not match the stored digest.
    #[error("Bad credential for {0}")]
    BadCredential(String),

    /// Identity exists but has been deactivated.
    #[error("Identity deactivated: {0}")]
    Deactivated(String),

    /// Ambiguous partial task id.
    #[error("Ambiguous id: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),
}
