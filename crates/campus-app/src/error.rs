// Rust guideline compliant 2026-02-09

//! Error handling for Campus application services.

use campus_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and report responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested entity was not found.
    NotFound,
    /// The caller's role lacks the required capability.
    PermissionDenied,
    /// The requested status transition is invalid.
    InvalidTransition,
    /// The operation would make a task its own ancestor.
    CycleDetected,
    /// The identifier collides with an existing entity.
    DuplicateId,
    /// Input validation failed.
    ValidationError,
    /// Authentication failed (bad credential or deactivated identity).
    AuthFailed,
    /// The provided identifier matched multiple entities.
    AmbiguousId,
    /// IO failure while reading or writing data files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The data directory has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Data directory is missing or not initialized.
    #[error("Campus data directory not initialized at {path}. Run 'campus init' first.")]
    RepoNotInitialized {
        /// Path where `.campus` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::PermissionDenied(_) => ErrorCode::PermissionDenied,
                CoreError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
                CoreError::CycleDetected(_) => ErrorCode::CycleDetected,
                CoreError::DuplicateId(_) => ErrorCode::DuplicateId,
                CoreError::Validation(_) => ErrorCode::ValidationError,
                CoreError::BadCredential(_) | CoreError::Deactivated(_) => ErrorCode::AuthFailed,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::InvalidInput(_) => None,
            AppError::Io(_) => None,
            AppError::Core(core) => match core {
                CoreError::AmbiguousId(partial, matches) => Some(serde_json::json!({
                    "partial": partial,
                    "matches": matches,
                })),
                CoreError::CycleDetected(cycle) => Some(serde_json::json!({
                    "cycle": cycle,
                })),
                CoreError::InvalidTransition { from, to } => Some(serde_json::json!({
                    "from": from,
                    "to": to,
                })),
                _ => None,
            },
        }
    }
}
