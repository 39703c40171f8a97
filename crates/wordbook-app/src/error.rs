// Rust guideline compliant 2026-10-19

//! Error handling for Wordbook application services.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use wordbook_core::Error as CoreError;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for user-facing and machine-readable responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required field was empty or a value was out of range.
    ValidationError,
    /// The target entry does not exist.
    NotFound,
    /// The underlying persistence failed.
    StorageError,
    /// The operation needs at least one entry (or one checked entry).
    EmptyCollection,
    /// The quiz is not in a state that allows the operation.
    InvalidTransition,
    /// The request included invalid inputs.
    InvalidInput,
    /// The workspace has not been initialized.
    NotInitialized,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Workspace is missing or not initialized.
    #[error("Wordbook not initialized at {path}. Run 'wb init' first.")]
    NotInitialized {
        /// Path where `.wordbook` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing to operate on.
    #[error("{0}")]
    EmptyCollection(String),

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
            AppError::NotInitialized { .. } => ErrorCode::NotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::EmptyCollection(_) => ErrorCode::EmptyCollection,
            AppError::Io(_) => ErrorCode::StorageError,
            AppError::Core(core) => match core {
                CoreError::InvalidEntry(_) => ErrorCode::ValidationError,
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::Io(_) | CoreError::UnreadableRecord { .. } => ErrorCode::StorageError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Csv(_) => ErrorCode::InvalidInput,
                CoreError::Config(_) => ErrorCode::InvalidInput,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::NotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
            })),
            AppError::Core(CoreError::UnreadableRecord { path, line }) => Some(serde_json::json!({
                "path": path,
                "line": line,
            })),
            _ => None,
        }
    }

    /// Returns true if the error only means the target was already gone.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code() == ErrorCode::NotFound
    }
}
