// Rust guideline compliant 2026-10-19

//! Error types for the Wordbook core library.

use crate::models::EntryId;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Wordbook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Wordbook operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Entry data failed validation.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Entry not found in the store.
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// Invalid quiz state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// The entry file holds a line that cannot be read, so rewriting it
    /// would drop data.
    #[error("Entry file {path} has an unreadable record on line {line}; fix or remove it first")]
    UnreadableRecord {
        /// Path of the entry file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
    },

    /// Configuration file or override is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
