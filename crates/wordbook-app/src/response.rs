// Rust guideline compliant 2026-10-19

//! Response envelopes for machine-readable command output.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard envelope wrapping a command result or failure.
///
/// Serializes as `{"status":"ok","result":...}` or
/// `{"status":"error","code":...,"message":...}`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope<T> {
    /// The command succeeded.
    Ok {
        /// Result payload.
        result: T,
    },
    /// The command failed.
    Error {
        /// Stable error code.
        code: ErrorCode,
        /// Human-readable error message.
        message: String,
        /// Optional structured details.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },
}

impl<T> Envelope<T> {
    /// Wraps a successful result.
    #[must_use]
    pub fn ok(result: T) -> Self {
        Envelope::Ok { result }
    }

    /// Builds an error envelope from an application error.
    #[must_use]
    pub fn error(error: &AppError) -> Self {
        Envelope::Error {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}
