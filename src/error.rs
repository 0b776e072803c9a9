//! Unified application error types
//!
//! Provides a single error type for the statistics engine and the report
//! server, serializable into the JSON error body returned over HTTP.

use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Repository fetch failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// An artifact came back without a relation the fetch contract promises
    #[error("Artifact {artifact_id} is missing hydrated relation `{relation}`")]
    MalformedGraph {
        artifact_id: i64,
        relation: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or socket operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializable error response for the HTTP boundary
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
            Self::MalformedGraph { .. } => "MALFORMED_GRAPH",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}
