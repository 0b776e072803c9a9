//! Storage module error types
//!
//! Provides error types for database operations.

use thiserror::Error;

/// Storage operation error type
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Lock error when accessing database
    #[error("Database lock error")]
    LockError,

    /// The blocking query task panicked or was cancelled
    #[error("Query task failed: {0}")]
    Task(String),

    /// A stored row holds a value the model cannot represent
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
