//! Error types for the NEARWATCH I/O layer.

use thiserror::Error;

/// Top-level error type for loading and writing.
#[derive(Error, Debug)]
pub enum IoError {
    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse or write failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record was structurally present but not usable.
    #[error("malformed record #{index}: {reason}")]
    MalformedRecord {
        /// Position of the record in its source file.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, IoError>;
