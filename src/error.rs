//! Errors raised when loading inputs and market data
//!
//! The financial model itself never fails; only file and record parsing can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record parsed but holds an unusable value
    #[error("Invalid record {line}: {message}")]
    InvalidRecord { line: u64, message: String },
}

impl AnalysisError {
    /// Creates an invalid record error
    pub fn invalid_record(line: u64, message: impl Into<String>) -> Self {
        AnalysisError::InvalidRecord {
            line,
            message: message.into(),
        }
    }
}
