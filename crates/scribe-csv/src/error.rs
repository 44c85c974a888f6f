//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while writing CSV
#[derive(Debug, Error)]
pub enum CsvError {
    /// The sink refused written data, or a file sink could not be opened
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writer options were rejected at construction
    #[error("Invalid write options: {0}")]
    InvalidOptions(String),
}

impl CsvError {
    /// Create a new invalid-options error with a message
    pub fn invalid_options<S: Into<String>>(msg: S) -> Self {
        CsvError::InvalidOptions(msg.into())
    }
}
