//! Error types for tabular operations.

use thiserror::Error;

/// Errors from tabular schema and resource operations.
///
/// These are configuration/programming errors and I/O-level failures.
/// Data-quality problems (bad cell values, ragged rows) are carried as
/// values on the stream, not raised here.
#[derive(Debug, Error)]
pub enum TabularError {
    /// Schema construction error (duplicate field names, empty schema, etc.)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Failure opening or reading the underlying resource
    #[error("Resource error: {0}")]
    Resource(#[from] std::io::Error),

    /// Malformed delimited input that prevents further streaming
    #[error("Read error at line {line}: {message}")]
    Read { line: u64, message: String },
}

/// Result type for tabular operations.
pub type Result<T> = std::result::Result<T, TabularError>;
