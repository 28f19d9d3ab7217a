//! Validation error types.
//!
//! Only configuration/programming errors live here. Everything a publisher
//! can fix in their data lands in the [`Report`](crate::Report) instead.

use thiserror::Error;

/// Errors from validation pipeline construction and configuration.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Malformed check configuration (empty field list, field absent from
    /// the schema, empty lookup map where one is required).
    #[error("Check configuration error: {0}")]
    Config(String),
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
