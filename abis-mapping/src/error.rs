//! Mapping error types.
//!
//! Everything here is raised, never reported: mapping runs on validated
//! data, so an error indicates a wiring bug or an unvalidated-input caller,
//! not a data-quality problem for the publisher.

use thiserror::Error;

/// Mapping-specific errors.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Non-positive chunk size, rejected before any I/O.
    #[error("Chunk size must be positive")]
    ChunkSize,

    /// A vocabulary of the wrong class was wired to a field.
    #[error("Vocabulary class error: {0}")]
    VocabularyClass(String),

    /// A field references a vocabulary ID the registry does not hold.
    #[error("Unknown vocabulary: {0}")]
    UnknownVocabulary(String),

    /// A fixed vocabulary was asked for a value it does not contain.
    #[error("No term matching \"{label}\" in vocabulary {vocabulary}")]
    UnknownTerm { vocabulary: String, label: String },

    /// A per-row mapper hit a should-not-happen state (e.g. no resolvable
    /// geometry despite validation passing). Fatal; aborts the chunk stream.
    #[error("Row mapping failed at line {line}: {message}")]
    RowMapping { line: u64, message: String },

    /// The underlying resource failed mid-stream.
    #[error(transparent)]
    Tabular(#[from] abis_tabular::TabularError),

    /// The geometry collaborator rejected its input.
    #[error("Geometry error: {0}")]
    Geometry(String),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
