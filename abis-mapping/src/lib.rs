//! Vocabulary resolution and the chunked mapping pipeline.
//!
//! This crate turns validated tabular rows into RDF graph chunks:
//!
//! - **Vocabularies** resolve free-text cell values to canonical terms. A
//!   fixed vocabulary is a closed term set; a flexible vocabulary mints new
//!   terms on the fly with run-local memoization, so repeated values map to
//!   the identical term IRI and the term's declaration triples are written
//!   exactly once.
//! - **MappingPipeline** streams rows in input order, delegating each row
//!   to a per-template [`RowMapper`] that writes statements into the
//!   current graph, and yields graph chunks of at most `chunk_size` rows.
//!   Chunk boundaries are a deterministic function of row ordinal and
//!   `chunk_size`.
//!
//! Mapping assumes validated input. Data-quality problems belong to the
//! validation pipeline; anything that goes wrong here is a configuration or
//! wiring error and fails fast.

pub mod context;
pub mod error;
pub mod pipeline;
pub mod vocabulary;

pub use context::{GeometryWriter, MappingContext};
pub use error::{MappingError, Result};
pub use pipeline::{GraphChunks, MappingPipeline, RowMapper};
pub use vocabulary::{
    normalize_label, FixedVocabulary, FlexibleVocabulary, Term, VocabularyDef, VocabularyRegistry,
};
