//! RDF graph intermediate representation for mapping output
//!
//! This crate provides the canonical types for the semantic-graph records the
//! mapping pipeline produces. Serialization to a textual triple format is a
//! downstream concern; the IR is format-agnostic.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form;
//!    compaction belongs to formatters.
//!
//! 2. **Explicit datatypes** - Literals always carry a datatype. Plain
//!    strings use `xsd:string`, language-tagged strings use `rdf:langString`.
//!
//! 3. **Bag semantics by default** - `Graph` stores `Vec<Triple>` and
//!    preserves duplicates from row mapping. Call `dedupe()` for set
//!    semantics.
//!
//! 4. **Deterministic output** - `sort()` (SPO lexicographic) before
//!    comparing or formatting; identical inputs must produce identical
//!    chunks.

mod datatype;
mod graph;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use term::{BlankId, LiteralValue, Term};
pub use triple::Triple;
