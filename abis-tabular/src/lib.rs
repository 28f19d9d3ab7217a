//! Tabular schema and streaming row types for ABIS mapping.
//!
//! This crate models the declared template schemas biodiversity publishers
//! submit against, the typed cell values their CSV files carry, and the
//! streaming resource both pipelines pull rows from.
//!
//! # Design
//!
//! - **Row streaming**: data is read one row at a time in input order; rows
//!   are logically immutable once parsed and discarded after use.
//! - **Strongly typed cells**: all cell access goes through the `Value`
//!   enum, no `dyn Any`.
//! - **Declared order canonical**: a `Schema` is an ordered field list;
//!   name lookup is a convenience side table resolving to the first
//!   occurrence of a label.

pub mod error;
pub mod resolver;
pub mod resource;
pub mod row;
pub mod schema;
pub mod value;

pub use error::{Result, TabularError};
pub use resolver::extra_fields_schema;
pub use resource::{CsvResource, ParsedRow, RowIssue, Rows};
pub use row::Row;
pub use schema::{FieldInfo, FieldType, Schema, SchemaDescriptor, SchemaRef};
pub use value::Value;
