//! Template validation for ABIS tabular submissions.
//!
//! Validation works by:
//! 1. Binding a streaming [`CsvResource`](abis_tabular::CsvResource) to the
//!    effective (full) schema
//! 2. Streaming rows once, applying declared-schema constraints
//!    (required/type/column count) and every [`Check`] in the
//!    [`Checklist`] to each row
//! 3. Producing an exhaustive [`Report`] - every violation found, not
//!    merely the first
//!
//! Data-quality problems are always reported, never raised; `Err` returns
//! are reserved for configuration errors such as a check referencing a
//! field the schema does not define.

pub mod check;
pub mod error;
pub mod pipeline;
pub mod report;

pub use check::{Check, CheckError, Checklist};
pub use error::{Result, ValidateError};
pub use pipeline::ValidationPipeline;
pub use report::{Report, RowFinding};
