//! The streaming validation pipeline.

use std::sync::Arc;

use abis_tabular::{CsvResource, RowIssue, Schema, TabularError};
use tracing::{debug, info};

use crate::check::{CheckError, Checklist};
use crate::error::Result;
use crate::report::Report;

/// Validates a resource against an effective schema plus a checklist.
///
/// Construction verifies the checklist's configuration against the schema;
/// `validate` itself never fails - every data problem becomes a report
/// finding.
pub struct ValidationPipeline {
    schema: Arc<Schema>,
    checklist: Checklist,
}

impl ValidationPipeline {
    /// Build a pipeline, verifying every check against the schema up front.
    pub fn new(schema: Arc<Schema>, checklist: Checklist) -> Result<Self> {
        checklist.validate_config(&schema)?;
        Ok(Self { schema, checklist })
    }

    /// Stream the resource once, producing an exhaustive report.
    ///
    /// Per row, three passes accumulate into the same finding list:
    /// structural issues from parsing (column count, cell type), declared
    /// required-field constraints, then every check in checklist order.
    pub fn validate(&self, resource: CsvResource) -> Report {
        let mut report = Report::new();

        for item in resource.rows(Arc::clone(&self.schema)) {
            match item {
                Err(error) => {
                    // Streaming continues if the reader recovers. The header
                    // occupies line 1, so when the error carries no position
                    // the n-th data row sits at line n + 1.
                    report.row_count += 1;
                    let (line, message) = match error {
                        TabularError::Read { line, message } => (line, message),
                        other => (report.row_count + 1, other.to_string()),
                    };
                    report.record(
                        line,
                        vec![CheckError::row_scoped("encoding", message)],
                    );
                }
                Ok(parsed) => {
                    report.row_count += 1;
                    let mut errors: Vec<CheckError> = Vec::new();

                    for issue in &parsed.issues {
                        errors.push(match issue {
                            RowIssue::ColumnCount { expected, actual } => CheckError::row_scoped(
                                "column-count",
                                format!("Expected {} columns, found {}", expected, actual),
                            ),
                            RowIssue::InvalidValue { field, raw } => CheckError::field_scoped(
                                "invalid-value",
                                field.clone(),
                                format!("Value \"{}\" is not valid for field {}", raw, field),
                            ),
                        });
                    }

                    // Required-field constraints; skip fields already
                    // carrying an invalid-value finding so a failed parse is
                    // not double-reported as also missing.
                    for field in self.schema.fields() {
                        if !field.required {
                            continue;
                        }
                        let parse_failed = parsed.issues.iter().any(|i| {
                            matches!(i, RowIssue::InvalidValue { field: f, .. } if f == &field.name)
                        });
                        if !parse_failed && !parsed.row.has(&field.name) {
                            errors.push(CheckError::field_scoped(
                                "required-missing",
                                field.name.clone(),
                                format!("Field {} is required", field.name),
                            ));
                        }
                    }

                    errors.extend(self.checklist.validate_row(&parsed.row));

                    debug!(line = parsed.row.line(), errors = errors.len(), "validated row");
                    report.record(parsed.row.line(), errors);
                }
            }
        }

        info!(
            rows = report.row_count,
            errors = report.error_count(),
            valid = report.valid,
            "validation complete"
        );
        report
    }
}
