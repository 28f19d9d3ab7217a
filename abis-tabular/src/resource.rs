//! Streaming CSV resources.
//!
//! A resource is a single forward pass over delimited tabular data. Rows are
//! parsed against a schema as they are pulled; data-quality problems
//! (unparseable cells, ragged rows) travel with the row as issues so the
//! validation pipeline can report them all, while stream-level failures
//! (undecodable bytes) surface as `Err` items the caller maps to structural
//! findings or fatal errors as its contract requires.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, TabularError};
use crate::row::Row;
use crate::schema::Schema;
use crate::value::Value;

/// A streaming delimited-data resource bound to its header row.
pub struct CsvResource {
    reader: csv::Reader<Box<dyn Read>>,
    headers: Vec<String>,
}

impl CsvResource {
    /// Open a resource from a file path.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        debug!(path = %path.display(), "opened csv resource");
        Self::build(Box::new(file))
    }

    /// Open a resource from any byte reader.
    pub fn from_reader(reader: impl Read + 'static) -> Result<Self> {
        Self::build(Box::new(reader))
    }

    fn build(inner: Box<dyn Read>) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(inner);

        let headers = reader
            .headers()
            .map_err(|e| TabularError::Read {
                line: 1,
                message: e.to_string(),
            })?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self { reader, headers })
    }

    /// Header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Consume the resource, streaming typed rows against `schema`.
    ///
    /// The returned iterator is finite and not restartable; dropping it
    /// releases the underlying handle.
    pub fn rows(self, schema: Arc<Schema>) -> Rows {
        Rows {
            records: self.reader.into_records(),
            schema,
            // Header occupies line 1; first data row is line 2.
            next_line: 2,
        }
    }
}

/// A data-quality issue attached to a parsed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    /// Row cell count differs from the schema's field count.
    ColumnCount { expected: usize, actual: usize },
    /// A non-empty cell did not parse as the declared field type.
    InvalidValue { field: String, raw: String },
}

/// A typed row plus any data-quality issues found while parsing it.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub row: Row,
    pub issues: Vec<RowIssue>,
}

/// Streaming row iterator over a consumed [`CsvResource`].
pub struct Rows {
    records: csv::StringRecordsIntoIter<Box<dyn Read>>,
    schema: Arc<Schema>,
    next_line: u64,
}

impl Rows {
    /// The schema rows are parsed against.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}

impl Iterator for Rows {
    type Item = Result<ParsedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(self.next_line);
                self.next_line = line + 1;
                return Some(Err(TabularError::Read {
                    line,
                    message: e.to_string(),
                }));
            }
        };

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(self.next_line);
        self.next_line = line + 1;

        let expected = self.schema.num_fields();
        let mut issues = Vec::new();
        if record.len() != expected {
            issues.push(RowIssue::ColumnCount {
                expected,
                actual: record.len(),
            });
        }

        let mut values = Vec::with_capacity(expected);
        for (i, field) in self.schema.fields().iter().enumerate() {
            let raw = record.get(i).unwrap_or("");
            match Value::parse(raw, field.field_type) {
                Ok(value) => values.push(value),
                Err(raw) => {
                    issues.push(RowIssue::InvalidValue {
                        field: field.name.clone(),
                        raw,
                    });
                    values.push(Value::Null);
                }
            }
        }

        Some(Ok(ParsedRow {
            row: Row::new(Arc::clone(&self.schema), values, line),
            issues,
        }))
    }
}
