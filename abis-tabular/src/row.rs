//! A single streamed data row.

use std::sync::Arc;

use crate::schema::Schema;
use crate::value::Value;

/// An ordered mapping from field name to typed value, indexed by schema order.
///
/// Rows are logically immutable once parsed from the stream and are
/// discarded after mapping. The schema handle is shared, so a row is cheap
/// to construct per input line.
#[derive(Debug, Clone)]
pub struct Row {
    schema: Arc<Schema>,
    values: Vec<Value>,
    /// 1-based line number in the source file (header is line 1).
    line: u64,
}

impl Row {
    /// Create a row from already-typed values.
    ///
    /// `values` must be in schema field order; short rows are padded with
    /// `Null`, long rows are truncated (the column-count discrepancy is
    /// reported by the resource, not here).
    pub fn new(schema: Arc<Schema>, mut values: Vec<Value>, line: u64) -> Self {
        values.resize(schema.num_fields(), Value::Null);
        values.truncate(schema.num_fields());
        Self {
            schema,
            values,
            line,
        }
    }

    /// The schema this row was parsed against.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Source line number (1-based, header is line 1).
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Get a value by field name (first occurrence for duplicate labels).
    ///
    /// Returns `None` only for names absent from the schema; a present
    /// field with an empty cell yields `Some(&Value::Null)`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.index_of(name).map(|i| &self.values[i])
    }

    /// Get a value by schema index.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Check whether a field is present (exists in the schema and non-null).
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_null())
    }

    /// All values in schema order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldInfo, FieldType};

    fn schema() -> Arc<Schema> {
        Arc::new(
            Schema::new(vec![
                FieldInfo {
                    name: "siteID".to_string(),
                    field_type: FieldType::String,
                    required: true,
                    vocabularies: Vec::new(),
                },
                FieldInfo::open_text("siteIDSource"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_row_access() {
        let row = Row::new(
            schema(),
            vec![Value::String("S1".to_string()), Value::Null],
            2,
        );

        assert_eq!(row.get("siteID").and_then(Value::as_str), Some("S1"));
        assert_eq!(row.get("siteIDSource"), Some(&Value::Null));
        assert_eq!(row.get("unknown"), None);
        assert!(row.has("siteID"));
        assert!(!row.has("siteIDSource"));
        assert!(!row.has("unknown"));
        assert_eq!(row.line(), 2);
    }

    #[test]
    fn test_short_row_pads_with_null() {
        let row = Row::new(schema(), vec![Value::String("S1".to_string())], 3);
        assert_eq!(row.values().len(), 2);
        assert!(row.values()[1].is_null());
    }
}
