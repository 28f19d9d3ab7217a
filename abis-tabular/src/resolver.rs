//! Schema resolution against actual file headers.
//!
//! A submitted file may carry columns the template does not declare. Those
//! "extra" columns are kept (typed as open text) so row-mappers can attach
//! them as supplementary attributes. Classification is duplicate-aware: a
//! second occurrence of a declared label is itself extra, which keeps
//! validation-error semantics stable when publishers repeat a column.

use tracing::debug;

use crate::schema::{FieldInfo, Schema};

/// Compute the extra-fields schema for a set of actual header names.
///
/// Maintains a pool initialized to the declared field names and walks the
/// actual headers in order. A header is "extra" if it is not currently in
/// the pool; matching a name removes it from the pool, so duplicate labels
/// are always extra even when the label equals a declared name.
///
/// With `full = false` the result holds only the extra fields (in header
/// order). With `full = true` the declared fields come first, unaltered and
/// in declared order, followed by the extras.
///
/// The result may carry duplicate labels and is therefore built with
/// [`Schema::from_resolved`]; name lookup resolves to the first occurrence.
pub fn extra_fields_schema(declared: &Schema, actual_headers: &[String], full: bool) -> Schema {
    let mut pool: Vec<&str> = declared.field_names().collect();
    let mut extras: Vec<FieldInfo> = Vec::new();

    for name in actual_headers {
        if let Some(pos) = pool.iter().position(|n| n == name) {
            pool.remove(pos);
        } else {
            extras.push(FieldInfo::open_text(name.clone()));
        }
    }

    debug!(
        declared = declared.num_fields(),
        actual = actual_headers.len(),
        extra = extras.len(),
        full,
        "resolved extra fields"
    );

    if full {
        let mut fields: Vec<FieldInfo> = declared.fields().to_vec();
        fields.extend(extras);
        Schema::from_resolved(fields)
    } else {
        Schema::from_resolved(extras)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldInfo, FieldType};

    fn declared() -> Schema {
        Schema::new(vec![
            FieldInfo {
                name: "A".to_string(),
                field_type: FieldType::Decimal,
                required: true,
                vocabularies: Vec::new(),
            },
            FieldInfo {
                name: "B".to_string(),
                field_type: FieldType::String,
                required: false,
                vocabularies: Vec::new(),
            },
        ])
        .unwrap()
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_extras() {
        let schema = extra_fields_schema(&declared(), &headers(&["A", "B"]), false);
        assert_eq!(schema.num_fields(), 0);
    }

    #[test]
    fn test_unknown_header_is_extra() {
        let schema = extra_fields_schema(&declared(), &headers(&["A", "B", "C"]), false);
        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, ["C"]);
        // Extras are open text, never required
        let c = schema.field("C").unwrap();
        assert_eq!(c.field_type, FieldType::String);
        assert!(!c.required);
        assert!(c.vocabularies.is_empty());
    }

    #[test]
    fn test_duplicate_declared_label_is_extra() {
        // Declared [A, B], actual [A, A, B, C]: the second A is extra
        let schema = extra_fields_schema(&declared(), &headers(&["A", "A", "B", "C"]), false);
        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_full_schema_appends_and_preserves_declared_order() {
        let schema = extra_fields_schema(&declared(), &headers(&["A", "A", "B", "C"]), true);
        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, ["A", "B", "A", "C"]);

        // Declared definitions are untouched: the first A is still decimal
        // and required, while the extra A is open text.
        assert_eq!(schema.fields()[0].field_type, FieldType::Decimal);
        assert!(schema.fields()[0].required);
        assert_eq!(schema.fields()[2].field_type, FieldType::String);
        assert!(!schema.fields()[2].required);
    }

    #[test]
    fn test_deterministic_for_fixed_header_order() {
        let hs = headers(&["X", "A", "B", "X"]);
        let a: Vec<String> = extra_fields_schema(&declared(), &hs, true)
            .field_names()
            .map(str::to_string)
            .collect();
        let b: Vec<String> = extra_fields_schema(&declared(), &hs, true)
            .field_names()
            .map(str::to_string)
            .collect();
        assert_eq!(a, b);
    }
}
