//! Declared template schemas.
//!
//! A template is a fixed, versioned tabular schema: an ordered list of field
//! definitions, each optionally tagged with one or more controlled-vocabulary
//! IDs. The serde shapes here are the contract with the static JSON template
//! descriptors; descriptor *loading* happens at startup, outside this crate.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabularError};

/// Tabular field types.
///
/// `List` is a pipe-delimited multi-value string cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Decimal,
    Date,
    Boolean,
    List,
}

/// Field definition for one template column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Column name as it appears in the template header.
    pub name: String,
    /// Cell type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether a non-empty value is required on every row.
    #[serde(default)]
    pub required: bool,
    /// Controlled vocabularies this field's values resolve against.
    #[serde(default)]
    pub vocabularies: Vec<String>,
}

impl FieldInfo {
    /// Create an optional open-text field (the shape of every "extra" field).
    pub fn open_text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::String,
            required: false,
            vocabularies: Vec::new(),
        }
    }
}

/// Serde shape of a static template descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    /// Ordered field list.
    pub fields: Vec<FieldInfo>,
}

/// An ordered template schema.
///
/// # Invariants
///
/// - Declared field order is never altered.
/// - `Schema::new` rejects duplicate field names; the resolver's derived
///   schemas may carry duplicate labels (see [`Schema::from_resolved`]),
///   where name lookup resolves to the first occurrence.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldInfo>,
    name_to_index: HashMap<String, usize>,
}

impl Schema {
    /// Create a schema from field definitions, enforcing unique names.
    pub fn new(fields: Vec<FieldInfo>) -> Result<Self> {
        let mut name_to_index = HashMap::with_capacity(fields.len());
        for (i, f) in fields.iter().enumerate() {
            if name_to_index.insert(f.name.clone(), i).is_some() {
                return Err(TabularError::Schema(format!(
                    "Duplicate field name in declared schema: {}",
                    f.name
                )));
            }
        }
        Ok(Self {
            fields,
            name_to_index,
        })
    }

    /// Create a derived schema that may carry duplicate labels.
    ///
    /// Used by the schema resolver for "extra" and "full" schemas, where a
    /// duplicated header label is itself classified as an extra column.
    /// Name lookup resolves to the first occurrence of a label.
    pub fn from_resolved(fields: Vec<FieldInfo>) -> Self {
        let mut name_to_index = HashMap::with_capacity(fields.len());
        for (i, f) in fields.iter().enumerate() {
            name_to_index.entry(f.name.clone()).or_insert(i);
        }
        Self {
            fields,
            name_to_index,
        }
    }

    /// Build a schema from a pre-parsed descriptor.
    pub fn from_descriptor(descriptor: SchemaDescriptor) -> Result<Self> {
        Self::new(descriptor.fields)
    }

    /// A schema with no fields.
    pub fn empty() -> Self {
        Self {
            fields: Vec::new(),
            name_to_index: HashMap::new(),
        }
    }

    /// Get field index by name (first occurrence).
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Get field info by name (first occurrence).
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.index_of(name).map(|i| &self.fields[i])
    }

    /// Field definitions in declared order.
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Field names in declared order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields.
    #[inline]
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Check that every name in `names` exists in this schema.
    ///
    /// Used up front by check configuration validation.
    pub fn require_fields<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for name in names {
            if self.index_of(name).is_none() {
                return Err(TabularError::Schema(format!(
                    "Field not present in schema: {}",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Shared handle to a schema; rows hold one of these.
pub type SchemaRef = Arc<Schema>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<FieldInfo> {
        vec![
            FieldInfo {
                name: "siteID".to_string(),
                field_type: FieldType::String,
                required: true,
                vocabularies: Vec::new(),
            },
            FieldInfo {
                name: "decimalLatitude".to_string(),
                field_type: FieldType::Decimal,
                required: false,
                vocabularies: Vec::new(),
            },
            FieldInfo {
                name: "habitat".to_string(),
                field_type: FieldType::String,
                required: false,
                vocabularies: vec!["HABITAT".to_string()],
            },
        ]
    }

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new(sample_fields()).unwrap();

        assert_eq!(schema.index_of("siteID"), Some(0));
        assert_eq!(schema.index_of("habitat"), Some(2));
        assert_eq!(schema.index_of("unknown"), None);
        assert_eq!(schema.num_fields(), 3);
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let mut fields = sample_fields();
        fields.push(FieldInfo::open_text("siteID"));
        assert!(Schema::new(fields).is_err());
    }

    #[test]
    fn test_from_resolved_allows_duplicates() {
        let fields = vec![
            FieldInfo::open_text("A"),
            FieldInfo::open_text("B"),
            FieldInfo::open_text("A"),
        ];
        let schema = Schema::from_resolved(fields);
        // Lookup resolves to the first occurrence
        assert_eq!(schema.index_of("A"), Some(0));
        assert_eq!(schema.num_fields(), 3);
    }

    #[test]
    fn test_descriptor_deserializes() {
        let json = r#"{
            "fields": [
                {"name": "siteID", "type": "string", "required": true},
                {"name": "habitat", "type": "string", "vocabularies": ["HABITAT"]}
            ]
        }"#;
        let descriptor: SchemaDescriptor = serde_json::from_str(json).unwrap();
        let schema = Schema::from_descriptor(descriptor).unwrap();

        assert_eq!(schema.num_fields(), 2);
        assert!(schema.field("siteID").unwrap().required);
        assert_eq!(schema.field("habitat").unwrap().vocabularies, ["HABITAT"]);
    }

    #[test]
    fn test_require_fields() {
        let schema = Schema::new(sample_fields()).unwrap();
        assert!(schema.require_fields(["siteID", "habitat"]).is_ok());
        assert!(schema.require_fields(["siteID", "nope"]).is_err());
    }
}
