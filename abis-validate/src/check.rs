//! Cross-field and cross-template row checks.
//!
//! Checks are a closed tagged-variant set dispatched through a single
//! `validate_row` entry point; new checks are added by extending the enum.
//! A check never mutates the row and never fails at validation time - it
//! only yields zero or more errors. Configuration problems are caught at
//! construction.
//!
//! Shared edge policy: a missing *grouping* key short-circuits to valid.
//! The row is simply not subject to the check; requiring the key itself is
//! the job of an explicit required-field constraint.

use std::collections::HashMap;

use abis_tabular::{Row, Schema, Value};
use serde::Serialize;

use crate::error::{Result, ValidateError};

/// A field-scoped validation error produced by a check or schema constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckError {
    /// Stable machine-readable code.
    pub code: &'static str,
    /// The implicated field, when the error is field-scoped.
    pub field: Option<String>,
    /// Human-readable message naming the implicated sibling fields.
    pub message: String,
}

impl CheckError {
    pub(crate) fn field_scoped(
        code: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub(crate) fn row_scoped(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            field: None,
            message: message.into(),
        }
    }
}

/// Non-null cell content as comparable text, or None when absent.
fn present_text(row: &Row, field: &str) -> Option<String> {
    row.get(field)
        .filter(|v| !v.is_null())
        .map(Value::lexical)
}

/// A pluggable row-level validator.
#[derive(Debug, Clone)]
pub enum Check {
    /// Error iff some but not all of the named fields are present.
    MutuallyInclusive { fields: Vec<String> },

    /// The first field is a gate: if absent the row is valid; if present,
    /// every subsequent field must also be present.
    ChainedInclusion { fields: Vec<String> },

    /// When `key_field` has a value, `value_field` content must equal the
    /// lookup map's entry for that key (cross-template foreign-key
    /// agreement).
    VLookupMatch {
        key_field: String,
        value_field: String,
        lookup: HashMap<String, String>,
    },

    /// `value_field` may be omitted only if a fallback is registered for
    /// this row's `key_field` value.
    DefaultLookup {
        key_field: String,
        value_field: String,
        defaults: HashMap<String, String>,
    },

    /// A row must supply a complete coordinate triple directly, or resolve
    /// a site identifier against the fallback geometry map.
    GeometryValidation {
        latitude_field: String,
        longitude_field: String,
        datum_field: String,
        site_id_field: String,
        site_geometry: HashMap<String, String>,
    },

    /// For rows carrying both a visit grouping key and a denormalized site
    /// identifier, the identifier must match the one registered for that
    /// visit in the companion template.
    SiteIdentifierMatches {
        visit_id_field: String,
        site_id_field: String,
        visit_site: HashMap<String, String>,
    },
}

impl Check {
    /// Mutual inclusion over two or more fields.
    pub fn mutually_inclusive(fields: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.len() < 2 {
            return Err(ValidateError::Config(
                "MutuallyInclusive requires at least two fields".to_string(),
            ));
        }
        Ok(Check::MutuallyInclusive { fields })
    }

    /// Chained inclusion: first field gates the rest, in declared order.
    pub fn chained_inclusion(fields: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.len() < 2 {
            return Err(ValidateError::Config(
                "ChainedInclusion requires a gate field and at least one dependent".to_string(),
            ));
        }
        Ok(Check::ChainedInclusion { fields })
    }

    /// Cross-template value agreement against a lookup map.
    pub fn vlookup_match(
        key_field: impl Into<String>,
        value_field: impl Into<String>,
        lookup: HashMap<String, String>,
    ) -> Self {
        Check::VLookupMatch {
            key_field: key_field.into(),
            value_field: value_field.into(),
            lookup,
        }
    }

    /// Omission allowed only with a registered fallback.
    pub fn default_lookup(
        key_field: impl Into<String>,
        value_field: impl Into<String>,
        defaults: HashMap<String, String>,
    ) -> Self {
        Check::DefaultLookup {
            key_field: key_field.into(),
            value_field: value_field.into(),
            defaults,
        }
    }

    /// Direct coordinates or resolvable fallback geometry.
    pub fn geometry_validation(
        latitude_field: impl Into<String>,
        longitude_field: impl Into<String>,
        datum_field: impl Into<String>,
        site_id_field: impl Into<String>,
        site_geometry: HashMap<String, String>,
    ) -> Self {
        Check::GeometryValidation {
            latitude_field: latitude_field.into(),
            longitude_field: longitude_field.into(),
            datum_field: datum_field.into(),
            site_id_field: site_id_field.into(),
            site_geometry,
        }
    }

    /// Denormalized site identifier agreement with the visit template.
    pub fn site_identifier_matches(
        visit_id_field: impl Into<String>,
        site_id_field: impl Into<String>,
        visit_site: HashMap<String, String>,
    ) -> Self {
        Check::SiteIdentifierMatches {
            visit_id_field: visit_id_field.into(),
            site_id_field: site_id_field.into(),
            visit_site,
        }
    }

    /// Every field name this check reads, for schema agreement validation.
    pub fn referenced_fields(&self) -> Vec<&str> {
        match self {
            Check::MutuallyInclusive { fields } | Check::ChainedInclusion { fields } => {
                fields.iter().map(String::as_str).collect()
            }
            Check::VLookupMatch {
                key_field,
                value_field,
                ..
            }
            | Check::DefaultLookup {
                key_field,
                value_field,
                ..
            } => vec![key_field, value_field],
            Check::GeometryValidation {
                latitude_field,
                longitude_field,
                datum_field,
                site_id_field,
                ..
            } => vec![latitude_field, longitude_field, datum_field, site_id_field],
            Check::SiteIdentifierMatches {
                visit_id_field,
                site_id_field,
                ..
            } => vec![visit_id_field, site_id_field],
        }
    }

    /// Run this check against a row, yielding zero or more errors.
    pub fn validate_row(&self, row: &Row) -> Vec<CheckError> {
        match self {
            Check::MutuallyInclusive { fields } => {
                let (present, missing): (Vec<&String>, Vec<&String>) =
                    fields.iter().partition(|f| row.has(f));
                if present.is_empty() || missing.is_empty() {
                    return Vec::new();
                }
                let present_names = present
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                missing
                    .into_iter()
                    .map(|f| {
                        CheckError::field_scoped(
                            "mutually-inclusive",
                            f,
                            format!(
                                "Field {} must be provided when {} is provided",
                                f, present_names
                            ),
                        )
                    })
                    .collect()
            }

            Check::ChainedInclusion { fields } => {
                // The constructor enforces a gate plus dependents, but the
                // variant itself is constructible; an empty list has nothing
                // to check.
                let Some(gate) = fields.first() else {
                    return Vec::new();
                };
                if !row.has(gate) {
                    return Vec::new();
                }
                fields[1..]
                    .iter()
                    .filter(|f| !row.has(f))
                    .map(|f| {
                        CheckError::field_scoped(
                            "chained-inclusion",
                            f,
                            format!("Field {} must be provided when {} is provided", f, gate),
                        )
                    })
                    .collect()
            }

            Check::VLookupMatch {
                key_field,
                value_field,
                lookup,
            } => {
                let Some(key) = present_text(row, key_field) else {
                    return Vec::new();
                };
                let actual = present_text(row, value_field);
                match lookup.get(&key) {
                    Some(expected) if actual.as_deref() == Some(expected.as_str()) => Vec::new(),
                    Some(expected) => vec![CheckError::field_scoped(
                        "vlookup-mismatch",
                        value_field,
                        format!(
                            "Field {} must be \"{}\" for {} \"{}\", found \"{}\"",
                            value_field,
                            expected,
                            key_field,
                            key,
                            actual.unwrap_or_default()
                        ),
                    )],
                    None => vec![CheckError::field_scoped(
                        "vlookup-mismatch",
                        value_field,
                        format!(
                            "No entry registered for {} \"{}\" to match {} against",
                            key_field, key, value_field
                        ),
                    )],
                }
            }

            Check::DefaultLookup {
                key_field,
                value_field,
                defaults,
            } => {
                if row.has(value_field) {
                    return Vec::new();
                }
                let Some(key) = present_text(row, key_field) else {
                    return Vec::new();
                };
                if defaults.contains_key(&key) {
                    Vec::new()
                } else {
                    vec![CheckError::field_scoped(
                        "default-missing",
                        value_field,
                        format!(
                            "Field {} may be omitted only when a fallback is registered \
                             for {} \"{}\"",
                            value_field, key_field, key
                        ),
                    )]
                }
            }

            Check::GeometryValidation {
                latitude_field,
                longitude_field,
                datum_field,
                site_id_field,
                site_geometry,
            } => {
                let direct = row.has(latitude_field)
                    && row.has(longitude_field)
                    && row.has(datum_field);
                if direct {
                    return Vec::new();
                }
                if let Some(site_id) = present_text(row, site_id_field) {
                    if site_geometry.contains_key(&site_id) {
                        return Vec::new();
                    }
                }
                vec![CheckError::row_scoped(
                    "geometry-missing",
                    format!(
                        "Row must provide {}, {} and {} together, or a {} with \
                         registered fallback geometry",
                        latitude_field, longitude_field, datum_field, site_id_field
                    ),
                )]
            }

            Check::SiteIdentifierMatches {
                visit_id_field,
                site_id_field,
                visit_site,
            } => {
                let Some(visit_id) = present_text(row, visit_id_field) else {
                    return Vec::new();
                };
                let Some(site_id) = present_text(row, site_id_field) else {
                    return Vec::new();
                };
                match visit_site.get(&visit_id) {
                    Some(expected) if *expected != site_id => {
                        vec![CheckError::field_scoped(
                            "site-id-mismatch",
                            site_id_field,
                            format!(
                                "Field {} \"{}\" conflicts with \"{}\" registered for \
                                 {} \"{}\"",
                                site_id_field, site_id, expected, visit_id_field, visit_id
                            ),
                        )]
                    }
                    _ => Vec::new(),
                }
            }
        }
    }
}

/// An ordered set of checks.
///
/// Order does not affect correctness, only the order errors are reported.
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    checks: Vec<Check>,
}

impl Checklist {
    /// Create an empty checklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check, preserving insertion order.
    pub fn with(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Add a check in place.
    pub fn push(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// The checks in report order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Verify every check references only fields the schema defines.
    ///
    /// A check naming an unknown field is a wiring bug, raised before any
    /// data is read.
    pub fn validate_config(&self, schema: &Schema) -> Result<()> {
        for check in &self.checks {
            schema
                .require_fields(check.referenced_fields())
                .map_err(|e| ValidateError::Config(e.to_string()))?;
        }
        Ok(())
    }

    /// Run every check against a row, concatenating errors in check order.
    pub fn validate_row(&self, row: &Row) -> Vec<CheckError> {
        self.checks
            .iter()
            .flat_map(|c| c.validate_row(row))
            .collect()
    }
}
