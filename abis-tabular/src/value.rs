//! Typed cell values.
//!
//! Cells arrive as raw strings and are parsed against the declared field
//! type. An empty (or whitespace-only) cell is `Null` for every type; the
//! required-field constraint is enforced by validation, not here.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::schema::FieldType;

/// A typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Decimal(Decimal),
    Date(NaiveDate),
    Boolean(bool),
    /// Pipe-delimited multi-value cell, split and trimmed.
    List(Vec<String>),
}

impl Value {
    /// Parse a raw cell against a field type.
    ///
    /// Returns `Err` with the raw text when the cell is non-empty but does
    /// not parse as the declared type; the caller decides whether that is a
    /// report finding (validation) or a wiring bug (mapping).
    pub fn parse(raw: &str, field_type: FieldType) -> std::result::Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Value::Null);
        }

        match field_type {
            FieldType::String => Ok(Value::String(trimmed.to_string())),
            FieldType::Integer => trimmed
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| trimmed.to_string()),
            FieldType::Decimal => trimmed
                .parse::<Decimal>()
                .map(Value::Decimal)
                .map_err(|_| trimmed.to_string()),
            FieldType::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(Value::Date)
                .map_err(|_| trimmed.to_string()),
            FieldType::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" => Ok(Value::Boolean(true)),
                "false" => Ok(Value::Boolean(false)),
                _ => Err(trimmed.to_string()),
            },
            FieldType::List => {
                let items: Vec<String> = trimmed
                    .split('|')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if items.is_empty() {
                    Ok(Value::Null)
                } else {
                    Ok(Value::List(items))
                }
            }
        }
    }

    /// Check if this value is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get string content (returns None for non-strings and null).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer content.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get decimal content.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Get date content.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get boolean content.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get list content.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Lexical form of the value, as it would appear in a cell.
    pub fn lexical(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::List(items) => items.join(" | "),
        }
    }
}
