//! Deterministic entity-IRI construction
//!
//! Templates cross-reference entities (an occurrence referencing a site
//! defined in a different submission file) without any shared database. The
//! only mechanism holding that together is that the same business key always
//! produces the same IRI, within and across runs. This module owns those
//! rules.

use std::fmt;

/// A base IRI namespace with deterministic entity-IRI construction
///
/// # Invariants
///
/// - The stored base always ends with `/`, so joining is pure concatenation.
/// - `iri_for(segment, key)` is a pure function of its inputs: equal
///   segment/key pairs yield byte-identical IRIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    base: String,
}

impl Namespace {
    /// Create a namespace from a base IRI
    ///
    /// A trailing `/` is appended if missing.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    /// The base IRI (always `/`-terminated)
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Join a raw local part onto the base without escaping
    ///
    /// Use this for trusted, pre-escaped locals (e.g. fixed segments).
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.base, local)
    }

    /// Build an entity IRI: base + entity-type segment + escaped business key
    ///
    /// The business key is percent-escaped so arbitrary identifier text
    /// (spaces, slashes, unicode) still yields a single stable path segment.
    pub fn iri_for(&self, segment: &str, business_key: &str) -> String {
        format!("{}{}/{}", self.base, segment, percent_escape(business_key))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

/// Percent-escape a string for use as an IRI path segment
///
/// Keeps unreserved characters and the sub-delims that are legal in path
/// segments; everything else (including `/`) is percent-encoded per byte so
/// a business key can never introduce extra path structure.
pub fn percent_escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '.' | '_' | '~' => {
                result.push(c);
            }
            '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' => {
                result.push(c);
            }
            ':' | '@' => {
                result.push(c);
            }
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_appends_slash() {
        let ns = Namespace::new("https://example.org/base");
        assert_eq!(ns.base(), "https://example.org/base/");

        let already = Namespace::new("https://example.org/base/");
        assert_eq!(already.base(), "https://example.org/base/");
    }

    #[test]
    fn test_iri_for_is_deterministic() {
        let ns = Namespace::new("https://example.org/dataset");
        let a = ns.iri_for("site", "PLOT 1");
        let b = ns.iri_for("site", "PLOT 1");
        assert_eq!(a, b);
        assert_eq!(a, "https://example.org/dataset/site/PLOT%201");
    }

    #[test]
    fn test_escape_keeps_unreserved() {
        assert_eq!(percent_escape("Abc-123_~.x"), "Abc-123_~.x");
    }

    #[test]
    fn test_escape_encodes_space_and_slash() {
        assert_eq!(percent_escape("a b"), "a%20b");
        assert_eq!(percent_escape("a/b"), "a%2Fb");
    }

    #[test]
    fn test_escape_encodes_multibyte_per_byte() {
        // U+00E9 is 0xC3 0xA9 in UTF-8
        assert_eq!(percent_escape("é"), "%C3%A9");
    }

    #[test]
    fn test_term_joins_raw() {
        let ns = Namespace::new("https://example.org/");
        assert_eq!(ns.term("vocab/habitat"), "https://example.org/vocab/habitat");
    }
}
