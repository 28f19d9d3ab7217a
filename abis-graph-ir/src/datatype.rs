//! RDF literal datatypes
//!
//! Datatypes are always explicit in this IR - there is no "untyped" literal.
//! Plain strings default to `xsd:string`; geometry literals use
//! `geo:wktLiteral` (the serialized WKT comes from the CRS collaborator and
//! is opaque here).

use abis_vocab::{geo, rdf, xsd};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// RDF literal datatype (expanded IRI)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(xsd::STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(xsd::BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(xsd::INTEGER)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(xsd::DOUBLE)
    }

    /// xsd:decimal
    pub fn xsd_decimal() -> Self {
        Self::from_iri(xsd::DECIMAL)
    }

    /// xsd:date
    pub fn xsd_date() -> Self {
        Self::from_iri(xsd::DATE)
    }

    /// xsd:dateTime
    pub fn xsd_date_time() -> Self {
        Self::from_iri(xsd::DATE_TIME)
    }

    /// xsd:anyURI
    pub fn xsd_any_uri() -> Self {
        Self::from_iri(xsd::ANY_URI)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(rdf::LANG_STRING)
    }

    /// geo:wktLiteral - serialized geometry
    pub fn wkt_literal() -> Self {
        Self::from_iri(geo::WKT_LITERAL)
    }

    /// Get the IRI representation of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.0.as_ref() == xsd::STRING
    }

    /// Check if this is the rdf:langString datatype
    pub fn is_lang_string(&self) -> bool {
        self.0.as_ref() == rdf::LANG_STRING
    }

    /// Check if this is a numeric type (integer, double, decimal)
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.0.as_ref(),
            xsd::INTEGER | xsd::DOUBLE | xsd::DECIMAL
        )
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
