//! RDF vocabulary constants and namespace construction for ABIS mapping
//!
//! This crate is the single home for ontology IRIs used when mapping
//! biodiversity survey templates to RDF, plus the deterministic entity-IRI
//! construction rules other crates rely on for cross-template references.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` / `rdfs` / `xsd` - W3C core vocabularies
//! - `skos` - concept scheme vocabulary used for minted terms
//! - `dcterms` - Dublin Core terms (provenance on minted terms)
//! - `geo` - GeoSPARQL (geometry literals and properties)
//! - `dwc` - Darwin Core occurrence/site field IRIs
//! - `tern` - TERN ontology classes for survey entities
//! - `sdo` - schema.org properties used for dataset description

mod namespace;

pub use namespace::{percent_escape, Namespace};

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:value IRI
    pub const VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XSD datatype constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// SKOS vocabulary constants (minted vocabulary terms are SKOS concepts)
pub mod skos {
    /// skos:Concept IRI
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";

    /// skos:ConceptScheme IRI
    pub const CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";

    /// skos:prefLabel IRI
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";

    /// skos:altLabel IRI
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";

    /// skos:definition IRI
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";

    /// skos:scopeNote IRI
    pub const SCOPE_NOTE: &str = "http://www.w3.org/2004/02/skos/core#scopeNote";

    /// skos:inScheme IRI
    pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";

    /// skos:historyNote IRI
    pub const HISTORY_NOTE: &str = "http://www.w3.org/2004/02/skos/core#historyNote";
}

/// Dublin Core terms
pub mod dcterms {
    /// dcterms:identifier IRI
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";

    /// dcterms:title IRI
    pub const TITLE: &str = "http://purl.org/dc/terms/title";

    /// dcterms:description IRI
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";

    /// dcterms:source IRI
    pub const SOURCE: &str = "http://purl.org/dc/terms/source";

    /// dcterms:issued IRI
    pub const ISSUED: &str = "http://purl.org/dc/terms/issued";
}

/// GeoSPARQL vocabulary constants
pub mod geo {
    /// geo:Geometry IRI
    pub const GEOMETRY: &str = "http://www.opengis.net/ont/geosparql#Geometry";

    /// geo:hasGeometry IRI
    pub const HAS_GEOMETRY: &str = "http://www.opengis.net/ont/geosparql#hasGeometry";

    /// geo:asWKT IRI
    pub const AS_WKT: &str = "http://www.opengis.net/ont/geosparql#asWKT";

    /// geo:wktLiteral datatype IRI
    pub const WKT_LITERAL: &str = "http://www.opengis.net/ont/geosparql#wktLiteral";
}

/// Darwin Core term IRIs used by template row-mappers
pub mod dwc {
    /// dwc:locationID IRI
    pub const LOCATION_ID: &str = "http://rs.tdwg.org/dwc/terms/locationID";

    /// dwc:eventID IRI
    pub const EVENT_ID: &str = "http://rs.tdwg.org/dwc/terms/eventID";

    /// dwc:scientificName IRI
    pub const SCIENTIFIC_NAME: &str = "http://rs.tdwg.org/dwc/terms/scientificName";

    /// dwc:eventDate IRI
    pub const EVENT_DATE: &str = "http://rs.tdwg.org/dwc/terms/eventDate";

    /// dwc:habitat IRI
    pub const HABITAT: &str = "http://rs.tdwg.org/dwc/terms/habitat";

    /// dwc:locality IRI
    pub const LOCALITY: &str = "http://rs.tdwg.org/dwc/terms/locality";
}

/// TERN ontology classes for survey entities
pub mod tern {
    /// tern:Dataset IRI
    pub const DATASET: &str = "https://w3id.org/tern/ontologies/tern/RDFDataset";

    /// tern:Site IRI
    pub const SITE: &str = "https://w3id.org/tern/ontologies/tern/Site";

    /// tern:SiteVisit IRI
    pub const SITE_VISIT: &str = "https://w3id.org/tern/ontologies/tern/SiteVisit";

    /// tern:Survey IRI
    pub const SURVEY: &str = "https://w3id.org/tern/ontologies/tern/Survey";

    /// tern:Observation IRI
    pub const OBSERVATION: &str = "https://w3id.org/tern/ontologies/tern/Observation";

    /// tern:Sample IRI
    pub const SAMPLE: &str = "https://w3id.org/tern/ontologies/tern/Sample";

    /// tern:featureType IRI
    pub const FEATURE_TYPE: &str = "https://w3id.org/tern/ontologies/tern/featureType";

    /// tern:hasSiteVisit IRI
    pub const HAS_SITE_VISIT: &str = "https://w3id.org/tern/ontologies/tern/hasSiteVisit";
}

/// schema.org properties used for dataset description
pub mod sdo {
    /// schema:name IRI
    pub const NAME: &str = "https://schema.org/name";

    /// schema:description IRI
    pub const DESCRIPTION: &str = "https://schema.org/description";

    /// schema:isPartOf IRI
    pub const IS_PART_OF: &str = "https://schema.org/isPartOf";

    /// schema:dateCreated IRI
    pub const DATE_CREATED: &str = "https://schema.org/dateCreated";
}
