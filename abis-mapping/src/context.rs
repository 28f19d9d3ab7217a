//! Per-run mapping context.
//!
//! A [`MappingContext`] carries everything a row mapper needs beyond the row
//! itself: the dataset identity, the IRI namespace, lookup tables shared
//! with validation, the resolved extra-field schema, and per-run vocabulary
//! instances. One context serves exactly one mapping run; vocabulary term
//! caches must not leak across runs.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use abis_tabular::{Schema, SchemaRef};
use abis_vocab::Namespace;
use chrono::{DateTime, Utc};

use crate::error::{MappingError, Result};
use crate::vocabulary::{FixedVocabulary, FlexibleVocabulary, VocabularyRegistry};

/// Turns coordinates into serialized geometry.
///
/// The engine treats geometry construction as an opaque collaborator: it
/// forwards the parts and carries any failure upward untouched.
pub trait GeometryWriter: Send + Sync {
    /// Build a WKT literal from latitude, longitude and a datum IRI.
    fn wkt_point(&self, latitude: f64, longitude: f64, datum_iri: &str) -> Result<String>;
}

/// Everything a single mapping run hands its row mapper.
pub struct MappingContext {
    dataset_iri: Arc<str>,
    namespace: Namespace,
    submitted_on: DateTime<Utc>,
    registry: &'static VocabularyRegistry,
    extra_schema: SchemaRef,
    site_geometry: HashMap<String, String>,
    visit_site: HashMap<String, String>,
    default_temporal: HashMap<String, String>,
    geometry: Option<Arc<dyn GeometryWriter>>,
    fixed: HashMap<String, FixedVocabulary>,
    flexible: HashMap<String, FlexibleVocabulary>,
}

impl MappingContext {
    /// Create a context for one run.
    pub fn new(
        dataset_iri: impl AsRef<str>,
        namespace: Namespace,
        submitted_on: DateTime<Utc>,
    ) -> Self {
        Self {
            dataset_iri: Arc::from(dataset_iri.as_ref()),
            namespace,
            submitted_on,
            registry: VocabularyRegistry::global(),
            extra_schema: Arc::new(Schema::empty()),
            site_geometry: HashMap::new(),
            visit_site: HashMap::new(),
            default_temporal: HashMap::new(),
            geometry: None,
            fixed: HashMap::new(),
            flexible: HashMap::new(),
        }
    }

    /// Use a registry other than the process-wide one (tests, embedders).
    pub fn with_registry(mut self, registry: &'static VocabularyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Default geometry per site, keyed by site identifier.
    pub fn with_site_geometry(mut self, map: HashMap<String, String>) -> Self {
        self.site_geometry = map;
        self
    }

    /// Site identifier per registered site visit.
    pub fn with_visit_site(mut self, map: HashMap<String, String>) -> Self {
        self.visit_site = map;
        self
    }

    /// Default temporal extent per site visit.
    pub fn with_default_temporal(mut self, map: HashMap<String, String>) -> Self {
        self.default_temporal = map;
        self
    }

    /// Attach a geometry writer.
    pub fn with_geometry(mut self, writer: Arc<dyn GeometryWriter>) -> Self {
        self.geometry = Some(writer);
        self
    }

    /// The IRI identifying the dataset this run maps into.
    pub fn dataset_iri(&self) -> &str {
        &self.dataset_iri
    }

    /// The namespace all run-local IRIs are minted under.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// When the data was submitted.
    pub fn submitted_on(&self) -> DateTime<Utc> {
        self.submitted_on
    }

    /// Schema over the extra fields the resolver discovered, in header
    /// order. Set by the pipeline before the first row is mapped.
    pub fn extra_schema(&self) -> &SchemaRef {
        &self.extra_schema
    }

    pub(crate) fn set_extra_schema(&mut self, schema: SchemaRef) {
        self.extra_schema = schema;
    }

    /// Lookup table: site identifier -> default geometry.
    pub fn site_geometry(&self, site_id: &str) -> Option<&str> {
        self.site_geometry.get(site_id).map(String::as_str)
    }

    /// Lookup table: site visit identifier -> site identifier.
    pub fn visit_site(&self, visit_id: &str) -> Option<&str> {
        self.visit_site.get(visit_id).map(String::as_str)
    }

    /// Lookup table: site visit identifier -> default temporal extent.
    pub fn default_temporal(&self, visit_id: &str) -> Option<&str> {
        self.default_temporal.get(visit_id).map(String::as_str)
    }

    /// The geometry writer, when one was attached.
    pub fn geometry(&self) -> Option<&dyn GeometryWriter> {
        self.geometry.as_deref()
    }

    /// The run's fixed vocabulary for `id`, created on first use.
    ///
    /// Raises for an unregistered ID or a flexible definition; both are
    /// wiring mistakes, not data problems.
    pub fn fixed_vocabulary(&mut self, id: &str) -> Result<&FixedVocabulary> {
        match self.fixed.entry(id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let def = self
                    .registry
                    .lookup(id)
                    .ok_or_else(|| MappingError::UnknownVocabulary(id.to_string()))?;
                Ok(entry.insert(FixedVocabulary::new(def)?))
            }
        }
    }

    /// The run's flexible vocabulary for `id`, created on first use.
    ///
    /// The instance (and its mint cache) lives for the duration of the run,
    /// so repeated labels resolve to one term across all rows and chunks.
    pub fn flexible_vocabulary(&mut self, id: &str) -> Result<&mut FlexibleVocabulary> {
        match self.flexible.entry(id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let def = self
                    .registry
                    .lookup(id)
                    .ok_or_else(|| MappingError::UnknownVocabulary(id.to_string()))?;
                let vocab =
                    FlexibleVocabulary::new(def, self.dataset_iri.as_ref(), self.submitted_on)?;
                Ok(entry.insert(vocab))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn context() -> MappingContext {
        MappingContext::new(
            "https://example.org/dataset/abc",
            Namespace::new("https://example.org/"),
            Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_unknown_vocabulary_is_raised() {
        let mut ctx = context();
        assert!(matches!(
            ctx.fixed_vocabulary("NOPE"),
            Err(MappingError::UnknownVocabulary(_))
        ));
        assert!(matches!(
            ctx.flexible_vocabulary("NOPE"),
            Err(MappingError::UnknownVocabulary(_))
        ));
    }

    #[test]
    fn test_vocabulary_class_mismatch_is_raised() {
        let mut ctx = context();
        // HABITAT is flexible, GEODETIC_DATUM is fixed
        assert!(matches!(
            ctx.fixed_vocabulary("HABITAT"),
            Err(MappingError::VocabularyClass(_))
        ));
        assert!(matches!(
            ctx.flexible_vocabulary("GEODETIC_DATUM"),
            Err(MappingError::VocabularyClass(_))
        ));
    }

    #[test]
    fn test_flexible_instance_persists_across_calls() {
        let mut ctx = context();
        let mut graph = abis_graph_ir::Graph::new();

        let first = ctx
            .flexible_vocabulary("HABITAT")
            .unwrap()
            .get_or_mint(&mut graph, "Rocky Outcrop");
        let minted_len = graph.len();

        let second = ctx
            .flexible_vocabulary("HABITAT")
            .unwrap()
            .get_or_mint(&mut graph, "rocky outcrop");
        assert_eq!(first.iri(), second.iri());
        assert_eq!(graph.len(), minted_len);
    }

    #[test]
    fn test_lookup_tables() {
        let ctx = context().with_visit_site(HashMap::from([(
            "V1".to_string(),
            "S1".to_string(),
        )]));
        assert_eq!(ctx.visit_site("V1"), Some("S1"));
        assert_eq!(ctx.visit_site("V2"), None);
    }
}
