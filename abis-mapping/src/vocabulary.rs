//! Controlled vocabularies and on-the-fly term minting.
//!
//! A vocabulary turns free-text cell values into canonical ontology terms.
//! Matching is insensitive to case and internal whitespace, over preferred
//! and alternate labels. Fixed vocabularies are closed sets; flexible
//! vocabularies mint a new SKOS concept for unseen values, memoized per
//! instance so one mapping run never declares the same term twice.

use std::collections::HashMap;
use std::sync::Arc;

use abis_graph_ir::{Graph, Term as Node};
use abis_vocab::{dcterms, percent_escape, rdf, skos};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{MappingError, Result};

/// A canonical vocabulary term.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    iri: Arc<str>,
    label: String,
    definition: Option<String>,
    alt_labels: Vec<String>,
}

impl Term {
    /// Create a term with IRI and preferred label.
    pub fn new(iri: impl AsRef<str>, label: impl Into<String>) -> Self {
        Self {
            iri: Arc::from(iri.as_ref()),
            label: label.into(),
            definition: None,
            alt_labels: Vec::new(),
        }
    }

    /// Attach a definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Attach alternate labels (synonyms the raw data may use).
    pub fn with_alt_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.alt_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// The term IRI.
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// The preferred label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The definition, when one exists.
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    /// Alternate labels.
    pub fn alt_labels(&self) -> &[String] {
        &self.alt_labels
    }
}

/// Normalize a raw label for matching and memoization: trim, collapse
/// internal whitespace, lowercase.
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A vocabulary definition: a stable ID, the concept scheme it belongs to,
/// its known terms, and whether unseen values may mint new terms.
#[derive(Debug, Clone)]
pub struct VocabularyDef {
    id: String,
    scheme_iri: String,
    flexible: bool,
    terms: Vec<Term>,
    /// Normalized label (preferred or alternate) -> index into `terms`.
    index: HashMap<String, usize>,
}

impl VocabularyDef {
    /// Create a vocabulary definition.
    pub fn new(
        id: impl Into<String>,
        scheme_iri: impl Into<String>,
        flexible: bool,
        terms: Vec<Term>,
    ) -> Self {
        let mut index = HashMap::new();
        for (i, term) in terms.iter().enumerate() {
            index.entry(normalize_label(term.label())).or_insert(i);
            for alt in term.alt_labels() {
                index.entry(normalize_label(alt)).or_insert(i);
            }
        }
        Self {
            id: id.into(),
            scheme_iri: scheme_iri.into(),
            flexible,
            terms,
            index,
        }
    }

    /// The vocabulary's stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The concept scheme IRI minted terms attach to.
    pub fn scheme_iri(&self) -> &str {
        &self.scheme_iri
    }

    /// Whether this vocabulary may mint new terms.
    pub fn is_flexible(&self) -> bool {
        self.flexible
    }

    /// The known terms.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Look up a known term by raw label (normalized match).
    pub fn lookup(&self, raw: &str) -> Option<&Term> {
        self.index
            .get(&normalize_label(raw))
            .map(|&i| &self.terms[i])
    }
}

/// Process-wide catalogue of vocabulary definitions.
///
/// The global registry is read-only after process start; per-run state
/// (term caches) lives in the vocabulary instances, never here.
#[derive(Debug, Default)]
pub struct VocabularyRegistry {
    vocabs: HashMap<String, Arc<VocabularyDef>>,
}

impl VocabularyRegistry {
    /// Create an empty registry (tests and embedders).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vocabulary definition under its ID.
    pub fn register(&mut self, def: VocabularyDef) {
        self.vocabs.insert(def.id().to_string(), Arc::new(def));
    }

    /// Look up a vocabulary by ID.
    pub fn lookup(&self, id: &str) -> Option<Arc<VocabularyDef>> {
        self.vocabs.get(id).cloned()
    }

    /// The process-wide registry of built-in vocabularies.
    pub fn global() -> &'static VocabularyRegistry {
        static GLOBAL: Lazy<VocabularyRegistry> = Lazy::new(builtin_registry);
        &GLOBAL
    }
}

/// Built-in vocabularies shipped with the engine.
fn builtin_registry() -> VocabularyRegistry {
    let mut registry = VocabularyRegistry::new();

    registry.register(VocabularyDef::new(
        "GEODETIC_DATUM",
        "http://www.opengis.net/def/crs/EPSG/0",
        false,
        vec![
            Term::new("http://www.opengis.net/def/crs/EPSG/0/4326", "WGS84")
                .with_alt_labels(["WGS 84", "EPSG:4326"]),
            Term::new("http://www.opengis.net/def/crs/EPSG/0/4283", "GDA94")
                .with_alt_labels(["GDA 94", "EPSG:4283"]),
            Term::new("http://www.opengis.net/def/crs/EPSG/0/7844", "GDA2020")
                .with_alt_labels(["GDA 2020", "EPSG:7844"]),
        ],
    ));

    registry.register(VocabularyDef::new(
        "HABITAT",
        "https://linked.data.gov.au/def/nrm/habitat",
        true,
        vec![
            Term::new(
                "https://linked.data.gov.au/def/nrm/habitat/woodland",
                "Woodland",
            )
            .with_definition("Dominated by trees with an open canopy."),
            Term::new(
                "https://linked.data.gov.au/def/nrm/habitat/grassland",
                "Grassland",
            )
            .with_definition("Dominated by grasses with few woody plants."),
        ],
    ));

    registry
}

/// A closed vocabulary: every valid value resolves to a known term.
#[derive(Debug, Clone)]
pub struct FixedVocabulary {
    def: Arc<VocabularyDef>,
}

impl FixedVocabulary {
    /// Wrap a non-flexible definition.
    ///
    /// Wiring a flexible definition into a fixed wrapper is a programming
    /// error, raised immediately.
    pub fn new(def: Arc<VocabularyDef>) -> Result<Self> {
        if def.is_flexible() {
            return Err(MappingError::VocabularyClass(format!(
                "Vocabulary {} is flexible but a fixed vocabulary was requested",
                def.id()
            )));
        }
        Ok(Self { def })
    }

    /// The wrapped definition's ID.
    pub fn id(&self) -> &str {
        self.def.id()
    }

    /// Resolve a raw value to its canonical term.
    ///
    /// Called on already-validated data; a miss means the field was wired
    /// to the wrong vocabulary, not that the data is bad.
    pub fn get(&self, raw: &str) -> Result<Term> {
        self.def
            .lookup(raw)
            .cloned()
            .ok_or_else(|| MappingError::UnknownTerm {
                vocabulary: self.def.id().to_string(),
                label: raw.to_string(),
            })
    }
}

/// An open vocabulary that mints new terms for unseen values.
///
/// Holds the submission context a minted term's provenance triples need,
/// and a run-local cache keyed by normalized label.
///
/// # Invariant
///
/// For a single instance, `get_or_mint` called twice with equal normalized
/// labels returns the identical term IRI, and the declaration triples are
/// written to the graph exactly once.
#[derive(Debug)]
pub struct FlexibleVocabulary {
    def: Arc<VocabularyDef>,
    source_iri: Arc<str>,
    submitted_on: DateTime<Utc>,
    scope_note: Option<String>,
    minted: HashMap<String, Term>,
}

impl FlexibleVocabulary {
    /// Wrap a flexible definition with its run context.
    ///
    /// Wiring a closed definition into a flexible wrapper is a programming
    /// error, raised immediately.
    pub fn new(
        def: Arc<VocabularyDef>,
        source_iri: impl AsRef<str>,
        submitted_on: DateTime<Utc>,
    ) -> Result<Self> {
        if !def.is_flexible() {
            return Err(MappingError::VocabularyClass(format!(
                "Vocabulary {} is fixed but a flexible vocabulary was requested",
                def.id()
            )));
        }
        Ok(Self {
            def,
            source_iri: Arc::from(source_iri.as_ref()),
            submitted_on,
            scope_note: None,
            minted: HashMap::new(),
        })
    }

    /// The wrapped definition's ID.
    pub fn id(&self) -> &str {
        self.def.id()
    }

    /// Set the scope/definition note applied to terms minted from now on.
    ///
    /// Last write wins for the instance; never retroactively applied to
    /// already-cached terms.
    pub fn set_scope_note(&mut self, note: impl Into<String>) {
        self.scope_note = Some(note.into());
    }

    /// Resolve a raw value, minting a new term into `graph` on first sight.
    ///
    /// Known terms resolve without writing anything (their declarations
    /// live in the published vocabulary). Unseen values mint a SKOS concept
    /// under the definition's scheme: the declaration triples are written
    /// once, then the term is served from the cache.
    pub fn get_or_mint(&mut self, graph: &mut Graph, raw: &str) -> Term {
        if let Some(known) = self.def.lookup(raw) {
            return known.clone();
        }

        let key = normalize_label(raw);
        if let Some(cached) = self.minted.get(&key) {
            return cached.clone();
        }

        let iri = format!("{}/{}", self.def.scheme_iri(), percent_escape(&key));
        let label = raw.trim().to_string();
        debug!(vocabulary = self.def.id(), %iri, "minting vocabulary term");

        let subject = Node::iri(&iri);
        graph.add_triple(
            subject.clone(),
            Node::iri(rdf::TYPE),
            Node::iri(skos::CONCEPT),
        );
        graph.add_triple(
            subject.clone(),
            Node::iri(skos::PREF_LABEL),
            Node::lang_string(&label, "en"),
        );
        graph.add_triple(
            subject.clone(),
            Node::iri(skos::IN_SCHEME),
            Node::iri(self.def.scheme_iri()),
        );
        if let Some(note) = &self.scope_note {
            graph.add_triple(
                subject.clone(),
                Node::iri(skos::DEFINITION),
                Node::string(note),
            );
        }
        graph.add_triple(
            subject.clone(),
            Node::iri(dcterms::SOURCE),
            Node::iri(self.source_iri.as_ref()),
        );
        graph.add_triple(
            subject,
            Node::iri(dcterms::ISSUED),
            Node::date(self.submitted_on.date_naive()),
        );

        let mut term = Term::new(&iri, label);
        if let Some(note) = &self.scope_note {
            term = term.with_definition(note.clone());
        }
        self.minted.insert(key, term.clone());
        term
    }
}
