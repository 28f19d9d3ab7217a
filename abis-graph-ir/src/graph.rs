//! RDF graph - a collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` to preserve duplicates (bag
//! semantics). Row mapping for adjacent rows often re-asserts the same
//! statement; call `dedupe()` or `canonicalize()` explicitly before
//! comparing or serializing chunks.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples
///
/// # Design Decisions
///
/// - **Vec storage**: preserves duplicates from per-row mapping.
/// - **Explicit deduplication**: call `dedupe()` for set semantics.
/// - **Deterministic output**: call `sort()` (or `canonicalize()`) before
///   comparing chunks; ordering is SPO lexicographic.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The triples in this graph
    triples: Vec<Triple>,
    /// Base IRI for downstream serialization
    pub base: Option<String>,
    /// Prefix mappings for downstream serialization (deterministic order)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with a base IRI
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
            ..Default::default()
        }
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Check whether the graph already contains an identical statement
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Sort triples by SPO for deterministic output
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Remove duplicate triples (apply set semantics)
    ///
    /// Sorts first to group duplicates, so the result is also deterministic.
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Sort and dedupe in one pass
    ///
    /// The standard way to prepare a chunk for round-trip comparison.
    pub fn canonicalize(&mut self) {
        self.dedupe();
    }

    /// Check if the graph is sorted
    pub fn is_sorted(&self) -> bool {
        self.triples.windows(2).all(|w| w[0] <= w[1])
    }

    /// Get all triples (consuming the graph)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Group triples by subject
    ///
    /// The graph should be sorted first for consistent grouping.
    pub fn group_by_subject(&self) -> SubjectGroups<'_> {
        SubjectGroups {
            triples: &self.triples,
            index: 0,
        }
    }

    /// Get all unique subjects in the graph
    pub fn subjects(&self) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = self.triples.iter().map(|t| &t.s).collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
            base: None,
            prefixes: BTreeMap::new(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

/// Iterator over triples grouped by subject
///
/// Assumes the graph is sorted.
pub struct SubjectGroups<'a> {
    triples: &'a [Triple],
    index: usize,
}

impl<'a> Iterator for SubjectGroups<'a> {
    type Item = (&'a Term, &'a [Triple]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.triples.len() {
            return None;
        }

        let start = self.index;
        let subject = &self.triples[start].s;

        while self.index < self.triples.len() && self.triples[self.index].s == *subject {
            self.index += 1;
        }

        Some((subject, &self.triples[start..self.index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();

        // Add triples in non-sorted order
        graph.add_triple(
            Term::iri("https://example.org/site/S2"),
            Term::iri(abis_vocab::dcterms::IDENTIFIER),
            Term::string("S2"),
        );

        graph.add_triple(
            Term::iri("https://example.org/site/S1"),
            Term::iri(abis_vocab::dcterms::IDENTIFIER),
            Term::string("S1"),
        );

        graph.add_triple(
            Term::iri("https://example.org/site/S1"),
            Term::iri(abis_vocab::rdf::TYPE),
            Term::iri(abis_vocab::tern::SITE),
        );

        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_graph_sort() {
        let mut graph = make_test_graph();

        assert!(!graph.is_sorted());
        graph.sort();
        assert!(graph.is_sorted());

        let first = graph.iter().next().unwrap();
        assert_eq!(first.s.as_iri(), Some("https://example.org/site/S1"));
    }

    #[test]
    fn test_graph_dedupe() {
        let mut graph = Graph::new();

        let triple = Triple::new(
            Term::iri("https://example.org/s"),
            Term::iri("https://example.org/p"),
            Term::string("o"),
        );

        graph.add(triple.clone());
        graph.add(triple.clone());
        graph.add(triple);

        assert_eq!(graph.len(), 3);

        graph.dedupe();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_graph_contains() {
        let graph = make_test_graph();
        let triple = Triple::new(
            Term::iri("https://example.org/site/S1"),
            Term::iri(abis_vocab::dcterms::IDENTIFIER),
            Term::string("S1"),
        );
        assert!(graph.contains(&triple));

        let absent = Triple::new(
            Term::iri("https://example.org/site/S9"),
            Term::iri(abis_vocab::dcterms::IDENTIFIER),
            Term::string("S9"),
        );
        assert!(!graph.contains(&absent));
    }

    #[test]
    fn test_group_by_subject() {
        let mut graph = make_test_graph();
        graph.sort();

        let groups: Vec<_> = graph.group_by_subject().collect();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0.as_iri(), Some("https://example.org/site/S1"));
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0.as_iri(), Some("https://example.org/site/S2"));
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_graph_prefixes() {
        let mut graph = Graph::new();
        graph.add_prefix("tern", "https://w3id.org/tern/ontologies/tern/");
        graph.add_prefix("skos", "http://www.w3.org/2004/02/skos/core#");

        assert_eq!(graph.prefixes.len(), 2);
    }
}
