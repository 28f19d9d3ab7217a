//! RDF triple
//!
//! A statement of (subject, predicate, object). The predicate must be an IRI
//! term; that is enforced by construction convention, not the type system,
//! matching how the rest of the IR treats invariants.

use crate::Term;
use serde::{Deserialize, Serialize};

/// A single RDF statement
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term (IRI or blank node)
    pub s: Term,
    /// Predicate term (always an IRI)
    pub p: Term,
    /// Object term
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        debug_assert!(p.is_iri(), "predicate must be an IRI term");
        Self { s, p, o }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_ordering_is_spo() {
        let a = Triple::new(
            Term::iri("https://example.org/a"),
            Term::iri("https://example.org/p"),
            Term::string("x"),
        );
        let b = Triple::new(
            Term::iri("https://example.org/b"),
            Term::iri("https://example.org/p"),
            Term::string("x"),
        );
        assert!(a < b);

        let a2 = Triple::new(
            Term::iri("https://example.org/a"),
            Term::iri("https://example.org/q"),
            Term::string("x"),
        );
        assert!(a < a2);
    }

    #[test]
    fn test_triple_display() {
        let t = Triple::new(
            Term::iri("https://example.org/s"),
            Term::iri("https://example.org/p"),
            Term::string("o"),
        );
        assert_eq!(
            format!("{}", t),
            "<https://example.org/s> <https://example.org/p> \"o\" ."
        );
    }
}
