//! In-memory graph with set semantics.
//!
//! Triples live in a `BTreeSet`, so inserting a triple twice has no
//! observable effect and iteration order is fixed by the term ordering. Union
//! is therefore commutative and associative.

use std::collections::btree_set;
use std::collections::{BTreeMap, BTreeSet};

use geolod_ontology::model::iris::rdf;

use crate::term::{Iri, Term, Triple};

/// A set of ground triples.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `(s, p, o)`. Returns `false` if the triple was already present.
    pub fn insert(&mut self, s: &Iri, p: &str, o: impl Into<Term>) -> bool {
        self.triples.insert(Triple {
            s: s.clone(),
            p: Iri::new(p),
            o: o.into(),
        })
    }

    /// Inserts a prebuilt triple.
    pub fn add(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates triples in subject, predicate, object order.
    pub fn iter(&self) -> btree_set::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Returns `true` if the exact triple is present.
    #[must_use]
    pub fn contains(&self, s: &str, p: &str, o: &Term) -> bool {
        self.triples.contains(&Triple {
            s: Iri::new(s),
            p: Iri::new(p),
            o: o.clone(),
        })
    }

    /// Adds every triple of `other`.
    pub fn merge(&mut self, other: &Graph) {
        self.triples.extend(other.triples.iter().cloned());
    }

    /// Objects of `(s, p, _)` in order.
    pub fn objects<'a>(&'a self, s: &Iri, p: &str) -> impl Iterator<Item = &'a Term> + 'a {
        let lower = Triple {
            s: s.clone(),
            p: Iri::new(p),
            o: Term::Iri(Iri::new("")),
        };
        let s = s.clone();
        let p = Iri::new(p);
        self.triples
            .range(lower..)
            .take_while(move |t| t.s == s && t.p == p)
            .map(|t| &t.o)
    }

    /// Returns `true` if `s` has `rdf:type class`.
    #[must_use]
    pub fn has_type(&self, s: &Iri, class: &str) -> bool {
        self.objects(s, rdf::TYPE)
            .any(|o| o.as_iri().is_some_and(|iri| iri.as_str() == class))
    }

    /// Distinct subjects typed `class`, in order.
    pub fn subjects_of_type<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Iri> + 'a {
        self.triples
            .iter()
            .filter(move |t| {
                t.p.as_str() == rdf::TYPE
                    && t.o.as_iri().is_some_and(|iri| iri.as_str() == class)
            })
            .map(|t| &t.s)
    }

    /// Distinct subjects, in order.
    pub fn subjects(&self) -> BTreeSet<&Iri> {
        self.triples.iter().map(|t| &t.s).collect()
    }

    /// Triples grouped by subject, each group in predicate/object order.
    #[must_use]
    pub fn by_subject(&self) -> BTreeMap<&Iri, Vec<&Triple>> {
        let mut groups: BTreeMap<&Iri, Vec<&Triple>> = BTreeMap::new();
        for t in &self.triples {
            groups.entry(&t.s).or_default().push(t);
        }
        groups
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;
    use geolod_ontology::model::iris::rdfs;

    #[test]
    fn insert_is_idempotent() {
        let mut g = Graph::new();
        let s = Iri::new("http://example.org/a");
        assert!(g.insert(&s, rdfs::LABEL, Literal::en("A")));
        assert!(!g.insert(&s, rdfs::LABEL, Literal::en("A")));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn objects_scans_one_subject_predicate() {
        let mut g = Graph::new();
        let a = Iri::new("http://example.org/a");
        let b = Iri::new("http://example.org/b");
        g.insert(&a, rdf::TYPE, Iri::new("http://example.org/C1"));
        g.insert(&a, rdf::TYPE, Iri::new("http://example.org/C2"));
        g.insert(&a, rdfs::LABEL, Literal::en("A"));
        g.insert(&b, rdf::TYPE, Iri::new("http://example.org/C1"));
        assert_eq!(g.objects(&a, rdf::TYPE).count(), 2);
        assert!(g.has_type(&a, "http://example.org/C2"));
        assert!(!g.has_type(&b, "http://example.org/C2"));
        assert_eq!(g.subjects_of_type("http://example.org/C1").count(), 2);
    }

    #[test]
    fn by_subject_groups_all_triples() {
        let mut g = Graph::new();
        let a = Iri::new("http://example.org/a");
        g.insert(&a, rdf::TYPE, Iri::new("http://example.org/C"));
        g.insert(&a, rdfs::LABEL, Literal::en("A"));
        let groups = g.by_subject();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(&a).map(Vec::len), Some(2));
    }

    #[test]
    fn merge_is_union() {
        let a = Iri::new("http://example.org/a");
        let mut g1 = Graph::new();
        g1.insert(&a, rdfs::LABEL, Literal::en("A"));
        let mut g2 = g1.clone();
        g2.insert(&a, rdfs::COMMENT, Literal::en("note"));
        g1.merge(&g2);
        assert_eq!(g1, g2);
    }
}
