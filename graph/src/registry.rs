//! Shared named individuals: the smoothing-method singleton table and the
//! vocabulary individuals that data graphs reference.

use std::collections::BTreeMap;

use geolod_ontology::model::iris::{owl, rdf, rdfs, xsd};
use geolod_ontology::vocab::core::smoothing_individual;
use geolod_ontology::{Individual, IndividualValue, SmoothingSpec};

use crate::term::{Iri, Literal, Term, Triple};

/// Append-only table of smoothing-method nodes keyed by
/// `(kind, window, order)`.
///
/// The node IRI is derived from the parameters alone, so graphs built by
/// separate registries still agree on it; within one registry every lookup
/// for the same parameters also returns the same allocation.
#[derive(Clone, Debug, Default)]
pub struct MethodRegistry {
    nodes: BTreeMap<SmoothingSpec, Iri>,
}

impl MethodRegistry {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The node for `spec`, created on first use.
    pub fn get_or_insert(&mut self, spec: SmoothingSpec) -> Iri {
        self.nodes
            .entry(spec)
            .or_insert_with(|| Iri::new(spec.iri()))
            .clone()
    }

    /// The node for `spec` if it was already created.
    #[must_use]
    pub fn get(&self, spec: &SmoothingSpec) -> Option<&Iri> {
        self.nodes.get(spec)
    }

    /// Number of distinct methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no method was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registered methods in parameter order.
    pub fn iter(&self) -> impl Iterator<Item = (&SmoothingSpec, &Iri)> {
        self.nodes.iter()
    }

    /// Definition triples of the node for `spec`.
    #[must_use]
    pub fn definition(&self, spec: &SmoothingSpec) -> Vec<Triple> {
        individual_triples(&smoothing_individual(spec))
    }
}

/// Triples describing a vocabulary individual inside a data graph.
#[must_use]
pub fn individual_triples(ind: &Individual) -> Vec<Triple> {
    let s = Iri::new(&ind.id);
    let mut out = vec![
        Triple::new(s.clone(), rdf::TYPE, Iri::new(ind.type_)),
        Triple::new(s.clone(), rdf::TYPE, Iri::new(owl::NAMED_INDIVIDUAL)),
        Triple::new(s.clone(), rdfs::LABEL, Literal::en(&ind.label)),
    ];
    if let Some(comment) = &ind.comment {
        out.push(Triple::new(s.clone(), rdfs::COMMENT, Literal::en(comment)));
    }
    for (p, value) in &ind.properties {
        let o: Term = match value {
            IndividualValue::Str(v) => Literal::string(v).into(),
            IndividualValue::Int(n) => Literal::integer(*n).into(),
            IndividualValue::Year(y) => Literal::typed(format!("{y:04}"), xsd::G_YEAR).into(),
            IndividualValue::IriRef(iri) => Iri::new(iri).into(),
        };
        out.push(Triple::new(s.clone(), *p, o));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geolod_ontology::model::iris::geolod;

    #[test]
    fn same_parameters_share_one_node() {
        let mut reg = MethodRegistry::new();
        let a = reg.get_or_insert(SmoothingSpec::rolling_median(3));
        let b = reg.get_or_insert(SmoothingSpec::rolling_median(3));
        assert_eq!(a, b);
        assert!(a.ptr_eq(&b));
        assert_eq!(reg.len(), 1);
        reg.get_or_insert(SmoothingSpec::savitzky_golay(3, 2));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn separate_registries_agree_on_iri() {
        let mut r1 = MethodRegistry::new();
        let mut r2 = MethodRegistry::new();
        let spec = SmoothingSpec::savitzky_golay(11, 2);
        assert_eq!(r1.get_or_insert(spec), r2.get_or_insert(spec));
    }

    #[test]
    fn definition_carries_parameters() {
        let reg = MethodRegistry::new();
        let spec = SmoothingSpec::savitzky_golay(7, 3);
        let triples = reg.definition(&spec);
        assert!(triples
            .iter()
            .any(|t| t.p.as_str() == geolod::WINDOW_SIZE && t.o == Literal::integer(7).into()));
        assert!(triples
            .iter()
            .any(|t| t.p.as_str() == geolod::POLY_ORDER && t.o == Literal::integer(3).into()));
    }
}
