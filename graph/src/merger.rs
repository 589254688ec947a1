//! Collection Merger.
//!
//! Combines per-dataset graphs into one combined graph and a
//! `geo:FeatureCollection` over every sampling location. Both results are
//! set unions, so they do not depend on input order, and a location shared
//! by several inputs is a single member.

use std::collections::BTreeSet;

use serde::Deserialize;
use tracing::info;

use geolod_ontology::model::iris::{geo, rdf, rdfs};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::ids;
use crate::term::{Iri, Literal};

/// Identity of a feature collection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CollectionDescription {
    /// Local name of the collection node.
    pub id: String,
    /// English label.
    pub label: String,
}

/// The merge result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Merged {
    /// Union of all inputs plus the collection graph.
    pub combined: Graph,
    /// The collection node, its members and their geometries.
    pub collection: Graph,
    /// Distinct member locations, in order.
    pub members: Vec<Iri>,
}

/// Merges `graphs` and collects their locations under `desc`.
///
/// Members are the subjects typed `geo:Feature`. The collection graph also
/// carries each member's own triples and its geometry node, so it can be
/// published standalone; the triples are identical to the inputs' and merge
/// back without duplicates.
///
/// # Errors
///
/// Returns [`GraphError::InvalidLocalName`] for a malformed collection id.
pub fn merge<'a>(
    graphs: impl IntoIterator<Item = &'a Graph>,
    desc: &CollectionDescription,
) -> Result<Merged, GraphError> {
    let node = ids::local(&desc.id)?;

    let mut combined = Graph::new();
    let mut inputs = 0usize;
    for g in graphs {
        combined.merge(g);
        inputs += 1;
    }

    let members: BTreeSet<Iri> = combined
        .subjects_of_type(geo::FEATURE)
        .filter(|s| **s != node)
        .cloned()
        .collect();

    let mut collection = Graph::new();
    collection.insert(&node, rdf::TYPE, Iri::new(geo::FEATURE_COLLECTION));
    collection.insert(&node, rdfs::LABEL, Literal::en(&desc.label));
    for member in &members {
        collection.insert(&node, rdfs::MEMBER, member);
    }

    let by_subject = combined.by_subject();
    let mut geometries: BTreeSet<Iri> = BTreeSet::new();
    for member in &members {
        if let Some(triples) = by_subject.get(member) {
            for t in triples {
                if t.p.as_str() == geo::HAS_GEOMETRY {
                    if let Some(iri) = t.o.as_iri() {
                        geometries.insert(iri.clone());
                    }
                }
                if is_location_predicate(t.p.as_str()) {
                    collection.add((*t).clone());
                }
            }
        }
    }
    for geom in &geometries {
        if let Some(triples) = by_subject.get(geom) {
            collection.extend(triples.iter().map(|t| (*t).clone()));
        }
    }

    combined.merge(&collection);
    info!(
        collection = %desc.id,
        inputs,
        members = members.len(),
        triples = combined.len(),
        "graphs merged"
    );
    Ok(Merged {
        combined,
        collection,
        members: members.into_iter().collect(),
    })
}

fn is_location_predicate(p: &str) -> bool {
    p == rdf::TYPE || p == rdfs::LABEL || p == geo::HAS_GEOMETRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{add_geo_site, wkt_point};

    /// Sites whose coordinates depend on the name only, so the same site
    /// built in two graphs yields identical triples.
    fn sites(names: &[&str]) -> Graph {
        let mut g = Graph::new();
        for name in names {
            let x = f64::from(name.as_bytes()[0] % 90);
            let wkt = wkt_point(x, x).unwrap_or_default();
            add_geo_site(&mut g, &Iri::geolod(name), name, &wkt, &[]);
        }
        g
    }

    fn desc() -> CollectionDescription {
        CollectionDescription {
            id: "AllSites".to_owned(),
            label: "All sites".to_owned(),
        }
    }

    #[test]
    fn shared_location_is_one_member() {
        let a = sites(&["A", "B", "C"]);
        let b = sites(&["C", "D"]);
        let merged = merge([&a, &b], &desc()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(merged.members.len(), 4);
        let members = merged
            .collection
            .objects(&Iri::geolod("AllSites"), rdfs::MEMBER)
            .count();
        assert_eq!(members, 4);
    }

    #[test]
    fn merge_is_order_independent() {
        let a = sites(&["A", "B"]);
        let b = sites(&["X"]);
        let ab = merge([&a, &b], &desc()).unwrap_or_else(|e| panic!("{e}"));
        let ba = merge([&b, &a], &desc()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(ab, ba);
    }

    #[test]
    fn collection_is_subset_of_combined() {
        let merged = merge([&sites(&["A"])], &desc()).unwrap_or_else(|e| panic!("{e}"));
        assert!(merged.collection.iter().all(|t| merged.combined.iter().any(|c| c == t)));
        assert_eq!(merged.collection.subjects().len(), 3);
    }

    #[test]
    fn bad_collection_id_is_rejected() {
        let bad = CollectionDescription {
            id: "all sites".to_owned(),
            label: String::new(),
        };
        assert!(matches!(
            merge(std::iter::empty(), &bad),
            Err(GraphError::InvalidLocalName(_))
        ));
    }
}
