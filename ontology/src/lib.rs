//! geo-lod palaeoclimate vocabulary encoded as typed Rust data.
//!
//! The `geolod-ontology` crate provides the namespace registry shared by
//! every graph in the workspace, the static core vocabulary, the ice-core and
//! speleothem extensions, and serializers that produce Turtle, N-Triples,
//! JSON-LD and a Mermaid taxonomy diagram.
//!
//! # Entry Point
//!
//! ```
//! use geolod_ontology::{Ontology, SmoothingParams};
//!
//! let ontology = Ontology::new(&SmoothingParams::default());
//! assert_eq!(ontology.modules.len(), 3);
//! ```
//!
//! # Serialization
//!
//! ```
//! use geolod_ontology::{Ontology, SmoothingParams};
//!
//! let ontology = Ontology::new(&SmoothingParams::default());
//! let core = &ontology.modules[0];
//! let turtle = geolod_ontology::serializer::turtle::to_turtle(core);
//! assert!(turtle.contains("geolod:RollingMedian_w11"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod prefix;
pub mod serializer;
pub mod smoothing;
pub mod vocab;

pub use model::{
    Class, ExternalLabel, Individual, IndividualValue, Ontology, Property, PropertyKind,
    Restriction, VocabularyHeader, VocabularyModule,
};
pub use prefix::{Prefix, CRS_WGS84, GEOLOD_BASE};
pub use smoothing::{SmoothingKind, SmoothingParams, SmoothingSpec};

impl Ontology {
    /// Returns the complete geo-lod vocabulary for the given smoothing
    /// parameters: core, then the ice-core and speleothem extensions.
    #[must_use]
    pub fn new(params: &SmoothingParams) -> Ontology {
        Ontology {
            smoothing: *params,
            modules: vec![
                vocab::core::module(params),
                vocab::ice_core::module(),
                vocab::speleothem::module(),
            ],
        }
    }
}

impl Default for Ontology {
    fn default() -> Self {
        Ontology::new(&SmoothingParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris::geolod;

    #[test]
    fn module_order_is_core_first() {
        let ontology = Ontology::default();
        let files: Vec<&str> = ontology.modules.iter().map(|m| m.header.file_name).collect();
        assert_eq!(
            files,
            ["geo_lod_core.ttl", "geo_lod_ice_core.ttl", "geo_lod_speleothem.ttl"]
        );
    }

    #[test]
    fn class_count() {
        assert_eq!(Ontology::default().class_count(), 11 + 12 + 9);
    }

    #[test]
    fn property_count() {
        assert_eq!(Ontology::default().property_count(), 16 + 1 + 1);
    }

    #[test]
    fn individual_count() {
        assert_eq!(Ontology::default().individual_count(), 4 + 2 + 2);
    }

    #[test]
    fn class_iris_are_unique() {
        let ontology = Ontology::default();
        let mut seen = std::collections::HashSet::new();
        for m in &ontology.modules {
            for c in &m.classes {
                assert!(seen.insert(c.id), "duplicate class {}", c.id);
            }
        }
    }

    #[test]
    fn every_geolod_term_is_in_the_project_namespace() {
        let ontology = Ontology::default();
        for m in &ontology.modules {
            for c in &m.classes {
                assert!(c.id.starts_with(GEOLOD_BASE), "{}", c.id);
            }
            for p in &m.properties {
                assert!(p.id.starts_with(GEOLOD_BASE), "{}", p.id);
            }
            for i in &m.individuals {
                assert!(i.id.starts_with(GEOLOD_BASE), "{}", i.id);
            }
        }
    }

    #[test]
    fn find_individual_by_iri() {
        let ontology = Ontology::default();
        assert!(ontology.find_individual(geolod::DELTA18O).is_some());
        assert!(ontology
            .find_individual("http://w3id.org/geo-lod/SavitzkyGolay_w11_p2")
            .is_some());
        assert!(ontology.find_class(geolod::CAVE).is_some());
        assert!(ontology.find_property(geolod::COLLECTED_FROM).is_some());
    }
}
