//! Feature-collection membership.
//!
//! Every member of a `geo:FeatureCollection` is a `geo:Feature` described
//! in the same graph, with at most one geometry carrying exactly one WKT
//! literal. Two members at the same WKT point are reported as a warning:
//! it usually means one site was configured under two identifiers.

use std::collections::BTreeMap;

use geolod_graph::{Graph, Iri};
use geolod_ontology::model::iris::{geo, rdfs};

use crate::report::{ConformanceReport, TestResult};

/// Checks every feature collection in graph `name`.
pub fn validate(name: &str, g: &Graph) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let validator = format!("graph/collections {name}");

    let collections: Vec<&Iri> = g.subjects_of_type(geo::FEATURE_COLLECTION).collect();
    if collections.is_empty() {
        report.push(TestResult::warn(&validator, "graph holds no feature collection"));
        return report;
    }

    for c in collections {
        let members: Vec<&Iri> = g.objects(c, rdfs::MEMBER).filter_map(|t| t.as_iri()).collect();
        let mut issues = Vec::new();
        let mut points: BTreeMap<&str, Vec<&Iri>> = BTreeMap::new();
        for &m in &members {
            if !g.has_type(m, geo::FEATURE) {
                issues.push(format!("{m} is not a geo:Feature in this graph"));
                continue;
            }
            let geometries: Vec<&Iri> =
                g.objects(m, geo::HAS_GEOMETRY).filter_map(|t| t.as_iri()).collect();
            if geometries.len() > 1 {
                issues.push(format!("{m} has {} geometries", geometries.len()));
            }
            for geom in geometries {
                let wkts: Vec<&str> = g
                    .objects(geom, geo::AS_WKT)
                    .filter_map(|t| t.as_literal())
                    .map(|l| l.lexical())
                    .collect();
                match wkts.as_slice() {
                    [wkt] => points.entry(*wkt).or_default().push(m),
                    _ => issues.push(format!("{geom} has {} WKT literals", wkts.len())),
                }
            }
        }

        if issues.is_empty() {
            report.push(TestResult::pass(
                &validator,
                format!("{c} has {} well-formed members", members.len()),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                &validator,
                format!("{c} has malformed members"),
                issues,
            ));
        }

        let shared: Vec<String> = points
            .iter()
            .filter(|(_, ms)| ms.len() > 1)
            .map(|(wkt, ms)| {
                let names: Vec<String> = ms.iter().map(|m| m.to_string()).collect();
                format!("{wkt}: {}", names.join(", "))
            })
            .collect();
        if !shared.is_empty() {
            report.push(TestResult::warn_with_details(
                &validator,
                format!("{c} has members at identical points"),
                shared,
            ));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::validators::fixtures;
    use geolod_graph::assembler::Assembler;
    use geolod_graph::term::Triple;
    use geolod_graph::{merge, CollectionDescription};

    fn desc() -> CollectionDescription {
        CollectionDescription {
            id: "AllSites".to_owned(),
            label: "All sites".to_owned(),
        }
    }

    #[test]
    fn merged_collection_conforms() {
        let mut a = Assembler::new(fixtures::smoothing());
        let x = fixtures::ice_core_graph_with(&mut a, "a", "Site_A", 1.0);
        let y = fixtures::ice_core_graph_with(&mut a, "b", "Site_B", 2.0);
        let merged = merge([&x, &y], &desc()).unwrap();
        for g in [&merged.collection, &merged.combined] {
            let report = validate("all", g);
            assert!(report.all_passed(), "{:#?}", report.failures());
            assert_eq!(report.warning_count(), 0);
            assert!(report.results[0].message.ends_with("has 2 well-formed members"));
        }
    }

    #[test]
    fn colocated_sites_warn() {
        let mut a = Assembler::new(fixtures::smoothing());
        let x = fixtures::ice_core_graph_with(&mut a, "a", "Site_A", 1.0);
        let y = fixtures::ice_core_graph_with(&mut a, "b", "Site_B", 1.0);
        let merged = merge([&x, &y], &desc()).unwrap();
        let report = validate("all", &merged.collection);
        assert!(report.all_passed());
        assert_eq!(report.results[1].severity, Severity::Warning);
    }

    #[test]
    fn member_without_feature_type_fails() {
        let x = fixtures::ice_core_graph();
        let mut merged = merge([&x], &desc()).unwrap().collection;
        merged.add(Triple::new(
            Iri::geolod("AllSites"),
            rdfs::MEMBER,
            Iri::geolod("Nowhere"),
        ));
        assert_eq!(validate("all", &merged).failure_count(), 1);
    }

    #[test]
    fn graph_without_collection_warns() {
        let report = validate("edc", &fixtures::ice_core_graph());
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 1);
    }
}
