//! Smoothing-method singleton discipline.
//!
//! A graph holds at most one method node per `(filter class, window,
//! order)`, each node states its window exactly once, and every
//! observation links at most one method of each kind.

use std::collections::BTreeMap;

use geolod_graph::{Graph, Iri, Term};
use geolod_ontology::model::iris::{geolod, sosa};

use crate::report::{ConformanceReport, TestResult};

const FILTERS: [&str; 2] = [geolod::ROLLING_MEDIAN_FILTER, geolod::SAVITZKY_GOLAY_FILTER];

/// Checks the smoothing-method nodes of graph `name`.
pub fn validate(name: &str, g: &Graph) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let validator = format!("graph/methods {name}");

    let mut by_key: BTreeMap<(&str, Option<&Term>, Option<&Term>), Vec<&Iri>> = BTreeMap::new();
    let mut malformed = Vec::new();
    for class in FILTERS {
        for node in g.subjects_of_type(class) {
            let windows: Vec<&Term> = g.objects(node, geolod::WINDOW_SIZE).collect();
            let orders: Vec<&Term> = g.objects(node, geolod::POLY_ORDER).collect();
            if windows.len() != 1 || orders.len() > 1 {
                malformed.push(format!(
                    "{node}: {} window sizes, {} polynomial orders",
                    windows.len(),
                    orders.len()
                ));
            }
            by_key
                .entry((class, windows.first().copied(), orders.first().copied()))
                .or_default()
                .push(node);
        }
    }

    let duplicated: Vec<String> = by_key
        .values()
        .filter(|nodes| nodes.len() > 1)
        .map(|nodes| {
            nodes
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    if duplicated.is_empty() && malformed.is_empty() {
        report.push(TestResult::pass(
            &validator,
            format!("{} smoothing-method nodes, one per parameter set", by_key.len()),
        ));
    } else {
        malformed.extend(duplicated);
        report.push(TestResult::fail_with_details(
            &validator,
            "smoothing-method nodes are duplicated or malformed",
            malformed,
        ));
    }

    let mut multiple = Vec::new();
    for obs in g.subjects_of_type(sosa::OBSERVATION) {
        for p in [geolod::SMOOTHING_METHOD_MEDIAN, geolod::SMOOTHING_METHOD_SAVGOL] {
            let n = g.objects(obs, p).count();
            if n > 1 {
                multiple.push(format!("{obs}: {n} links via {p}"));
            }
        }
    }
    if multiple.is_empty() {
        report.push(TestResult::pass(
            &validator,
            "observations link at most one method of each kind",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            &validator,
            format!("{} observations link several methods of one kind", multiple.len()),
            multiple,
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::fixtures;
    use geolod_graph::assembler::Assembler;
    use geolod_graph::term::{Literal, Triple};
    use geolod_ontology::model::iris::rdf;

    #[test]
    fn assembled_graphs_conform() {
        for g in [fixtures::ice_core_graph(), fixtures::speleothem_graph()] {
            let report = validate("t", &g);
            assert!(report.all_passed(), "{:#?}", report.failures());
        }
    }

    #[test]
    fn merged_graphs_keep_one_node_per_parameter_set() {
        let mut a = Assembler::new(fixtures::smoothing());
        let mut g = fixtures::ice_core_graph_with(&mut a, "a", "Site_A", 1.0);
        g.merge(&fixtures::ice_core_graph_with(&mut a, "b", "Site_B", 2.0));
        let report = validate("merged", &g);
        assert!(report.all_passed(), "{:#?}", report.failures());
        assert!(report.results[0].message.starts_with("2 smoothing-method"));
    }

    #[test]
    fn twin_node_is_a_violation() {
        let mut g = fixtures::ice_core_graph();
        let twin = Iri::geolod("RollingMedian_copy");
        g.add(Triple::new(twin.clone(), rdf::TYPE, Iri::new(geolod::ROLLING_MEDIAN_FILTER)));
        g.add(Triple::new(twin, geolod::WINDOW_SIZE, Literal::integer(3)));
        let report = validate("t", &g);
        assert_eq!(report.failure_count(), 1);
        assert!(report.failures()[0].details[0].contains("RollingMedian_copy"));
    }

    #[test]
    fn second_method_link_is_a_violation() {
        let mut g = fixtures::ice_core_graph();
        let obs = g.subjects_of_type(sosa::OBSERVATION).next().unwrap().clone();
        g.add(Triple::new(
            obs,
            geolod::SMOOTHING_METHOD_MEDIAN,
            Iri::geolod("RollingMedian_w99"),
        ));
        assert_eq!(validate("t", &g).failure_count(), 1);
    }
}
