//! Observation invariants of a data graph.
//!
//! - every observation IRI follows the minting pattern
//! - each observation carries exactly one value, sample, property,
//!   measurement type, chronology, age and data source
//! - every node an observation links to is described in the same graph

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use geolod_graph::{Graph, Iri};
use geolod_ontology::model::iris::{crm, geolod, prov, sosa};
use geolod_ontology::GEOLOD_BASE;

use crate::report::{ConformanceReport, TestResult};

/// Local-name pattern of minted observation identifiers.
pub const OBSERVATION_ID: &str =
    r"^Obs_(CH4|d18O|d13C)_[A-Za-z0-9-]+(_e([A-Za-z0-9-]|_[0-9A-F]{2})+)?_[0-9]{4,}$";

/// Predicates every observation has exactly once.
const FUNCTIONAL: [&str; 7] = [
    sosa::HAS_SIMPLE_RESULT,
    sosa::HAS_FEATURE_OF_INTEREST,
    sosa::OBSERVED_PROPERTY,
    geolod::MEASUREMENT_TYPE_PROP,
    geolod::AGE_CHRONOLOGY,
    geolod::AGE_KA_BP,
    prov::WAS_DERIVED_FROM,
];

/// Links whose targets must be described in the graph.
const REFERENCES: [&str; 8] = [
    sosa::HAS_FEATURE_OF_INTEREST,
    sosa::OBSERVED_PROPERTY,
    geolod::MEASUREMENT_TYPE_PROP,
    geolod::AGE_CHRONOLOGY,
    prov::WAS_DERIVED_FROM,
    crm::P7_TOOK_PLACE_AT,
    geolod::SMOOTHING_METHOD_MEDIAN,
    geolod::SMOOTHING_METHOD_SAVGOL,
];

/// Checks the observations of graph `name`.
///
/// # Errors
///
/// Returns an error only if the identifier pattern does not compile.
pub fn validate(name: &str, g: &Graph) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let validator = format!("graph/observations {name}");
    let pattern = Regex::new(OBSERVATION_ID).context("observation id pattern")?;

    let observations: Vec<&Iri> = g.subjects_of_type(sosa::OBSERVATION).collect();
    if observations.is_empty() {
        report.push(TestResult::warn(&validator, "graph holds no observations"));
        return Ok(report);
    }

    let malformed: Vec<String> = observations
        .iter()
        .filter(|o| {
            !o.as_str()
                .strip_prefix(GEOLOD_BASE)
                .is_some_and(|local| pattern.is_match(local))
        })
        .map(|o| o.to_string())
        .collect();
    if malformed.is_empty() {
        report.push(TestResult::pass(
            &validator,
            format!("{} observation identifiers follow the minting pattern", observations.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            &validator,
            format!("{} observation identifiers are malformed", malformed.len()),
            malformed,
        ));
    }

    let mut cardinality = Vec::new();
    for o in &observations {
        for p in FUNCTIONAL {
            let n = g.objects(o, p).count();
            if n != 1 {
                cardinality.push(format!("{o}: {n} values for {p}"));
            }
        }
    }
    if cardinality.is_empty() {
        report.push(TestResult::pass(
            &validator,
            "every observation has one value, sample, property, type, chronology, age and source",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            &validator,
            format!("{} cardinality violations", cardinality.len()),
            cardinality,
        ));
    }

    let described = g.subjects();
    let mut dangling: BTreeSet<String> = BTreeSet::new();
    for o in &observations {
        for p in REFERENCES {
            for target in g.objects(o, p) {
                match target.as_iri() {
                    Some(iri) if described.contains(iri) => {}
                    Some(iri) => {
                        dangling.insert(format!("{iri} (via {p})"));
                    }
                    None => {
                        dangling.insert(format!("{o}: literal object for {p}"));
                    }
                }
            }
        }
    }
    if dangling.is_empty() {
        report.push(TestResult::pass(
            &validator,
            "every node referenced by an observation is described in the graph",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            &validator,
            format!("{} referenced nodes are not described", dangling.len()),
            dangling.into_iter().collect(),
        ));
    }

    Ok(report)
}
