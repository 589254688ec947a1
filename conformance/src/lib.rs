//! geo-lod conformance suite.
//!
//! Validates a pipeline output tree after the fact, reading every file back
//! through an independent RDF parser.
//!
//! # Conformance Scope
//!
//! | Artifact | Checks |
//! |----------|--------|
//! | every `.ttl` / `.nt` | RDF 1.1 well-formedness, Turtle and N-Triples twins agree |
//! | `ontology/` | term identifiers unique, references resolve, files declare every term |
//! | `<group>/rdf/*.ttl` | observation identifiers and cardinalities, referential completeness, smoothing-method singletons |
//! | `collections/*.ttl` | feature-collection membership |
//! | `combined/` | all of the above over the merged graph |
//!
//! # Entry Point
//!
//! ```no_run
//! use geolod_conformance::{run_all, OutputPaths};
//!
//! let paths = OutputPaths::new("output");
//! let report = run_all(&paths)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod load;
pub mod report;
pub mod validators;

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use geolod_ontology::{Ontology, SmoothingParams};

use crate::load::Artifact;
pub use report::{ConformanceReport, Severity, TestResult};

/// Where the output tree lives and which smoothing parameters built it.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Output root written by the pipeline.
    pub output: PathBuf,
    /// Smoothing parameters; read from the run report when unset.
    pub smoothing: Option<SmoothingParams>,
}

impl OutputPaths {
    /// Paths for `output`, with parameters taken from its run report.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            smoothing: None,
        }
    }
}

/// Role of an RDF file, from its place in the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Vocabulary,
    Dataset,
    Collection,
    Combined,
    Other,
}

fn role(root: &Path, path: &Path) -> Role {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<&str> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();
    match parts.as_slice() {
        ["ontology", ..] => Role::Vocabulary,
        ["collections", ..] => Role::Collection,
        ["combined", ..] => Role::Combined,
        [_, "rdf", _] => Role::Dataset,
        _ => Role::Other,
    }
}

fn smoothing(paths: &OutputPaths, report: &mut ConformanceReport) -> Result<SmoothingParams> {
    if let Some(p) = paths.smoothing {
        return Ok(p);
    }
    let file = paths.output.join("report").join("report.json");
    if !file.is_file() {
        report.push(TestResult::warn(
            "vocabulary/files",
            "no run report; assuming default smoothing parameters",
        ));
        return Ok(SmoothingParams::default());
    }
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    let params = serde_json::from_value(json["smoothing"].clone())
        .with_context(|| format!("{}: no smoothing parameters", file.display()))?;
    Ok(params)
}

/// Runs every validator over the output tree.
///
/// Validators run in this order:
/// 1. RDF well-formedness of every file
/// 2. Vocabulary model and module files
/// 3. Each dataset graph: observations, smoothing methods
/// 4. Each collection graph: membership
/// 5. The combined graph: all graph checks
///
/// # Errors
///
/// Returns an error only if a file cannot be read or the run report is
/// malformed.
pub fn run_all(paths: &OutputPaths) -> Result<ConformanceReport> {
    let root = paths.output.as_path();
    let mut report = ConformanceReport::new();
    let artifacts = load::read_tree(root)?;

    // 1. RDF 1.1 / Turtle 1.1 / N-Triples
    report.extend(validators::rdf::validate(root, &artifacts));

    // 2. Vocabulary
    let params = smoothing(paths, &mut report)?;
    let ontology = Ontology::new(&params);
    report.extend(validators::vocabulary::validate(&ontology));
    report.extend(validators::vocabulary::validate_files(
        &root.join("ontology"),
        &ontology,
        &artifacts,
    ));

    let of_role = |r: Role| {
        artifacts
            .iter()
            .filter(|a| role(root, &a.path) == r)
            .collect::<Vec<&Artifact>>()
    };

    // 3. Dataset graphs
    let datasets = of_role(Role::Dataset);
    if datasets.is_empty() {
        report.push(TestResult::warn("graph", "no dataset graphs in the output tree"));
    }
    for a in datasets {
        let Ok(loaded) = &a.parsed else { continue };
        let name = a.name(root);
        if loaded.blank > 0 {
            report.push(TestResult::fail(
                "graph",
                format!("{name} holds {} triples with blank nodes", loaded.blank),
            ));
        }
        report.extend(validators::observations::validate(&name, &loaded.graph)?);
        report.extend(validators::methods::validate(&name, &loaded.graph));
    }

    // 4. Collections
    for a in of_role(Role::Collection) {
        let Ok(loaded) = &a.parsed else { continue };
        report.extend(validators::collections::validate(&a.name(root), &loaded.graph));
    }

    // 5. Combined graph (the Turtle copy; its N-Triples twin was compared in 1)
    for a in of_role(Role::Combined)
        .into_iter()
        .filter(|a| a.syntax == load::Syntax::Turtle)
    {
        let Ok(loaded) = &a.parsed else { continue };
        let name = a.name(root);
        report.extend(validators::observations::validate(&name, &loaded.graph)?);
        report.extend(validators::methods::validate(&name, &loaded.graph));
        report.extend(validators::collections::validate(&name, &loaded.graph));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_follow_the_output_layout() {
        let root = Path::new("/out");
        let r = |p: &str| role(root, &root.join(p));
        assert_eq!(r("ontology/geo_lod_core.ttl"), Role::Vocabulary);
        assert_eq!(r("EPICA/rdf/epica-dome-c.ttl"), Role::Dataset);
        assert_eq!(r("collections/AllSites.ttl"), Role::Collection);
        assert_eq!(r("combined/geo_lod_combined.nt"), Role::Combined);
        assert_eq!(r("misc/x.ttl"), Role::Other);
    }

    #[test]
    fn empty_tree_fails() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_all(&OutputPaths {
            output: dir.path().to_path_buf(),
            smoothing: Some(SmoothingParams::default()),
        })
        .unwrap();
        assert!(!report.all_passed());
    }
}
