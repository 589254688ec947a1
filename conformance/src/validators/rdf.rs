//! RDF 1.1 well-formedness of every emitted Turtle and N-Triples file.
//!
//! - every file parses
//! - a Turtle file and its N-Triples sibling hold the same triples

use std::path::Path;

use crate::load::{Artifact, Syntax};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "rdf/syntax";

/// Checks the artifacts read from `root`.
pub fn validate(root: &Path, artifacts: &[Artifact]) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    if artifacts.is_empty() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("no .ttl or .nt files under {}", root.display()),
        ));
        return report;
    }

    for a in artifacts {
        let name = a.name(root);
        match &a.parsed {
            Ok(g) => report.push(TestResult::pass(
                VALIDATOR,
                format!("{name} parses ({} triples)", g.len()),
            )),
            Err(e) => report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{name} does not parse"),
                vec![e.clone()],
            )),
        }
    }

    for ttl in artifacts.iter().filter(|a| a.syntax == Syntax::Turtle) {
        let sibling = ttl.path.with_extension("nt");
        let Some(nt) = artifacts.iter().find(|a| a.path == sibling) else {
            continue;
        };
        let (Ok(a), Ok(b)) = (&ttl.parsed, &nt.parsed) else {
            continue;
        };
        let name = ttl.name(root);
        if a == b {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{name} and its N-Triples twin hold the same {} triples", a.len()),
            ));
        } else {
            report.push(TestResult::fail(
                VALIDATOR,
                format!(
                    "{name} ({} triples) differs from {} ({} triples)",
                    a.len(),
                    nt.name(root),
                    b.len()
                ),
            ));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::parse;
    use std::path::PathBuf;

    const NT: &str = "<http://w3id.org/geo-lod/a> <http://www.w3.org/2000/01/rdf-schema#label> \"a\"@en .\n";
    const TTL: &str = "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n<http://w3id.org/geo-lod/a> rdfs:label \"a\"@en .\n";

    fn artifact(path: &str, text: &str, syntax: Syntax) -> Artifact {
        Artifact {
            path: PathBuf::from(path),
            syntax,
            parsed: parse(text, syntax),
        }
    }

    #[test]
    fn matching_twins_pass() {
        let artifacts = [
            artifact("/o/combined/c.ttl", TTL, Syntax::Turtle),
            artifact("/o/combined/c.nt", NT, Syntax::NTriples),
        ];
        let report = validate(Path::new("/o"), &artifacts);
        assert!(report.all_passed(), "{:#?}", report.failures());
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn diverging_twins_fail() {
        let artifacts = [
            artifact("/o/c.ttl", TTL, Syntax::Turtle),
            artifact("/o/c.nt", "", Syntax::NTriples),
        ];
        assert_eq!(validate(Path::new("/o"), &artifacts).failure_count(), 1);
    }

    #[test]
    fn parse_errors_and_empty_trees_fail() {
        let broken = [artifact("/o/x.ttl", "geolod:a", Syntax::Turtle)];
        assert_eq!(validate(Path::new("/o"), &broken).failure_count(), 1);
        assert_eq!(validate(Path::new("/o"), &[]).failure_count(), 1);
    }
}
