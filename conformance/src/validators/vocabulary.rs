//! Vocabulary structure.
//!
//! [`validate`] checks the in-memory model: unique term identifiers, and
//! every subclass, restriction, domain, range, parent-property and
//! individual-type target either defined by the vocabulary or drawn from a
//! registered namespace. [`validate_files`] checks that each module file
//! written to disk declares every term of its module.

use std::collections::BTreeSet;
use std::path::Path;

use geolod_graph::{Graph, Iri, Term};
use geolod_ontology::model::iris::{owl, rdf};
use geolod_ontology::{Ontology, Prefix, PropertyKind, GEOLOD_BASE};

use crate::load::Artifact;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocabulary/structure";
const FILES: &str = "vocabulary/files";

/// Checks the vocabulary model.
pub fn validate(ontology: &Ontology) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut defined: BTreeSet<&str> = BTreeSet::new();
    let mut duplicates = Vec::new();
    for module in &ontology.modules {
        let ids = module
            .classes
            .iter()
            .map(|c| c.id)
            .chain(module.properties.iter().map(|p| p.id))
            .chain(module.individuals.iter().map(|i| i.id.as_str()));
        for id in ids {
            if !defined.insert(id) {
                duplicates.push(id.to_owned());
            }
        }
    }
    if duplicates.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "{} classes, {} properties and {} individuals, all identifiers unique",
                ontology.class_count(),
                ontology.property_count(),
                ontology.individual_count()
            ),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "vocabulary terms are defined twice",
            duplicates,
        ));
    }

    let resolves = |target: &str| {
        if target.starts_with(GEOLOD_BASE) {
            defined.contains(target)
        } else {
            Prefix::ALL.iter().any(|p| target.starts_with(p.iri()))
        }
    };
    let mut unresolved = Vec::new();
    let mut check = |owner: &str, role: &str, target: &str| {
        if !resolves(target) {
            unresolved.push(format!("{owner}: {role} {target}"));
        }
    };
    for module in &ontology.modules {
        for c in &module.classes {
            for parent in c.subclass_of {
                check(c.id, "subClassOf", parent);
            }
            for r in c.restrictions {
                check(c.id, "onProperty", r.on_property);
                check(c.id, "someValuesFrom", r.some_values_from);
            }
        }
        for p in &module.properties {
            for parent in p.sub_property_of {
                check(p.id, "subPropertyOf", parent);
            }
            if let Some(domain) = p.domain {
                check(p.id, "domain", domain);
            }
            if let Some(range) = p.range {
                check(p.id, "range", range);
            }
        }
        for i in &module.individuals {
            check(i.id.as_str(), "type", i.type_);
        }
    }
    if unresolved.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "every term reference resolves"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} term references do not resolve", unresolved.len()),
            unresolved,
        ));
    }
    report
}

/// Checks the module files in `dir` against the model.
pub fn validate_files(dir: &Path, ontology: &Ontology, artifacts: &[Artifact]) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for module in &ontology.modules {
        let path = dir.join(module.header.file_name);
        let name = module.header.file_name;
        let Some(artifact) = artifacts.iter().find(|a| a.path == path) else {
            report.push(TestResult::fail(FILES, format!("{name} was not written")));
            continue;
        };
        let Ok(loaded) = &artifact.parsed else {
            // Reported by the syntax validator.
            continue;
        };
        let g = &loaded.graph;

        let mut missing = Vec::new();
        let mut expect = |s: &str, class: &str| {
            if !g.has_type(&Iri::new(s), class) {
                missing.push(format!("{s} a {class}"));
            }
        };
        expect(module.header.iri, owl::ONTOLOGY);
        for c in &module.classes {
            expect(c.id, owl::CLASS);
        }
        for p in &module.properties {
            let kind = match p.kind {
                PropertyKind::Object => owl::OBJECT_PROPERTY,
                PropertyKind::Datatype => owl::DATATYPE_PROPERTY,
            };
            expect(p.id, kind);
        }
        for i in &module.individuals {
            expect(i.id.as_str(), i.type_);
            expect(i.id.as_str(), owl::NAMED_INDIVIDUAL);
        }

        if missing.is_empty() {
            report.push(TestResult::pass(
                FILES,
                format!("{name} declares all {} terms of its module", declared(g)),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                FILES,
                format!("{name} is missing {} declarations", missing.len()),
                missing,
            ));
        }
    }
    report
}

/// Subjects with an OWL declaration type.
fn declared(g: &Graph) -> usize {
    let kinds = [
        owl::CLASS,
        owl::OBJECT_PROPERTY,
        owl::DATATYPE_PROPERTY,
        owl::NAMED_INDIVIDUAL,
    ];
    g.iter()
        .filter(|t| {
            t.p.as_str() == rdf::TYPE
                && matches!(&t.o, Term::Iri(o) if kinds.contains(&o.as_str()))
        })
        .map(|t| &t.s)
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{parse, Syntax};
    use geolod_ontology::serializer::turtle::to_turtle;
    use geolod_ontology::SmoothingParams;

    fn ontology() -> Ontology {
        Ontology::new(&SmoothingParams::default())
    }

    #[test]
    fn model_is_well_formed() {
        let report = validate(&ontology());
        assert!(report.all_passed(), "{:#?}", report.failures());
    }

    #[test]
    fn undefined_project_term_fails() {
        let mut o = ontology();
        o.modules[0].properties[0].range = Some("http://w3id.org/geo-lod/Nothing");
        let report = validate(&o);
        assert_eq!(report.failure_count(), 1);
        assert!(report.failures()[0].details[0].ends_with("geo-lod/Nothing"));
    }

    #[test]
    fn unregistered_namespace_fails() {
        let mut o = ontology();
        o.modules[0].classes[0].subclass_of = &["http://example.org/Thing"];
        assert_eq!(validate(&o).failure_count(), 1);
    }

    #[test]
    fn serialized_modules_declare_their_terms() {
        let o = ontology();
        let dir = Path::new("/out/ontology");
        let artifacts: Vec<Artifact> = o
            .modules
            .iter()
            .map(|m| Artifact {
                path: dir.join(m.header.file_name),
                syntax: Syntax::Turtle,
                parsed: parse(&to_turtle(m), Syntax::Turtle),
            })
            .collect();
        let report = validate_files(dir, &o, &artifacts);
        assert!(report.all_passed(), "{:#?}", report.failures());
        assert_eq!(report.results.len(), o.modules.len());
    }

    #[test]
    fn missing_module_file_fails() {
        let o = ontology();
        let report = validate_files(Path::new("/out/ontology"), &o, &[]);
        assert_eq!(report.failure_count(), o.modules.len());
    }
}
