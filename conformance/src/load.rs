//! Reading emitted RDF back into [`Graph`] values.
//!
//! Parsing goes through sophia's Turtle and N-Triples parsers, so a file
//! that loads here is well-formed independently of the serializer that
//! wrote it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use sophia_api::source::TripleSource;
use sophia_api::term::{Term as RdfTerm, TermKind};
use sophia_api::triple::Triple as _;
use walkdir::WalkDir;

use geolod_graph::term::{Iri, Literal, Term, Triple};
use geolod_graph::Graph;

/// RDF syntaxes the pipeline emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Turtle, `.ttl`.
    Turtle,
    /// N-Triples, `.nt`.
    NTriples,
}

impl Syntax {
    /// The syntax of `path`, from its extension.
    pub fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ttl" => Some(Syntax::Turtle),
            "nt" => Some(Syntax::NTriples),
            _ => None,
        }
    }
}

/// A parsed file.
///
/// Only ground triples are kept in `graph`. Vocabulary files describe OWL
/// restrictions with blank nodes; those triples are counted, not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// Ground triples.
    pub graph: Graph,
    /// Triples with a blank node in any position.
    pub blank: usize,
}

impl Loaded {
    /// All triples in the file.
    pub fn len(&self) -> usize {
        self.graph.len() + self.blank
    }

    /// Returns true for a file without triples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One RDF file under the output root.
#[derive(Debug)]
pub struct Artifact {
    /// File path.
    pub path: PathBuf,
    /// Syntax, from the extension.
    pub syntax: Syntax,
    /// The loaded file, or the parser's message.
    pub parsed: Result<Loaded, String>,
}

impl Artifact {
    /// Path relative to `root`, for messages.
    pub fn name(&self, root: &Path) -> String {
        self.path
            .strip_prefix(root)
            .unwrap_or(self.path.as_path())
            .display()
            .to_string()
    }
}

/// Parses `text`.
///
/// # Errors
///
/// Returns the parser's message for malformed input.
pub fn parse(text: &str, syntax: Syntax) -> std::result::Result<Loaded, String> {
    match syntax {
        Syntax::Turtle => collect(sophia_turtle::parser::turtle::parse_str(text)),
        Syntax::NTriples => collect(sophia_turtle::parser::nt::parse_str(text)),
    }
}

fn collect<S: TripleSource>(mut source: S) -> std::result::Result<Loaded, String> {
    let mut graph = Graph::new();
    let mut blank = 0usize;
    source
        .for_each_triple(|t| match convert(t.s(), t.p(), t.o()) {
            Some(triple) => {
                graph.add(triple);
            }
            None => blank += 1,
        })
        .map_err(|e| e.to_string())?;
    Ok(Loaded { graph, blank })
}

fn convert<S: RdfTerm, P: RdfTerm, O: RdfTerm>(s: S, p: P, o: O) -> Option<Triple> {
    Some(Triple {
        s: iri(&s)?,
        p: iri(&p)?,
        o: term(&o)?,
    })
}

fn iri<T: RdfTerm>(t: &T) -> Option<Iri> {
    t.iri().map(|i| Iri::new(i.as_str()))
}

fn term<T: RdfTerm>(t: &T) -> Option<Term> {
    match t.kind() {
        TermKind::Iri => iri(t).map(Term::Iri),
        TermKind::Literal => {
            let lexical = t.lexical_form()?;
            let literal = match t.language_tag() {
                Some(lang) => Literal::Lang {
                    lexical: Arc::from(&*lexical),
                    lang: Arc::from(lang.as_str()),
                },
                None => Literal::typed(&*lexical, t.datatype()?.as_str()),
            };
            Some(Term::Literal(literal))
        }
        _ => None,
    }
}

/// Reads and parses every `.ttl` and `.nt` file under `root`, in path
/// order.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked or a file cannot be read.
pub fn read_tree(root: &Path) -> Result<Vec<Artifact>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();
        let Some(syntax) = Syntax::of(path) else {
            continue;
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        out.push(Artifact {
            path: path.to_path_buf(),
            syntax,
            parsed: parse(&text, syntax),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geolod_ontology::model::iris::{geo, rdfs};

    const TTL: &str = r#"@prefix geolod: <http://w3id.org/geo-lod/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix geo: <http://www.opengis.net/ont/geosparql#> .
geolod:Site rdfs:label "Site"@en ;
    geo:hasGeometry geolod:Site_geom .
geolod:Site_geom geo:asWKT "POINT(1 2)"^^geo:wktLiteral .
"#;

    #[test]
    fn turtle_terms_convert() {
        let loaded = parse(TTL, Syntax::Turtle).unwrap();
        assert_eq!(loaded.blank, 0);
        let g = loaded.graph;
        assert_eq!(g.len(), 3);
        let site = Iri::geolod("Site");
        assert!(g.contains(
            site.as_str(),
            rdfs::LABEL,
            &Term::Literal(Literal::en("Site"))
        ));
        assert!(g.contains(
            "http://w3id.org/geo-lod/Site_geom",
            geo::AS_WKT,
            &Term::Literal(Literal::wkt("POINT(1 2)"))
        ));
    }

    #[test]
    fn blank_node_triples_are_counted_not_loaded() {
        let text = "_:b <http://example.org/p> \"x\" .\n<http://example.org/s> <http://example.org/p> _:b .\n";
        let loaded = parse(text, Syntax::NTriples).unwrap();
        assert!(loaded.graph.is_empty());
        assert_eq!((loaded.blank, loaded.len()), (2, 2));
    }

    #[test]
    fn malformed_input_reports_parser_message() {
        assert!(parse("<http://a> <http://b> .", Syntax::NTriples).is_err());
    }

    #[test]
    fn tree_walk_picks_rdf_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("rdf")).unwrap();
        std::fs::write(dir.path().join("rdf/a.ttl"), TTL).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let artifacts = read_tree(dir.path()).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].name(dir.path()), "rdf/a.ttl");
        assert!(artifacts[0].parsed.is_ok());
    }
}
