//! Data-graph serializers.
//!
//! Output order follows the graph's triple order, so equal graphs always
//! serialize to equal text.

use geolod_ontology::model::iris::{rdf, xsd};
use geolod_ontology::serializer::ntriples::escape;
use geolod_ontology::serializer::turtle::{string, term, write_prefixes};

use crate::graph::Graph;
use crate::term::{Literal, Term};

/// Serializes `graph` as Turtle, one block per subject with `rdf:type`
/// first and repeated predicates folded into object lists.
#[must_use]
pub fn to_turtle(graph: &Graph, title: &str) -> String {
    let mut out = String::with_capacity(64 * graph.len() + 2048);
    out.push_str(&format!("# {title}\n\n"));
    write_prefixes(&mut out);

    for (subject, triples) in graph.by_subject() {
        out.push('\n');
        out.push_str(&term(subject.as_str()));

        let types: Vec<&Term> = triples
            .iter()
            .filter(|t| t.p.as_str() == rdf::TYPE)
            .map(|t| &t.o)
            .collect();
        let mut groups: Vec<(&str, Vec<&Term>)> = Vec::new();
        if !types.is_empty() {
            groups.push(("a", types));
        }
        for t in triples.iter().filter(|t| t.p.as_str() != rdf::TYPE) {
            match groups.last_mut() {
                Some((p, objects)) if *p == t.p.as_str() => objects.push(&t.o),
                _ => groups.push((t.p.as_str(), vec![&t.o])),
            }
        }

        for (i, (p, objects)) in groups.iter().enumerate() {
            let sep = if i == 0 { "\n    " } else { " ;\n    " };
            let predicate = if *p == "a" { "a".to_owned() } else { term(p) };
            let objects: Vec<String> = objects.iter().map(|o| turtle_object(o)).collect();
            out.push_str(&format!("{sep}{predicate} {}", objects.join(", ")));
        }
        out.push_str(" .\n");
    }
    out
}

fn turtle_object(o: &Term) -> String {
    match o {
        Term::Iri(iri) => term(iri.as_str()),
        Term::Literal(Literal::Lang { lexical, lang }) => format!("{}@{lang}", string(lexical)),
        Term::Literal(Literal::Typed { lexical, datatype }) => match datatype.as_str() {
            xsd::STRING => string(lexical),
            xsd::INTEGER | xsd::DECIMAL if is_bare_number(lexical, datatype.as_str()) => {
                lexical.to_string()
            }
            dt => format!("{}^^{}", string(lexical), term(dt)),
        },
    }
}

/// Turtle's INTEGER and DECIMAL productions.
fn is_bare_number(lexical: &str, datatype: &str) -> bool {
    let body = lexical.strip_prefix(['-', '+']).unwrap_or(lexical);
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match datatype {
        xsd::INTEGER => digits(body),
        _ => match body.split_once('.') {
            Some((int, frac)) => (int.is_empty() || digits(int)) && digits(frac),
            None => false,
        },
    }
}

/// Serializes `graph` as N-Triples.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(128 * graph.len());
    for t in graph {
        let object = match &t.o {
            Term::Iri(iri) => format!("<{iri}>"),
            Term::Literal(Literal::Lang { lexical, lang }) => {
                format!("\"{}\"@{lang}", escape(lexical))
            }
            Term::Literal(Literal::Typed { lexical, datatype }) => {
                format!("\"{}\"^^<{datatype}>", escape(lexical))
            }
        };
        out.push_str(&format!("<{}> <{}> {object} .\n", t.s, t.p));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Iri;
    use geolod_ontology::model::iris::{geolod, rdfs};

    fn sample() -> Graph {
        let mut g = Graph::new();
        let s = Iri::geolod("Obs_CH4_x_0000");
        g.insert(&s, rdf::TYPE, Iri::new(geolod::CH4_OBSERVATION));
        g.insert(&s, rdf::TYPE, Iri::new(geolod::ICE_CORE_OBSERVATION));
        g.insert(&s, rdfs::LABEL, Literal::en("CH₄ \"quoted\""));
        g.insert(&s, geolod::AGE_KA_BP, Literal::decimal(1.5, 4).unwrap_or_else(|| Literal::string("")));
        g.insert(&s, geolod::WINDOW_SIZE, Literal::integer(-3));
        g
    }

    #[test]
    fn turtle_groups_subject_block() {
        let ttl = to_turtle(&sample(), "test");
        assert!(ttl.contains("geolod:Obs_CH4_x_0000\n    a geolod:CH4Observation, geolod:IceCoreObservation ;"));
        assert!(ttl.contains("geolod:ageKaBP 1.5 ;"));
        assert!(ttl.contains("geolod:windowSize -3 ;"));
        assert!(ttl.contains("rdfs:label \"CH₄ \\\"quoted\\\"\"@en .\n"));
    }

    #[test]
    fn ntriples_has_one_line_per_triple() {
        let g = sample();
        let nt = to_ntriples(&g);
        assert_eq!(nt.lines().count(), g.len());
        assert!(nt.lines().all(|l| l.ends_with(" .")));
    }

    #[test]
    fn bare_numbers_follow_turtle_grammar() {
        assert!(is_bare_number("105.0", xsd::DECIMAL));
        assert!(is_bare_number("-0.5", xsd::DECIMAL));
        assert!(!is_bare_number("105", xsd::DECIMAL));
        assert!(is_bare_number("42", xsd::INTEGER));
        assert!(!is_bare_number("4e2", xsd::INTEGER));
    }

    #[test]
    fn serialization_is_deterministic() {
        assert_eq!(to_turtle(&sample(), "t"), to_turtle(&sample(), "t"));
    }
}
