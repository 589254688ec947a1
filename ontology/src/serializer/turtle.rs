//! Turtle 1.1 serializer for the geo-lod vocabularies.
//!
//! One vocabulary module becomes one Turtle document. The output carries no
//! timestamp, so regenerating a vocabulary file yields byte-identical text.

use crate::model::{IndividualValue, PropertyKind, VocabularyModule};
use crate::prefix::{self, Prefix};

/// Serializes one vocabulary module to a Turtle string.
#[must_use]
pub fn to_turtle(module: &VocabularyModule) -> String {
    let mut out = String::with_capacity(32 * 1024);
    let header = &module.header;

    out.push_str(&format!("# {}\n", header.file_name));
    out.push_str(&format!("# {} <{}>\n\n", header.label, header.iri));
    write_prefixes(&mut out);
    out.push('\n');

    // Ontology header
    out.push_str(&format!(
        "<{}>\n    a owl:Ontology ;\n    rdfs:label {} ;\n    rdfs:comment {} ;\n    owl:versionInfo {}",
        header.iri,
        lang_string(header.label),
        lang_string(header.comment),
        string(header.version)
    ));
    for import in header.imports {
        out.push_str(&format!(" ;\n    owl:imports <{}>", import));
    }
    out.push_str(" .\n\n");

    if !module.classes.is_empty() {
        out.push_str("# Classes\n\n");
    }
    for class in &module.classes {
        let mut block = format!(
            "{}\n    a owl:Class ;\n    rdfs:label {} ;\n    rdfs:comment {}",
            term(class.id),
            lang_string(class.label),
            lang_string(class.comment)
        );
        for parent in class.subclass_of {
            block.push_str(&format!(" ;\n    rdfs:subClassOf {}", term(parent)));
        }
        for r in class.restrictions {
            block.push_str(&format!(
                " ;\n    rdfs:subClassOf [\n        a owl:Restriction ;\n        owl:onProperty {} ;\n        owl:someValuesFrom {}\n    ]",
                term(r.on_property),
                term(r.some_values_from)
            ));
        }
        if let Some(see_also) = class.see_also {
            block.push_str(&format!(" ;\n    rdfs:seeAlso {}", term(see_also)));
        }
        block.push_str(" .\n\n");
        out.push_str(&block);
    }

    if !module.properties.is_empty() {
        out.push_str("# Properties\n\n");
    }
    for prop in &module.properties {
        let type_str = match prop.kind {
            PropertyKind::Datatype => "owl:DatatypeProperty",
            PropertyKind::Object => "owl:ObjectProperty",
        };
        let mut block = format!(
            "{}\n    a {} ;\n    rdfs:label {}",
            term(prop.id),
            type_str,
            lang_string(prop.label)
        );
        if let Some(comment) = prop.comment {
            block.push_str(&format!(" ;\n    rdfs:comment {}", lang_string(comment)));
        }
        for parent in prop.sub_property_of {
            block.push_str(&format!(" ;\n    rdfs:subPropertyOf {}", term(parent)));
        }
        if let Some(domain) = prop.domain {
            block.push_str(&format!(" ;\n    rdfs:domain {}", term(domain)));
        }
        if let Some(range) = prop.range {
            block.push_str(&format!(" ;\n    rdfs:range {}", term(range)));
        }
        block.push_str(" .\n\n");
        out.push_str(&block);
    }

    if !module.individuals.is_empty() {
        out.push_str("# Named individuals\n\n");
    }
    for ind in &module.individuals {
        let mut block = format!(
            "{}\n    a {} , owl:NamedIndividual ;\n    rdfs:label {}",
            term(&ind.id),
            term(ind.type_),
            lang_string(&ind.label)
        );
        if let Some(comment) = &ind.comment {
            block.push_str(&format!(" ;\n    rdfs:comment {}", lang_string(comment)));
        }
        for (prop_iri, value) in &ind.properties {
            block.push_str(&format!(
                " ;\n    {} {}",
                term(prop_iri),
                individual_value_to_turtle(value)
            ));
        }
        block.push_str(" .\n\n");
        out.push_str(&block);
    }

    if !module.external_labels.is_empty() {
        out.push_str("# Labels for imported terms\n\n");
    }
    for ext in &module.external_labels {
        let mut block = format!("{}\n    rdfs:label {}", term(ext.id), lang_string(ext.label));
        if let Some(comment) = ext.comment {
            block.push_str(&format!(" ;\n    rdfs:comment {}", lang_string(comment)));
        }
        block.push_str(" .\n\n");
        out.push_str(&block);
    }

    out
}

/// Writes one `@prefix` line per registry entry, in registry order.
pub fn write_prefixes(out: &mut String) {
    for p in Prefix::ALL {
        let label = format!("{}:", p.label());
        out.push_str(&format!("@prefix {:<8} <{}> .\n", label, p.iri()));
    }
}

/// Renders an IRI as a prefixed name when possible, `<iri>` otherwise.
#[must_use]
pub fn term(iri: &str) -> String {
    prefix::compact(iri).unwrap_or_else(|| format!("<{}>", iri))
}

/// Quotes and escapes a string for a Turtle short string literal.
#[must_use]
pub fn string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// An English language-tagged literal.
#[must_use]
pub fn lang_string(s: &str) -> String {
    format!("{}@en", string(s))
}

fn individual_value_to_turtle(value: &IndividualValue) -> String {
    match value {
        IndividualValue::Str(s) => string(s),
        IndividualValue::Int(i) => i.to_string(),
        IndividualValue::Year(y) => format!("\"{}\"^^xsd:gYear", y),
        IndividualValue::IriRef(iri) => term(iri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ontology, SmoothingParams};

    #[test]
    fn declares_every_prefix() {
        let ontology = Ontology::default();
        let turtle = to_turtle(&ontology.modules[0]);
        for p in Prefix::ALL {
            assert!(
                turtle.contains(&format!("@prefix {}:", p.label())),
                "Missing prefix declaration for '{}'",
                p.label()
            );
        }
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let a = to_turtle(&Ontology::default().modules[0]);
        let b = to_turtle(&Ontology::default().modules[0]);
        assert_eq!(a, b);
    }

    #[test]
    fn smoothing_parameters_are_substituted() {
        let params = SmoothingParams {
            rolling_window: 5,
            sg_window: 9,
            sg_polyorder: 3,
        };
        let turtle = to_turtle(&Ontology::new(&params).modules[0]);
        assert!(turtle.contains("geolod:RollingMedian_w5\n"));
        assert!(turtle.contains("geolod:SavitzkyGolay_w9_p3\n"));
        assert!(turtle.contains("geolod:polyOrder 3"));
    }

    #[test]
    fn extension_imports_core() {
        let turtle = to_turtle(&Ontology::default().modules[1]);
        assert!(turtle.contains("owl:imports <http://w3id.org/geo-lod/>"));
        assert!(turtle.contains("a owl:Restriction"));
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(string("a \"b\"\nc"), "\"a \\\"b\\\"\\nc\"");
    }

    #[test]
    fn unsafe_local_names_stay_bracketed() {
        assert_eq!(
            term("https://doi.org/10.1145/1968.1969"),
            "<https://doi.org/10.1145/1968.1969>"
        );
        assert_eq!(term("http://www.opengis.net/ont/sf#Point"), "sf:Point");
    }
}
