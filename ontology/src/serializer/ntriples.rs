//! N-Triples serializer for the geo-lod vocabularies.
//!
//! One triple per line, absolute IRIs. Restriction superclasses become blank
//! nodes labelled `_:r{n}` in document order.

use crate::model::iris::{owl, rdf, rdfs, xsd};
use crate::model::{IndividualValue, PropertyKind, VocabularyModule};

/// Serializes one vocabulary module to an N-Triples string.
#[must_use]
pub fn to_ntriples(module: &VocabularyModule) -> String {
    let mut out = String::with_capacity(64 * 1024);
    let header = &module.header;
    let mut bnodes = 0usize;

    triple(&mut out, &iri(header.iri), rdf::TYPE, &iri(owl::ONTOLOGY));
    triple(&mut out, &iri(header.iri), rdfs::LABEL, &lang(header.label));
    triple(&mut out, &iri(header.iri), rdfs::COMMENT, &lang(header.comment));
    triple(&mut out, &iri(header.iri), owl::VERSION_INFO, &lit(header.version, xsd::STRING));
    for import in header.imports {
        triple(&mut out, &iri(header.iri), owl::IMPORTS, &iri(import));
    }

    for class in &module.classes {
        let s = iri(class.id);
        triple(&mut out, &s, rdf::TYPE, &iri(owl::CLASS));
        triple(&mut out, &s, rdfs::LABEL, &lang(class.label));
        triple(&mut out, &s, rdfs::COMMENT, &lang(class.comment));
        for parent in class.subclass_of {
            triple(&mut out, &s, rdfs::SUB_CLASS_OF, &iri(parent));
        }
        for r in class.restrictions {
            let b = format!("_:r{}", bnodes);
            bnodes += 1;
            triple(&mut out, &s, rdfs::SUB_CLASS_OF, &b);
            triple(&mut out, &b, rdf::TYPE, &iri(owl::RESTRICTION));
            triple(&mut out, &b, owl::ON_PROPERTY, &iri(r.on_property));
            triple(&mut out, &b, owl::SOME_VALUES_FROM, &iri(r.some_values_from));
        }
        if let Some(see_also) = class.see_also {
            triple(&mut out, &s, rdfs::SEE_ALSO, &iri(see_also));
        }
    }

    for prop in &module.properties {
        let s = iri(prop.id);
        let type_iri = match prop.kind {
            PropertyKind::Datatype => owl::DATATYPE_PROPERTY,
            PropertyKind::Object => owl::OBJECT_PROPERTY,
        };
        triple(&mut out, &s, rdf::TYPE, &iri(type_iri));
        triple(&mut out, &s, rdfs::LABEL, &lang(prop.label));
        if let Some(comment) = prop.comment {
            triple(&mut out, &s, rdfs::COMMENT, &lang(comment));
        }
        for parent in prop.sub_property_of {
            triple(&mut out, &s, rdfs::SUB_PROPERTY_OF, &iri(parent));
        }
        if let Some(domain) = prop.domain {
            triple(&mut out, &s, rdfs::DOMAIN, &iri(domain));
        }
        if let Some(range) = prop.range {
            triple(&mut out, &s, rdfs::RANGE, &iri(range));
        }
    }

    for ind in &module.individuals {
        let s = iri(&ind.id);
        triple(&mut out, &s, rdf::TYPE, &iri(ind.type_));
        triple(&mut out, &s, rdf::TYPE, &iri(owl::NAMED_INDIVIDUAL));
        triple(&mut out, &s, rdfs::LABEL, &lang(&ind.label));
        if let Some(comment) = &ind.comment {
            triple(&mut out, &s, rdfs::COMMENT, &lang(comment));
        }
        for (prop_iri, value) in &ind.properties {
            let o = match value {
                IndividualValue::Str(v) => lit(v, xsd::STRING),
                IndividualValue::Int(n) => lit(&n.to_string(), xsd::INTEGER),
                IndividualValue::Year(y) => lit(&y.to_string(), xsd::G_YEAR),
                IndividualValue::IriRef(target) => iri(target),
            };
            triple(&mut out, &s, prop_iri, &o);
        }
    }

    for ext in &module.external_labels {
        let s = iri(ext.id);
        triple(&mut out, &s, rdfs::LABEL, &lang(ext.label));
        if let Some(comment) = ext.comment {
            triple(&mut out, &s, rdfs::COMMENT, &lang(comment));
        }
    }

    out
}

fn triple(out: &mut String, s: &str, p: &str, o: &str) {
    out.push_str(s);
    out.push_str(" <");
    out.push_str(p);
    out.push_str("> ");
    out.push_str(o);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

/// Escapes a string for an N-Triples literal body.
#[must_use]
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn lit(value: &str, datatype: &str) -> String {
    format!("\"{}\"^^<{}>", escape(value), datatype)
}

fn lang(value: &str) -> String {
    format!("\"{}\"@en", escape(value))
}
