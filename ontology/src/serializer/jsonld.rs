//! JSON-LD 1.1 serializer for the geo-lod vocabularies.
//!
//! The `@context` binds every registry prefix; nodes use prefixed names where
//! the registry can compact them and full IRIs otherwise.

use serde_json::{json, Map, Value};

use crate::model::{Class, Individual, IndividualValue, Property, PropertyKind, VocabularyModule};
use crate::prefix::{self, Prefix};

/// Serializes one vocabulary module to a JSON-LD document.
#[must_use]
pub fn to_json_ld(module: &VocabularyModule) -> Value {
    json!({
        "@context": context(),
        "@graph": graph(module),
    })
}

/// The `@context` object binding every registry prefix.
#[must_use]
pub fn context() -> Value {
    let mut ctx = Map::new();
    for p in Prefix::ALL {
        ctx.insert(p.label().to_owned(), json!(p.iri()));
    }
    Value::Object(ctx)
}

fn graph(module: &VocabularyModule) -> Value {
    let mut nodes = Vec::new();
    let header = &module.header;

    let imports: Vec<Value> = header.imports.iter().map(|i| json!({ "@id": i })).collect();
    let mut root = json!({
        "@id": header.iri,
        "@type": "owl:Ontology",
        "rdfs:label": en(header.label),
        "rdfs:comment": en(header.comment),
        "owl:versionInfo": header.version,
    });
    if !imports.is_empty() {
        root["owl:imports"] = Value::Array(imports);
    }
    nodes.push(root);

    for class in &module.classes {
        nodes.push(class_to_json(class));
    }
    for prop in &module.properties {
        nodes.push(property_to_json(prop));
    }
    for ind in &module.individuals {
        nodes.push(individual_to_json(ind));
    }
    for ext in &module.external_labels {
        let mut node = json!({ "@id": shorten_iri(ext.id), "rdfs:label": en(ext.label) });
        if let Some(comment) = ext.comment {
            node["rdfs:comment"] = en(comment);
        }
        nodes.push(node);
    }

    Value::Array(nodes)
}

fn en(s: &str) -> Value {
    json!({ "@value": s, "@language": "en" })
}

fn id(iri: &str) -> Value {
    json!({ "@id": shorten_iri(iri) })
}

fn class_to_json(class: &Class) -> Value {
    let mut parents: Vec<Value> = class.subclass_of.iter().map(|iri| id(iri)).collect();
    for r in class.restrictions {
        parents.push(json!({
            "@type": "owl:Restriction",
            "owl:onProperty": id(r.on_property),
            "owl:someValuesFrom": id(r.some_values_from),
        }));
    }

    let mut node = json!({
        "@id": shorten_iri(class.id),
        "@type": "owl:Class",
        "rdfs:label": en(class.label),
        "rdfs:comment": en(class.comment),
    });
    if !parents.is_empty() {
        node["rdfs:subClassOf"] = Value::Array(parents);
    }
    if let Some(see_also) = class.see_also {
        node["rdfs:seeAlso"] = id(see_also);
    }
    node
}

fn property_to_json(prop: &Property) -> Value {
    let type_ = match prop.kind {
        PropertyKind::Datatype => "owl:DatatypeProperty",
        PropertyKind::Object => "owl:ObjectProperty",
    };
    let mut node = json!({
        "@id": shorten_iri(prop.id),
        "@type": type_,
        "rdfs:label": en(prop.label),
    });
    if let Some(comment) = prop.comment {
        node["rdfs:comment"] = en(comment);
    }
    if !prop.sub_property_of.is_empty() {
        node["rdfs:subPropertyOf"] =
            Value::Array(prop.sub_property_of.iter().map(|iri| id(iri)).collect());
    }
    if let Some(domain) = prop.domain {
        node["rdfs:domain"] = id(domain);
    }
    if let Some(range) = prop.range {
        node["rdfs:range"] = id(range);
    }
    node
}

fn individual_to_json(ind: &Individual) -> Value {
    let mut node = json!({
        "@id": shorten_iri(&ind.id),
        "@type": [shorten_iri(ind.type_), "owl:NamedIndividual"],
        "rdfs:label": en(&ind.label),
    });
    if let Some(comment) = &ind.comment {
        node["rdfs:comment"] = en(comment);
    }

    for (prop_iri, value) in &ind.properties {
        let json_value = match value {
            IndividualValue::Str(s) => json!(s),
            IndividualValue::Int(i) => json!(i),
            IndividualValue::Year(y) => json!({ "@value": y.to_string(), "@type": "xsd:gYear" }),
            IndividualValue::IriRef(iri) => id(iri),
        };
        // Repeated keys are promoted to an array rather than overwritten.
        let key = shorten_iri(prop_iri);
        if let Value::Object(ref mut map) = node {
            if let Some(existing) = map.get_mut(&key) {
                let prev = std::mem::replace(existing, Value::Null);
                *existing = match prev {
                    Value::Array(mut arr) => {
                        arr.push(json_value);
                        Value::Array(arr)
                    }
                    other => json!([other, json_value]),
                };
            } else {
                map.insert(key, json_value);
            }
        }
    }

    node
}

fn shorten_iri(iri: &str) -> String {
    prefix::compact(iri).unwrap_or_else(|| iri.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ontology;

    #[test]
    fn produces_context_and_graph() {
        let ontology = Ontology::default();
        let json = to_json_ld(&ontology.modules[0]);
        assert!(json["@context"].is_object());
        assert!(json["@graph"].is_array());
    }

    #[test]
    fn context_has_all_registry_prefixes() {
        let ctx = context();
        for p in Prefix::ALL {
            assert_eq!(ctx[p.label()], json!(p.iri()), "Missing prefix '{}'", p.label());
        }
    }

    #[test]
    fn all_nodes_have_ids() {
        let ontology = Ontology::default();
        for module in &ontology.modules {
            let json = to_json_ld(module);
            let graph = json["@graph"].as_array().map(Vec::as_slice).unwrap_or_default();
            assert!(!graph.is_empty());
            for (i, node) in graph.iter().enumerate() {
                assert!(!node["@id"].is_null(), "Node at index {i} is missing @id");
            }
        }
    }

    #[test]
    fn graph_node_count_matches_model() {
        let ontology = Ontology::default();
        let core = &ontology.modules[0];
        let json = to_json_ld(core);
        let expected = 1
            + core.classes.len()
            + core.properties.len()
            + core.individuals.len()
            + core.external_labels.len();
        assert_eq!(json["@graph"].as_array().map(Vec::len), Some(expected));
    }
}
