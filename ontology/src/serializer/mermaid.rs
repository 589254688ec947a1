//! Mermaid taxonomy diagram derived from the class model.
//!
//! One subgraph per vocabulary module plus one for imported parent classes.
//! Edges are `rdfs:subClassOf` links; restriction superclasses are omitted.

use std::collections::BTreeSet;

use crate::model::Ontology;
use crate::prefix;

/// Renders the combined class hierarchy as a Mermaid `flowchart`.
#[must_use]
pub fn to_taxonomy(ontology: &Ontology) -> String {
    let mut out = String::from("flowchart LR\n");

    let defined: BTreeSet<&str> = ontology
        .modules
        .iter()
        .flat_map(|m| m.classes.iter().map(|c| c.id))
        .collect();
    let external: BTreeSet<&str> = ontology
        .modules
        .iter()
        .flat_map(|m| m.classes.iter().flat_map(|c| c.subclass_of.iter().copied()))
        .filter(|iri| !defined.contains(iri))
        .collect();

    if !external.is_empty() {
        out.push_str("\n    subgraph EXT[\"External vocabularies\"]\n        direction TB\n");
        for iri in &external {
            out.push_str(&format!(
                "        {}[\"{}\"]\n",
                node_id(iri),
                display_name(iri)
            ));
        }
        out.push_str("    end\n");
    }

    for (i, module) in ontology.modules.iter().enumerate() {
        out.push_str(&format!(
            "\n    subgraph M{}[\"{} ({})\"]\n        direction TB\n",
            i, module.header.label, module.header.file_name
        ));
        for class in &module.classes {
            out.push_str(&format!(
                "        {}[\"{}\"]\n",
                node_id(class.id),
                local_name(class.id)
            ));
        }
        out.push_str("    end\n");
    }

    out.push('\n');
    for module in &ontology.modules {
        for class in &module.classes {
            for parent in class.subclass_of {
                out.push_str(&format!(
                    "    {} -->|subClassOf| {}\n",
                    node_id(class.id),
                    node_id(parent)
                ));
            }
        }
    }

    out
}

fn display_name(iri: &str) -> String {
    prefix::compact(iri).unwrap_or_else(|| iri.to_owned())
}

fn local_name(iri: &str) -> &str {
    iri.rsplit(['/', '#']).next().unwrap_or(iri)
}

fn node_id(iri: &str) -> String {
    display_name(iri)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
