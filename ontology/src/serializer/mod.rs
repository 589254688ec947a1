//! Serializers for the geo-lod vocabularies.
//!
//! Four output formats are supported:
//! - **Turtle** ([`turtle`]): written to `<root>/ontology/<file_name>`
//! - **N-Triples** ([`ntriples`]): for bulk loading and diffing
//! - **JSON-LD** ([`jsonld`]): for web clients (requires the `serializers` feature)
//! - **Mermaid** ([`mermaid`]): class taxonomy diagram

#[cfg(feature = "serializers")]
pub mod jsonld;
pub mod mermaid;
pub mod ntriples;
pub mod turtle;
