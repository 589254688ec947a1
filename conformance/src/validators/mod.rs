//! Conformance validators, one module per concern.

pub mod collections;
pub mod methods;
pub mod observations;
pub mod rdf;
pub mod vocabulary;

#[cfg(test)]
pub(crate) mod fixtures;
