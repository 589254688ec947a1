//! Identifier minting.
//!
//! Every node IRI is a pure function of configuration values and row
//! positions: dataset slug, optional entity id, and a zero-padded sequence
//! number. Re-running a build therefore mints identical IRIs, and the slug
//! namespaces observation identifiers across datasets.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::Deserialize;

use crate::error::GraphError;
use crate::family::{Family, Measurement};
use crate::term::Iri;

/// A dataset slug: non-empty ASCII letters, digits and `-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Slug(String);

impl Slug {
    /// Validates `s` as a slug.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidSlug`] for empty input or any other
    /// character.
    pub fn new(s: impl Into<String>) -> Result<Self, GraphError> {
        let s = s.into();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(GraphError::InvalidSlug(s));
        }
        Ok(Self(s))
    }

    /// The slug text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = GraphError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Slug::new(s)
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a configured local name (`[A-Za-z0-9_-]+`, not starting with
/// `-`) and expands it in the project namespace.
///
/// # Errors
///
/// Returns [`GraphError::InvalidLocalName`] otherwise.
pub fn local(name: &str) -> Result<Iri, GraphError> {
    let ok = !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !ok {
        return Err(GraphError::InvalidLocalName(name.to_owned()));
    }
    Ok(Iri::geolod(name))
}

/// Entity ids become part of a local name. ASCII letters, digits and `-`
/// pass through; every other byte is written as `_` plus two upper-case hex
/// digits. `_` never appears unescaped, so the encoding is injective.
fn entity_part(entity: &str) -> String {
    let mut out = String::with_capacity(entity.len());
    for b in entity.bytes() {
        if b.is_ascii_alphanumeric() || b == b'-' {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "_{b:02X}");
        }
    }
    out
}

/// `Obs_{key}_{slug}[_e{entity}]_{seq:04}`.
#[must_use]
pub fn observation(
    measurement: Measurement,
    slug: &Slug,
    entity: Option<&str>,
    seq: usize,
) -> Iri {
    let key = measurement.key();
    match entity {
        Some(e) => Iri::geolod(&format!("Obs_{key}_{slug}_e{}_{seq:04}", entity_part(e))),
        None => Iri::geolod(&format!("Obs_{key}_{slug}_{seq:04}")),
    }
}

/// `Catalog_{slug}`.
#[must_use]
pub fn catalog(slug: &Slug) -> Iri {
    Iri::geolod(&format!("Catalog_{slug}"))
}

/// `Dataset_{slug}`.
#[must_use]
pub fn dataset(slug: &Slug) -> Iri {
    Iri::geolod(&format!("Dataset_{slug}"))
}

/// `Dataset_{slug}_{key}`.
#[must_use]
pub fn sub_dataset(slug: &Slug, measurement: Measurement) -> Iri {
    Iri::geolod(&format!("Dataset_{slug}_{}", measurement.key()))
}

/// `{stem}_{slug}_e{entity}`, e.g. `Speleothem_corchia_e227`.
#[must_use]
pub fn entity_sample(family: Family, slug: &Slug, entity: &str) -> Iri {
    let stem = family.sample_stem();
    Iri::geolod(&format!("{stem}_{slug}_e{}", entity_part(entity)))
}

/// `{stem}_{slug}_e{entity}`, e.g. `UThChronology_corchia_e227`.
#[must_use]
pub fn entity_chronology(family: Family, slug: &Slug, entity: &str) -> Iri {
    let stem = family.chronology_stem();
    Iri::geolod(&format!("{stem}_{slug}_e{}", entity_part(entity)))
}

/// IRIs minted so far in one build. Shared across datasets so an
/// observation identifier is unique over the whole output.
#[derive(Clone, Debug, Default)]
pub struct IdentifierRegistry {
    seen: HashSet<Iri>,
}

impl IdentifierRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `iri` was already committed.
    #[must_use]
    pub fn contains(&self, iri: &Iri) -> bool {
        self.seen.contains(iri)
    }

    /// Records every IRI in `batch`, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IdentifierCollision`] if any IRI is already
    /// present or repeated inside `batch`; nothing is recorded then.
    pub fn commit(&mut self, batch: &[Iri]) -> Result<(), GraphError> {
        let mut local: HashSet<&Iri> = HashSet::with_capacity(batch.len());
        for iri in batch {
            if self.seen.contains(iri) || !local.insert(iri) {
                return Err(GraphError::IdentifierCollision(iri.to_string()));
            }
        }
        self.seen.extend(batch.iter().cloned());
        Ok(())
    }

    /// Number of committed IRIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing was committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
