//! Namespace registry.
//!
//! Every graph, vocabulary file and serializer in the workspace binds the same
//! prefixes in the same order. The registry is a fixed table: [`Prefix::ALL`]
//! is the declaration order, [`Prefix::iri`] the binding. Typed code cannot
//! name an unknown prefix; [`resolve`] is the string-keyed entry point for
//! callers that only hold a prefix label.

/// Base IRI of the geo-lod project vocabulary.
pub const GEOLOD_BASE: &str = "http://w3id.org/geo-lod/";

/// CRS URI embedded in every WKT literal (WGS84, EPSG:4326).
pub const CRS_WGS84: &str = "http://www.opengis.net/def/crs/EPSG/0/4326";

/// A vocabulary prefix bound in every graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prefix {
    /// RDF syntax.
    Rdf,
    /// RDF Schema.
    Rdfs,
    /// OWL 2.
    Owl,
    /// XML Schema datatypes.
    Xsd,
    /// OGC GeoSPARQL.
    Geo,
    /// OGC Simple Features.
    Sf,
    /// CIDOC-CRM.
    Crm,
    /// CRMsci scientific observation extension.
    CrmSci,
    /// W3C SOSA.
    Sosa,
    /// W3C SSN.
    Ssn,
    /// QUDT schema.
    Qudt,
    /// QUDT units.
    Unit,
    /// W3C PROV-O.
    Prov,
    /// Dublin Core terms.
    Dct,
    /// W3C DCAT.
    Dcat,
    /// VoID.
    Void,
    /// SKOS.
    Skos,
    /// geo-lod project vocabulary.
    Geolod,
}

impl Prefix {
    /// All prefixes in declaration order.
    pub const ALL: [Prefix; 18] = [
        Prefix::Rdf,
        Prefix::Rdfs,
        Prefix::Owl,
        Prefix::Xsd,
        Prefix::Geo,
        Prefix::Sf,
        Prefix::Crm,
        Prefix::CrmSci,
        Prefix::Sosa,
        Prefix::Ssn,
        Prefix::Qudt,
        Prefix::Unit,
        Prefix::Prov,
        Prefix::Dct,
        Prefix::Dcat,
        Prefix::Void,
        Prefix::Skos,
        Prefix::Geolod,
    ];

    /// The prefix label used in Turtle and JSON-LD contexts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Prefix::Rdf => "rdf",
            Prefix::Rdfs => "rdfs",
            Prefix::Owl => "owl",
            Prefix::Xsd => "xsd",
            Prefix::Geo => "geo",
            Prefix::Sf => "sf",
            Prefix::Crm => "crm",
            Prefix::CrmSci => "crmsci",
            Prefix::Sosa => "sosa",
            Prefix::Ssn => "ssn",
            Prefix::Qudt => "qudt",
            Prefix::Unit => "unit",
            Prefix::Prov => "prov",
            Prefix::Dct => "dct",
            Prefix::Dcat => "dcat",
            Prefix::Void => "void",
            Prefix::Skos => "skos",
            Prefix::Geolod => "geolod",
        }
    }

    /// The namespace IRI bound to this prefix.
    #[must_use]
    pub const fn iri(self) -> &'static str {
        match self {
            Prefix::Rdf => "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            Prefix::Rdfs => "http://www.w3.org/2000/01/rdf-schema#",
            Prefix::Owl => "http://www.w3.org/2002/07/owl#",
            Prefix::Xsd => "http://www.w3.org/2001/XMLSchema#",
            Prefix::Geo => "http://www.opengis.net/ont/geosparql#",
            Prefix::Sf => "http://www.opengis.net/ont/sf#",
            Prefix::Crm => "http://www.cidoc-crm.org/cidoc-crm/",
            Prefix::CrmSci => "http://www.ics.forth.gr/isl/CRMsci/",
            Prefix::Sosa => "http://www.w3.org/ns/sosa/",
            Prefix::Ssn => "http://www.w3.org/ns/ssn/",
            Prefix::Qudt => "http://qudt.org/schema/qudt/",
            Prefix::Unit => "http://qudt.org/vocab/unit/",
            Prefix::Prov => "http://www.w3.org/ns/prov#",
            Prefix::Dct => "http://purl.org/dc/terms/",
            Prefix::Dcat => "http://www.w3.org/ns/dcat#",
            Prefix::Void => "http://rdfs.org/ns/void#",
            Prefix::Skos => "http://www.w3.org/2004/02/skos/core#",
            Prefix::Geolod => GEOLOD_BASE,
        }
    }

    /// Expands a local name against this prefix.
    #[must_use]
    pub fn expand(self, local: &str) -> String {
        let mut iri = String::with_capacity(self.iri().len() + local.len());
        iri.push_str(self.iri());
        iri.push_str(local);
        iri
    }

    /// Looks up a prefix by its label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Prefix> {
        Prefix::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves a prefix label to its namespace IRI.
///
/// Returns `None` for a label outside the registry.
#[must_use]
pub fn resolve(label: &str) -> Option<&'static str> {
    Prefix::from_label(label).map(Prefix::iri)
}

/// Compacts a full IRI to `prefix:local` form when the local part is a safe
/// Turtle local name. Returns `None` when no registered namespace matches or
/// the remainder would need escaping.
///
/// The longest matching namespace wins, so `geolod:` never shadows a more
/// specific binding.
#[must_use]
pub fn compact(iri: &str) -> Option<String> {
    let prefix = Prefix::ALL
        .into_iter()
        .filter(|p| iri.starts_with(p.iri()))
        .max_by_key(|p| p.iri().len())?;
    let local = &iri[prefix.iri().len()..];
    if is_safe_local_name(local) {
        Some(format!("{}:{}", prefix.label(), local))
    } else {
        None
    }
}

/// A conservative subset of Turtle `PN_LOCAL`: ASCII letters, digits, `_`
/// and `-`, not starting with `-`. The empty local name is allowed.
fn is_safe_local_name(local: &str) -> bool {
    if local.starts_with('-') {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
