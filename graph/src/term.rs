//! RDF term types: IRI, literal and triple.
//!
//! IRIs are always expanded, never prefixed; the serializer compacts them.
//! Ordering is derived so that a set of triples iterates subject-first.

use std::sync::Arc;

use chrono::NaiveDate;
use geolod_ontology::model::iris::{geo, xsd};
use geolod_ontology::Prefix;

/// An absolute IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Creates an IRI from its full text.
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    /// Expands a local name in the project namespace.
    pub fn geolod(local: &str) -> Self {
        Self::new(Prefix::Geolod.expand(local))
    }

    /// The full IRI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both handles share one allocation.
    pub fn ptr_eq(&self, other: &Iri) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri(Arc::from(s))
    }
}

/// A literal: lexical form plus either a datatype or a language tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Literal {
    /// A datatyped literal.
    Typed {
        /// Lexical form.
        lexical: Arc<str>,
        /// Datatype IRI.
        datatype: Iri,
    },
    /// A language-tagged string.
    Lang {
        /// Lexical form.
        lexical: Arc<str>,
        /// BCP 47 language tag.
        lang: Arc<str>,
    },
}

impl Literal {
    /// A datatyped literal.
    pub fn typed(lexical: impl AsRef<str>, datatype: &str) -> Self {
        Literal::Typed {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Iri::new(datatype),
        }
    }

    /// An `xsd:string` literal.
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::typed(s, xsd::STRING)
    }

    /// An English language-tagged string.
    pub fn en(s: impl AsRef<str>) -> Self {
        Literal::Lang {
            lexical: Arc::from(s.as_ref()),
            lang: Arc::from("en"),
        }
    }

    /// An `xsd:integer` literal.
    pub fn integer(n: i64) -> Self {
        Self::typed(n.to_string(), xsd::INTEGER)
    }

    /// An `xsd:decimal` literal rounded to `places` decimals.
    ///
    /// Returns `None` for NaN or infinite values, which have no decimal form.
    pub fn decimal(value: f64, places: usize) -> Option<Self> {
        decimal_lexical(value, places).map(|lex| Self::typed(lex, xsd::DECIMAL))
    }

    /// An `xsd:date` literal.
    pub fn date(date: NaiveDate) -> Self {
        Self::typed(date.format("%Y-%m-%d").to_string(), xsd::DATE)
    }

    /// An `xsd:gYear` literal.
    pub fn year(year: i32) -> Self {
        Self::typed(format!("{year:04}"), xsd::G_YEAR)
    }

    /// A `geo:wktLiteral`.
    pub fn wkt(wkt: impl AsRef<str>) -> Self {
        Self::typed(wkt, geo::WKT_LITERAL)
    }

    /// The lexical form.
    pub fn lexical(&self) -> &str {
        match self {
            Literal::Typed { lexical, .. } | Literal::Lang { lexical, .. } => lexical,
        }
    }

    /// The datatype IRI, if this is a typed literal.
    pub fn datatype(&self) -> Option<&Iri> {
        match self {
            Literal::Typed { datatype, .. } => Some(datatype),
            Literal::Lang { .. } => None,
        }
    }
}

/// Canonical `xsd:decimal` lexical form: rounded to `places`, trailing zeros
/// trimmed, at least one fractional digit, and no negative zero.
pub fn decimal_lexical(value: f64, places: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let mut s = format!("{value:.places$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.push('0');
        }
    } else {
        s.push_str(".0");
    }
    if s == "-0.0" {
        s.remove(0);
    }
    Some(s)
}

/// An RDF term in object position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// IRI reference.
    Iri(Iri),
    /// Literal value.
    Literal(Literal),
}

impl Term {
    /// The IRI, if this term is one.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    /// The literal, if this term is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            Term::Iri(_) => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<&Iri> for Term {
    fn from(iri: &Iri) -> Self {
        Term::Iri(iri.clone())
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// A ground triple. Subjects are always IRIs in geo-lod graphs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Subject.
    pub s: Iri,
    /// Predicate.
    pub p: Iri,
    /// Object.
    pub o: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(s: impl Into<Iri>, p: impl Into<Iri>, o: impl Into<Term>) -> Self {
        Self {
            s: s.into(),
            p: p.into(),
            o: o.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_trims_trailing_zeros() {
        assert_eq!(decimal_lexical(105.0, 2).as_deref(), Some("105.0"));
        assert_eq!(decimal_lexical(587.456, 2).as_deref(), Some("587.46"));
        assert_eq!(decimal_lexical(-54.12000, 5).as_deref(), Some("-54.12"));
        assert_eq!(decimal_lexical(12.3, 0).as_deref(), Some("12.0"));
    }

    #[test]
    fn decimal_normalizes_negative_zero() {
        assert_eq!(decimal_lexical(-0.0, 2).as_deref(), Some("0.0"));
        assert_eq!(decimal_lexical(-0.001, 2).as_deref(), Some("0.0"));
    }

    #[test]
    fn decimal_rejects_non_finite() {
        assert!(Literal::decimal(f64::NAN, 2).is_none());
        assert!(Literal::decimal(f64::INFINITY, 2).is_none());
    }

    #[test]
    fn year_is_zero_padded() {
        assert_eq!(Literal::year(987).lexical(), "0987");
    }

    #[test]
    fn iri_order_is_textual() {
        assert!(Iri::new("http://a/1") < Iri::new("http://a/2"));
    }
}
