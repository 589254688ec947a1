//! CRS-tagged WKT point encoding.
//!
//! Every geometry literal takes the form
//! `<http://www.opengis.net/def/crs/EPSG/0/4326> POINT(lon lat)` with six
//! decimals. Encoding is idempotent: a string that already carries a CRS tag
//! passes through untouched.

use serde::Deserialize;

use geolod_ontology::model::iris::{crm, geo, rdf, rdfs, sf};
use geolod_ontology::CRS_WGS84;

use crate::error::GeometryError;
use crate::graph::Graph;
use crate::term::{Iri, Literal};

/// Encodes a longitude/latitude pair as a CRS-tagged WKT point.
///
/// # Errors
///
/// Returns [`GeometryError`] for non-finite or out-of-range coordinates.
pub fn wkt_point(lon: f64, lat: f64) -> Result<String, GeometryError> {
    if !lon.is_finite() || !lat.is_finite() {
        return Err(GeometryError::NonFinite { lon, lat });
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeometryError::LongitudeOutOfRange(lon));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeometryError::LatitudeOutOfRange(lat));
    }
    Ok(format!("<{CRS_WGS84}> POINT({lon:.6} {lat:.6})"))
}

/// Prefixes a raw WKT string with the WGS84 CRS tag unless it already has one.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyWkt`] if `raw` is blank.
pub fn ensure_crs(raw: &str) -> Result<String, GeometryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GeometryError::EmptyWkt);
    }
    if trimmed.starts_with('<') {
        return Ok(trimmed.to_owned());
    }
    Ok(format!("<{CRS_WGS84}> {trimmed}"))
}

/// A site geometry as configured: coordinates or a preformatted WKT string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    /// Decimal degrees.
    Point {
        /// Longitude, east positive.
        lon: f64,
        /// Latitude, north positive.
        lat: f64,
    },
    /// A WKT string, with or without CRS tag.
    Wkt {
        /// Raw WKT text.
        wkt: String,
    },
}

impl Geometry {
    /// The canonical CRS-tagged literal text.
    ///
    /// # Errors
    ///
    /// Propagates [`wkt_point`] and [`ensure_crs`] errors.
    pub fn to_wkt(&self) -> Result<String, GeometryError> {
        match self {
            Geometry::Point { lon, lat } => wkt_point(*lon, *lat),
            Geometry::Wkt { wkt } => ensure_crs(wkt),
        }
    }
}

/// Adds a located site with its point geometry node.
///
/// The site is typed as a GeoSPARQL feature and CIDOC place/site plus every
/// class in `extra_types`. The geometry lives on a separate `sf:Point` node
/// named `<site>_Geometry`; `geo:Geometry` itself is never asserted.
pub fn add_geo_site(
    graph: &mut Graph,
    site: &Iri,
    label: &str,
    wkt: &str,
    extra_types: &[&str],
) -> Iri {
    let geom = Iri::new(format!("{}_Geometry", site.as_str()));
    for class in [geo::FEATURE, crm::E53_PLACE, crm::E27_SITE]
        .into_iter()
        .chain(extra_types.iter().copied())
    {
        graph.insert(site, rdf::TYPE, Iri::new(class));
    }
    graph.insert(site, rdfs::LABEL, Literal::en(label));
    graph.insert(site, geo::HAS_GEOMETRY, &geom);

    graph.insert(&geom, rdf::TYPE, Iri::new(sf::POINT));
    graph.insert(&geom, geo::AS_WKT, Literal::wkt(wkt));
    geom
}
