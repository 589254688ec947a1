//! geo-lod graph construction engine.
//!
//! Turns validated palaeoclimate series into typed Linked-Data graphs:
//!
//! - [`term`] and [`graph`]: RDF terms and an in-memory graph with set
//!   semantics.
//! - [`geometry`]: CRS-tagged WKT point literals and located sites.
//! - [`smoothing`] and [`series`]: smoothing filters and the explicit pairing
//!   of each valid row with its smoothed values.
//! - [`ids`]: deterministic, namespaced identifier minting.
//! - [`entity`]: the triples of one observation.
//! - [`assembler`]: one self-contained graph per dataset.
//! - [`merger`]: combined graph and feature collection over many datasets.
//! - [`serializer`]: Turtle and N-Triples output.
//!
//! # Example
//!
//! ```
//! use geolod_graph::geometry::{ensure_crs, wkt_point};
//! use geolod_graph::series::{pair, RawRow};
//! use geolod_graph::smoothing::SmoothingConfig;
//!
//! let wkt = wkt_point(123.35, -75.1).unwrap();
//! assert_eq!(
//!     wkt,
//!     "<http://www.opengis.net/def/crs/EPSG/0/4326> POINT(123.350000 -75.100000)"
//! );
//! assert_eq!(ensure_crs(&wkt).unwrap(), wkt);
//!
//! let rows = vec![RawRow::new(10.0, 1.0, 600.0), RawRow { age: None, ..RawRow::default() }];
//! let paired = pair(rows, &SmoothingConfig::default().smoothers());
//! assert_eq!((paired.rows.len(), paired.dropped), (1, 1));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assembler;
pub mod entity;
pub mod error;
pub mod family;
pub mod geometry;
pub mod graph;
pub mod ids;
pub mod merger;
pub mod metadata;
pub mod registry;
pub mod series;
pub mod serializer;
pub mod smoothing;
pub mod term;

pub use assembler::{Assembler, Assembly, AssemblySummary, Series, SeriesSummary};
pub use error::{GeometryError, GraphError, SmoothingError};
pub use graph::Graph;
pub use merger::{merge, CollectionDescription, Merged};
pub use term::{Iri, Literal, Term, Triple};
