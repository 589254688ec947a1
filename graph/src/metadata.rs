//! Dataset-level metadata handed to the assembler.
//!
//! These types deserialize straight from the pipeline configuration. Node
//! identifiers are configured as local names in the project namespace and
//! validated when the graph is assembled.

use serde::Deserialize;

use crate::family::{DepthUnit, Family, Measurement};
use crate::geometry::Geometry;
use crate::ids::Slug;

/// Everything the assembler needs to describe one dataset besides its rows.
#[derive(Clone, Debug, Deserialize)]
pub struct DatasetMetadata {
    /// Namespacing slug for minted identifiers.
    pub slug: Slug,
    /// Archive family.
    pub family: Family,
    /// Catalog title.
    pub title: String,
    /// Catalog description.
    #[serde(default)]
    pub description: Option<String>,
    /// Publisher name.
    #[serde(default)]
    pub publisher: Option<String>,
    /// License IRI.
    #[serde(default)]
    pub license: Option<String>,
    /// Sampling location.
    pub location: LocationInfo,
    /// Named sample for rows without an entity id.
    #[serde(default)]
    pub sample: Option<SampleInfo>,
    /// Drilling campaign or sampling event.
    #[serde(default)]
    pub campaign: Option<CampaignInfo>,
    /// Unit of the depth column.
    #[serde(default)]
    pub depth_unit: DepthUnit,
}

/// A sampling location.
#[derive(Clone, Debug, Deserialize)]
pub struct LocationInfo {
    /// Local name, e.g. `EpicaDomeC_Site`.
    pub id: String,
    /// English label.
    pub label: String,
    /// Site geometry.
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Human-readable coordinate string (`crm:P87_is_identified_by`).
    #[serde(default)]
    pub identified_by: Option<String>,
}

/// A named physical sample.
#[derive(Clone, Debug, Deserialize)]
pub struct SampleInfo {
    /// Local name, e.g. `EpicaDomeC_IceCore`.
    pub id: String,
    /// English label.
    pub label: String,
}

/// A drilling campaign or sampling event.
#[derive(Clone, Debug, Deserialize)]
pub struct CampaignInfo {
    /// Local name.
    pub id: String,
    /// English label.
    pub label: String,
    /// Free-text time span, e.g. `1996/2004`.
    #[serde(default)]
    pub time_span: Option<String>,
}

/// The depth-age model of a series.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChronologyInfo {
    /// One named chronology for the whole series.
    Named {
        /// Local name, e.g. `EDC2_Chronology`.
        id: String,
        /// English label.
        label: String,
        /// Description.
        #[serde(default)]
        description: Option<String>,
        /// Reference IRI (usually a DOI).
        #[serde(default)]
        reference: Option<String>,
    },
    /// One chronology per sample entity (U-Th for speleothems).
    PerEntity,
}

/// A citable upstream source.
#[derive(Clone, Debug, Deserialize)]
pub struct SourceInfo {
    /// Local name, e.g. `PANGAEA_CH4_Source`.
    pub id: String,
    /// English label.
    pub label: String,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Creator string.
    #[serde(default)]
    pub creator: Option<String>,
    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,
    /// DOI IRI.
    #[serde(default)]
    pub doi: Option<String>,
}

/// One measured series of a dataset.
#[derive(Clone, Debug, Deserialize)]
pub struct SeriesInfo {
    /// Measured quantity.
    pub measurement: Measurement,
    /// Depth-age model.
    pub chronology: ChronologyInfo,
    /// Upstream source.
    pub source: SourceInfo,
    /// Sub-dataset title.
    #[serde(default)]
    pub title: Option<String>,
}
