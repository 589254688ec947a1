//! Dataset families and measured quantities.
//!
//! A [`Family`] fixes the classes used for the location, sample, sampling
//! event, chronology and observation nodes of a dataset; a [`Measurement`]
//! fixes the observed property, unit, result precision and sub-dataset class.

use serde::Deserialize;

use geolod_ontology::model::iris::{geolod, qudt};

/// The archive type of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// Ice core from a drilling site.
    IceCore,
    /// Speleothem from a cave.
    Speleothem,
}

impl Family {
    /// Class added to the sampling location.
    #[must_use]
    pub const fn location_class(self) -> &'static str {
        match self {
            Family::IceCore => geolod::DRILLING_SITE,
            Family::Speleothem => geolod::CAVE,
        }
    }

    /// Class of the physical sample.
    #[must_use]
    pub const fn sample_class(self) -> &'static str {
        match self {
            Family::IceCore => geolod::ICE_CORE,
            Family::Speleothem => geolod::SPELEOTHEM,
        }
    }

    /// Class of the sampling event.
    #[must_use]
    pub const fn event_class(self) -> &'static str {
        match self {
            Family::IceCore => geolod::DRILLING_CAMPAIGN,
            Family::Speleothem => geolod::SPELEOTHEM_SAMPLING_EVENT,
        }
    }

    /// Class of the depth-age model.
    #[must_use]
    pub const fn chronology_class(self) -> &'static str {
        match self {
            Family::IceCore => geolod::ICE_CORE_CHRONOLOGY,
            Family::Speleothem => geolod::UTH_CHRONOLOGY,
        }
    }

    /// Local-name stem of per-entity sample nodes.
    #[must_use]
    pub const fn sample_stem(self) -> &'static str {
        match self {
            Family::IceCore => "IceCore",
            Family::Speleothem => "Speleothem",
        }
    }

    /// Local-name stem of per-entity chronology nodes.
    #[must_use]
    pub const fn chronology_stem(self) -> &'static str {
        match self {
            Family::IceCore => "IceCoreChronology",
            Family::Speleothem => "UThChronology",
        }
    }

    /// English noun for a per-entity chronology, used in labels.
    #[must_use]
    pub const fn chronology_noun(self) -> &'static str {
        match self {
            Family::IceCore => "ice-core chronology",
            Family::Speleothem => "U-Th chronology",
        }
    }

    /// Class of the main dataset node.
    #[must_use]
    pub const fn dataset_class(self) -> &'static str {
        match self {
            Family::IceCore => geolod::ICE_CORE_DATASET,
            Family::Speleothem => geolod::SPELEOTHEM_DATASET,
        }
    }

    /// Property linking a sample to its location, in addition to
    /// `sosa:isSampleOf`.
    #[must_use]
    pub const fn sample_link(self) -> &'static str {
        match self {
            Family::IceCore => geolod::EXTRACTED_FROM,
            Family::Speleothem => geolod::COLLECTED_FROM,
        }
    }

    /// Most specific observation class for `measurement`.
    #[must_use]
    pub const fn observation_class(self, measurement: Measurement) -> &'static str {
        match (self, measurement) {
            (Family::IceCore, Measurement::Ch4) => geolod::CH4_OBSERVATION,
            (Family::IceCore, Measurement::Delta18O) => geolod::DELTA18O_OBSERVATION,
            (Family::IceCore, Measurement::Delta13C) => geolod::ICE_CORE_OBSERVATION,
            (Family::Speleothem, Measurement::Delta18O) => geolod::DELTA18O_SPELEOTHEM_OBSERVATION,
            (Family::Speleothem, Measurement::Delta13C) => geolod::DELTA13C_SPELEOTHEM_OBSERVATION,
            (Family::Speleothem, Measurement::Ch4) => geolod::SPELEOTHEM_OBSERVATION,
        }
    }

    /// Class of the per-measurement sub-dataset.
    #[must_use]
    pub const fn sub_dataset_class(self, measurement: Measurement) -> &'static str {
        match (self, measurement) {
            (Family::IceCore, Measurement::Ch4) => geolod::CH4_DATASET,
            (Family::IceCore, Measurement::Delta18O) => geolod::DELTA18O_DATASET,
            (Family::IceCore, Measurement::Delta13C) => geolod::ICE_CORE_DATASET,
            (Family::Speleothem, _) => geolod::SPELEOTHEM_DATASET,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Family::IceCore => "ice-core",
            Family::Speleothem => "speleothem",
        })
    }
}

/// A measured quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Measurement {
    /// Methane mixing ratio in ppbv.
    #[serde(rename = "CH4")]
    Ch4,
    /// δ¹⁸O in ‰.
    #[serde(rename = "d18O")]
    Delta18O,
    /// δ¹³C in ‰.
    #[serde(rename = "d13C")]
    Delta13C,
}

impl Measurement {
    /// Key used in identifiers and file names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Measurement::Ch4 => "CH4",
            Measurement::Delta18O => "d18O",
            Measurement::Delta13C => "d13C",
        }
    }

    /// Display symbol used in labels.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Measurement::Ch4 => "CH₄",
            Measurement::Delta18O => "δ¹⁸O",
            Measurement::Delta13C => "δ¹³C",
        }
    }

    /// Decimal places kept for the measured and smoothed values.
    #[must_use]
    pub const fn precision(self) -> usize {
        match self {
            Measurement::Ch4 => 2,
            Measurement::Delta18O | Measurement::Delta13C => 5,
        }
    }

    /// Unit of the measured value.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Measurement::Ch4 => qudt::UNIT_PPB,
            Measurement::Delta18O | Measurement::Delta13C => qudt::UNIT_PERMILLE,
        }
    }

    /// Shared observable-property individual.
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Measurement::Ch4 => geolod::CH4_CONCENTRATION,
            Measurement::Delta18O => geolod::DELTA18O,
            Measurement::Delta13C => geolod::DELTA13C,
        }
    }

    /// Shared measurement-type individual.
    #[must_use]
    pub const fn measurement_type(self) -> &'static str {
        match self {
            Measurement::Ch4 => geolod::MEASUREMENT_TYPE_CH4,
            Measurement::Delta18O => geolod::MEASUREMENT_TYPE_D18O,
            Measurement::Delta13C => geolod::MEASUREMENT_TYPE_D13C,
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Unit of the depth column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthUnit {
    /// Metres below surface.
    #[default]
    Metres,
    /// Millimetres from top of sample.
    Millimetres,
}

impl DepthUnit {
    /// Property carrying the depth.
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            DepthUnit::Metres => geolod::AT_DEPTH_M,
            DepthUnit::Millimetres => geolod::AT_DEPTH_MM,
        }
    }

    /// Column suffix used in plot-series files.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            DepthUnit::Metres => "m",
            DepthUnit::Millimetres => "mm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speleothem_observations_use_specific_classes() {
        assert_eq!(
            Family::Speleothem.observation_class(Measurement::Delta13C),
            geolod::DELTA13C_SPELEOTHEM_OBSERVATION
        );
        assert_eq!(
            Family::IceCore.observation_class(Measurement::Ch4),
            geolod::CH4_OBSERVATION
        );
    }

    #[test]
    fn precision_follows_quantity() {
        assert_eq!(Measurement::Ch4.precision(), 2);
        assert_eq!(Measurement::Delta18O.precision(), 5);
    }
}
