//! Core vocabulary shared by every archive family.
//!
//! Written once per output directory as `geo_lod_core.ttl`. The content is
//! fixed; the smoothing window and polynomial order are the only substituted
//! values and appear in the two smoothing-method individuals.

use crate::model::iris::{crm, crmsci, dct, geo, geolod, prov, qudt, sf, sosa, xsd};
use crate::model::{
    Class, ExternalLabel, Individual, IndividualValue, Property, VocabularyHeader,
    VocabularyModule,
};
use crate::smoothing::{SmoothingKind, SmoothingParams, SmoothingSpec};

use super::{datatype, external, object};

/// Returns the core vocabulary module for the given smoothing parameters.
#[must_use]
pub fn module(params: &SmoothingParams) -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            iri: geolod::CORE_ONTOLOGY,
            file_name: "geo_lod_core.ttl",
            label: "geo-lod Core Ontology",
            comment: "Shared vocabulary for ice-core and speleothem palaeoclimate \
                      Linked Data. Domain extensions import this vocabulary.",
            version: "1.0",
            imports: &[],
        },
        classes: classes(),
        properties: properties(),
        individuals: individuals(params),
        external_labels: external_labels(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: geolod::SAMPLING_LOCATION,
            label: "Sampling Location",
            comment: "A geographically identified location from which palaeoclimate \
                      proxy material was obtained (ice-core drilling site or speleothem cave).",
            subclass_of: &[geo::FEATURE, crm::E53_PLACE, crm::E27_SITE],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::PALAEOCLIMATE_SAMPLE,
            label: "Palaeoclimate Sample",
            comment: "A physical archive recording a palaeoclimate signal (ice core or speleothem).",
            subclass_of: &[sosa::SAMPLE],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::PALAEOCLIMATE_OBSERVATION,
            label: "Palaeoclimate Observation",
            comment: "A single measured value (e.g. δ¹⁸O, δ¹³C, CH₄) at a known depth \
                      or age within a palaeoclimate archive.",
            subclass_of: &[crmsci::S4_OBSERVATION, sosa::OBSERVATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::OBSERVABLE_PROPERTY,
            label: "Observable Property",
            comment: "A measurable geochemical or physical property of a palaeoclimate \
                      sample (e.g. δ¹⁸O, δ¹³C, CH₄ concentration).",
            subclass_of: &[sosa::OBSERVABLE_PROPERTY, crmsci::S9_PROPERTY_TYPE],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::DELTA18O_PROPERTY,
            label: "δ¹⁸O Property",
            comment: "Stable oxygen isotope ratio (δ¹⁸O), shared by both ice-core and \
                      speleothem records.",
            subclass_of: &[geolod::OBSERVABLE_PROPERTY],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::CHRONOLOGY,
            label: "Chronology",
            comment: "A depth-age model assigning calendar ages to positions within a \
                      palaeoclimate archive.",
            subclass_of: &[],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::MEASUREMENT_TYPE,
            label: "Measurement Type",
            comment: "Classifies an observation by the physical quantity measured.",
            subclass_of: &[crmsci::S6_DATA_EVALUATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::SMOOTHING_METHOD,
            label: "Smoothing Method",
            comment: "A numerical method applied to reduce high-frequency noise in a \
                      palaeoclimate time series.",
            subclass_of: &[crmsci::S6_DATA_EVALUATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::ROLLING_MEDIAN_FILTER,
            label: "Rolling Median Filter",
            comment: "Non-parametric smoother computing the median within a sliding \
                      window of fixed width.",
            subclass_of: &[geolod::SMOOTHING_METHOD],
            restrictions: &[],
            see_also: Some("https://doi.org/10.1145/1968.1969"),
        },
        Class {
            id: geolod::SAVITZKY_GOLAY_FILTER,
            label: "Savitzky-Golay Filter",
            comment: "Polynomial least-squares smoothing filter preserving higher signal moments.",
            subclass_of: &[geolod::SMOOTHING_METHOD],
            restrictions: &[],
            see_also: Some("https://doi.org/10.1021/ac60214a047"),
        },
        Class {
            id: geolod::DATA_SOURCE,
            label: "Data Source",
            comment: "A citable source (database, repository, publication) from which \
                      palaeoclimate observations were obtained.",
            subclass_of: &[prov::ENTITY, dct::BIBLIOGRAPHIC_RESOURCE],
            restrictions: &[],
            see_also: None,
        },
    ]
}

fn properties() -> Vec<Property> {
    let obs = Some(geolod::PALAEOCLIMATE_OBSERVATION);
    vec![
        object(
            geolod::AGE_CHRONOLOGY,
            "age chronology",
            Some("Links an observation to the depth-age model used."),
            obs,
            Some(geolod::CHRONOLOGY),
        ),
        object(
            geolod::MEASUREMENT_TYPE_PROP,
            "measurement type",
            None,
            obs,
            Some(geolod::MEASUREMENT_TYPE),
        ),
        object(
            geolod::SMOOTHING_METHOD_MEDIAN,
            "smoothing method (rolling median)",
            None,
            obs,
            Some(geolod::ROLLING_MEDIAN_FILTER),
        ),
        object(
            geolod::SMOOTHING_METHOD_SAVGOL,
            "smoothing method (Savitzky-Golay)",
            None,
            obs,
            Some(geolod::SAVITZKY_GOLAY_FILTER),
        ),
        Property {
            sub_property_of: &[crm::P7_TOOK_PLACE_AT],
            ..object(
                geolod::TOOK_PLACE_AT,
                "took place at",
                Some("Links a sampling event or campaign to its location."),
                None,
                Some(geolod::SAMPLING_LOCATION),
            )
        },
        Property {
            sub_property_of: &[sosa::IS_SAMPLE_OF],
            ..object(
                geolod::EXTRACTED_FROM,
                "extracted from",
                None,
                Some(geolod::PALAEOCLIMATE_SAMPLE),
                Some(geolod::SAMPLING_LOCATION),
            )
        },
        Property {
            sub_property_of: &[crmsci::O1_REMOVED],
            ..object(
                geolod::REMOVED_SAMPLE,
                "removed sample",
                Some("Links a sampling event to the sample taken."),
                None,
                Some(geolod::PALAEOCLIMATE_SAMPLE),
            )
        },
        object(
            geolod::HAS_OBSERVATION,
            "has observation",
            None,
            None,
            Some(geolod::PALAEOCLIMATE_OBSERVATION),
        ),
        datatype(
            geolod::AGE_KA_BP,
            "age (ka BP)",
            Some("Age in thousands of years before present (ka BP)."),
            obs,
            xsd::DECIMAL,
        ),
        datatype(geolod::MEASURED_VALUE, "measured value", None, obs, xsd::DECIMAL),
        datatype(geolod::AT_DEPTH_M, "at depth (m)", None, obs, xsd::DECIMAL),
        datatype(geolod::AT_DEPTH_MM, "at depth (mm)", None, obs, xsd::DECIMAL),
        datatype(
            geolod::SMOOTHED_VALUE_ROLLING_MEDIAN,
            "smoothed value (rolling median)",
            None,
            obs,
            xsd::DECIMAL,
        ),
        datatype(
            geolod::SMOOTHED_VALUE_SAVGOL,
            "smoothed value (Savitzky-Golay)",
            None,
            obs,
            xsd::DECIMAL,
        ),
        datatype(
            geolod::WINDOW_SIZE,
            "window size",
            Some("Number of data points in the smoothing window."),
            Some(geolod::SMOOTHING_METHOD),
            xsd::INTEGER,
        ),
        datatype(
            geolod::POLY_ORDER,
            "polynomial order",
            None,
            Some(geolod::SAVITZKY_GOLAY_FILTER),
            xsd::INTEGER,
        ),
    ]
}

/// Builds the named individual for one smoothing method.
///
/// The data-graph assembler emits the same node, so both agree on the
/// identifier and properties.
#[must_use]
pub fn smoothing_individual(spec: &SmoothingSpec) -> Individual {
    let type_ = match spec.kind {
        SmoothingKind::RollingMedian => geolod::ROLLING_MEDIAN_FILTER,
        SmoothingKind::SavitzkyGolay => geolod::SAVITZKY_GOLAY_FILTER,
    };
    let mut properties = vec![(geolod::WINDOW_SIZE, IndividualValue::Int(spec.window as i64))];
    if let Some(order) = spec.order {
        properties.push((geolod::POLY_ORDER, IndividualValue::Int(order as i64)));
    }
    properties.push((
        dct::REFERENCES,
        IndividualValue::IriRef(spec.reference().to_owned()),
    ));
    Individual {
        id: spec.iri(),
        type_,
        label: spec.label(),
        comment: None,
        properties,
    }
}

fn individuals(params: &SmoothingParams) -> Vec<Individual> {
    vec![
        Individual {
            id: geolod::DELTA18O.to_owned(),
            type_: geolod::DELTA18O_PROPERTY,
            label: "δ¹⁸O".to_owned(),
            comment: Some(
                "Stable oxygen isotope ratio, shared observable property used in both \
                 ice-core and speleothem observations."
                    .to_owned(),
            ),
            properties: vec![(
                qudt::UNIT,
                IndividualValue::IriRef(qudt::UNIT_PERMILLE.to_owned()),
            )],
        },
        Individual {
            id: geolod::MEASUREMENT_TYPE_D18O.to_owned(),
            type_: geolod::MEASUREMENT_TYPE,
            label: "δ¹⁸O measurement".to_owned(),
            comment: None,
            properties: vec![],
        },
        smoothing_individual(&params.rolling_median()),
        smoothing_individual(&params.savitzky_golay()),
    ]
}

fn external_labels() -> Vec<ExternalLabel> {
    vec![
        external(
            geo::FEATURE,
            "Feature",
            Some("An abstraction of a real-world phenomenon (OGC GeoSPARQL)."),
        ),
        external(
            geo::FEATURE_COLLECTION,
            "Feature Collection",
            Some("A collection of geo:Feature instances (GeoSPARQL 1.1)."),
        ),
        external(
            geo::GEOMETRY,
            "Geometry",
            Some("A coherent set of direct positions in space (OGC GeoSPARQL)."),
        ),
        external(geo::HAS_GEOMETRY, "has geometry", None),
        external(geo::AS_WKT, "as WKT", None),
        external(
            sf::POINT,
            "Point",
            Some("A single location in n-dimensional space (OGC Simple Features)."),
        ),
        external(
            crm::E27_SITE,
            "Site",
            Some("A place that was or is the focus of human activity (CIDOC-CRM E27)."),
        ),
        external(crm::E53_PLACE, "Place", Some("An extent in space (CIDOC-CRM E53).")),
        external(
            crmsci::S4_OBSERVATION,
            "Observation",
            Some("A scientific observation event (CRMsci S4)."),
        ),
        external(
            crmsci::S6_DATA_EVALUATION,
            "Data Evaluation",
            Some("A process producing a value by evaluating data (CRMsci S6)."),
        ),
        external(
            crmsci::S9_PROPERTY_TYPE,
            "Property Type",
            Some("A type of measurable property (CRMsci S9)."),
        ),
        external(
            crmsci::S1_MATTER_REMOVAL,
            "Matter Removal",
            Some("A process of removing matter from an object (CRMsci S1)."),
        ),
        external(sosa::OBSERVATION, "Observation", None),
        external(sosa::OBSERVABLE_PROPERTY, "Observable Property", None),
        external(sosa::SAMPLE, "Sample", None),
        external(prov::ENTITY, "Entity", None),
    ]
}
