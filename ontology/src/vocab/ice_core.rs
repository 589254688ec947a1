//! Ice-core extension: drilling sites, ice cores, CH₄ and δ¹⁸O observations,
//! drilling campaigns and DCAT catalogue classes.

use crate::model::iris::{crm, crmsci, dcat, geolod, prov, qudt, sosa};
use crate::model::{
    Class, ExternalLabel, Individual, IndividualValue, Property, Restriction, VocabularyHeader,
    VocabularyModule,
};

use super::{external, object};

/// Returns the ice-core extension module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            iri: geolod::ICE_CORE_ONTOLOGY,
            file_name: "geo_lod_ice_core.ttl",
            label: "geo-lod Ice Core Extension",
            comment: "Classes for palaeoclimatic ice-core observations: drilling sites, \
                      ice cores, CH4 and d18O measurements, drilling campaigns and \
                      catalogue structure.",
            version: "1.0",
            imports: &[geolod::CORE_ONTOLOGY],
        },
        classes: classes(),
        properties: properties(),
        individuals: individuals(),
        external_labels: external_labels(),
    }
}

const OBSERVATION_RESTRICTIONS: &[Restriction] = &[
    Restriction {
        on_property: sosa::HAS_FEATURE_OF_INTEREST,
        some_values_from: geolod::ICE_CORE,
    },
    Restriction {
        on_property: sosa::OBSERVED_PROPERTY,
        some_values_from: geolod::OBSERVABLE_PROPERTY,
    },
    Restriction {
        on_property: prov::WAS_DERIVED_FROM,
        some_values_from: geolod::DATA_SOURCE,
    },
];

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: geolod::DRILLING_SITE,
            label: "Ice Core Drilling Site",
            comment: "The geographical location where an ice core was drilled.",
            subclass_of: &[geolod::SAMPLING_LOCATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::ICE_CORE,
            label: "Ice Core",
            comment: "A cylindrical ice sample extracted by drilling from a glacier or ice sheet.",
            subclass_of: &[geolod::PALAEOCLIMATE_SAMPLE, crm::E22_HUMAN_MADE_OBJECT],
            restrictions: &[Restriction {
                on_property: geolod::EXTRACTED_FROM,
                some_values_from: geolod::DRILLING_SITE,
            }],
            see_also: None,
        },
        Class {
            id: geolod::ICE_CORE_OBSERVATION,
            label: "Ice Core Observation",
            comment: "A single measurement on an ice core sample, characterised by depth, \
                      age and measured value.",
            subclass_of: &[geolod::PALAEOCLIMATE_OBSERVATION],
            restrictions: OBSERVATION_RESTRICTIONS,
            see_also: None,
        },
        Class {
            id: geolod::CH4_OBSERVATION,
            label: "CH4 Observation",
            comment: "An observation of methane concentration (CH4) in ppbv from an ice core.",
            subclass_of: &[geolod::ICE_CORE_OBSERVATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::DELTA18O_OBSERVATION,
            label: "d18O Observation",
            comment: "An observation of the stable water isotope ratio (d18O) in permille \
                      SMOW from an ice core.",
            subclass_of: &[geolod::ICE_CORE_OBSERVATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::CH4_CONCENTRATION_PROPERTY,
            label: "Methane Concentration Property",
            comment: "CH4 concentration in ppbv, measured from air bubbles trapped in ice.",
            subclass_of: &[geolod::OBSERVABLE_PROPERTY],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::ICE_CORE_CHRONOLOGY,
            label: "Ice Core Chronology",
            comment: "A depth-age model assigning calendar ages to depths in an ice core \
                      (e.g. EDC2, AICC2023).",
            subclass_of: &[geolod::CHRONOLOGY, crmsci::S6_DATA_EVALUATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::PALAEOCLIMATE_DATA_CATALOGUE,
            label: "Palaeoclimate Data Catalogue",
            comment: "A DCAT catalogue aggregating one or more palaeoclimate datasets.",
            subclass_of: &[dcat::CATALOG],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::ICE_CORE_DATASET,
            label: "Ice Core Dataset",
            comment: "A dataset derived from measurements on an ice core.",
            subclass_of: &[dcat::DATASET_CLASS],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::CH4_DATASET,
            label: "Methane (CH4) Ice Core Dataset",
            comment: "Dataset containing methane concentration observations from an ice core.",
            subclass_of: &[geolod::ICE_CORE_DATASET],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::DELTA18O_DATASET,
            label: "Stable Water Isotope (d18O) Ice Core Dataset",
            comment: "Dataset containing stable water isotope (d18O) observations from an ice core.",
            subclass_of: &[geolod::ICE_CORE_DATASET],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::DRILLING_CAMPAIGN,
            label: "Drilling Campaign",
            comment: "A scientific field campaign during which an ice core was drilled.",
            subclass_of: &[crm::E7_ACTIVITY, crmsci::S1_MATTER_REMOVAL],
            restrictions: &[
                Restriction {
                    on_property: geolod::TOOK_PLACE_AT,
                    some_values_from: geolod::DRILLING_SITE,
                },
                Restriction {
                    on_property: geolod::REMOVED_SAMPLE,
                    some_values_from: geolod::ICE_CORE,
                },
            ],
            see_also: None,
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![object(
        geolod::HAS_DRILLING_CAMPAIGN,
        "has drilling campaign",
        None,
        Some(geolod::ICE_CORE_DATASET),
        Some(geolod::DRILLING_CAMPAIGN),
    )]
}

fn individuals() -> Vec<Individual> {
    vec![
        Individual {
            id: geolod::CH4_CONCENTRATION.to_owned(),
            type_: geolod::CH4_CONCENTRATION_PROPERTY,
            label: "Methane concentration (CH4)".to_owned(),
            comment: None,
            properties: vec![(qudt::UNIT, IndividualValue::IriRef(qudt::UNIT_PPB.to_owned()))],
        },
        Individual {
            id: geolod::MEASUREMENT_TYPE_CH4.to_owned(),
            type_: geolod::MEASUREMENT_TYPE,
            label: "Methane (CH4) measurement".to_owned(),
            comment: Some(
                "Indicates a CH4 concentration measurement from trapped air bubbles.".to_owned(),
            ),
            properties: vec![],
        },
    ]
}

fn external_labels() -> Vec<ExternalLabel> {
    vec![
        external(
            dcat::CATALOG,
            "Catalog",
            Some("A curated collection of metadata about resources."),
        ),
        external(
            dcat::DATASET_CLASS,
            "Dataset",
            Some("A collection of data published or curated by a single agent."),
        ),
        external(
            crm::E22_HUMAN_MADE_OBJECT,
            "Human-Made Object",
            Some("A physical object purposely created by human activity (CIDOC-CRM E22)."),
        ),
        external(
            crm::E7_ACTIVITY,
            "Activity",
            Some("Actions intentionally carried out by actors (CIDOC-CRM E7)."),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_core() {
        assert_eq!(module().header.imports, &[geolod::CORE_ONTOLOGY]);
    }

    #[test]
    fn observation_subclasses_chain_to_core() {
        let m = module();
        let ch4 = m
            .classes
            .iter()
            .find(|c| c.id == geolod::CH4_OBSERVATION)
            .map(|c| c.subclass_of);
        assert_eq!(ch4, Some(&[geolod::ICE_CORE_OBSERVATION][..]));
        let ico = m
            .classes
            .iter()
            .find(|c| c.id == geolod::ICE_CORE_OBSERVATION);
        assert!(ico.is_some_and(|c| c.subclass_of.contains(&geolod::PALAEOCLIMATE_OBSERVATION)));
    }
}
