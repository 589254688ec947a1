//! Speleothem extension: caves, speleothems, U-Th chronologies and the
//! δ¹⁸O/δ¹³C speleothem observations.

use crate::model::iris::{crmsci, dcat, geolod, qudt, sosa};
use crate::model::{
    Class, ExternalLabel, Individual, IndividualValue, Property, Restriction, VocabularyHeader,
    VocabularyModule,
};

use super::{external, object};

/// Returns the speleothem extension module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            iri: geolod::SPELEOTHEM_ONTOLOGY,
            file_name: "geo_lod_speleothem.ttl",
            label: "geo-lod Speleothem Extension",
            comment: "Classes for speleothem isotope records: caves, speleothems, \
                      U-Th chronologies and d18O/d13C observations.",
            version: "1.0",
            imports: &[geolod::CORE_ONTOLOGY],
        },
        classes: classes(),
        properties: properties(),
        individuals: individuals(),
        external_labels: external_labels(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: geolod::CAVE,
            label: "Cave",
            comment: "A cave site from which speleothems were collected.",
            subclass_of: &[geolod::SAMPLING_LOCATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::SPELEOTHEM,
            label: "Speleothem",
            comment: "A secondary cave mineral deposit (stalagmite, stalactite, flowstone) \
                      recording isotope signals in its growth layers.",
            subclass_of: &[geolod::PALAEOCLIMATE_SAMPLE],
            restrictions: &[Restriction {
                on_property: geolod::COLLECTED_FROM,
                some_values_from: geolod::CAVE,
            }],
            see_also: None,
        },
        Class {
            id: geolod::SPELEOTHEM_SAMPLING_EVENT,
            label: "Speleothem Sampling Event",
            comment: "The removal of a speleothem from its cave.",
            subclass_of: &[crmsci::S1_MATTER_REMOVAL],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::SPELEOTHEM_OBSERVATION,
            label: "Speleothem Observation",
            comment: "A single isotope measurement on a speleothem sample.",
            subclass_of: &[geolod::PALAEOCLIMATE_OBSERVATION],
            restrictions: &[Restriction {
                on_property: sosa::HAS_FEATURE_OF_INTEREST,
                some_values_from: geolod::SPELEOTHEM,
            }],
            see_also: None,
        },
        Class {
            id: geolod::DELTA18O_SPELEOTHEM_OBSERVATION,
            label: "d18O Speleothem Observation",
            comment: "An oxygen isotope ratio (d18O, permille VPDB) measured on a speleothem.",
            subclass_of: &[geolod::SPELEOTHEM_OBSERVATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::DELTA13C_SPELEOTHEM_OBSERVATION,
            label: "d13C Speleothem Observation",
            comment: "A carbon isotope ratio (d13C, permille VPDB) measured on a speleothem.",
            subclass_of: &[geolod::SPELEOTHEM_OBSERVATION],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::DELTA13C_PROPERTY,
            label: "d13C Property",
            comment: "Stable carbon isotope ratio (d13C).",
            subclass_of: &[geolod::OBSERVABLE_PROPERTY],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::UTH_CHRONOLOGY,
            label: "U-Th Chronology",
            comment: "A uranium-thorium dated depth-age model of one speleothem entity.",
            subclass_of: &[geolod::CHRONOLOGY],
            restrictions: &[],
            see_also: None,
        },
        Class {
            id: geolod::SPELEOTHEM_DATASET,
            label: "Speleothem Dataset",
            comment: "A dataset of isotope observations on speleothems from one cave.",
            subclass_of: &[dcat::DATASET_CLASS],
            restrictions: &[],
            see_also: None,
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![Property {
        sub_property_of: &[geolod::EXTRACTED_FROM],
        ..object(
            geolod::COLLECTED_FROM,
            "collected from",
            Some("Links a speleothem to the cave it was collected from."),
            Some(geolod::SPELEOTHEM),
            Some(geolod::CAVE),
        )
    }]
}

fn individuals() -> Vec<Individual> {
    vec![
        Individual {
            id: geolod::DELTA13C.to_owned(),
            type_: geolod::DELTA13C_PROPERTY,
            label: "Stable carbon isotope ratio (d13C)".to_owned(),
            comment: None,
            properties: vec![(
                qudt::UNIT,
                IndividualValue::IriRef(qudt::UNIT_PERMILLE.to_owned()),
            )],
        },
        Individual {
            id: geolod::MEASUREMENT_TYPE_D13C.to_owned(),
            type_: geolod::MEASUREMENT_TYPE,
            label: "d13C measurement".to_owned(),
            comment: None,
            properties: vec![],
        },
    ]
}

fn external_labels() -> Vec<ExternalLabel> {
    vec![external(
        dcat::DATASET_CLASS,
        "Dataset",
        Some("A collection of data published or curated by a single agent."),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collected_from_specializes_extracted_from() {
        let m = module();
        let p = m.properties.iter().find(|p| p.id == geolod::COLLECTED_FROM);
        assert!(p.is_some_and(|p| p.sub_property_of == [geolod::EXTRACTED_FROM]));
    }
}
