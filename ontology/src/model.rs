//! Vocabulary model types.
//!
//! The geo-lod vocabularies are typed Rust data. Classes and properties are
//! fixed text and borrow `'static` strings; named individuals are owned
//! because the smoothing-method individuals carry the configured window and
//! polynomial order in their identifiers.

use crate::smoothing::SmoothingParams;

/// Header of one vocabulary document (`owl:Ontology` node).
#[derive(Debug, Clone)]
pub struct VocabularyHeader {
    /// IRI of the `owl:Ontology` node.
    pub iri: &'static str,
    /// File name the vocabulary is written to (e.g. `geo_lod_core.ttl`).
    pub file_name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// `owl:versionInfo`.
    pub version: &'static str,
    /// Full IRIs of imported vocabularies (`owl:imports`).
    pub imports: &'static [&'static str],
}

/// An existential restriction (`owl:someValuesFrom`) on a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restriction {
    /// Full IRI of the restricted property.
    pub on_property: &'static str,
    /// Full IRI of the filler class.
    pub some_values_from: &'static str,
}

/// An OWL class definition.
#[derive(Debug, Clone)]
pub struct Class {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Full IRIs of parent classes (`rdfs:subClassOf`).
    pub subclass_of: &'static [&'static str],
    /// Anonymous restriction superclasses.
    pub restrictions: &'static [Restriction],
    /// Optional `rdfs:seeAlso` reference.
    pub see_also: Option<&'static str>,
}

/// Whether a property is a datatype or object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`: relates a resource to a literal.
    Datatype,
    /// `owl:ObjectProperty`: relates two resources.
    Object,
}

/// An OWL property definition.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Optional description.
    pub comment: Option<&'static str>,
    /// Datatype or object property.
    pub kind: PropertyKind,
    /// Full IRIs of parent properties (`rdfs:subPropertyOf`).
    pub sub_property_of: &'static [&'static str],
    /// Full IRI of the domain class, if any.
    pub domain: Option<&'static str>,
    /// Full IRI of the range class or datatype, if any.
    pub range: Option<&'static str>,
}

/// A value in a named individual's property assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndividualValue {
    /// A plain string literal.
    Str(String),
    /// An `xsd:integer` literal.
    Int(i64),
    /// An `xsd:gYear` literal.
    Year(i32),
    /// An IRI reference to another resource.
    IriRef(String),
}

/// A named individual (`owl:NamedIndividual`).
#[derive(Debug, Clone)]
pub struct Individual {
    /// Full IRI.
    pub id: String,
    /// Full IRI of the class this individual is an instance of.
    pub type_: &'static str,
    /// English label.
    pub label: String,
    /// Optional description.
    pub comment: Option<String>,
    /// Property assertions: pairs of (property IRI, value).
    pub properties: Vec<(&'static str, IndividualValue)>,
}

/// Label and comment attached to a term of an imported vocabulary, so that
/// editors display it without loading the import.
#[derive(Debug, Clone)]
pub struct ExternalLabel {
    /// Full IRI of the external term.
    pub id: &'static str,
    /// English label.
    pub label: &'static str,
    /// Optional description.
    pub comment: Option<&'static str>,
}

/// One vocabulary document: header, classes, properties, individuals and
/// labels for imported terms.
#[derive(Debug, Clone)]
pub struct VocabularyModule {
    /// Header metadata.
    pub header: VocabularyHeader,
    /// Classes defined by this vocabulary.
    pub classes: Vec<Class>,
    /// Properties defined by this vocabulary.
    pub properties: Vec<Property>,
    /// Named individuals declared by this vocabulary.
    pub individuals: Vec<Individual>,
    /// Labels for imported terms.
    pub external_labels: Vec<ExternalLabel>,
}

/// The complete geo-lod vocabulary: the core module followed by the domain
/// extensions.
#[derive(Debug, Clone)]
pub struct Ontology {
    /// Smoothing parameters substituted into the core individuals.
    pub smoothing: SmoothingParams,
    /// Modules in dependency order (core first).
    pub modules: Vec<VocabularyModule>,
}

impl Ontology {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.modules
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.id == iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.modules
            .iter()
            .flat_map(|m| m.properties.iter())
            .find(|p| p.id == iri)
    }

    /// Looks up a named individual by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_individual(&self, iri: &str) -> Option<&Individual> {
        self.modules
            .iter()
            .flat_map(|m| m.individuals.iter())
            .find(|i| i.id == iri)
    }

    /// Looks up a module by its file name.
    #[must_use]
    pub fn module(&self, file_name: &str) -> Option<&VocabularyModule> {
        self.modules.iter().find(|m| m.header.file_name == file_name)
    }

    /// Returns the total number of classes across all modules.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.modules.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of properties across all modules.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.modules.iter().map(|m| m.properties.len()).sum()
    }

    /// Returns the total number of named individuals across all modules.
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.modules.iter().map(|m| m.individuals.len()).sum()
    }
}

/// IRI constants, grouped by vocabulary.
pub mod iris {
    /// RDF vocabulary.
    pub mod rdf {
        /// `rdf:type`.
        pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
        /// `rdf:langString`.
        pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    }

    /// RDFS vocabulary.
    pub mod rdfs {
        /// `rdfs:label`.
        pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
        /// `rdfs:comment`.
        pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
        /// `rdfs:subClassOf`.
        pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
        /// `rdfs:subPropertyOf`.
        pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
        /// `rdfs:domain`.
        pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
        /// `rdfs:range`.
        pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
        /// `rdfs:seeAlso`.
        pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
        /// `rdfs:member`.
        pub const MEMBER: &str = "http://www.w3.org/2000/01/rdf-schema#member";
    }

    /// OWL vocabulary.
    pub mod owl {
        /// `owl:Ontology`.
        pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
        /// `owl:Class`.
        pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
        /// `owl:ObjectProperty`.
        pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
        /// `owl:DatatypeProperty`.
        pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
        /// `owl:NamedIndividual`.
        pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
        /// `owl:Restriction`.
        pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
        /// `owl:onProperty`.
        pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
        /// `owl:someValuesFrom`.
        pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
        /// `owl:imports`.
        pub const IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
        /// `owl:versionInfo`.
        pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
        /// `owl:sameAs`.
        pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
    }

    /// XML Schema datatypes.
    pub mod xsd {
        /// `xsd:string`.
        pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
        /// `xsd:decimal`.
        pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
        /// `xsd:integer`.
        pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
        /// `xsd:date`.
        pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
        /// `xsd:gYear`.
        pub const G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
    }

    /// OGC GeoSPARQL.
    pub mod geo {
        /// `geo:Feature`.
        pub const FEATURE: &str = "http://www.opengis.net/ont/geosparql#Feature";
        /// `geo:FeatureCollection`.
        pub const FEATURE_COLLECTION: &str = "http://www.opengis.net/ont/geosparql#FeatureCollection";
        /// `geo:Geometry`.
        pub const GEOMETRY: &str = "http://www.opengis.net/ont/geosparql#Geometry";
        /// `geo:hasGeometry`.
        pub const HAS_GEOMETRY: &str = "http://www.opengis.net/ont/geosparql#hasGeometry";
        /// `geo:asWKT`.
        pub const AS_WKT: &str = "http://www.opengis.net/ont/geosparql#asWKT";
        /// `geo:wktLiteral`.
        pub const WKT_LITERAL: &str = "http://www.opengis.net/ont/geosparql#wktLiteral";
    }

    /// OGC Simple Features.
    pub mod sf {
        /// `sf:Point`.
        pub const POINT: &str = "http://www.opengis.net/ont/sf#Point";
    }

    /// CIDOC-CRM.
    pub mod crm {
        /// `crm:E7_Activity`.
        pub const E7_ACTIVITY: &str = "http://www.cidoc-crm.org/cidoc-crm/E7_Activity";
        /// `crm:E22_Human-Made_Object`.
        pub const E22_HUMAN_MADE_OBJECT: &str =
            "http://www.cidoc-crm.org/cidoc-crm/E22_Human-Made_Object";
        /// `crm:E27_Site`.
        pub const E27_SITE: &str = "http://www.cidoc-crm.org/cidoc-crm/E27_Site";
        /// `crm:E53_Place`.
        pub const E53_PLACE: &str = "http://www.cidoc-crm.org/cidoc-crm/E53_Place";
        /// `crm:P4_has_time-span`.
        pub const P4_HAS_TIME_SPAN: &str = "http://www.cidoc-crm.org/cidoc-crm/P4_has_time-span";
        /// `crm:P7_took_place_at`.
        pub const P7_TOOK_PLACE_AT: &str = "http://www.cidoc-crm.org/cidoc-crm/P7_took_place_at";
        /// `crm:P87_is_identified_by`.
        pub const P87_IS_IDENTIFIED_BY: &str =
            "http://www.cidoc-crm.org/cidoc-crm/P87_is_identified_by";
    }

    /// CRMsci.
    pub mod crmsci {
        /// `crmsci:S1_Matter_Removal`.
        pub const S1_MATTER_REMOVAL: &str = "http://www.ics.forth.gr/isl/CRMsci/S1_Matter_Removal";
        /// `crmsci:S4_Observation`.
        pub const S4_OBSERVATION: &str = "http://www.ics.forth.gr/isl/CRMsci/S4_Observation";
        /// `crmsci:S6_Data_Evaluation`.
        pub const S6_DATA_EVALUATION: &str =
            "http://www.ics.forth.gr/isl/CRMsci/S6_Data_Evaluation";
        /// `crmsci:S9_Property_Type`.
        pub const S9_PROPERTY_TYPE: &str = "http://www.ics.forth.gr/isl/CRMsci/S9_Property_Type";
        /// `crmsci:O1_removed`.
        pub const O1_REMOVED: &str = "http://www.ics.forth.gr/isl/CRMsci/O1_removed";
    }

    /// W3C SOSA.
    pub mod sosa {
        /// `sosa:Observation`.
        pub const OBSERVATION: &str = "http://www.w3.org/ns/sosa/Observation";
        /// `sosa:Sample`.
        pub const SAMPLE: &str = "http://www.w3.org/ns/sosa/Sample";
        /// `sosa:ObservableProperty`.
        pub const OBSERVABLE_PROPERTY: &str = "http://www.w3.org/ns/sosa/ObservableProperty";
        /// `sosa:hasFeatureOfInterest`.
        pub const HAS_FEATURE_OF_INTEREST: &str = "http://www.w3.org/ns/sosa/hasFeatureOfInterest";
        /// `sosa:observedProperty`.
        pub const OBSERVED_PROPERTY: &str = "http://www.w3.org/ns/sosa/observedProperty";
        /// `sosa:hasSimpleResult`.
        pub const HAS_SIMPLE_RESULT: &str = "http://www.w3.org/ns/sosa/hasSimpleResult";
        /// `sosa:isSampleOf`.
        pub const IS_SAMPLE_OF: &str = "http://www.w3.org/ns/sosa/isSampleOf";
    }

    /// QUDT schema and units.
    pub mod qudt {
        /// `qudt:unit`.
        pub const UNIT: &str = "http://qudt.org/schema/qudt/unit";
        /// `unit:PPB`.
        pub const UNIT_PPB: &str = "http://qudt.org/vocab/unit/PPB";
        /// `unit:PERMILLE`.
        pub const UNIT_PERMILLE: &str = "http://qudt.org/vocab/unit/PERMILLE";
        /// `unit:M`.
        pub const UNIT_M: &str = "http://qudt.org/vocab/unit/M";
        /// `unit:MilliM`.
        pub const UNIT_MILLI_M: &str = "http://qudt.org/vocab/unit/MilliM";
    }

    /// W3C PROV-O.
    pub mod prov {
        /// `prov:Entity`.
        pub const ENTITY: &str = "http://www.w3.org/ns/prov#Entity";
        /// `prov:wasDerivedFrom`.
        pub const WAS_DERIVED_FROM: &str = "http://www.w3.org/ns/prov#wasDerivedFrom";
    }

    /// Dublin Core terms.
    pub mod dct {
        /// `dct:title`.
        pub const TITLE: &str = "http://purl.org/dc/terms/title";
        /// `dct:description`.
        pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
        /// `dct:creator`.
        pub const CREATOR: &str = "http://purl.org/dc/terms/creator";
        /// `dct:publisher`.
        pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
        /// `dct:license`.
        pub const LICENSE: &str = "http://purl.org/dc/terms/license";
        /// `dct:created`.
        pub const CREATED: &str = "http://purl.org/dc/terms/created";
        /// `dct:date`.
        pub const DATE: &str = "http://purl.org/dc/terms/date";
        /// `dct:references`.
        pub const REFERENCES: &str = "http://purl.org/dc/terms/references";
        /// `dct:source`.
        pub const SOURCE: &str = "http://purl.org/dc/terms/source";
        /// `dct:BibliographicResource`.
        pub const BIBLIOGRAPHIC_RESOURCE: &str = "http://purl.org/dc/terms/BibliographicResource";
    }

    /// W3C DCAT.
    pub mod dcat {
        /// `dcat:Catalog`.
        pub const CATALOG: &str = "http://www.w3.org/ns/dcat#Catalog";
        /// `dcat:Dataset`.
        pub const DATASET_CLASS: &str = "http://www.w3.org/ns/dcat#Dataset";
        /// `dcat:dataset`.
        pub const DATASET: &str = "http://www.w3.org/ns/dcat#dataset";
        /// `dcat:record`.
        pub const RECORD: &str = "http://www.w3.org/ns/dcat#record";
    }

    /// geo-lod project vocabulary.
    pub mod geolod {
        /// Core vocabulary IRI.
        pub const CORE_ONTOLOGY: &str = "http://w3id.org/geo-lod/";
        /// Ice-core extension IRI.
        pub const ICE_CORE_ONTOLOGY: &str = "http://w3id.org/geo-lod/ice-core";
        /// Speleothem extension IRI.
        pub const SPELEOTHEM_ONTOLOGY: &str = "http://w3id.org/geo-lod/speleothem";

        // Core classes
        /// `geolod:SamplingLocation`.
        pub const SAMPLING_LOCATION: &str = "http://w3id.org/geo-lod/SamplingLocation";
        /// `geolod:PalaeoclimateSample`.
        pub const PALAEOCLIMATE_SAMPLE: &str = "http://w3id.org/geo-lod/PalaeoclimateSample";
        /// `geolod:PalaeoclimateObservation`.
        pub const PALAEOCLIMATE_OBSERVATION: &str =
            "http://w3id.org/geo-lod/PalaeoclimateObservation";
        /// `geolod:ObservableProperty`.
        pub const OBSERVABLE_PROPERTY: &str = "http://w3id.org/geo-lod/ObservableProperty";
        /// `geolod:Delta18OProperty`.
        pub const DELTA18O_PROPERTY: &str = "http://w3id.org/geo-lod/Delta18OProperty";
        /// `geolod:Chronology`.
        pub const CHRONOLOGY: &str = "http://w3id.org/geo-lod/Chronology";
        /// `geolod:MeasurementType`.
        pub const MEASUREMENT_TYPE: &str = "http://w3id.org/geo-lod/MeasurementType";
        /// `geolod:SmoothingMethod`.
        pub const SMOOTHING_METHOD: &str = "http://w3id.org/geo-lod/SmoothingMethod";
        /// `geolod:RollingMedianFilter`.
        pub const ROLLING_MEDIAN_FILTER: &str = "http://w3id.org/geo-lod/RollingMedianFilter";
        /// `geolod:SavitzkyGolayFilter`.
        pub const SAVITZKY_GOLAY_FILTER: &str = "http://w3id.org/geo-lod/SavitzkyGolayFilter";
        /// `geolod:DataSource`.
        pub const DATA_SOURCE: &str = "http://w3id.org/geo-lod/DataSource";

        // Core properties
        /// `geolod:ageChronology`.
        pub const AGE_CHRONOLOGY: &str = "http://w3id.org/geo-lod/ageChronology";
        /// `geolod:measurementType`.
        pub const MEASUREMENT_TYPE_PROP: &str = "http://w3id.org/geo-lod/measurementType";
        /// `geolod:smoothingMethod_median`.
        pub const SMOOTHING_METHOD_MEDIAN: &str = "http://w3id.org/geo-lod/smoothingMethod_median";
        /// `geolod:smoothingMethod_savgol`.
        pub const SMOOTHING_METHOD_SAVGOL: &str = "http://w3id.org/geo-lod/smoothingMethod_savgol";
        /// `geolod:tookPlaceAt`.
        pub const TOOK_PLACE_AT: &str = "http://w3id.org/geo-lod/tookPlaceAt";
        /// `geolod:extractedFrom`.
        pub const EXTRACTED_FROM: &str = "http://w3id.org/geo-lod/extractedFrom";
        /// `geolod:removedSample`.
        pub const REMOVED_SAMPLE: &str = "http://w3id.org/geo-lod/removedSample";
        /// `geolod:hasObservation`.
        pub const HAS_OBSERVATION: &str = "http://w3id.org/geo-lod/hasObservation";
        /// `geolod:ageKaBP`.
        pub const AGE_KA_BP: &str = "http://w3id.org/geo-lod/ageKaBP";
        /// `geolod:measuredValue`.
        pub const MEASURED_VALUE: &str = "http://w3id.org/geo-lod/measuredValue";
        /// `geolod:atDepth_m`.
        pub const AT_DEPTH_M: &str = "http://w3id.org/geo-lod/atDepth_m";
        /// `geolod:atDepth_mm`.
        pub const AT_DEPTH_MM: &str = "http://w3id.org/geo-lod/atDepth_mm";
        /// `geolod:smoothedValue_rollingMedian`.
        pub const SMOOTHED_VALUE_ROLLING_MEDIAN: &str =
            "http://w3id.org/geo-lod/smoothedValue_rollingMedian";
        /// `geolod:smoothedValue_savgol`.
        pub const SMOOTHED_VALUE_SAVGOL: &str = "http://w3id.org/geo-lod/smoothedValue_savgol";
        /// `geolod:windowSize`.
        pub const WINDOW_SIZE: &str = "http://w3id.org/geo-lod/windowSize";
        /// `geolod:polyOrder`.
        pub const POLY_ORDER: &str = "http://w3id.org/geo-lod/polyOrder";

        // Core individuals
        /// `geolod:Delta18O`.
        pub const DELTA18O: &str = "http://w3id.org/geo-lod/Delta18O";
        /// `geolod:MeasurementType_d18O`.
        pub const MEASUREMENT_TYPE_D18O: &str = "http://w3id.org/geo-lod/MeasurementType_d18O";

        // Ice-core extension
        /// `geolod:DrillingSite`.
        pub const DRILLING_SITE: &str = "http://w3id.org/geo-lod/DrillingSite";
        /// `geolod:IceCore`.
        pub const ICE_CORE: &str = "http://w3id.org/geo-lod/IceCore";
        /// `geolod:IceCoreObservation`.
        pub const ICE_CORE_OBSERVATION: &str = "http://w3id.org/geo-lod/IceCoreObservation";
        /// `geolod:CH4Observation`.
        pub const CH4_OBSERVATION: &str = "http://w3id.org/geo-lod/CH4Observation";
        /// `geolod:Delta18OObservation`.
        pub const DELTA18O_OBSERVATION: &str = "http://w3id.org/geo-lod/Delta18OObservation";
        /// `geolod:CH4ConcentrationProperty`.
        pub const CH4_CONCENTRATION_PROPERTY: &str =
            "http://w3id.org/geo-lod/CH4ConcentrationProperty";
        /// `geolod:IceCoreChronology`.
        pub const ICE_CORE_CHRONOLOGY: &str = "http://w3id.org/geo-lod/IceCoreChronology";
        /// `geolod:PalaeoclimateDataCatalogue`.
        pub const PALAEOCLIMATE_DATA_CATALOGUE: &str =
            "http://w3id.org/geo-lod/PalaeoclimateDataCatalogue";
        /// `geolod:IceCoreDataset`.
        pub const ICE_CORE_DATASET: &str = "http://w3id.org/geo-lod/IceCoreDataset";
        /// `geolod:CH4Dataset`.
        pub const CH4_DATASET: &str = "http://w3id.org/geo-lod/CH4Dataset";
        /// `geolod:Delta18ODataset`.
        pub const DELTA18O_DATASET: &str = "http://w3id.org/geo-lod/Delta18ODataset";
        /// `geolod:DrillingCampaign`.
        pub const DRILLING_CAMPAIGN: &str = "http://w3id.org/geo-lod/DrillingCampaign";
        /// `geolod:hasDrillingCampaign`.
        pub const HAS_DRILLING_CAMPAIGN: &str = "http://w3id.org/geo-lod/hasDrillingCampaign";
        /// `geolod:CH4Concentration`.
        pub const CH4_CONCENTRATION: &str = "http://w3id.org/geo-lod/CH4Concentration";
        /// `geolod:MeasurementType_CH4`.
        pub const MEASUREMENT_TYPE_CH4: &str = "http://w3id.org/geo-lod/MeasurementType_CH4";

        // Speleothem extension
        /// `geolod:Cave`.
        pub const CAVE: &str = "http://w3id.org/geo-lod/Cave";
        /// `geolod:Speleothem`.
        pub const SPELEOTHEM: &str = "http://w3id.org/geo-lod/Speleothem";
        /// `geolod:SpeleothemSamplingEvent`.
        pub const SPELEOTHEM_SAMPLING_EVENT: &str =
            "http://w3id.org/geo-lod/SpeleothemSamplingEvent";
        /// `geolod:SpeleothemObservation`.
        pub const SPELEOTHEM_OBSERVATION: &str = "http://w3id.org/geo-lod/SpeleothemObservation";
        /// `geolod:Delta18OSpeleothemObservation`.
        pub const DELTA18O_SPELEOTHEM_OBSERVATION: &str =
            "http://w3id.org/geo-lod/Delta18OSpeleothemObservation";
        /// `geolod:Delta13CSpeleothemObservation`.
        pub const DELTA13C_SPELEOTHEM_OBSERVATION: &str =
            "http://w3id.org/geo-lod/Delta13CSpeleothemObservation";
        /// `geolod:Delta13CProperty`.
        pub const DELTA13C_PROPERTY: &str = "http://w3id.org/geo-lod/Delta13CProperty";
        /// `geolod:UThChronology`.
        pub const UTH_CHRONOLOGY: &str = "http://w3id.org/geo-lod/UThChronology";
        /// `geolod:SpeleothemDataset`.
        pub const SPELEOTHEM_DATASET: &str = "http://w3id.org/geo-lod/SpeleothemDataset";
        /// `geolod:collectedFrom`.
        pub const COLLECTED_FROM: &str = "http://w3id.org/geo-lod/collectedFrom";
        /// `geolod:Delta13C`.
        pub const DELTA13C: &str = "http://w3id.org/geo-lod/Delta13C";
        /// `geolod:MeasurementType_d13C`.
        pub const MEASUREMENT_TYPE_D13C: &str = "http://w3id.org/geo-lod/MeasurementType_d13C";
    }
}
