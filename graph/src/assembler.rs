//! Per-Dataset Graph Assembler.
//!
//! One [`Assembler`] lives for a whole build. It owns the smoothing-method
//! singleton table and the identifier registry, both of which span datasets;
//! each call to [`Assembler::assemble`] returns one self-contained graph.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{debug, info};

use geolod_ontology::model::iris::{
    crm, crmsci, dcat, dct, geo, geolod, owl, prov, rdf, rdfs, sosa,
};
use geolod_ontology::{Ontology, SmoothingSpec};

use crate::entity::{build_observation, ObservationContext};
use crate::error::GraphError;
use crate::family::{Family, Measurement};
use crate::geometry::add_geo_site;
use crate::graph::Graph;
use crate::ids::{self, IdentifierRegistry, Slug};
use crate::metadata::{ChronologyInfo, DatasetMetadata, SeriesInfo};
use crate::registry::{individual_triples, MethodRegistry};
use crate::series::{pair, PairedSeries, RawRow, SmoothingFailure};
use crate::smoothing::SmoothingConfig;
use crate::term::{Iri, Literal};

/// One measured series: its metadata and its validated, smoothed rows.
#[derive(Clone, Debug)]
pub struct Series {
    /// Series metadata.
    pub info: SeriesInfo,
    /// Paired rows.
    pub paired: PairedSeries,
}

/// Counts for one assembled series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSummary {
    /// Measured quantity.
    pub measurement: Measurement,
    /// Observation nodes emitted.
    pub observations: usize,
    /// Input rows dropped by validation.
    pub dropped: usize,
    /// Smoothing methods applied to at least one row.
    pub methods: Vec<SmoothingSpec>,
    /// Smoothing methods skipped.
    pub failures: Vec<SmoothingFailure>,
}

/// What one assembly produced besides the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct AssemblySummary {
    /// Dataset slug.
    pub slug: Slug,
    /// Per-series counts, in input order.
    pub series: Vec<SeriesSummary>,
    /// Sampling location node.
    pub location: Iri,
    /// Number of distinct triples.
    pub triples: usize,
}

impl AssemblySummary {
    /// Total observations across series.
    #[must_use]
    pub fn observations(&self) -> usize {
        self.series.iter().map(|s| s.observations).sum()
    }
}

/// The result of assembling one dataset.
#[derive(Clone, Debug)]
pub struct Assembly {
    /// The dataset graph.
    pub graph: Graph,
    /// Counts and references.
    pub summary: AssemblySummary,
}

/// Builds per-dataset graphs.
#[derive(Debug)]
pub struct Assembler {
    config: SmoothingConfig,
    ontology: Ontology,
    methods: MethodRegistry,
    ids: IdentifierRegistry,
    generated: Option<NaiveDate>,
}

impl Assembler {
    /// A fresh assembler for one build.
    #[must_use]
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            ontology: Ontology::new(&config.params),
            config,
            methods: MethodRegistry::new(),
            ids: IdentifierRegistry::new(),
            generated: None,
        }
    }

    /// Stamps every catalog with `dct:created date`.
    #[must_use]
    pub fn with_generation_date(mut self, date: NaiveDate) -> Self {
        self.generated = Some(date);
        self
    }

    /// The smoothing configuration.
    #[must_use]
    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// The smoothing-method table shared by every dataset so far.
    #[must_use]
    pub fn methods(&self) -> &MethodRegistry {
        &self.methods
    }

    /// IRIs minted by successful assemblies so far.
    #[must_use]
    pub fn identifiers(&self) -> &IdentifierRegistry {
        &self.ids
    }

    /// Validates `rows` and applies the configured smoothers.
    #[must_use]
    pub fn pair(&self, rows: Vec<RawRow>) -> PairedSeries {
        pair(rows, &self.config.smoothers())
    }

    /// Assembles the graph of one dataset.
    ///
    /// Nothing is recorded in the identifier registry unless the whole
    /// dataset succeeds.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidLocalName`] for a malformed configured id.
    /// - [`GraphError::Geometry`] for an unencodable location geometry.
    /// - [`GraphError::MissingEntity`] for a per-entity chronology row
    ///   without entity id.
    /// - [`GraphError::IdentifierCollision`] if a minted IRI already exists.
    pub fn assemble(
        &mut self,
        meta: &DatasetMetadata,
        series: &[Series],
    ) -> Result<Assembly, GraphError> {
        let slug = &meta.slug;
        let family = meta.family;
        let mut g = Graph::new();
        let mut minted: Vec<Iri> = Vec::new();

        let location = ids::local(&meta.location.id)?;
        let catalog = ids::catalog(slug);
        let dataset = ids::dataset(slug);
        minted.extend([catalog.clone(), dataset.clone()]);

        self.add_catalog(&mut g, meta, &catalog, &dataset);
        add_location(&mut g, meta, &location)?;

        let campaign = match &meta.campaign {
            Some(c) => {
                let iri = ids::local(&c.id)?;
                g.insert(&iri, rdf::TYPE, Iri::new(crm::E7_ACTIVITY));
                g.insert(&iri, rdf::TYPE, Iri::new(crmsci::S1_MATTER_REMOVAL));
                g.insert(&iri, rdf::TYPE, Iri::new(family.event_class()));
                g.insert(&iri, rdfs::LABEL, Literal::en(&c.label));
                g.insert(&iri, geolod::TOOK_PLACE_AT, &location);
                if let Some(span) = &c.time_span {
                    g.insert(&iri, crm::P4_HAS_TIME_SPAN, Literal::string(span));
                }
                Some(iri)
            }
            None => None,
        };

        let mut samples: BTreeSet<Iri> = BTreeSet::new();
        let mut summaries = Vec::with_capacity(series.len());

        for s in series {
            let m = s.info.measurement;
            let sub = ids::sub_dataset(slug, m);
            minted.push(sub.clone());
            let source = self.add_series_nodes(&mut g, meta, &s.info, &catalog, &dataset, &sub)?;

            let mut applied: BTreeSet<SmoothingSpec> = BTreeSet::new();
            for spec in s.paired.rows.iter().flat_map(|r| r.smoothed.iter().map(|v| v.spec)) {
                if applied.insert(spec) {
                    self.methods.get_or_insert(spec);
                    g.extend(self.methods.definition(&spec));
                }
            }

            let named_chronology = match &s.info.chronology {
                ChronologyInfo::Named {
                    id,
                    label,
                    description,
                    reference,
                } => {
                    let iri = ids::local(id)?;
                    g.insert(&iri, rdf::TYPE, Iri::new(family.chronology_class()));
                    g.insert(&iri, rdf::TYPE, Iri::new(crmsci::S6_DATA_EVALUATION));
                    g.insert(&iri, rdfs::LABEL, Literal::en(label));
                    if let Some(d) = description {
                        g.insert(&iri, dct::DESCRIPTION, Literal::en(d));
                    }
                    if let Some(r) = reference {
                        g.insert(&iri, dct::REFERENCES, Iri::new(r));
                    }
                    Some(iri)
                }
                ChronologyInfo::PerEntity => None,
            };

            // Sample and chronology nodes once per series, not per row.
            let named_sample = if s.paired.rows.iter().any(|r| r.row.entity.is_none()) {
                Some(add_named_sample(&mut g, meta, &location)?)
            } else {
                None
            };
            let mut per_entity: BTreeMap<&str, (Iri, Option<Iri>)> = BTreeMap::new();
            for e in s.paired.entities() {
                let sample = add_entity_sample(&mut g, meta, &location, e);
                let chronology = named_chronology
                    .is_none()
                    .then(|| add_entity_chronology(&mut g, meta, e));
                per_entity.insert(e, (sample, chronology));
            }
            samples.extend(named_sample.iter().cloned());
            samples.extend(per_entity.values().map(|(sample, _)| sample.clone()));

            for row in &s.paired.rows {
                let entity = row.row.entity.as_deref();
                let (sample, entity_chronology) = match entity {
                    Some(e) => match per_entity.get(e) {
                        Some((sample, chronology)) => (Some(sample), chronology.as_ref()),
                        None => (None, None),
                    },
                    None => (named_sample.as_ref(), None),
                };
                let chronology = named_chronology.as_ref().or(entity_chronology);
                let (Some(sample), Some(chronology)) = (sample, chronology) else {
                    return Err(GraphError::MissingEntity {
                        dataset: slug.to_string(),
                        seq: row.seq,
                    });
                };

                let obs = ids::observation(m, slug, entity, row.seq);
                let ctx = ObservationContext {
                    family,
                    measurement: m,
                    depth_unit: meta.depth_unit,
                    location: &location,
                    sample,
                    chronology,
                    source: &source,
                    dataset: &dataset,
                    sub_dataset: &sub,
                };
                g.extend(build_observation(&obs, row, &ctx, &self.methods)?);
                minted.push(obs);
            }

            debug!(dataset = %slug, measurement = %m, rows = s.paired.rows.len(), "series assembled");
            summaries.push(SeriesSummary {
                measurement: m,
                observations: s.paired.rows.len(),
                dropped: s.paired.dropped,
                methods: applied.into_iter().collect(),
                failures: s.paired.failures.clone(),
            });
        }

        if let Some(campaign) = &campaign {
            for sample in &samples {
                g.insert(campaign, geolod::REMOVED_SAMPLE, sample);
            }
        }

        self.ids.commit(&minted)?;

        let summary = AssemblySummary {
            slug: slug.clone(),
            series: summaries,
            location,
            triples: g.len(),
        };
        info!(
            dataset = %slug,
            observations = summary.observations(),
            triples = summary.triples,
            "dataset graph assembled"
        );
        Ok(Assembly { graph: g, summary })
    }

    fn add_catalog(&self, g: &mut Graph, meta: &DatasetMetadata, catalog: &Iri, dataset: &Iri) {
        g.insert(catalog, rdf::TYPE, Iri::new(dcat::CATALOG));
        if meta.family == Family::IceCore {
            g.insert(catalog, rdf::TYPE, Iri::new(geolod::PALAEOCLIMATE_DATA_CATALOGUE));
        }
        let catalog_title = format!("{} - Linked Data Catalogue", meta.title);
        g.insert(catalog, rdfs::LABEL, Literal::en(&catalog_title));
        g.insert(catalog, dct::TITLE, Literal::en(&catalog_title));
        g.insert(catalog, dcat::DATASET, dataset);

        g.insert(dataset, rdf::TYPE, Iri::new(dcat::DATASET_CLASS));
        g.insert(dataset, rdf::TYPE, Iri::new(meta.family.dataset_class()));
        g.insert(dataset, rdfs::LABEL, Literal::en(&meta.title));
        g.insert(dataset, dct::TITLE, Literal::en(&meta.title));

        for node in [catalog, dataset] {
            if let Some(d) = &meta.description {
                g.insert(node, dct::DESCRIPTION, Literal::en(d));
            }
            if let Some(p) = &meta.publisher {
                g.insert(node, dct::PUBLISHER, Literal::string(p));
            }
            if let Some(l) = &meta.license {
                g.insert(node, dct::LICENSE, Iri::new(l));
            }
        }
        if let Some(date) = self.generated {
            g.insert(catalog, dct::CREATED, Literal::date(date));
        }
    }

    /// Sub-dataset, data source and shared vocabulary individuals of one
    /// series. Returns the data-source node.
    fn add_series_nodes(
        &self,
        g: &mut Graph,
        meta: &DatasetMetadata,
        info: &SeriesInfo,
        catalog: &Iri,
        dataset: &Iri,
        sub: &Iri,
    ) -> Result<Iri, GraphError> {
        let m = info.measurement;
        let title = info
            .title
            .clone()
            .unwrap_or_else(|| format!("{} - {} record", meta.title, m.symbol()));
        g.insert(sub, rdf::TYPE, Iri::new(dcat::DATASET_CLASS));
        g.insert(sub, rdf::TYPE, Iri::new(meta.family.sub_dataset_class(m)));
        g.insert(sub, rdfs::LABEL, Literal::en(&title));
        g.insert(sub, dct::TITLE, Literal::en(&title));
        g.insert(catalog, dcat::DATASET, sub);

        let src = &info.source;
        let source = ids::local(&src.id)?;
        g.insert(&source, rdf::TYPE, Iri::new(geolod::DATA_SOURCE));
        g.insert(&source, rdf::TYPE, Iri::new(prov::ENTITY));
        g.insert(&source, rdfs::LABEL, Literal::en(&src.label));
        if let Some(t) = &src.title {
            g.insert(&source, dct::TITLE, Literal::en(t));
        }
        if let Some(c) = &src.creator {
            g.insert(&source, dct::CREATOR, Literal::string(c));
        }
        if let Some(y) = src.year {
            g.insert(&source, dct::DATE, Literal::year(y));
        }
        if let Some(doi) = &src.doi {
            g.insert(&source, owl::SAME_AS, Iri::new(doi));
        }
        g.insert(sub, dct::SOURCE, &source);
        g.insert(dataset, dct::SOURCE, &source);
        if let Some(l) = &meta.license {
            g.insert(sub, dct::LICENSE, Iri::new(l));
        }

        for id in [m.property(), m.measurement_type()] {
            if let Some(ind) = self.ontology.find_individual(id) {
                g.extend(individual_triples(ind));
            }
        }
        Ok(source)
    }
}

fn add_location(g: &mut Graph, meta: &DatasetMetadata, location: &Iri) -> Result<(), GraphError> {
    let loc = &meta.location;
    let types = [geolod::SAMPLING_LOCATION, meta.family.location_class()];
    match &loc.geometry {
        Some(geometry) => {
            let wkt = geometry.to_wkt()?;
            add_geo_site(g, location, &loc.label, &wkt, &types);
        }
        None => {
            for class in [geo::FEATURE, crm::E53_PLACE, crm::E27_SITE]
                .into_iter()
                .chain(types)
            {
                g.insert(location, rdf::TYPE, Iri::new(class));
            }
            g.insert(location, rdfs::LABEL, Literal::en(&loc.label));
        }
    }
    if let Some(id) = &loc.identified_by {
        g.insert(location, crm::P87_IS_IDENTIFIED_BY, Literal::string(id));
    }
    Ok(())
}

fn add_sample(g: &mut Graph, family: Family, sample: &Iri, label: &str, location: &Iri) {
    g.insert(sample, rdf::TYPE, Iri::new(sosa::SAMPLE));
    g.insert(sample, rdf::TYPE, Iri::new(family.sample_class()));
    if family == Family::IceCore {
        g.insert(sample, rdf::TYPE, Iri::new(crm::E22_HUMAN_MADE_OBJECT));
    }
    g.insert(sample, rdfs::LABEL, Literal::en(label));
    g.insert(sample, sosa::IS_SAMPLE_OF, location);
    g.insert(sample, family.sample_link(), location);
}

fn add_named_sample(
    g: &mut Graph,
    meta: &DatasetMetadata,
    location: &Iri,
) -> Result<Iri, GraphError> {
    let (iri, label) = match &meta.sample {
        Some(s) => (ids::local(&s.id)?, s.label.clone()),
        None => (
            Iri::geolod(&format!("Sample_{}", meta.slug)),
            format!("{} sample", meta.location.label),
        ),
    };
    add_sample(g, meta.family, &iri, &label, location);
    Ok(iri)
}

fn add_entity_sample(g: &mut Graph, meta: &DatasetMetadata, location: &Iri, entity: &str) -> Iri {
    let iri = ids::entity_sample(meta.family, &meta.slug, entity);
    let label = format!("{}, entity {entity}", meta.location.label);
    add_sample(g, meta.family, &iri, &label, location);
    iri
}

fn add_entity_chronology(g: &mut Graph, meta: &DatasetMetadata, entity: &str) -> Iri {
    let family = meta.family;
    let iri = ids::entity_chronology(family, &meta.slug, entity);
    g.insert(&iri, rdf::TYPE, Iri::new(family.chronology_class()));
    g.insert(&iri, rdf::TYPE, Iri::new(crmsci::S6_DATA_EVALUATION));
    g.insert(
        &iri,
        rdfs::LABEL,
        Literal::en(format!("{}, entity {entity}", family.chronology_noun())),
    );
    iri
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::metadata::{LocationInfo, SampleInfo, SourceInfo};
    use crate::smoothing::Alignment;
    use geolod_ontology::SmoothingParams;

    fn meta(slug: &str, family: Family) -> DatasetMetadata {
        DatasetMetadata {
            slug: Slug::new(slug).unwrap_or_else(|e| panic!("{e}")),
            family,
            title: format!("Test {slug}"),
            description: None,
            publisher: None,
            license: Some("https://creativecommons.org/licenses/by/4.0/".to_owned()),
            location: LocationInfo {
                id: format!("Site_{slug}"),
                label: format!("Site {slug}"),
                geometry: Some(Geometry::Point { lon: 10.0, lat: 45.0 }),
                identified_by: None,
            },
            sample: Some(SampleInfo {
                id: format!("Core_{slug}"),
                label: "Core".to_owned(),
            }),
            campaign: None,
            depth_unit: Default::default(),
        }
    }

    fn info(measurement: Measurement, chronology: ChronologyInfo) -> SeriesInfo {
        SeriesInfo {
            measurement,
            chronology,
            source: SourceInfo {
                id: "Src".to_owned(),
                label: "Source".to_owned(),
                title: None,
                creator: None,
                year: Some(2006),
                doi: Some("https://doi.org/10.1594/PANGAEA.472484".to_owned()),
            },
            title: None,
        }
    }

    fn named() -> ChronologyInfo {
        ChronologyInfo::Named {
            id: "Chron".to_owned(),
            label: "Chronology".to_owned(),
            description: None,
            reference: None,
        }
    }

    fn config(window: usize) -> SmoothingConfig {
        SmoothingConfig {
            params: SmoothingParams {
                rolling_window: window,
                sg_window: 3,
                sg_polyorder: 1,
            },
            alignment: Alignment::Centered,
        }
    }

    #[test]
    fn assembles_location_sample_and_observations() {
        let mut a = Assembler::new(config(3));
        let rows = (1..=4_i32)
            .map(|i| RawRow::new(f64::from(i), f64::from(i), 500.0 + f64::from(i)))
            .collect();
        let series = vec![Series {
            info: info(Measurement::Ch4, named()),
            paired: a.pair(rows),
        }];
        let m = meta("t1", Family::IceCore);
        let out = a.assemble(&m, &series).unwrap_or_else(|e| panic!("{e}"));
        let g = &out.graph;

        let site = Iri::geolod("Site_t1");
        assert!(g.has_type(&site, geo::FEATURE));
        assert!(g.has_type(&site, geolod::DRILLING_SITE));
        assert!(g.has_type(&Iri::geolod("Core_t1"), geolod::ICE_CORE));
        assert_eq!(g.subjects_of_type(sosa::OBSERVATION).count(), 4);
        assert_eq!(out.summary.observations(), 4);
        assert_eq!(out.summary.series[0].methods.len(), 2);
        assert_eq!(a.methods().len(), 2);
        assert!(g.has_type(&Iri::geolod("CH4Concentration"), geolod::CH4_CONCENTRATION_PROPERTY));
    }

    #[test]
    fn per_entity_chronologies_and_samples() {
        let mut a = Assembler::new(config(3));
        let rows = vec![
            RawRow::new(1.0, 1.0, -5.0).with_entity("240"),
            RawRow::new(2.0, 2.0, -5.1).with_entity("240"),
            RawRow::new(3.0, 3.0, -5.2).with_entity("241"),
        ];
        let series = vec![Series {
            info: info(Measurement::Delta18O, ChronologyInfo::PerEntity),
            paired: a.pair(rows),
        }];
        let mut m = meta("cave", Family::Speleothem);
        m.sample = None;
        let out = a.assemble(&m, &series).unwrap_or_else(|e| panic!("{e}"));
        let g = &out.graph;
        assert_eq!(g.subjects_of_type(geolod::UTH_CHRONOLOGY).count(), 2);
        assert_eq!(g.subjects_of_type(geolod::SPELEOTHEM).count(), 2);
        assert!(g.has_type(
            &Iri::geolod("Obs_d18O_cave_e241_0000"),
            geolod::DELTA18O_SPELEOTHEM_OBSERVATION
        ));
    }

    #[test]
    fn punctuation_variants_of_an_entity_stay_distinct() {
        let mut a = Assembler::new(config(3));
        let rows = vec![
            RawRow::new(1.0, 1.0, -5.0).with_entity("a/b"),
            RawRow::new(2.0, 2.0, -5.1).with_entity("a-b"),
        ];
        let series = vec![Series {
            info: info(Measurement::Delta18O, ChronologyInfo::PerEntity),
            paired: a.pair(rows),
        }];
        let mut m = meta("c", Family::Speleothem);
        m.sample = None;
        let out = a.assemble(&m, &series).unwrap_or_else(|e| panic!("{e}"));
        let g = &out.graph;
        assert_eq!(g.subjects_of_type(sosa::OBSERVATION).count(), 2);
        assert_eq!(g.subjects_of_type(geolod::SPELEOTHEM).count(), 2);
        assert_eq!(g.subjects_of_type(geolod::UTH_CHRONOLOGY).count(), 2);
        assert!(g.has_type(
            &Iri::geolod("Obs_d18O_c_ea_2Fb_0000"),
            sosa::OBSERVATION
        ));
    }

    #[test]
    fn per_entity_chronology_follows_the_family() {
        let mut a = Assembler::new(config(3));
        let series = vec![Series {
            info: info(Measurement::Ch4, ChronologyInfo::PerEntity),
            paired: a.pair(vec![RawRow::new(1.0, 1.0, 600.0).with_entity("1")]),
        }];
        let out = a
            .assemble(&meta("ic", Family::IceCore), &series)
            .unwrap_or_else(|e| panic!("{e}"));
        let g = &out.graph;
        let chronology = Iri::geolod("IceCoreChronology_ic_e1");
        assert!(g.has_type(&chronology, geolod::ICE_CORE_CHRONOLOGY));
        assert!(g.contains(
            chronology.as_str(),
            rdfs::LABEL,
            &Literal::en("ice-core chronology, entity 1").into()
        ));
        assert_eq!(g.subjects_of_type(geolod::UTH_CHRONOLOGY).count(), 0);
        assert!(g.has_type(&Iri::geolod("IceCore_ic_e1"), geolod::ICE_CORE));
    }

    #[test]
    fn per_entity_chronology_needs_entity() {
        let mut a = Assembler::new(config(3));
        let series = vec![Series {
            info: info(Measurement::Delta18O, ChronologyInfo::PerEntity),
            paired: a.pair(vec![RawRow::new(1.0, 1.0, 1.0)]),
        }];
        let err = a.assemble(&meta("x", Family::Speleothem), &series);
        assert!(matches!(err, Err(GraphError::MissingEntity { .. })));
        assert!(a.identifiers().is_empty());
    }

    #[test]
    fn reassembling_same_slug_collides() {
        let mut a = Assembler::new(config(3));
        let series = vec![Series {
            info: info(Measurement::Ch4, named()),
            paired: a.pair(vec![RawRow::new(1.0, 1.0, 1.0)]),
        }];
        let m = meta("dup", Family::IceCore);
        assert!(a.assemble(&m, &series).is_ok());
        let err = a.assemble(&m, &series);
        assert!(matches!(err, Err(GraphError::IdentifierCollision(_))));
        assert!(err.err().is_some_and(|e| e.is_fatal()));
    }

    #[test]
    fn catalog_carries_generation_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap_or_default();
        let mut a = Assembler::new(config(3)).with_generation_date(date);
        let out = a
            .assemble(&meta("d", Family::IceCore), &[])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(out.graph.contains(
            ids::catalog(&out.summary.slug).as_str(),
            dct::CREATED,
            &Literal::date(date).into()
        ));
    }
}
