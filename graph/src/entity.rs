//! Entity Builder: the triples of one observation.

use geolod_ontology::model::iris::{crm, crmsci, dcat, geolod, prov, qudt, rdf, rdfs, sosa};

use crate::error::GraphError;
use crate::family::{DepthUnit, Family, Measurement};
use crate::registry::MethodRegistry;
use crate::series::PairedRow;
use crate::smoothing::{method_property, value_property};
use crate::term::{Iri, Literal, Triple};

/// Decimal places kept for ages.
pub const AGE_PRECISION: usize = 4;
/// Decimal places kept for depths.
pub const DEPTH_PRECISION: usize = 2;

/// Dataset-level references shared by every observation of one entity group.
#[derive(Clone, Copy, Debug)]
pub struct ObservationContext<'a> {
    /// Archive family.
    pub family: Family,
    /// Measured quantity.
    pub measurement: Measurement,
    /// Unit of the depth values.
    pub depth_unit: DepthUnit,
    /// Sampling location.
    pub location: &'a Iri,
    /// Sample the observation is made on.
    pub sample: &'a Iri,
    /// Depth-age model.
    pub chronology: &'a Iri,
    /// Upstream data source.
    pub source: &'a Iri,
    /// Main dataset.
    pub dataset: &'a Iri,
    /// Per-measurement sub-dataset.
    pub sub_dataset: &'a Iri,
}

/// Builds every triple describing the observation `obs` of `row`.
///
/// Each smoothed value becomes a value triple plus a link to the method
/// node registered in `methods`.
///
/// # Errors
///
/// - [`GraphError::UnregisteredMethod`] if a smoothed value's method was not
///   registered first.
/// - [`GraphError::NonFiniteValue`] if a value has no decimal form.
pub fn build_observation(
    obs: &Iri,
    row: &PairedRow,
    ctx: &ObservationContext<'_>,
    methods: &MethodRegistry,
) -> Result<Vec<Triple>, GraphError> {
    let m = ctx.measurement;
    let places = m.precision();
    let decimal = |value: f64, places: usize, field: &'static str| {
        Literal::decimal(value, places).ok_or_else(|| GraphError::NonFiniteValue {
            subject: obs.to_string(),
            field,
        })
    };

    let label = format!(
        "{} observation {:04} ({:.1} ka BP)",
        m.symbol(),
        row.seq,
        row.row.age
    );

    let mut out = vec![
        Triple::new(obs.clone(), rdf::TYPE, Iri::new(sosa::OBSERVATION)),
        Triple::new(obs.clone(), rdf::TYPE, Iri::new(crmsci::S4_OBSERVATION)),
        Triple::new(obs.clone(), rdf::TYPE, Iri::new(ctx.family.observation_class(m))),
        Triple::new(obs.clone(), rdfs::LABEL, Literal::en(label)),
        Triple::new(obs.clone(), sosa::HAS_FEATURE_OF_INTEREST, ctx.sample),
        Triple::new(obs.clone(), sosa::OBSERVED_PROPERTY, Iri::new(m.property())),
        Triple::new(obs.clone(), geolod::MEASUREMENT_TYPE_PROP, Iri::new(m.measurement_type())),
        Triple::new(obs.clone(), sosa::HAS_SIMPLE_RESULT, decimal(row.row.value, places, "value")?),
        Triple::new(obs.clone(), qudt::UNIT, Iri::new(m.unit())),
        Triple::new(obs.clone(), geolod::AGE_KA_BP, decimal(row.row.age, AGE_PRECISION, "age")?),
        Triple::new(
            obs.clone(),
            ctx.depth_unit.property(),
            decimal(row.row.depth, DEPTH_PRECISION, "depth")?,
        ),
        Triple::new(obs.clone(), geolod::AGE_CHRONOLOGY, ctx.chronology),
        Triple::new(obs.clone(), prov::WAS_DERIVED_FROM, ctx.source),
        Triple::new(obs.clone(), crm::P7_TOOK_PLACE_AT, ctx.location),
        Triple::new(ctx.dataset.clone(), geolod::HAS_OBSERVATION, obs),
        Triple::new(ctx.sub_dataset.clone(), dcat::RECORD, obs),
    ];

    for s in &row.smoothed {
        let method = methods
            .get(&s.spec)
            .ok_or_else(|| GraphError::UnregisteredMethod(s.spec.local_name()))?;
        out.push(Triple::new(
            obs.clone(),
            value_property(s.spec.kind),
            decimal(s.value, places, "smoothed value")?,
        ));
        out.push(Triple::new(obs.clone(), method_property(s.spec.kind), method));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{SmoothedValue, ValidRow};
    use crate::term::Term;
    use geolod_ontology::SmoothingSpec;

    struct Fixture {
        location: Iri,
        sample: Iri,
        chronology: Iri,
        source: Iri,
        dataset: Iri,
        sub_dataset: Iri,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                location: Iri::geolod("Site"),
                sample: Iri::geolod("Core"),
                chronology: Iri::geolod("Chron"),
                source: Iri::geolod("Source"),
                dataset: Iri::geolod("Dataset_t"),
                sub_dataset: Iri::geolod("Dataset_t_CH4"),
            }
        }

        fn ctx(&self) -> ObservationContext<'_> {
            ObservationContext {
                family: Family::IceCore,
                measurement: Measurement::Ch4,
                depth_unit: DepthUnit::Metres,
                location: &self.location,
                sample: &self.sample,
                chronology: &self.chronology,
                source: &self.source,
                dataset: &self.dataset,
                sub_dataset: &self.sub_dataset,
            }
        }
    }

    fn row(smoothed: Vec<SmoothedValue>) -> PairedRow {
        PairedRow {
            row: ValidRow {
                depth: 102.347,
                age: 1.23456,
                value: 587.456,
                entity: None,
            },
            seq: 3,
            smoothed,
        }
    }

    fn object<'a>(triples: &'a [Triple], p: &str) -> Option<&'a Term> {
        triples.iter().find(|t| t.p.as_str() == p).map(|t| &t.o)
    }

    #[test]
    fn raw_observation_has_required_links() {
        let f = Fixture::new();
        let obs = Iri::geolod("Obs_CH4_t_0003");
        let triples = build_observation(&obs, &row(Vec::new()), &f.ctx(), &MethodRegistry::new())
            .unwrap_or_default();
        assert_eq!(object(&triples, sosa::HAS_FEATURE_OF_INTEREST), Some(&Term::from(&f.sample)));
        assert_eq!(object(&triples, geolod::AGE_CHRONOLOGY), Some(&Term::from(&f.chronology)));
        assert_eq!(object(&triples, prov::WAS_DERIVED_FROM), Some(&Term::from(&f.source)));
        assert_eq!(
            object(&triples, sosa::HAS_SIMPLE_RESULT).and_then(Term::as_literal).map(Literal::lexical),
            Some("587.46")
        );
        assert_eq!(
            object(&triples, geolod::AGE_KA_BP).and_then(Term::as_literal).map(Literal::lexical),
            Some("1.2346")
        );
        assert_eq!(
            object(&triples, geolod::AT_DEPTH_M).and_then(Term::as_literal).map(Literal::lexical),
            Some("102.35")
        );
        assert_eq!(
            object(&triples, rdfs::LABEL),
            Some(&Term::from(Literal::en("CH₄ observation 0003 (1.2 ka BP)")))
        );
        assert!(object(&triples, geolod::SMOOTHING_METHOD_MEDIAN).is_none());
    }

    #[test]
    fn smoothed_values_link_registered_method() {
        let f = Fixture::new();
        let mut methods = MethodRegistry::new();
        let spec = SmoothingSpec::rolling_median(3);
        let node = methods.get_or_insert(spec);
        let r = row(vec![SmoothedValue { spec, value: 590.0 }]);
        let triples = build_observation(&Iri::geolod("Obs"), &r, &f.ctx(), &methods)
            .unwrap_or_default();
        assert_eq!(object(&triples, geolod::SMOOTHING_METHOD_MEDIAN), Some(&Term::from(&node)));
        assert_eq!(
            object(&triples, geolod::SMOOTHED_VALUE_ROLLING_MEDIAN)
                .and_then(Term::as_literal)
                .map(Literal::lexical),
            Some("590.0")
        );
    }

    #[test]
    fn unregistered_method_is_rejected() {
        let f = Fixture::new();
        let r = row(vec![SmoothedValue {
            spec: SmoothingSpec::rolling_median(3),
            value: 1.0,
        }]);
        let err = build_observation(&Iri::geolod("Obs"), &r, &f.ctx(), &MethodRegistry::new());
        assert!(matches!(err, Err(GraphError::UnregisteredMethod(_))));
    }
}
