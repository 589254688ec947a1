//! Row validation and explicit row/smoothed-value pairing.
//!
//! Raw rows are filtered once, grouped by entity, and every smoothing filter
//! runs on the already-filtered group. Smoothed values are attached to the
//! same row structs they were computed from, so no positional re-alignment
//! between independently filtered arrays ever happens.

use geolod_ontology::SmoothingSpec;
use tracing::{debug, warn};

use crate::error::SmoothingError;
use crate::smoothing::Smoother;

/// One input row as read; any field may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawRow {
    /// Depth in the dataset's depth unit.
    pub depth: Option<f64>,
    /// Age in ka BP.
    pub age: Option<f64>,
    /// Measured value.
    pub value: Option<f64>,
    /// Sub-entity identifier for multi-entity sources.
    pub entity: Option<String>,
}

impl RawRow {
    /// A row with all three numeric fields present.
    #[must_use]
    pub fn new(depth: f64, age: f64, value: f64) -> Self {
        Self {
            depth: Some(depth),
            age: Some(age),
            value: Some(value),
            entity: None,
        }
    }

    /// Sets the entity identifier.
    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Converts to a [`ValidRow`] if depth, age and value are present and
    /// finite.
    #[must_use]
    pub fn validate(self) -> Option<ValidRow> {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        Some(ValidRow {
            depth: finite(self.depth)?,
            age: finite(self.age)?,
            value: finite(self.value)?,
            entity: self.entity,
        })
    }
}

/// A row that satisfies the builder's precondition.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidRow {
    /// Depth.
    pub depth: f64,
    /// Age in ka BP.
    pub age: f64,
    /// Measured value.
    pub value: f64,
    /// Sub-entity identifier.
    pub entity: Option<String>,
}

/// A smoothed value with the method that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedValue {
    /// Method parameters.
    pub spec: SmoothingSpec,
    /// Smoothed value at this row.
    pub value: f64,
}

/// A valid row paired with its sequence number and smoothed values.
#[derive(Clone, Debug, PartialEq)]
pub struct PairedRow {
    /// The row.
    pub row: ValidRow,
    /// 0-based position within its entity group.
    pub seq: usize,
    /// One entry per filter that succeeded on this row's group.
    pub smoothed: Vec<SmoothedValue>,
}

/// A smoothing filter that failed on one entity group.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingFailure {
    /// Failing method.
    pub spec: SmoothingSpec,
    /// Entity group, `None` for single-entity series.
    pub entity: Option<String>,
    /// Cause.
    pub error: SmoothingError,
}

/// The result of validating and smoothing one series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PairedSeries {
    /// Valid rows in entity-group order, input order within each group.
    pub rows: Vec<PairedRow>,
    /// Number of rows dropped by validation.
    pub dropped: usize,
    /// Filters that could not be applied.
    pub failures: Vec<SmoothingFailure>,
}

impl PairedSeries {
    /// Distinct entity identifiers in first-appearance order.
    #[must_use]
    pub fn entities(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.rows {
            if let Some(e) = r.row.entity.as_deref() {
                if !out.contains(&e) {
                    out.push(e);
                }
            }
        }
        out
    }
}

/// Validates `rows`, groups them by entity and applies every smoother to
/// each group.
///
/// A failing smoother is recorded in [`PairedSeries::failures`]; the group's
/// rows are kept without that method's values.
pub fn pair(rows: impl IntoIterator<Item = RawRow>, smoothers: &[Box<dyn Smoother>]) -> PairedSeries {
    let mut dropped = 0;
    let mut groups: Vec<(Option<String>, Vec<PairedRow>)> = Vec::new();

    for raw in rows {
        let Some(row) = raw.validate() else {
            dropped += 1;
            continue;
        };
        let idx = match groups.iter().position(|(e, _)| *e == row.entity) {
            Some(idx) => idx,
            None => {
                groups.push((row.entity.clone(), Vec::new()));
                groups.len() - 1
            }
        };
        let group = &mut groups[idx].1;
        group.push(PairedRow {
            row,
            seq: group.len(),
            smoothed: Vec::new(),
        });
    }

    let mut failures = Vec::new();
    for (entity, group) in &mut groups {
        let values: Vec<f64> = group.iter().map(|r| r.row.value).collect();
        for smoother in smoothers {
            let spec = smoother.spec();
            match smoother.smooth(&values) {
                Ok(smoothed) => {
                    for (r, value) in group.iter_mut().zip(smoothed) {
                        r.smoothed.push(SmoothedValue { spec, value });
                    }
                }
                Err(error) => {
                    warn!(method = %spec.local_name(), entity = ?entity, %error, "smoothing skipped");
                    failures.push(SmoothingFailure {
                        spec,
                        entity: entity.clone(),
                        error,
                    });
                }
            }
        }
    }

    let rows: Vec<PairedRow> = groups.into_iter().flat_map(|(_, g)| g).collect();
    debug!(valid = rows.len(), dropped, "series paired");
    PairedSeries {
        rows,
        dropped,
        failures,
    }
}
