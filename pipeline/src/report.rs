//! Run report, written as JSON and as plain text.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use geolod_ontology::SmoothingParams;

use crate::capability::GraphCapability;
use crate::error::PipelineError;
use crate::layout::{write_file, OutputLayout};

/// Outcome of one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetStatus {
    /// Data graph written.
    Built,
    /// Series read and exported; no graph was built for this run.
    SeriesOnly,
    /// Nothing usable was produced.
    Failed,
}

/// One series of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReport {
    /// Measurement key.
    pub measurement: String,
    /// Input file.
    pub input: PathBuf,
    /// Rows that passed validation.
    pub rows: usize,
    /// Rows dropped by validation.
    pub dropped: usize,
    /// Observation nodes in the data graph.
    pub observations: usize,
    /// Smoothing methods applied.
    pub methods: Vec<String>,
    /// Smoothing methods skipped, with the reason.
    pub failures: Vec<String>,
    /// Plot-series file.
    pub plot: Option<PathBuf>,
}

/// One dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    /// Dataset slug.
    pub slug: String,
    /// Output group.
    pub group: String,
    /// Archive family.
    pub family: String,
    /// Outcome.
    pub status: DatasetStatus,
    /// Failure cause.
    pub error: Option<String>,
    /// Per-series details.
    pub series: Vec<SeriesReport>,
    /// Data-graph file.
    pub graph: Option<PathBuf>,
    /// Triples in the data graph.
    pub triples: usize,
}

/// One feature collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionReport {
    /// Collection id.
    pub id: String,
    /// Distinct member locations.
    pub members: usize,
    /// Triples in the collection graph.
    pub triples: usize,
    /// Output file.
    pub file: PathBuf,
}

/// The combined graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedReport {
    /// Datasets merged.
    pub datasets: usize,
    /// Distinct triples.
    pub triples: usize,
    /// Turtle file.
    pub turtle: PathBuf,
    /// N-Triples file.
    pub ntriples: PathBuf,
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Generation date stamped on every catalog.
    pub generated: String,
    /// Output root.
    pub output: PathBuf,
    /// Graph capability of the run.
    pub capability: GraphCapability,
    /// Smoothing parameters.
    pub smoothing: SmoothingParams,
    /// Static vocabulary files.
    pub vocabulary: Vec<PathBuf>,
    /// Datasets in build order.
    pub datasets: Vec<DatasetReport>,
    /// Feature collections.
    pub collections: Vec<CollectionReport>,
    /// Combined graph, when built.
    pub combined: Option<CombinedReport>,
    /// Artifacts that could not be written.
    pub errors: Vec<String>,
}

impl RunReport {
    /// Number of failed datasets.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.datasets
            .iter()
            .filter(|d| d.status == DatasetStatus::Failed)
            .count()
    }

    /// Returns true if there were datasets and every one failed.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        !self.datasets.is_empty() && self.failed() == self.datasets.len()
    }

    /// Total observations over all datasets.
    #[must_use]
    pub fn observations(&self) -> usize {
        self.datasets
            .iter()
            .flat_map(|d| &d.series)
            .map(|s| s.observations)
            .sum()
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary.
    #[must_use]
    pub fn to_text(&self) -> String {
        let rule = "=".repeat(72);
        let mut out = String::new();
        let _ = writeln!(out, "{rule}\ngeo-lod build report\n{rule}");
        let _ = writeln!(out, "Generated:  {}", self.generated);
        let _ = writeln!(out, "Output:     {}", self.output.display());
        let _ = writeln!(out, "Graphs:     {}", self.capability);
        let _ = writeln!(
            out,
            "Smoothing:  rolling median w={}, Savitzky-Golay w={} p={}",
            self.smoothing.rolling_window, self.smoothing.sg_window, self.smoothing.sg_polyorder
        );
        let _ = writeln!(out, "Vocabulary: {} files", self.vocabulary.len());

        for d in &self.datasets {
            let _ = writeln!(out, "\n{}\n{} ({}, {})", "-".repeat(72), d.slug, d.group, d.family);
            match (&d.status, &d.error) {
                (DatasetStatus::Failed, Some(e)) => {
                    let _ = writeln!(out, "  FAILED: {e}");
                }
                (status, _) => {
                    let _ = writeln!(out, "  status: {status:?}, triples: {}", d.triples);
                }
            }
            for s in &d.series {
                let _ = writeln!(
                    out,
                    "  {:5} rows {:>6}  dropped {:>5}  observations {:>6}",
                    s.measurement, s.rows, s.dropped, s.observations
                );
                if !s.methods.is_empty() {
                    let _ = writeln!(out, "        methods: {}", s.methods.join(", "));
                }
                for f in &s.failures {
                    let _ = writeln!(out, "        skipped: {f}");
                }
            }
        }

        if !self.collections.is_empty() || self.combined.is_some() {
            let _ = writeln!(out, "\n{}", "-".repeat(72));
        }
        for c in &self.collections {
            let _ = writeln!(out, "Collection {}: {} members, {} triples", c.id, c.members, c.triples);
        }
        if let Some(c) = &self.combined {
            let _ = writeln!(
                out,
                "Combined graph: {} datasets, {} triples",
                c.datasets, c.triples
            );
        }
        for e in &self.errors {
            let _ = writeln!(out, "ERROR: {e}");
        }
        let _ = writeln!(
            out,
            "\n{rule}\n{} datasets, {} failed, {} observations\n{rule}",
            self.datasets.len(),
            self.failed(),
            self.observations()
        );
        out
    }

    /// Writes `report.json` and `report.txt`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Json`] if encoding fails or
    /// [`PipelineError::Write`] if a file cannot be written.
    pub fn write(&self, layout: &OutputLayout) -> Result<(), PipelineError> {
        let json = self.to_json()?;
        for (path, text) in [
            (layout.report_json(), json),
            (layout.report_text(), self.to_text()),
        ] {
            write_file(&path, text).map_err(|source| PipelineError::Write { path, source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(slug: &str, status: DatasetStatus) -> DatasetReport {
        DatasetReport {
            slug: slug.to_owned(),
            group: "G".to_owned(),
            family: "ice-core".to_owned(),
            status,
            error: (status == DatasetStatus::Failed).then(|| "boom".to_owned()),
            series: vec![SeriesReport {
                measurement: "CH4".to_owned(),
                input: PathBuf::from("in.tab"),
                rows: 5,
                dropped: 1,
                observations: 5,
                methods: vec!["RollingMedian_w3".to_owned()],
                failures: Vec::new(),
                plot: None,
            }],
            graph: None,
            triples: 10,
        }
    }

    fn report(statuses: &[DatasetStatus]) -> RunReport {
        RunReport {
            generated: "2024-01-01".to_owned(),
            output: PathBuf::from("out"),
            capability: GraphCapability::Available,
            smoothing: SmoothingParams::default(),
            vocabulary: Vec::new(),
            datasets: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| dataset(&format!("d{i}"), *s))
                .collect(),
            collections: Vec::new(),
            combined: None,
            errors: Vec::new(),
        }
    }

    #[test]
    fn all_failed_needs_every_dataset() {
        assert!(!report(&[]).all_failed());
        assert!(!report(&[DatasetStatus::Built, DatasetStatus::Failed]).all_failed());
        assert!(report(&[DatasetStatus::Failed]).all_failed());
    }

    #[test]
    fn json_uses_kebab_case_status() {
        let json = report(&[DatasetStatus::SeriesOnly]).to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["datasets"][0]["status"], "series-only");
        assert_eq!(v["capability"]["status"], "available");
        assert_eq!(v["smoothing"]["rolling_window"], 11);
    }

    #[test]
    fn text_names_failures() {
        let text = report(&[DatasetStatus::Failed]).to_text();
        assert!(text.contains("FAILED: boom"));
        assert!(text.contains("1 datasets, 1 failed"));
    }
}
