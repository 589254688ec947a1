//! Error types for the build pipeline.

use std::path::PathBuf;

use thiserror::Error;

use geolod_graph::GraphError;

/// Errors raised while loading or checking the pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read configuration {path}: {source}")]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration is not valid TOML or does not match the schema.
    #[error("cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration parses but is inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while reading a tabular input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A `/*` preamble is never closed by a `*/` line.
    #[error("{path}: metadata preamble is not terminated by a '*/' line")]
    UnterminatedPreamble {
        /// File path.
        path: PathBuf,
    },
    /// No column-header line follows the preamble.
    #[error("{path}: no column header line")]
    MissingHeader {
        /// File path.
        path: PathBuf,
    },
    /// A required column is absent from the header row.
    #[error("{path}: missing column {column:?}")]
    MissingColumn {
        /// File path.
        path: PathBuf,
        /// Column name.
        column: String,
    },
    /// The CSV reader failed.
    #[error("{path}: {source}")]
    Csv {
        /// File path.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}

/// Errors raised by a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Input file problem; local to one dataset.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Graph construction problem.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A static vocabulary artifact could not be written.
    #[error("cannot write vocabulary {path}: {source}")]
    Vocabulary {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Any other artifact could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A plot-series file could not be encoded.
    #[error("cannot write plot series {path}: {source}")]
    PlotSeries {
        /// File path.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
    /// A JSON artifact could not be encoded.
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// Returns true for errors that abort the whole run instead of failing
    /// one dataset.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            PipelineError::Graph(e) => e.is_fatal(),
            PipelineError::Config(_)
            | PipelineError::Vocabulary { .. }
            | PipelineError::Json(_) => true,
            PipelineError::Input(_)
            | PipelineError::Write { .. }
            | PipelineError::PlotSeries { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collisions_are_fatal_input_errors_are_not() {
        let collision = PipelineError::from(GraphError::IdentifierCollision("x".into()));
        assert!(collision.is_fatal());
        let slug = PipelineError::from(GraphError::InvalidSlug("a b".into()));
        assert!(!slug.is_fatal());
        let input = PipelineError::from(InputError::MissingHeader {
            path: PathBuf::from("a.tab"),
        });
        assert!(!input.is_fatal());
    }
}
