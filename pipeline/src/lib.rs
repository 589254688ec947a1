//! geo-lod build pipeline.
//!
//! Reads a TOML configuration, loads each dataset's tabular series, writes
//! plot-ready series, assembles one data graph per dataset, merges them
//! into feature collections and a combined graph, and records everything
//! in a run report.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `geolod.toml` schema and validation |
//! | [`capability`] | graph capability, decided once per run |
//! | [`input`] | PANGAEA `.tab` and SISAL CSV readers |
//! | [`plots`] | plot-series CSV export |
//! | [`vocabulary`] | static vocabulary files |
//! | [`layout`] | output tree |
//! | [`run`] | orchestration and partial-failure handling |
//! | [`report`] | JSON and text run report |
//!
//! # Entry Point
//!
//! ```no_run
//! use geolod_pipeline::{run, PipelineConfig, RunOptions};
//!
//! let config = PipelineConfig::from_file("geolod.toml")?;
//! let report = run(&config, &RunOptions::default())?;
//! println!("{} observations", report.observations());
//! # Ok::<(), geolod_pipeline::PipelineError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod capability;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod plots;
pub mod report;
pub mod run;
pub mod vocabulary;

pub use capability::GraphCapability;
pub use config::PipelineConfig;
pub use error::{ConfigError, InputError, PipelineError};
pub use layout::OutputLayout;
pub use report::{DatasetStatus, RunReport};
pub use run::{run, RunOptions};
pub use vocabulary::{write_vocabulary, VocabularyFormat};
