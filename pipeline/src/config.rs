//! Pipeline configuration, read from a TOML file.
//!
//! ```toml
//! output = "output"
//!
//! [smoothing]
//! rolling_window = 11
//! sg_window = 11
//! sg_polyorder = 2
//!
//! [[dataset]]
//! group = "EPICA"
//! slug = "epica-dome-c"
//! family = "ice-core"
//! title = "EPICA Dome C"
//! location = { id = "EpicaDomeC_Site", label = "EPICA Dome C", geometry = { lon = 123.35, lat = -75.1 } }
//!
//! [[dataset.series]]
//! measurement = "CH4"
//! chronology = { kind = "named", id = "EDC2_Chronology", label = "EDC2" }
//! source = { id = "PANGAEA_472484", label = "EDC CH4" }
//! input = { path = "data/EDC_CH4.tab", format = "pangaea-tab", depth_column = 0, age_column = 3, value_column = 4 }
//! ```
//!
//! Relative input and output paths are resolved against the directory of
//! the configuration file.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use geolod_graph::family::Measurement;
use geolod_graph::ids::Slug;
use geolod_graph::metadata::{DatasetMetadata, SeriesInfo};
use geolod_graph::smoothing::SmoothingConfig;
use geolod_graph::CollectionDescription;

use crate::error::ConfigError;

/// Output sub-directories owned by the pipeline itself.
pub const RESERVED_GROUPS: [&str; 4] = ["ontology", "collections", "combined", "report"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Output root.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Build data graphs. When false only vocabularies and plot series are
    /// written.
    #[serde(default = "default_true")]
    pub graph: bool,
    /// Write plot-ready series.
    #[serde(default = "default_true")]
    pub plots: bool,
    /// Smoothing parameters shared by the vocabulary and every dataset.
    #[serde(default)]
    pub smoothing: SmoothingConfig,
    /// Datasets, in build order.
    #[serde(default, rename = "dataset")]
    pub datasets: Vec<DatasetConfig>,
    /// Feature collections over the built datasets.
    #[serde(default, rename = "collection")]
    pub collections: Vec<CollectionConfig>,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

fn default_true() -> bool {
    true
}

/// One dataset: its metadata, output group and input series.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Output group directory, e.g. `EPICA` or `SISAL`.
    pub group: String,
    /// Metadata handed to the assembler.
    #[serde(flatten)]
    pub metadata: DatasetMetadata,
    /// Measured series.
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

/// One measured series and the file it is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesConfig {
    /// Series metadata.
    #[serde(flatten)]
    pub info: SeriesInfo,
    /// Input file.
    pub input: InputConfig,
}

/// An input file and its layout.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// File path.
    pub path: PathBuf,
    /// Format and column mapping.
    #[serde(flatten)]
    pub format: InputFormat,
}

/// Supported input layouts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "format", rename_all = "kebab-case")]
pub enum InputFormat {
    /// PANGAEA tab-separated export with a `/* ... */` preamble.
    PangaeaTab {
        /// 0-based depth column.
        depth_column: usize,
        /// 0-based age column (ka BP).
        age_column: usize,
        /// 0-based value column.
        value_column: usize,
    },
    /// SISAL CSV export with a header row.
    SisalCsv {
        /// Value column name; derived from the measurement when absent.
        #[serde(default)]
        value_column: Option<String>,
    },
}

impl InputFormat {
    /// SISAL value column for `measurement`, honouring an explicit override.
    #[must_use]
    pub fn sisal_value_column(&self, measurement: Measurement) -> Option<&str> {
        match self {
            InputFormat::SisalCsv {
                value_column: Some(c),
            } => Some(c),
            InputFormat::SisalCsv { value_column: None } => match measurement {
                Measurement::Delta18O => Some("d18o_permille"),
                Measurement::Delta13C => Some("d13c_permille"),
                Measurement::Ch4 => None,
            },
            InputFormat::PangaeaTab { .. } => None,
        }
    }
}

/// A feature collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionConfig {
    /// Collection node id and label.
    #[serde(flatten)]
    pub description: CollectionDescription,
    /// Member datasets; every built dataset when empty.
    #[serde(default)]
    pub datasets: Vec<Slug>,
}

impl CollectionConfig {
    /// Whether `slug` contributes to this collection.
    #[must_use]
    pub fn includes(&self, slug: &Slug) -> bool {
        self.datasets.is_empty() || self.datasets.contains(slug)
    }
}

impl PipelineConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or
    /// validated.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&text)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        debug!(path = %path.display(), datasets = config.datasets.len(), "configuration loaded");
        Ok(config)
    }

    /// Parses and validates configuration text. Relative paths resolve
    /// against the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] or [`ConfigError::Invalid`].
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut slugs: HashSet<&Slug> = HashSet::new();
        for d in &self.datasets {
            let slug = &d.metadata.slug;
            if !slugs.insert(slug) {
                return Err(ConfigError::Invalid(format!("duplicate dataset slug {slug}")));
            }
            if !is_plain_component(&d.group) || RESERVED_GROUPS.contains(&d.group.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "dataset {slug}: group {:?} is not a usable directory name",
                    d.group
                )));
            }
            if d.series.is_empty() {
                return Err(ConfigError::Invalid(format!("dataset {slug} has no series")));
            }
            let mut measurements: HashSet<Measurement> = HashSet::new();
            for s in &d.series {
                let m = s.info.measurement;
                if !measurements.insert(m) {
                    return Err(ConfigError::Invalid(format!(
                        "dataset {slug} lists {m} twice"
                    )));
                }
                if matches!(s.input.format, InputFormat::SisalCsv { .. })
                    && s.input.format.sisal_value_column(m).is_none()
                {
                    return Err(ConfigError::Invalid(format!(
                        "dataset {slug}: no SISAL column for {m}; set value_column"
                    )));
                }
            }
        }

        let mut ids: HashSet<&str> = HashSet::new();
        for c in &self.collections {
            let id = c.description.id.as_str();
            if !ids.insert(id) {
                return Err(ConfigError::Invalid(format!("duplicate collection {id}")));
            }
            if let Err(e) = geolod_graph::ids::local(id) {
                return Err(ConfigError::Invalid(format!("collection: {e}")));
            }
            if let Some(unknown) = c.datasets.iter().find(|s| !slugs.contains(s)) {
                return Err(ConfigError::Invalid(format!(
                    "collection {id} refers to unknown dataset {unknown}"
                )));
            }
        }
        Ok(())
    }

    /// Resolves `path` against the configuration directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// The resolved output root.
    #[must_use]
    pub fn output_root(&self) -> PathBuf {
        self.resolve(&self.output)
    }

    /// Keeps only the datasets whose slug is in `slugs`, and drops the
    /// collection entries that referred to the others.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a requested slug is unknown.
    pub fn retain_datasets(&mut self, slugs: &[Slug]) -> Result<(), ConfigError> {
        if let Some(unknown) = slugs
            .iter()
            .find(|s| !self.datasets.iter().any(|d| d.metadata.slug == **s))
        {
            return Err(ConfigError::Invalid(format!("unknown dataset {unknown}")));
        }
        self.datasets.retain(|d| slugs.contains(&d.metadata.slug));
        for c in &mut self.collections {
            if !c.datasets.is_empty() {
                c.datasets.retain(|s| slugs.contains(s));
            }
        }
        Ok(())
    }
}

fn is_plain_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
