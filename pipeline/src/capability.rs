//! Graph-building capability, decided once per run.

use serde::Serialize;

/// Whether this run builds data graphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum GraphCapability {
    /// Data graphs, collections and the combined graph are built.
    Available,
    /// Only static vocabularies and plot series are written.
    Unavailable {
        /// Why graph building is off.
        reason: String,
    },
}

impl GraphCapability {
    /// Decides the capability from the configuration switch and a
    /// command-line override.
    #[must_use]
    pub fn detect(configured: bool, disabled_on_command_line: bool) -> Self {
        if disabled_on_command_line {
            GraphCapability::Unavailable {
                reason: "disabled on the command line".to_owned(),
            }
        } else if !configured {
            GraphCapability::Unavailable {
                reason: "disabled in the configuration".to_owned(),
            }
        } else {
            GraphCapability::Available
        }
    }

    /// Returns true if data graphs are built.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, GraphCapability::Available)
    }
}

impl std::fmt::Display for GraphCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphCapability::Available => f.write_str("available"),
            GraphCapability::Unavailable { reason } => write!(f, "unavailable ({reason})"),
        }
    }
}
