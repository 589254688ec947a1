//! Smoothing-method parameters and the identifiers they key.
//!
//! A smoothing-method node is a singleton per `(kind, window, order)`. Its IRI
//! is a pure function of those parameters, so two graphs built independently
//! agree on the node without sharing any in-memory object.

use serde::{Deserialize, Serialize};

use crate::prefix::Prefix;

/// The two smoothing filters the pipeline applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmoothingKind {
    /// Rolling median over a fixed window.
    RollingMedian,
    /// Savitzky–Golay polynomial least-squares filter.
    SavitzkyGolay,
}

impl SmoothingKind {
    /// Both kinds, in emission order.
    pub const ALL: [SmoothingKind; 2] = [SmoothingKind::RollingMedian, SmoothingKind::SavitzkyGolay];

    /// Short key used in column headers and report entries.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            SmoothingKind::RollingMedian => "rolling_median",
            SmoothingKind::SavitzkyGolay => "savgol",
        }
    }
}

impl std::fmt::Display for SmoothingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A fully parameterized smoothing method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmoothingSpec {
    /// Filter kind.
    pub kind: SmoothingKind,
    /// Window length in points.
    pub window: usize,
    /// Polynomial order; `None` for the rolling median.
    pub order: Option<usize>,
}

impl SmoothingSpec {
    /// A rolling median of the given window.
    #[must_use]
    pub const fn rolling_median(window: usize) -> Self {
        Self {
            kind: SmoothingKind::RollingMedian,
            window,
            order: None,
        }
    }

    /// A Savitzky–Golay filter of the given window and polynomial order.
    #[must_use]
    pub const fn savitzky_golay(window: usize, order: usize) -> Self {
        Self {
            kind: SmoothingKind::SavitzkyGolay,
            window,
            order: Some(order),
        }
    }

    /// Local name of the method node, e.g. `RollingMedian_w11` or
    /// `SavitzkyGolay_w11_p2`.
    #[must_use]
    pub fn local_name(&self) -> String {
        match (self.kind, self.order) {
            (SmoothingKind::RollingMedian, _) => format!("RollingMedian_w{}", self.window),
            (SmoothingKind::SavitzkyGolay, Some(p)) => {
                format!("SavitzkyGolay_w{}_p{}", self.window, p)
            }
            (SmoothingKind::SavitzkyGolay, None) => format!("SavitzkyGolay_w{}", self.window),
        }
    }

    /// Full IRI of the method node.
    #[must_use]
    pub fn iri(&self) -> String {
        Prefix::Geolod.expand(&self.local_name())
    }

    /// English label of the method node.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.kind, self.order) {
            (SmoothingKind::RollingMedian, _) => {
                format!("Rolling median filter, window = {} pts", self.window)
            }
            (SmoothingKind::SavitzkyGolay, Some(p)) => format!(
                "Savitzky-Golay filter, window = {} pts, polyorder = {}",
                self.window, p
            ),
            (SmoothingKind::SavitzkyGolay, None) => {
                format!("Savitzky-Golay filter, window = {} pts", self.window)
            }
        }
    }

    /// Literature reference (DOI) for the filter kind.
    #[must_use]
    pub const fn reference(&self) -> &'static str {
        match self.kind {
            SmoothingKind::RollingMedian => "https://doi.org/10.1145/1968.1969",
            SmoothingKind::SavitzkyGolay => "https://doi.org/10.1021/ac60214a047",
        }
    }
}

/// Window and polynomial order for the two filters.
///
/// Passed explicitly to the vocabulary writer and the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingParams {
    /// Rolling-median window (points).
    pub rolling_window: usize,
    /// Savitzky–Golay window (points, odd).
    pub sg_window: usize,
    /// Savitzky–Golay polynomial order.
    pub sg_polyorder: usize,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            rolling_window: 11,
            sg_window: 11,
            sg_polyorder: 2,
        }
    }
}

impl SmoothingParams {
    /// The rolling-median method these parameters select.
    #[must_use]
    pub const fn rolling_median(&self) -> SmoothingSpec {
        SmoothingSpec::rolling_median(self.rolling_window)
    }

    /// The Savitzky–Golay method these parameters select.
    #[must_use]
    pub const fn savitzky_golay(&self) -> SmoothingSpec {
        SmoothingSpec::savitzky_golay(self.sg_window, self.sg_polyorder)
    }

    /// Both methods, in emission order.
    #[must_use]
    pub const fn specs(&self) -> [SmoothingSpec; 2] {
        [self.rolling_median(), self.savitzky_golay()]
    }
}
