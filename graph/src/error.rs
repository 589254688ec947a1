//! Error types for graph construction.

use thiserror::Error;

/// Errors raised while encoding a geometry literal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A coordinate is NaN or infinite.
    #[error("coordinate is not finite: lon={lon}, lat={lat}")]
    NonFinite {
        /// Longitude as given.
        lon: f64,
        /// Latitude as given.
        lat: f64,
    },
    /// Longitude outside [-180, 180].
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Latitude outside [-90, 90].
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// A raw WKT string is empty after trimming.
    #[error("empty WKT string")]
    EmptyWkt,
}

/// Errors raised by a smoothing filter. Always local to one series and one
/// method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmoothingError {
    /// Window is zero, or even where the filter needs an odd window.
    #[error("invalid window length {window}: {reason}")]
    InvalidWindow {
        /// Requested window.
        window: usize,
        /// Why it is rejected.
        reason: &'static str,
    },
    /// Polynomial order is not below the window length.
    #[error("polynomial order {order} must be less than window length {window}")]
    OrderTooHigh {
        /// Requested order.
        order: usize,
        /// Requested window.
        window: usize,
    },
    /// Window longer than the series.
    #[error("window length {window} exceeds series length {len}")]
    WindowTooLong {
        /// Requested window.
        window: usize,
        /// Number of values available.
        len: usize,
    },
    /// The least-squares system could not be solved.
    #[error("least-squares system is singular for window {window}, order {order}")]
    Singular {
        /// Requested window.
        window: usize,
        /// Requested order.
        order: usize,
    },
}

/// Errors raised while building a data graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A slug contains characters outside `[A-Za-z0-9-]` or is empty.
    #[error("invalid slug {0:?}: only ASCII letters, digits and '-' are allowed")]
    InvalidSlug(String),
    /// A local name contains characters outside `[A-Za-z0-9_-]` or is empty.
    #[error("invalid local name {0:?}: only ASCII letters, digits, '_' and '-' are allowed")]
    InvalidLocalName(String),
    /// Two nodes minted the same identifier.
    #[error("identifier collision: {0}")]
    IdentifierCollision(String),
    /// A value reaching the builder is not finite.
    #[error("non-finite {field} value for {subject}")]
    NonFiniteValue {
        /// Observation identifier.
        subject: String,
        /// Offending field.
        field: &'static str,
    },
    /// A smoothed value refers to a method the registry has not seen.
    #[error("smoothing method {0} was not registered before use")]
    UnregisteredMethod(String),
    /// A per-entity chronology or sample was requested for a row without an
    /// entity identifier.
    #[error("row {seq} of {dataset} has no entity identifier")]
    MissingEntity {
        /// Dataset slug.
        dataset: String,
        /// Sequence number of the row.
        seq: usize,
    },
    /// The location geometry could not be encoded.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl GraphError {
    /// Returns true for errors that indicate a programming error and must
    /// abort the whole build.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GraphError::IdentifierCollision(_) | GraphError::UnregisteredMethod(_)
        )
    }
}
