//! Error types for the swm-interpolate crate.

use swm_calendar::DayId;

/// Error type for all fallible operations in the swm-interpolate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpolateError {
    /// Returned when no station reported an observation for the target
    /// date. Interpolation is impossible; the caller must not zero-fill.
    #[error("no precipitation observations available for {date}")]
    NoObservations {
        /// The date with no reporting stations.
        date: DayId,
    },

    /// Returned when the IDW exponent is negative or non-finite.
    #[error("idw power must be finite and >= 0, got {power}")]
    InvalidPower {
        /// The invalid exponent.
        power: f64,
    },

    /// Returned when the search radius is non-positive or non-finite.
    #[error("search radius must be finite and positive, got {radius}")]
    InvalidRadius {
        /// The invalid radius.
        radius: f64,
    },

    /// Returned when the minimum neighbor count is zero.
    #[error("minimum neighbor count must be >= 1")]
    InvalidMinNeighbors,
}
