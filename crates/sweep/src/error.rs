//! Error types for the swm-sweep crate.

use swm_accumulate::AccumulateError;
use swm_calendar::DayId;
use swm_grid::GridError;
use swm_interpolate::InterpolateError;
use swm_store::StoreError;

/// Error type for all fallible operations in the swm-sweep crate.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// Returned when a parameter range is empty or steps backwards.
    #[error("invalid {name} range: min {min}, max {max}, step {step}")]
    InvalidRange {
        /// Which range is broken.
        name: &'static str,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
        /// Configured step.
        step: f64,
    },

    /// Returned when the climate series is not strictly ascending.
    #[error("climate series out of order: {prev} followed by {next}")]
    ClimateOutOfOrder {
        /// The earlier record's date.
        prev: DayId,
        /// The offending record's date.
        next: DayId,
    },

    /// Returned when the climate series has no records.
    #[error("climate series is empty")]
    EmptyClimate,

    /// No precipitation stations reported for a simulation day; the
    /// run cannot continue past it and is aborted without zero-filling.
    #[error("no precipitation data available for {date}")]
    DataUnavailable {
        /// The day without observations.
        date: DayId,
    },

    /// Interpolation configuration was rejected.
    #[error(transparent)]
    Interpolate(#[from] InterpolateError),

    /// A grid operation failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The temporal accumulator failed.
    #[error(transparent)]
    Accumulate(#[from] AccumulateError),

    /// Persisting or releasing an artifact failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
