//! Error types for the swm-accumulate crate.

use swm_calendar::DayId;
use swm_grid::GridError;

/// Error type for all fallible operations in the swm-accumulate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccumulateError {
    /// Returned when the window's start date lies after its end date.
    #[error("accumulation window start {start} is after end {end}")]
    InvalidWindow {
        /// Configured window start.
        start: DayId,
        /// Configured window end.
        end: DayId,
    },

    /// A grid operation inside the accumulator failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}
