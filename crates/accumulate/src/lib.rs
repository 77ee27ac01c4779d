//! # swm-accumulate
//!
//! Temporal accumulation of per-day water-balance grids over a
//! configured sub-period.
//!
//! The accumulator is a small per-combination state machine:
//! `Inactive` until the first date inside the window, `Accumulating`
//! while days stream in, `Finalized` once the window's end date has been
//! observed. Finalizing yields the four variable totals and the mean
//! soil moisture over the window; after that the accumulator ignores
//! further days until the sweep controller resets it for the next
//! parameter combination.
//!
//! Persistence of intermediate snapshots is the caller's concern — this
//! crate only owns the sums.

mod accumulator;
mod error;

pub use accumulator::{
    AccumulationSummary, AccumulationWindow, DayFields, Phase, RunningSums, TemporalAccumulator,
};
pub use error::AccumulateError;
