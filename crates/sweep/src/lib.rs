//! # swm-sweep
//!
//! The two-parameter calibration sweep: enumerates (reduction factor,
//! shape coefficient) combinations, skips infeasible reduction factors,
//! and drives the day-by-day water-balance simulation for each
//! surviving combination.
//!
//! Every combination starts from the same initial soil-moisture grid
//! and carries no state across to its neighbours, so a re-run over the
//! same inputs reproduces the same streamflow series exactly.
//!
//! ## Pipeline per combination
//!
//! 1. interpolate the day's station precipitation onto the basin grid,
//! 2. run the water-balance step against the carried soil moisture,
//! 3. append the streamflow scalar to the combination's result series,
//! 4. persist the five daily grids under their compatibility keys,
//! 5. feed the temporal accumulator inside its window,
//! 6. advance the carried state.

mod basin;
mod config;
mod error;
mod params;
mod results;
mod run;

pub use basin::{BasinData, ClimateRecord, MonthlyGrids};
pub use config::{RetainFlags, SweepConfig};
pub use error::SweepError;
pub use params::{rp_factor_values, shape_values, Combination};
pub use results::{series_name, ResultSeries};
pub use run::SweepController;
