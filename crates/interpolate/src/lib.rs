//! # swm-interpolate
//!
//! Inverse Distance Weighting (IDW) of sparse station precipitation
//! observations onto a raster grid.
//!
//! Each output cell is a weighted average of the observed daily amounts,
//! weights `1/d^power`, over the stations within a fixed search radius.
//! When fewer than the minimum neighbor count report in-radius, the
//! nearest stations overall fill the set, so an estimate exists wherever
//! at least one station reported. Neighbor ordering ties break by
//! ascending station id, which keeps the surface deterministic.
//!
//! ## Quick Start
//!
//! ```
//! use swm_calendar::DayId;
//! use swm_grid::{Grid, GridGeometry};
//! use swm_interpolate::{interpolate, IdwConfig, StationSample};
//!
//! let template = Grid::constant(GridGeometry::new(2, 2, 100.0, 0.0, 0.0), 0.0);
//! let samples = vec![StationSample { id: 1, x: 50.0, y: 50.0, amount_mm: 4.0 }];
//! let config = IdwConfig::new(2.0);
//!
//! let date = DayId::new(2003, 7, 1).unwrap();
//! let precip = interpolate(date, &samples, &template, &config).unwrap();
//! assert!((precip.values()[0] - 4.0).abs() < 1e-9);
//! ```

mod config;
mod error;
mod idw;
mod station;

pub use config::IdwConfig;
pub use error::InterpolateError;
pub use idw::interpolate;
pub use station::{Observation, ObservationSet, Station, StationSample};
