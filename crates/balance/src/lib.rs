//! # swm-balance
//!
//! The daily soil-water balance step over raster grids.
//!
//! Pure process functions compute, in order: potential
//! evapotranspiration (Haude), actual evapotranspiration, total runoff,
//! the updated soil-moisture store, and the basin streamflow scalar.
//! Each day's output state feeds the next day's step; nothing here holds
//! state of its own.
//!
//! Cell categories are expressed with the grid `select` primitive:
//! water cells, cells at or above the reduction point, the degenerate
//! reduction-point-equals-wilting-point case, and the general case each
//! get an explicit branch.
//!
//! ## Quick Start
//!
//! ```
//! use swm_grid::{Grid, GridGeometry};
//! use swm_balance::processes;
//!
//! let geom = GridGeometry::new(1, 1, 25.0, 0.0, 0.0);
//! let haude = Grid::constant(geom, 0.3);
//! let pet = processes::pet(&haude, 20.0, 60.0);
//! assert!((pet.values()[0] - 2.8036).abs() < 0.001);
//! ```

pub mod processes;
mod step;

pub use step::{water_balance_step, StepInputs, StepOutputs};
