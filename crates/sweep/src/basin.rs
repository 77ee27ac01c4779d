//! Static basin data and the daily climate record.

use swm_calendar::DayId;
use swm_grid::{Grid, GridError};

/// One row of the daily climate series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateRecord {
    /// The simulation day.
    pub date: DayId,
    /// Basin-wide temperature in °C.
    pub temperature_c: f64,
    /// Basin-wide relative humidity in %.
    pub humidity_pct: f64,
}

/// Immutable month-to-grid mapping, one Haude factor grid per month.
///
/// Loaded once at startup and passed into the sweep — deliberately a
/// value, not global state.
#[derive(Debug, Clone)]
pub struct MonthlyGrids {
    grids: [Grid; 12],
}

impl MonthlyGrids {
    /// Creates the mapping from twelve grids, January first.
    pub fn new(grids: [Grid; 12]) -> Self {
        Self { grids }
    }

    /// Returns the grid for `month` (1..=12).
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside 1..=12; months coming from a
    /// validated [`DayId`] never are.
    pub fn get(&self, month: u8) -> &Grid {
        &self.grids[usize::from(month) - 1]
    }
}

/// The static grids describing the basin.
#[derive(Debug, Clone)]
pub struct BasinData {
    /// Field capacity in mm.
    pub field_capacity: Grid,
    /// Wilting point in mm.
    pub wilting_point: Grid,
    /// Effective root depth in m.
    pub root_depth_m: Grid,
    /// Water mask: 1 = open water, 0 = land.
    pub water_mask: Grid,
    /// Initial soil-moisture condition every combination starts from.
    pub initial_soil: Grid,
    /// Month-specific Haude factor grids.
    pub haude: MonthlyGrids,
}

impl BasinData {
    /// Checks that every grid shares the initial-soil geometry.
    pub fn validate(&self) -> Result<(), GridError> {
        let reference = &self.initial_soil;
        for grid in [
            &self.field_capacity,
            &self.wilting_point,
            &self.root_depth_m,
            &self.water_mask,
        ] {
            // The zip is discarded; only the shape check matters.
            reference.zip_with(grid, |a, _| a)?;
        }
        for month in 1..=12 {
            reference.zip_with(self.haude.get(month), |a, _| a)?;
        }
        Ok(())
    }

    /// Returns the cell size of the basin grids.
    pub fn cell_size(&self) -> f64 {
        self.initial_soil.geometry().cell_size()
    }

    /// The basin-wide maximum of WP/FC. Reduction factors below this
    /// would force AET negative and are infeasible.
    pub fn feasibility_ceiling(&self) -> Result<f64, GridError> {
        Ok(self
            .wilting_point
            .div(&self.field_capacity)?
            .max_nodata_zero())
    }
}
