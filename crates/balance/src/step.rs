//! Composition of the process functions into one daily step.

use swm_grid::{Grid, GridError};

use crate::processes;

/// Everything one daily step needs. All grids share the basin geometry;
/// temperature and humidity are the day's basin-wide scalars.
#[derive(Debug, Clone, Copy)]
pub struct StepInputs<'a> {
    /// Month-specific Haude factor grid.
    pub haude_factor: &'a Grid,
    /// Day temperature in °C.
    pub temperature_c: f64,
    /// Day relative humidity in %.
    pub humidity_pct: f64,
    /// Water mask: 1 = open water, 0 = land.
    pub water_mask: &'a Grid,
    /// Soil moisture carried from the previous day.
    pub prior_soil: &'a Grid,
    /// Reduction point, `FC × rp_factor`.
    pub reduction_point: &'a Grid,
    /// Precomputed `RP − WP`.
    pub rp_wp_diff: &'a Grid,
    /// Wilting point.
    pub wilting_point: &'a Grid,
    /// Field capacity.
    pub field_capacity: &'a Grid,
    /// Interpolated precipitation for the day, in mm.
    pub precipitation: &'a Grid,
    /// Runoff shape grid, `c / (root_depth_m × 1000)²`.
    pub lambda: &'a Grid,
}

/// The grids and the streamflow scalar produced by one daily step.
#[derive(Debug, Clone)]
pub struct StepOutputs {
    /// Potential evapotranspiration.
    pub pet: Grid,
    /// Actual evapotranspiration.
    pub aet: Grid,
    /// Total runoff per cell.
    pub runoff: Grid,
    /// Updated soil-moisture store; feeds the next day's step.
    pub soil_moisture: Grid,
    /// Basin streamflow in m³/s.
    pub streamflow_m3_s: f64,
}

/// Runs one day of the water balance: PET, AET, runoff, soil-moisture
/// update, and the streamflow conversion, in that order.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if the input grids disagree in
/// geometry.
pub fn water_balance_step(inputs: &StepInputs<'_>) -> Result<StepOutputs, GridError> {
    let pet = processes::pet(inputs.haude_factor, inputs.temperature_c, inputs.humidity_pct);
    let aet = processes::aet(
        &pet,
        inputs.water_mask,
        inputs.prior_soil,
        inputs.reduction_point,
        inputs.rp_wp_diff,
        inputs.wilting_point,
    )?;
    let runoff = processes::runoff(
        inputs.water_mask,
        inputs.lambda,
        inputs.wilting_point,
        inputs.precipitation,
        inputs.prior_soil,
        inputs.field_capacity,
        &pet,
    )?;
    let soil_moisture = processes::soil_moisture(
        inputs.water_mask,
        inputs.prior_soil,
        inputs.precipitation,
        &aet,
        &runoff,
    )?;
    let streamflow_m3_s = processes::streamflow_m3_s(&runoff);

    Ok(StepOutputs {
        pet,
        aet,
        runoff,
        soil_moisture,
        streamflow_m3_s,
    })
}
