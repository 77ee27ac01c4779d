//! Water-balance process functions.
//!
//! Pure functions implementing the daily balance equations over grids.
//! All grids must share one geometry; the carried soil-moisture grid is
//! the previous day's output.

use swm_grid::{select, Grid, GridError};

/// Seconds per day, for the mm-to-streamflow conversion.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Potential evapotranspiration by Haude.
///
/// `PET = f_haude × 6.1 × 10^(7.5·T/(T+237.2)) × (1 − RH/100)`
///
/// Temperature and humidity are basin-wide scalars for the day,
/// broadcast over the month-specific Haude factor grid.
pub fn pet(haude_factor: &Grid, temperature_c: f64, humidity_pct: f64) -> Grid {
    let saturation = 6.1 * 10f64.powf(7.5 * temperature_c / (temperature_c + 237.2));
    let deficit = 1.0 - humidity_pct / 100.0;
    haude_factor.mul_scalar(saturation * deficit)
}

/// Actual evapotranspiration.
///
/// Water cells evaporate at the potential rate, as do cells whose
/// carried soil moisture is at or above the reduction point. Where the
/// reduction point equals the wilting point the reduction ratio is
/// undefined and AET is zero. Everywhere else AET scales PET by
/// `(S − WP) / (RP − WP)`.
///
/// Guarantees `AET <= PET` cellwise for soil moisture within `[WP, FC]`.
pub fn aet(
    pet: &Grid,
    water_mask: &Grid,
    prior_soil: &Grid,
    reduction_point: &Grid,
    rp_wp_diff: &Grid,
    wilting_point: &Grid,
) -> Result<Grid, GridError> {
    let scaled = prior_soil
        .sub(wilting_point)?
        .div(rp_wp_diff)?
        .mul(pet)?;
    let degenerate = rp_wp_diff.eq_scalar(0.0);
    let below_rp = select(&degenerate, 0.0, &scaled)?;
    let above_rp = prior_soil.ge(reduction_point)?;
    let land = select(&above_rp, pet, &below_rp)?;
    select(water_mask, pet, &land)
}

/// Total runoff per cell.
///
/// Open water sheds `P − PET` when precipitation exceeds the potential
/// evaporation and the full precipitation otherwise, keeping water-body
/// runoff non-negative. Land cells shed `λ·(S − WP)²` plus an overflow
/// term of `P + S − FC` where that sum exceeds the field capacity.
pub fn runoff(
    water_mask: &Grid,
    lambda: &Grid,
    wilting_point: &Grid,
    precipitation: &Grid,
    prior_soil: &Grid,
    field_capacity: &Grid,
    pet: &Grid,
) -> Result<Grid, GridError> {
    let wet = precipitation.gt(pet)?;
    let water = select(&wet, &precipitation.sub(pet)?, precipitation)?;

    let storage_excess = lambda.mul(&prior_soil.sub(wilting_point)?.powi(2))?;
    let filled = precipitation.add(prior_soil)?;
    let overflowing = filled.gt(field_capacity)?;
    let overflow = select(&overflowing, &filled.sub(field_capacity)?, 0.0)?;
    let land = storage_excess.add(&overflow)?;

    select(water_mask, &water, &land)
}

/// Updated soil-moisture store.
///
/// Land cells balance `S + P − AET − R`, clamped at zero so the store
/// never goes negative. Water cells are not tracked; they carry the
/// prior value through unchanged.
pub fn soil_moisture(
    water_mask: &Grid,
    prior_soil: &Grid,
    precipitation: &Grid,
    aet: &Grid,
    runoff: &Grid,
) -> Result<Grid, GridError> {
    let balanced = prior_soil
        .add(precipitation)?
        .sub(aet)?
        .sub(runoff)?
        .clamp_min(0.0);
    select(water_mask, prior_soil, &balanced)
}

/// Basin streamflow in m³/s from a runoff grid in mm.
///
/// Sums all cells (nodata as zero) and converts mm over the cell area
/// to a daily-mean volumetric rate:
/// `Q = Σ runoff × 0.001 × cell_size² / 86 400`.
pub fn streamflow_m3_s(runoff: &Grid) -> f64 {
    let cell = runoff.geometry().cell_size();
    runoff.sum_nodata_zero() * 0.001 * cell * cell / SECONDS_PER_DAY
}
