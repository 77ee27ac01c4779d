//! Compatibility naming for intermediate raster artifacts.
//!
//! Keys are shared with pre-existing tooling and must not change shape:
//! daily grids are `{VAR}_rp{rp×100}_c{c}_{yyyymmdd}`, running
//! accumulation snapshots append `_sumday`, and closed-window totals
//! carry both window bounds. The soil-moisture window artifact is a
//! mean, named `S_mean_...` rather than `S_sum_...`.

use swm_calendar::DayId;

/// The five per-day intermediate variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Variable {
    /// Potential evapotranspiration.
    Pet,
    /// Actual evapotranspiration.
    Aet,
    /// Interpolated precipitation.
    Precipitation,
    /// Total runoff.
    Runoff,
    /// Soil-moisture store.
    SoilMoisture,
}

impl Variable {
    /// All variables in artifact order.
    pub const ALL: [Variable; 5] = [
        Variable::Pet,
        Variable::Aet,
        Variable::Precipitation,
        Variable::Runoff,
        Variable::SoilMoisture,
    ];

    /// The artifact code used in key names. Precipitation grids keep
    /// the historical `IDW` code.
    pub fn code(self) -> &'static str {
        match self {
            Variable::Pet => "PET",
            Variable::Aet => "AET",
            Variable::Precipitation => "IDW",
            Variable::Runoff => "R",
            Variable::SoilMoisture => "S",
        }
    }
}

/// Key for one day's grid of one variable under one combination.
pub fn daily_key(variable: Variable, rp_scaled: u32, shape: i64, date: DayId) -> String {
    format!("{}_rp{}_c{}_{}", variable.code(), rp_scaled, shape, date)
}

/// Key for a running accumulation snapshot saved mid-window.
pub fn snapshot_key(variable: Variable, rp_scaled: u32, shape: i64, date: DayId) -> String {
    format!(
        "{}_sum_rp{}_c{}_{}_sumday",
        variable.code(),
        rp_scaled,
        shape,
        date
    )
}

/// Key for a closed accumulation window's total (or mean, for soil
/// moisture).
pub fn window_key(
    variable: Variable,
    rp_scaled: u32,
    shape: i64,
    start: DayId,
    end: DayId,
) -> String {
    let kind = match variable {
        Variable::SoilMoisture => "mean",
        _ => "sum",
    };
    format!(
        "{}_{}_rp{}_c{}_{}_{}",
        variable.code(),
        kind,
        rp_scaled,
        shape,
        start,
        end
    )
}

/// Retention slot for one (combination, variable) pair. Retention
/// counters are tracked per slot, never globally.
pub fn slot(variable: Variable, rp_scaled: u32, shape: i64) -> String {
    format!("{}_rp{}_c{}", variable.code(), rp_scaled, shape)
}
