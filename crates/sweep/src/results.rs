//! Per-combination streamflow series and their output names.

use swm_calendar::DayId;

use crate::params::Combination;

/// Output name for a combination's streamflow series.
///
/// Carries everything needed to tell runs apart: the combination, the
/// IDW power (scaled by 100 like the reduction factor), and the
/// simulated period bounds.
pub fn series_name(combination: Combination, idw_power: f64, start: DayId, end: DayId) -> String {
    format!(
        "Q_rp{}_c{}_idw{}_s{}_e{}",
        combination.rp_scaled(),
        combination.shape,
        (idw_power * 100.0).round() as i64,
        start,
        end
    )
}

/// The daily basin streamflow produced by one combination, in
/// simulation order.
#[derive(Debug, Clone)]
pub struct ResultSeries {
    combination: Combination,
    rows: Vec<(DayId, f64)>,
}

impl ResultSeries {
    /// Creates an empty series for `combination`.
    pub fn new(combination: Combination) -> Self {
        Self {
            combination,
            rows: Vec::new(),
        }
    }

    /// Appends one day's streamflow in m³/s.
    pub fn push(&mut self, date: DayId, streamflow_m3_s: f64) {
        self.rows.push((date, streamflow_m3_s));
    }

    /// The combination this series belongs to.
    pub fn combination(&self) -> Combination {
        self.combination
    }

    /// The (date, streamflow) rows in simulation order.
    pub fn rows(&self) -> &[(DayId, f64)] {
        &self.rows
    }
}
