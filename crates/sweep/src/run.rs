//! The sweep controller: drives every feasible parameter combination
//! through the daily water balance.

use std::collections::BTreeMap;

use tracing::{debug, info};

use swm_accumulate::{DayFields, TemporalAccumulator};
use swm_balance::{water_balance_step, StepInputs};
use swm_calendar::DayId;
use swm_grid::Grid;
use swm_interpolate::{interpolate, InterpolateError, ObservationSet};
use swm_store::{
    daily_key, slot, snapshot_key, window_key, RasterLifecycle, RasterStore, ResultSink,
    Retention, Variable,
};

use crate::basin::{BasinData, ClimateRecord};
use crate::config::SweepConfig;
use crate::error::SweepError;
use crate::params::{rp_factor_values, shape_values, Combination};
use crate::results::{series_name, ResultSeries};

/// Runs the full two-parameter sweep against one store and one sink.
///
/// The controller owns no data of its own; every combination starts
/// from the basin's initial soil moisture and finishes by flushing its
/// streamflow series to the sink and settling artifact retention on
/// the store.
pub struct SweepController<'a, S: RasterStore, K: ResultSink> {
    store: &'a mut S,
    sink: &'a mut K,
}

impl<'a, S: RasterStore, K: ResultSink> SweepController<'a, S, K> {
    /// Creates a controller over a raster store and a result sink.
    pub fn new(store: &'a mut S, sink: &'a mut K) -> Self {
        Self { store, sink }
    }

    /// Runs every feasible combination over the climate series.
    ///
    /// Reduction factors below the basin's WP/FC ceiling are skipped
    /// (their AET scaling would go negative); a factor exactly at the
    /// ceiling is still simulated. The climate series must be non-empty
    /// and strictly ascending by date.
    ///
    /// # Errors
    ///
    /// Fails fast on invalid configuration or climate ordering, and
    /// aborts mid-run with [`SweepError::DataUnavailable`] when a
    /// simulation day has no precipitation observations at all.
    pub fn run(
        &mut self,
        basin: &BasinData,
        climate: &[ClimateRecord],
        observations: &ObservationSet,
        config: &SweepConfig,
    ) -> Result<BTreeMap<Combination, ResultSeries>, SweepError> {
        config.validate()?;
        basin.validate()?;

        let (start, end) = climate_bounds(climate)?;
        let ceiling = basin.feasibility_ceiling()?;
        let rp_factors = rp_factor_values(
            config.rp_factor_min,
            config.rp_factor_max,
            config.rp_factor_step,
        );
        let shapes = shape_values(config.shape_min, config.shape_max, config.shape_step);

        info!(
            combinations = rp_factors.len() * shapes.len(),
            days = climate.len(),
            feasibility_ceiling = ceiling,
            "starting parameter sweep"
        );

        let mut results = BTreeMap::new();
        for &rp_factor in &rp_factors {
            if rp_factor < ceiling {
                info!(
                    rp_factor,
                    ceiling, "skipping infeasible reduction factor below WP/FC ceiling"
                );
                continue;
            }

            // Shared across shape coefficients for this factor.
            let reduction_point = basin.field_capacity.mul_scalar(rp_factor);
            let rp_wp_diff = reduction_point.sub(&basin.wilting_point)?;

            for &shape in &shapes {
                let combination = Combination::new(rp_factor, shape);
                let series = self.run_combination(
                    combination,
                    basin,
                    climate,
                    observations,
                    config,
                    &reduction_point,
                    &rp_wp_diff,
                    start,
                    end,
                )?;
                results.insert(combination, series);
            }
        }

        info!(simulated = results.len(), "parameter sweep finished");
        Ok(results)
    }

    #[allow(clippy::too_many_arguments)]
    fn run_combination(
        &mut self,
        combination: Combination,
        basin: &BasinData,
        climate: &[ClimateRecord],
        observations: &ObservationSet,
        config: &SweepConfig,
        reduction_point: &Grid,
        rp_wp_diff: &Grid,
        start: DayId,
        end: DayId,
    ) -> Result<ResultSeries, SweepError> {
        let rp_scaled = combination.rp_scaled();
        let shape = combination.shape;
        info!(combination = %combination.label(), "simulating combination");

        // λ = c / (root depth in mm)².
        let lambda = basin
            .root_depth_m
            .mul_scalar(1000.0)
            .powi(2)
            .recip()
            .mul_scalar(shape as f64);

        let mut soil = basin.initial_soil.clone();
        let mut series = ResultSeries::new(combination);
        let mut lifecycle = RasterLifecycle::new();
        let mut accumulator = config.accumulation.map(TemporalAccumulator::new);

        for record in climate {
            let date = record.date;
            let samples = observations.for_date(date);
            let precipitation =
                match interpolate(date, &samples, &basin.initial_soil, &config.idw) {
                    Ok(grid) => grid,
                    Err(InterpolateError::NoObservations { date }) => {
                        return Err(SweepError::DataUnavailable { date })
                    }
                    Err(e) => return Err(e.into()),
                };

            let outputs = water_balance_step(&StepInputs {
                haude_factor: basin.haude.get(date.month()),
                temperature_c: record.temperature_c,
                humidity_pct: record.humidity_pct,
                water_mask: &basin.water_mask,
                prior_soil: &soil,
                reduction_point,
                rp_wp_diff,
                wilting_point: &basin.wilting_point,
                field_capacity: &basin.field_capacity,
                precipitation: &precipitation,
                lambda: &lambda,
            })?;
            debug!(%date, streamflow = outputs.streamflow_m3_s, "day simulated");
            series.push(date, outputs.streamflow_m3_s);

            for variable in Variable::ALL {
                let grid = day_grid(variable, &precipitation, &outputs);
                let key = daily_key(variable, rp_scaled, shape, date);
                self.store.save(&key, grid)?;
                lifecycle.track(
                    &slot(variable, rp_scaled, shape),
                    config.retain.retention(variable),
                    key,
                    self.store,
                )?;
            }

            if let Some(acc) = accumulator.as_mut() {
                let fields = DayFields {
                    pet: &outputs.pet,
                    aet: &outputs.aet,
                    precipitation: &precipitation,
                    runoff: &outputs.runoff,
                    soil_moisture: &outputs.soil_moisture,
                };
                if let Some(summary) = acc.observe(date, fields)? {
                    let window = acc.window();
                    info!(
                        start = %window.start(),
                        end = %window.end(),
                        n_days = summary.n_days,
                        "accumulation window closed"
                    );
                    for variable in Variable::ALL {
                        let grid = summary_grid(variable, &summary);
                        self.store
                            .save(&window_key(variable, rp_scaled, shape, window.start(), window.end()), grid)?;
                        lifecycle
                            .clear_slot(&snapshot_slot(variable, rp_scaled, shape), self.store)?;
                    }
                } else if let Some(sums) = acc.sums() {
                    // Mid-window: persist running totals, keeping the
                    // current and previous snapshot on the store.
                    for variable in Variable::ALL {
                        let grid = sum_grid(variable, sums);
                        let key = snapshot_key(variable, rp_scaled, shape, date);
                        self.store.save(&key, grid)?;
                        lifecycle.track(
                            &snapshot_slot(variable, rp_scaled, shape),
                            Retention::KeepLast(2),
                            key,
                            self.store,
                        )?;
                    }
                }
            }

            soil = outputs.soil_moisture;
        }

        self.sink.write_series(
            &series_name(combination, config.idw.power(), start, end),
            series.rows(),
        )?;

        for variable in Variable::ALL {
            let daily_slot = slot(variable, rp_scaled, shape);
            if config.retain.is_retained(variable) {
                lifecycle.release_slot(&daily_slot);
            } else {
                lifecycle.clear_slot(&daily_slot, self.store)?;
            }
            // Covers a window that never closed within the period.
            lifecycle.clear_slot(&snapshot_slot(variable, rp_scaled, shape), self.store)?;
        }

        Ok(series)
    }
}

/// Retention slot for a variable's running accumulation snapshots,
/// distinct from its daily-grid slot.
fn snapshot_slot(variable: Variable, rp_scaled: u32, shape: i64) -> String {
    format!("{}_sum", slot(variable, rp_scaled, shape))
}

fn climate_bounds(
    climate: &[ClimateRecord],
) -> Result<(DayId, DayId), SweepError> {
    let (Some(first), Some(last)) = (climate.first(), climate.last()) else {
        return Err(SweepError::EmptyClimate);
    };
    for pair in climate.windows(2) {
        if pair[1].date <= pair[0].date {
            return Err(SweepError::ClimateOutOfOrder {
                prev: pair[0].date,
                next: pair[1].date,
            });
        }
    }
    Ok((first.date, last.date))
}

fn day_grid<'g>(
    variable: Variable,
    precipitation: &'g Grid,
    outputs: &'g swm_balance::StepOutputs,
) -> &'g Grid {
    match variable {
        Variable::Pet => &outputs.pet,
        Variable::Aet => &outputs.aet,
        Variable::Precipitation => precipitation,
        Variable::Runoff => &outputs.runoff,
        Variable::SoilMoisture => &outputs.soil_moisture,
    }
}

fn sum_grid<'g>(variable: Variable, sums: &'g swm_accumulate::RunningSums) -> &'g Grid {
    match variable {
        Variable::Pet => &sums.pet,
        Variable::Aet => &sums.aet,
        Variable::Precipitation => &sums.precipitation,
        Variable::Runoff => &sums.runoff,
        Variable::SoilMoisture => &sums.soil_moisture,
    }
}

fn summary_grid<'g>(
    variable: Variable,
    summary: &'g swm_accumulate::AccumulationSummary,
) -> &'g Grid {
    match variable {
        Variable::Pet => &summary.pet_sum,
        Variable::Aet => &summary.aet_sum,
        Variable::Precipitation => &summary.precipitation_sum,
        Variable::Runoff => &summary.runoff_sum,
        Variable::SoilMoisture => &summary.soil_moisture_mean,
    }
}
