//! Inverse distance weighted surface construction.

use swm_calendar::DayId;
use swm_grid::Grid;

use crate::config::IdwConfig;
use crate::error::InterpolateError;
use crate::station::StationSample;

/// A station observation co-located with a cell center takes over the
/// cell exactly; distances below this are treated as zero.
const COINCIDENT_DISTANCE: f64 = 1e-9;

/// Interpolates one day of station precipitation onto the template grid.
///
/// The output covers the template geometry; cells that are nodata in the
/// template (outside the basin) stay nodata. For each remaining cell the
/// neighbor set is every station within the configured radius, padded
/// with the nearest stations overall when fewer than the minimum count
/// report in-radius. Ordering ties break by ascending station id.
///
/// # Errors
///
/// Returns [`InterpolateError::NoObservations`] when `samples` is empty
/// and an invalid-configuration error from [`IdwConfig::validate`].
pub fn interpolate(
    date: DayId,
    samples: &[StationSample],
    template: &Grid,
    config: &IdwConfig,
) -> Result<Grid, InterpolateError> {
    config.validate()?;
    if samples.is_empty() {
        return Err(InterpolateError::NoObservations { date });
    }

    let geometry = *template.geometry();
    let mut ranked: Vec<(f64, u32, f64)> = Vec::with_capacity(samples.len());

    let grid = Grid::from_fn(geometry, |row, col| {
        let index = row * geometry.cols() + col;
        if Grid::is_nodata(template.values()[index]) {
            return Grid::NODATA;
        }

        let (cx, cy) = geometry.cell_center(row, col);
        ranked.clear();
        for s in samples {
            let dist = ((s.x - cx).powi(2) + (s.y - cy).powi(2)).sqrt();
            ranked.push((dist, s.id, s.amount_mm));
        }
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        cell_estimate(&ranked, config)
    });

    Ok(grid)
}

/// Weighted average over the neighbor set of one cell.
///
/// `ranked` must be sorted by ascending (distance, station id).
fn cell_estimate(ranked: &[(f64, u32, f64)], config: &IdwConfig) -> f64 {
    // Exact hit: the nearest station sits on the cell center.
    if ranked[0].0 < COINCIDENT_DISTANCE {
        return ranked[0].2;
    }

    let in_radius = ranked.partition_point(|&(d, _, _)| d <= config.radius());
    let n = if in_radius >= config.min_neighbors() {
        in_radius
    } else {
        // Fall back to the nearest stations until the minimum count is
        // met (or every station is used).
        config.min_neighbors().min(ranked.len())
    };

    let mut weight_sum = 0.0;
    let mut value_sum = 0.0;
    for &(dist, _, amount) in &ranked[..n] {
        let weight = 1.0 / dist.powf(config.power());
        weight_sum += weight;
        value_sum += weight * amount;
    }
    value_sum / weight_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use swm_grid::GridGeometry;

    fn date() -> DayId {
        DayId::new(2003, 7, 1).unwrap()
    }

    fn template_1x1() -> Grid {
        // Single cell with center at (50, 50).
        Grid::constant(GridGeometry::new(1, 1, 100.0, 0.0, 0.0), 0.0)
    }

    fn sample(id: u32, x: f64, y: f64, amount_mm: f64) -> StationSample {
        StationSample { id, x, y, amount_mm }
    }

    #[test]
    fn no_observations_is_an_error() {
        let result = interpolate(date(), &[], &template_1x1(), &IdwConfig::new(1.0));
        assert_eq!(
            result.unwrap_err(),
            InterpolateError::NoObservations { date: date() }
        );
    }

    #[test]
    fn single_station_is_constant_surface() {
        let samples = [sample(1, 500.0, 500.0, 7.5)];
        let out = interpolate(date(), &samples, &template_1x1(), &IdwConfig::new(2.0)).unwrap();
        assert_abs_diff_eq!(out.values()[0], 7.5, epsilon = 1e-12);
    }

    #[test]
    fn coincident_station_takes_cell_exactly() {
        let samples = [
            sample(1, 50.0, 50.0, 3.0),
            sample(2, 51.0, 50.0, 100.0),
        ];
        let out = interpolate(date(), &samples, &template_1x1(), &IdwConfig::new(2.0)).unwrap();
        assert_abs_diff_eq!(out.values()[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn idw_weighting_hand_computed() {
        // Cell center (50, 50); stations at distances 50 and 150, power 1.
        // weights 1/50 and 1/150; value = (2/50 + 6/150) / (1/50 + 1/150)
        //       = (0.04 + 0.04) / (0.02 + 0.006667) = 0.08 / 0.026667 = 3.0
        let samples = [
            sample(1, 100.0, 50.0, 2.0),
            sample(2, 200.0, 50.0, 6.0),
        ];
        let cfg = IdwConfig::new(1.0).with_min_neighbors(2);
        let out = interpolate(date(), &samples, &template_1x1(), &cfg).unwrap();
        assert_abs_diff_eq!(out.values()[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn power_zero_is_plain_average() {
        let samples = [
            sample(1, 100.0, 50.0, 2.0),
            sample(2, 5_000.0, 50.0, 10.0),
        ];
        let cfg = IdwConfig::new(0.0).with_min_neighbors(2);
        let out = interpolate(date(), &samples, &template_1x1(), &cfg).unwrap();
        assert_abs_diff_eq!(out.values()[0], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_radius_station_excluded_when_enough_in_radius() {
        // min_neighbors 1: the distant station must not contribute.
        let samples = [
            sample(1, 100.0, 50.0, 2.0),
            sample(2, 100_000.0, 50.0, 999.0),
        ];
        let cfg = IdwConfig::new(1.0).with_min_neighbors(1);
        let out = interpolate(date(), &samples, &template_1x1(), &cfg).unwrap();
        assert_abs_diff_eq!(out.values()[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn radius_fallback_uses_nearest_stations() {
        // No station in radius; min_neighbors 2 pulls in the two nearest.
        let samples = [
            sample(1, 50_000.0, 50.0, 4.0),
            sample(2, 60_000.0, 50.0, 8.0),
            sample(3, 500_000.0, 50.0, 100.0),
        ];
        let cfg = IdwConfig::new(0.0).with_min_neighbors(2);
        let out = interpolate(date(), &samples, &template_1x1(), &cfg).unwrap();
        assert_abs_diff_eq!(out.values()[0], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn template_nodata_passes_through() {
        let geometry = GridGeometry::new(1, 2, 100.0, 0.0, 0.0);
        let template = Grid::new(geometry, vec![0.0, Grid::NODATA]).unwrap();
        let samples = [sample(1, 0.0, 0.0, 5.0)];
        let out = interpolate(date(), &samples, &template, &IdwConfig::new(1.0)).unwrap();
        assert!(!Grid::is_nodata(out.values()[0]));
        assert!(Grid::is_nodata(out.values()[1]));
    }
}
