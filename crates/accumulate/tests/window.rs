//! Integration tests for accumulation over realistic day streams.

use approx::assert_abs_diff_eq;
use swm_accumulate::{AccumulationWindow, DayFields, Phase, TemporalAccumulator};
use swm_calendar::DayId;
use swm_grid::{Grid, GridGeometry};

fn day(id: u32) -> DayId {
    DayId::from_yyyymmdd(id).unwrap()
}

#[test]
fn window_in_the_middle_of_a_run() {
    let geom = GridGeometry::new(1, 2, 25.0, 0.0, 0.0);
    let window = AccumulationWindow::new(day(20040110), day(20040112)).unwrap();
    let mut acc = TemporalAccumulator::new(window);

    let mut summary = None;
    for offset in 1..=31u32 {
        let date = day(20040100 + offset);
        let value = offset as f64;
        let g = Grid::constant(geom, value);
        let result = acc
            .observe(
                date,
                DayFields {
                    pet: &g,
                    aet: &g,
                    precipitation: &g,
                    runoff: &g,
                    soil_moisture: &g,
                },
            )
            .unwrap();
        if let Some(s) = result {
            summary = Some((date, s));
        }
    }

    let (finalized_on, summary) = summary.expect("window must finalize");
    assert_eq!(finalized_on, day(20040112));
    assert_eq!(acc.phase(), Phase::Finalized);
    // Days 10, 11, 12 were summed.
    assert_eq!(summary.n_days, 3);
    assert_abs_diff_eq!(summary.runoff_sum.values()[0], 33.0, epsilon = 1e-12);
    assert_abs_diff_eq!(summary.soil_moisture_mean.values()[0], 11.0, epsilon = 1e-12);
}

#[test]
fn nodata_cells_stay_nodata_in_sums() {
    let geom = GridGeometry::new(1, 2, 25.0, 0.0, 0.0);
    let window = AccumulationWindow::new(day(20040101), day(20040102)).unwrap();
    let mut acc = TemporalAccumulator::new(window);

    let masked = Grid::new(geom, vec![1.0, Grid::NODATA]).unwrap();
    let mut summary = None;
    for date in [day(20040101), day(20040102)] {
        summary = acc
            .observe(
                date,
                DayFields {
                    pet: &masked,
                    aet: &masked,
                    precipitation: &masked,
                    runoff: &masked,
                    soil_moisture: &masked,
                },
            )
            .unwrap();
    }

    let summary = summary.unwrap();
    assert_abs_diff_eq!(summary.pet_sum.values()[0], 2.0, epsilon = 1e-12);
    assert!(Grid::is_nodata(summary.pet_sum.values()[1]));
    assert!(Grid::is_nodata(summary.soil_moisture_mean.values()[1]));
}
