//! Integration tests for IDW determinism and tie handling.

use approx::assert_abs_diff_eq;
use swm_calendar::DayId;
use swm_grid::{Grid, GridGeometry};
use swm_interpolate::{interpolate, IdwConfig, Observation, ObservationSet, Station, StationSample};

fn date() -> DayId {
    DayId::new(2004, 1, 15).unwrap()
}

#[test]
fn equidistant_stations_tie_break_by_id_is_stable() {
    // Two stations mirrored around the cell center: identical distances.
    // The surface must be the same regardless of input order.
    let template = Grid::constant(GridGeometry::new(1, 1, 100.0, 0.0, 0.0), 0.0);
    let cfg = IdwConfig::new(2.0).with_min_neighbors(1);

    let a = StationSample {
        id: 1,
        x: 150.0,
        y: 50.0,
        amount_mm: 2.0,
    };
    let b = StationSample {
        id: 2,
        x: -50.0,
        y: 50.0,
        amount_mm: 8.0,
    };

    let forward = interpolate(date(), &[a, b], &template, &cfg).unwrap();
    let reversed = interpolate(date(), &[b, a], &template, &cfg).unwrap();
    assert_eq!(forward.values(), reversed.values());
    // Equal weights: plain mean of the two amounts.
    assert_abs_diff_eq!(forward.values()[0], 5.0, epsilon = 1e-12);
}

#[test]
fn surface_follows_nearest_station() {
    // 1x3 strip, stations under the outer cell centers.
    let template = Grid::constant(GridGeometry::new(1, 3, 100.0, 0.0, 0.0), 0.0);
    let cfg = IdwConfig::new(2.0).with_min_neighbors(2);
    let samples = [
        StationSample {
            id: 1,
            x: 50.0,
            y: 50.0,
            amount_mm: 0.0,
        },
        StationSample {
            id: 2,
            x: 250.0,
            y: 50.0,
            amount_mm: 10.0,
        },
    ];
    let out = interpolate(date(), &samples, &template, &cfg).unwrap();
    assert_abs_diff_eq!(out.values()[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out.values()[1], 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out.values()[2], 10.0, epsilon = 1e-12);
}

#[test]
fn observation_set_feeds_interpolation() {
    let stations = vec![
        Station {
            id: 7,
            x: 50.0,
            y: 50.0,
        },
        Station {
            id: 8,
            x: 250.0,
            y: 50.0,
        },
    ];
    let observations = vec![
        Observation {
            station_id: 7,
            date: date(),
            amount_mm: 1.0,
        },
        Observation {
            station_id: 8,
            date: date(),
            amount_mm: 3.0,
        },
    ];
    let set = ObservationSet::new(stations, observations);
    let samples = set.for_date(date());
    assert_eq!(samples.len(), 2);

    let template = Grid::constant(GridGeometry::new(1, 1, 100.0, 100.0, 0.0), 0.0);
    let cfg = IdwConfig::new(1.0).with_min_neighbors(2);
    let out = interpolate(date(), &samples, &template, &cfg).unwrap();
    // Cell center (150, 50) is equidistant from both gauges.
    assert_abs_diff_eq!(out.values()[0], 2.0, epsilon = 1e-12);
}
