//! Integration tests combining grid algebra the way the water-balance
//! expressions do: nested selects, comparisons, and reductions.

use approx::assert_abs_diff_eq;
use swm_grid::{select, Grid, GridError, GridGeometry};

fn geom() -> GridGeometry {
    GridGeometry::new(2, 3, 25.0, 0.0, 0.0)
}

#[test]
fn nested_select_mirrors_branching_expression() {
    // Emulate: where water -> pet; where s >= rp -> pet; else scaled.
    let water = Grid::new(geom(), vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
    let s = Grid::new(geom(), vec![5.0, 90.0, 10.0, 40.0, 80.0, 0.0]).unwrap();
    let rp = Grid::constant(geom(), 60.0);
    let pet = Grid::constant(geom(), 2.0);
    let scaled = pet.mul_scalar(0.5);

    let above_rp = s.ge(&rp).unwrap();
    let inner = select(&above_rp, &pet, &scaled).unwrap();
    let out = select(&water, &pet, &inner).unwrap();

    assert_eq!(out.values(), &[2.0, 2.0, 1.0, 1.0, 2.0, 2.0]);
}

#[test]
fn chained_arithmetic_checks_every_shape() {
    let a = Grid::constant(geom(), 1.0);
    let b = Grid::constant(geom(), 2.0);
    let odd = Grid::constant(GridGeometry::new(3, 2, 25.0, 0.0, 0.0), 3.0);

    let ok = a.add(&b).and_then(|s| s.mul(&b));
    assert!(ok.is_ok());

    let err = a.add(&b).and_then(|s| s.mul(&odd));
    assert!(matches!(err, Err(GridError::ShapeMismatch { .. })));
}

#[test]
fn masked_basin_reduction() {
    // Cells outside the basin are nodata and must not contribute.
    let runoff = Grid::new(
        geom(),
        vec![1.5, Grid::NODATA, 2.5, Grid::NODATA, 0.0, 1.0],
    )
    .unwrap();
    assert_abs_diff_eq!(runoff.sum_nodata_zero(), 5.0);
}

#[test]
fn value_semantics_survive_expression_trees() {
    let base = Grid::constant(geom(), 10.0);
    let derived = base.sub_scalar(4.0).clamp_min(7.0);
    assert_eq!(base.values(), &[10.0; 6]);
    assert_eq!(derived.values(), &[7.0; 6]);
}
