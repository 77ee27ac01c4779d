//! Cellwise three-way conditional over grids.

use crate::error::GridError;
use crate::grid::Grid;

/// A branch of a [`select`] expression: either a grid or a scalar
/// broadcast to every cell.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// Take the branch value from a grid of matching shape.
    Grid(&'a Grid),
    /// Use one scalar for every cell.
    Scalar(f64),
}

impl<'a> From<&'a Grid> for Operand<'a> {
    fn from(grid: &'a Grid) -> Self {
        Operand::Grid(grid)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl Operand<'_> {
    fn value_at(&self, index: usize) -> f64 {
        match self {
            Operand::Grid(g) => g.values()[index],
            Operand::Scalar(v) => *v,
        }
    }
}

/// Evaluates a cellwise conditional: where `mask` is nonzero the result
/// takes `when_true`, elsewhere `when_false`.
///
/// Nodata cells in the mask yield nodata in the result; a nodata value
/// in the chosen branch carries through as nodata.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if any grid operand differs in
/// shape from the mask.
pub fn select<'a>(
    mask: &Grid,
    when_true: impl Into<Operand<'a>>,
    when_false: impl Into<Operand<'a>>,
) -> Result<Grid, GridError> {
    let when_true = when_true.into();
    let when_false = when_false.into();
    for operand in [&when_true, &when_false] {
        if let Operand::Grid(g) = operand {
            // Reuse the shape check by zipping with a no-op.
            mask.zip_with(g, |a, _| a)?;
        }
    }

    let data = mask
        .values()
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            if m.is_nan() {
                Grid::NODATA
            } else if m != 0.0 {
                when_true.value_at(i)
            } else {
                when_false.value_at(i)
            }
        })
        .collect();
    Grid::new(*mask.geometry(), data)
}
