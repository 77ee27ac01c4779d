//! The raster grid value type and its elementwise operations.

use crate::error::GridError;
use crate::geometry::GridGeometry;

/// An immutable 2D raster field.
///
/// Cell values are stored row-major with row 0 at the top. Nodata cells
/// carry `NaN`; they propagate through elementwise arithmetic and are
/// treated as zero by the scalar reductions.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    geometry: GridGeometry,
    data: Vec<f64>,
}

impl Grid {
    /// Creates a grid from a geometry and a row-major data vector.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DataLength`] if the vector length does not
    /// match the geometry's cell count.
    pub fn new(geometry: GridGeometry, data: Vec<f64>) -> Result<Self, GridError> {
        if data.len() != geometry.len() {
            return Err(GridError::DataLength {
                expected: geometry.len(),
                got: data.len(),
            });
        }
        Ok(Self { geometry, data })
    }

    /// Creates a grid with every cell set to `value`.
    pub fn constant(geometry: GridGeometry, value: f64) -> Self {
        Self {
            data: vec![value; geometry.len()],
            geometry,
        }
    }

    /// Creates a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(geometry: GridGeometry, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(geometry.len());
        for row in 0..geometry.rows() {
            for col in 0..geometry.cols() {
                data.push(f(row, col));
            }
        }
        Self { geometry, data }
    }

    /// Returns `true` if `value` encodes nodata.
    pub fn is_nodata(value: f64) -> bool {
        value.is_nan()
    }

    /// The nodata cell value.
    pub const NODATA: f64 = f64::NAN;

    /// Returns the grid geometry.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Returns the row-major cell values.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Returns the value of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.geometry.cols() + col]
    }

    fn check_shape(&self, other: &Grid) -> Result<(), GridError> {
        if self.geometry.same_shape(&other.geometry) {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                expected_rows: self.geometry.rows(),
                expected_cols: self.geometry.cols(),
                expected_cell: self.geometry.cell_size(),
                got_rows: other.geometry.rows(),
                got_cols: other.geometry.cols(),
                got_cell: other.geometry.cell_size(),
            })
        }
    }

    /// Applies `f` to every cell, producing a fresh grid.
    ///
    /// `f` sees nodata cells as `NaN`; returning `NaN` keeps them nodata.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Grid {
        Grid {
            geometry: self.geometry,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combines two grids cellwise with `f` after a shape check.
    pub fn zip_with(&self, other: &Grid, f: impl Fn(f64, f64) -> f64) -> Result<Grid, GridError> {
        self.check_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Grid {
            geometry: self.geometry,
            data,
        })
    }

    // --- Elementwise grid-grid arithmetic ---

    /// Cellwise sum.
    pub fn add(&self, other: &Grid) -> Result<Grid, GridError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Cellwise difference.
    pub fn sub(&self, other: &Grid) -> Result<Grid, GridError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Cellwise product.
    pub fn mul(&self, other: &Grid) -> Result<Grid, GridError> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Cellwise quotient.
    pub fn div(&self, other: &Grid) -> Result<Grid, GridError> {
        self.zip_with(other, |a, b| a / b)
    }

    // --- Elementwise grid-scalar arithmetic ---

    /// Adds a scalar to every cell.
    pub fn add_scalar(&self, value: f64) -> Grid {
        self.map(|v| v + value)
    }

    /// Subtracts a scalar from every cell.
    pub fn sub_scalar(&self, value: f64) -> Grid {
        self.map(|v| v - value)
    }

    /// Multiplies every cell by a scalar.
    pub fn mul_scalar(&self, value: f64) -> Grid {
        self.map(|v| v * value)
    }

    /// Divides every cell by a scalar.
    pub fn div_scalar(&self, value: f64) -> Grid {
        self.map(|v| v / value)
    }

    /// Raises every cell to an integer power.
    pub fn powi(&self, exp: i32) -> Grid {
        self.map(|v| v.powi(exp))
    }

    /// Raises every cell to a floating-point power.
    pub fn powf(&self, exp: f64) -> Grid {
        self.map(|v| v.powf(exp))
    }

    /// Cellwise reciprocal.
    pub fn recip(&self) -> Grid {
        self.map(|v| 1.0 / v)
    }

    /// Clamps every cell to at least `min`. Nodata cells stay nodata.
    pub fn clamp_min(&self, min: f64) -> Grid {
        self.map(|v| if v.is_nan() { v } else { v.max(min) })
    }

    // --- Cellwise comparisons producing 0/1 predicate grids ---

    fn compare(&self, other: &Grid, f: impl Fn(f64, f64) -> bool) -> Result<Grid, GridError> {
        self.zip_with(other, |a, b| {
            if a.is_nan() || b.is_nan() {
                Self::NODATA
            } else if f(a, b) {
                1.0
            } else {
                0.0
            }
        })
    }

    /// Cellwise `self >= other` as a 0/1 grid.
    pub fn ge(&self, other: &Grid) -> Result<Grid, GridError> {
        self.compare(other, |a, b| a >= b)
    }

    /// Cellwise `self > other` as a 0/1 grid.
    pub fn gt(&self, other: &Grid) -> Result<Grid, GridError> {
        self.compare(other, |a, b| a > b)
    }

    /// Cellwise `self > value` as a 0/1 grid.
    pub fn gt_scalar(&self, value: f64) -> Grid {
        self.map(|v| {
            if v.is_nan() {
                Self::NODATA
            } else if v > value {
                1.0
            } else {
                0.0
            }
        })
    }

    /// Cellwise `self == value` as a 0/1 grid.
    pub fn eq_scalar(&self, value: f64) -> Grid {
        self.map(|v| {
            if v.is_nan() {
                Self::NODATA
            } else if v == value {
                1.0
            } else {
                0.0
            }
        })
    }

    // --- Scalar reductions (nodata collapses to zero) ---

    /// Sum of all cells with nodata treated as zero.
    pub fn sum_nodata_zero(&self) -> f64 {
        self.data.iter().filter(|v| !v.is_nan()).sum()
    }

    /// Maximum over all cells with nodata treated as zero.
    ///
    /// An entirely-nodata grid therefore reduces to `0.0`.
    pub fn max_nodata_zero(&self) -> f64 {
        self.data
            .iter()
            .map(|&v| if v.is_nan() { 0.0 } else { v })
            .fold(0.0, f64::max)
    }
}
