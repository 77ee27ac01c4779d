//! Raster geometry: shape, cell size, and lower-left origin.

/// Shape and placement of a raster grid.
///
/// Row 0 is the northernmost row (raster scanline order); the origin is
/// the lower-left corner of the extent, matching the ESRI ASCII grid
/// header convention. The spatial reference itself is opaque to the
/// model and simply carried through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    rows: usize,
    cols: usize,
    cell_size: f64,
    x_origin: f64,
    y_origin: f64,
}

impl GridGeometry {
    /// Creates a new geometry.
    pub fn new(rows: usize, cols: usize, cell_size: f64, x_origin: f64, y_origin: f64) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            x_origin,
            y_origin,
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell size in spatial length units.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Returns the x coordinate of the lower-left corner.
    pub fn x_origin(&self) -> f64 {
        self.x_origin
    }

    /// Returns the y coordinate of the lower-left corner.
    pub fn y_origin(&self) -> f64 {
        self.y_origin
    }

    /// Returns the total cell count.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the center coordinates of the cell at (row, col).
    ///
    /// Row 0 sits at the top of the extent, so its centers have the
    /// largest y coordinates.
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        let x = self.x_origin + (col as f64 + 0.5) * self.cell_size;
        let y = self.y_origin + (self.rows as f64 - row as f64 - 0.5) * self.cell_size;
        (x, y)
    }

    /// Returns `true` if `other` can enter one expression with `self`:
    /// same row/column counts and cell size.
    pub fn same_shape(&self, other: &GridGeometry) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cell_size == other.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn accessors() {
        let g = GridGeometry::new(3, 4, 25.0, 100.0, 200.0);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_abs_diff_eq!(g.cell_size(), 25.0);
        assert_eq!(g.len(), 12);
        assert!(!g.is_empty());
    }

    #[test]
    fn cell_center_top_left() {
        // 3 rows, origin (0, 0), cell 10: row 0 is the top row.
        let g = GridGeometry::new(3, 4, 10.0, 0.0, 0.0);
        let (x, y) = g.cell_center(0, 0);
        assert_abs_diff_eq!(x, 5.0);
        assert_abs_diff_eq!(y, 25.0);
    }

    #[test]
    fn cell_center_bottom_right() {
        let g = GridGeometry::new(3, 4, 10.0, 0.0, 0.0);
        let (x, y) = g.cell_center(2, 3);
        assert_abs_diff_eq!(x, 35.0);
        assert_abs_diff_eq!(y, 5.0);
    }

    #[test]
    fn same_shape_ignores_origin() {
        let a = GridGeometry::new(2, 2, 25.0, 0.0, 0.0);
        let b = GridGeometry::new(2, 2, 25.0, 500.0, 500.0);
        let c = GridGeometry::new(2, 3, 25.0, 0.0, 0.0);
        let d = GridGeometry::new(2, 2, 50.0, 0.0, 0.0);
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
        assert!(!a.same_shape(&d));
    }
}
