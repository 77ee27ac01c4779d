//! # swm-grid
//!
//! Immutable 2D raster fields with nodata handling, elementwise
//! arithmetic, cellwise comparisons, and a three-way conditional
//! [`select`] primitive.
//!
//! Every operation returns a fresh [`Grid`]; nothing mutates in place.
//! Grids entering one expression must share the same shape and cell
//! size — mixing geometries fails with [`GridError::ShapeMismatch`]
//! instead of broadcasting. Nodata cells are carried as `NaN`,
//! propagate through elementwise arithmetic, and collapse to zero in
//! scalar reductions.
//!
//! ## Quick Start
//!
//! ```
//! use swm_grid::{Grid, GridGeometry, select};
//!
//! let geom = GridGeometry::new(2, 2, 25.0, 0.0, 0.0);
//! let a = Grid::constant(geom, 3.0);
//! let b = Grid::constant(geom, 5.0);
//! let mask = Grid::new(geom, vec![1.0, 0.0, 1.0, 0.0]).unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.values()[0], 8.0);
//!
//! let picked = select(&mask, &a, &b).unwrap();
//! assert_eq!(picked.values(), &[3.0, 5.0, 3.0, 5.0]);
//! ```

mod error;
mod geometry;
mod grid;
mod select;

pub use error::GridError;
pub use geometry::GridGeometry;
pub use grid::Grid;
pub use select::{select, Operand};
