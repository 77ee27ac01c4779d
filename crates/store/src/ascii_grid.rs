//! ESRI ASCII grid reading and writing.
//!
//! The header carries the geometry (ncols, nrows, xllcorner, yllcorner,
//! cellsize, NODATA_value); cell values follow row-major with row 0 at
//! the top. Values are written with Rust's shortest round-trip float
//! formatting, so a read after a write reproduces the grid exactly.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use swm_grid::{Grid, GridGeometry};

use crate::error::StoreError;

/// Nodata sentinel used when writing.
const NODATA_VALUE: f64 = -9999.0;

fn io_err(path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn format_err(path: &Path, reason: impl Into<String>) -> StoreError {
    StoreError::Format {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Reads a grid from an ESRI ASCII file.
///
/// # Errors
///
/// Returns [`StoreError::Io`] on filesystem failures and
/// [`StoreError::Format`] when the header or cell block is malformed.
pub fn read_ascii_grid(path: &Path) -> Result<Grid, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let mut tokens = text.split_whitespace();

    let mut header_value = |name: &str| -> Result<f64, StoreError> {
        let key = tokens
            .next()
            .ok_or_else(|| format_err(path, format!("missing header field '{name}'")))?;
        if !key.eq_ignore_ascii_case(name) {
            return Err(format_err(
                path,
                format!("expected header field '{name}', found '{key}'"),
            ));
        }
        let value = tokens
            .next()
            .ok_or_else(|| format_err(path, format!("missing value for '{name}'")))?;
        value
            .parse::<f64>()
            .map_err(|_| format_err(path, format!("invalid value '{value}' for '{name}'")))
    };

    let ncols = header_value("ncols")? as usize;
    let nrows = header_value("nrows")? as usize;
    let xll = header_value("xllcorner")?;
    let yll = header_value("yllcorner")?;
    let cell_size = header_value("cellsize")?;
    let nodata = header_value("NODATA_value")?;

    let geometry = GridGeometry::new(nrows, ncols, cell_size, xll, yll);
    let mut data = Vec::with_capacity(geometry.len());
    for token in tokens {
        let value: f64 = token
            .parse()
            .map_err(|_| format_err(path, format!("invalid cell value '{token}'")))?;
        data.push(if value == nodata { Grid::NODATA } else { value });
    }
    if data.len() != geometry.len() {
        return Err(format_err(
            path,
            format!(
                "expected {} cell values, found {}",
                geometry.len(),
                data.len()
            ),
        ));
    }
    Grid::new(geometry, data).map_err(StoreError::from)
}

/// Writes a grid to an ESRI ASCII file, creating parent directories.
pub fn write_ascii_grid(path: &Path, grid: &Grid) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(path, e))?;
    }

    let geometry = grid.geometry();
    let mut out = String::new();
    out.push_str(&format!("ncols {}\n", geometry.cols()));
    out.push_str(&format!("nrows {}\n", geometry.rows()));
    out.push_str(&format!("xllcorner {}\n", geometry.x_origin()));
    out.push_str(&format!("yllcorner {}\n", geometry.y_origin()));
    out.push_str(&format!("cellsize {}\n", geometry.cell_size()));
    out.push_str(&format!("NODATA_value {}\n", NODATA_VALUE));

    for row in 0..geometry.rows() {
        for col in 0..geometry.cols() {
            if col > 0 {
                out.push(' ');
            }
            let v = grid.get(row, col);
            if Grid::is_nodata(v) {
                out.push_str(&format!("{NODATA_VALUE}"));
            } else {
                out.push_str(&format!("{v}"));
            }
        }
        out.push('\n');
    }

    let mut file = fs::File::create(path).map_err(|e| io_err(path, e))?;
    file.write_all(out.as_bytes()).map_err(|e| io_err(path, e))
}
