//! Error types for the swm-grid crate.

/// Error type for all fallible operations in the swm-grid crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when two grids of differing geometry enter one
    /// expression. Broadcasting is never implied; this points at a
    /// configuration error upstream.
    #[error(
        "grid shape mismatch: expected {expected_rows}x{expected_cols} \
         (cell {expected_cell}), got {got_rows}x{got_cols} (cell {got_cell})"
    )]
    ShapeMismatch {
        /// Rows of the left-hand grid.
        expected_rows: usize,
        /// Columns of the left-hand grid.
        expected_cols: usize,
        /// Cell size of the left-hand grid.
        expected_cell: f64,
        /// Rows of the offending grid.
        got_rows: usize,
        /// Columns of the offending grid.
        got_cols: usize,
        /// Cell size of the offending grid.
        got_cell: f64,
    },

    /// Returned when a data vector does not match the geometry's cell count.
    #[error("data length {got} does not match geometry cell count {expected}")]
    DataLength {
        /// Cell count implied by the geometry.
        expected: usize,
        /// Length of the supplied data vector.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_shape_mismatch() {
        let e = GridError::ShapeMismatch {
            expected_rows: 2,
            expected_cols: 3,
            expected_cell: 25.0,
            got_rows: 4,
            got_cols: 3,
            got_cell: 25.0,
        };
        assert_eq!(
            e.to_string(),
            "grid shape mismatch: expected 2x3 (cell 25), got 4x3 (cell 25)"
        );
    }

    #[test]
    fn error_data_length() {
        let e = GridError::DataLength {
            expected: 6,
            got: 5,
        };
        assert_eq!(
            e.to_string(),
            "data length 5 does not match geometry cell count 6"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<GridError>();
    }
}
