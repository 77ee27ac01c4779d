//! Error types for the swm-store crate.

use std::path::PathBuf;

use swm_grid::GridError;

/// Error type for all fallible operations in the swm-store crate.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Returned when a requested artifact does not exist.
    #[error("no grid stored under key '{key}'")]
    KeyNotFound {
        /// The missing artifact key.
        key: String,
    },

    /// An underlying filesystem operation failed.
    #[error("i/o failure on {}: {reason}", path.display())]
    Io {
        /// The path involved.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// A file exists but its contents could not be parsed.
    #[error("malformed data in {}: {reason}", path.display())]
    Format {
        /// The path involved.
        path: PathBuf,
        /// What was wrong with the contents.
        reason: String,
    },

    /// A CSV table could not be read or a row failed to parse.
    #[error("csv table {}: {reason}", path.display())]
    Csv {
        /// Path to the table.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// A grid operation failed while handling stored data.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_key_not_found() {
        let e = StoreError::KeyNotFound {
            key: "PET_rp85_c150_20030101".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "no grid stored under key 'PET_rp85_c150_20030101'"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StoreError>();
    }
}
