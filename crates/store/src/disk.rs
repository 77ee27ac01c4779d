//! On-disk raster store: one ESRI ASCII file per artifact key.

use std::fs;
use std::path::{Path, PathBuf};

use swm_grid::Grid;

use crate::ascii_grid::{read_ascii_grid, write_ascii_grid};
use crate::error::StoreError;
use crate::store::RasterStore;

/// Raster store writing each artifact as `{root}/{key}.asc`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Opens (and creates if needed) a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::Io {
            path: root.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { root })
    }

    /// Returns the store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.asc"))
    }
}

impl RasterStore for DirectoryStore {
    fn save(&mut self, key: &str, grid: &Grid) -> Result<(), StoreError> {
        write_ascii_grid(&self.path_for(key), grid)
    }

    fn load(&self, key: &str) -> Result<Grid, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Err(StoreError::KeyNotFound {
                key: key.to_string(),
            });
        }
        read_ascii_grid(&path)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            // Already gone: cleanup is advisory.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io {
                path,
                reason: e.to_string(),
            }),
        }
    }

    fn exists(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swm_grid::GridGeometry;

    fn grid() -> Grid {
        Grid::new(
            GridGeometry::new(1, 3, 25.0, 0.0, 0.0),
            vec![1.0, Grid::NODATA, 3.5],
        )
        .unwrap()
    }

    #[test]
    fn disk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path().join("scratch")).unwrap();
        store.save("R_rp85_c150_20030101", &grid()).unwrap();
        assert!(store.exists("R_rp85_c150_20030101"));

        let loaded = store.load("R_rp85_c150_20030101").unwrap();
        assert_eq!(loaded.geometry(), grid().geometry());
        assert_eq!(loaded.values()[0], 1.0);
        assert!(Grid::is_nodata(loaded.values()[1]));
    }

    #[test]
    fn delete_twice_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path()).unwrap();
        store.save("a", &grid()).unwrap();
        store.delete("a").unwrap();
        store.delete("a").unwrap();
        assert!(!store.exists("a"));
    }

    #[test]
    fn load_missing_is_key_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.load("absent"),
            Err(StoreError::KeyNotFound { .. })
        ));
    }
}
