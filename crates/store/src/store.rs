//! The raster store abstraction and its in-memory implementation.

use std::collections::BTreeMap;

use swm_grid::Grid;

use crate::error::StoreError;

/// Keyed persistence for intermediate grids.
///
/// The core only requires exact-shape round trips: `load` after `save`
/// must reproduce the grid geometry and values. `delete` of an absent
/// key succeeds — cleanup calls are advisory and must not abort the
/// day loop when a target is already gone.
pub trait RasterStore {
    /// Persists a grid under `key`, overwriting any previous artifact.
    fn save(&mut self, key: &str, grid: &Grid) -> Result<(), StoreError>;

    /// Loads the grid stored under `key`.
    fn load(&self, key: &str) -> Result<Grid, StoreError>;

    /// Removes the artifact under `key`, succeeding if it is absent.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Returns `true` if an artifact exists under `key`.
    fn exists(&self, key: &str) -> bool;
}

/// Raster store backed by a map, for tests and small sweeps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    grids: BTreeMap<String, Grid>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored grids.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Returns the stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.grids.keys().map(String::as_str)
    }
}

impl RasterStore for MemoryStore {
    fn save(&mut self, key: &str, grid: &Grid) -> Result<(), StoreError> {
        self.grids.insert(key.to_string(), grid.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Grid, StoreError> {
        self.grids
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::KeyNotFound {
                key: key.to_string(),
            })
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.grids.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.grids.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swm_grid::GridGeometry;

    fn grid() -> Grid {
        Grid::constant(GridGeometry::new(2, 2, 25.0, 0.0, 0.0), 1.5)
    }

    #[test]
    fn save_load_round_trip() {
        let mut store = MemoryStore::new();
        store.save("a", &grid()).unwrap();
        let loaded = store.load("a").unwrap();
        assert_eq!(loaded.values(), grid().values());
        assert_eq!(loaded.geometry(), grid().geometry());
    }

    #[test]
    fn load_missing_key_is_an_error() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load("nope"),
            Err(StoreError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn delete_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.delete("nope").is_ok());
    }

    #[test]
    fn exists_and_overwrite() {
        let mut store = MemoryStore::new();
        assert!(!store.exists("a"));
        store.save("a", &grid()).unwrap();
        assert!(store.exists("a"));
        let other = grid().mul_scalar(2.0);
        store.save("a", &other).unwrap();
        assert_eq!(store.load("a").unwrap().values(), other.values());
        assert_eq!(store.len(), 1);
    }
}
