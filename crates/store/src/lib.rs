//! # swm-store
//!
//! Persistence collaborators around the simulation core: the raster
//! store abstraction with in-memory and on-disk (ESRI ASCII grid)
//! implementations, the compatibility naming scheme for intermediate
//! artifacts, an explicit keep-last-N retention lifecycle, result-series
//! sinks, and CSV readers for the climate and precipitation tables.
//!
//! Artifact keys follow the established convention so existing tooling
//! keeps working: `{VAR}_rp{rp×100}_c{c}_{yyyymmdd}` for daily grids,
//! with `_sum`/`_sumday` forms for accumulation artifacts. Deleting an
//! artifact that is already gone is not an error — cleanup is advisory
//! and must never abort a day loop.

mod ascii_grid;
mod disk;
mod error;
mod key;
mod lifecycle;
mod sink;
mod store;
mod tables;

pub use ascii_grid::{read_ascii_grid, write_ascii_grid};
pub use disk::DirectoryStore;
pub use error::StoreError;
pub use key::{daily_key, slot, snapshot_key, window_key, Variable};
pub use lifecycle::{RasterLifecycle, Retention};
pub use sink::{CsvSink, MemorySink, ResultSink};
pub use store::{MemoryStore, RasterStore};
pub use tables::{
    read_climate_table, read_observation_table, read_station_table, ClimateRow, ObservationRow,
    StationRow,
};
