//! Retention-window bookkeeping for intermediate artifacts.
//!
//! Replaces ad-hoc "yesterday" tracking with explicit per-slot state: a
//! slot is one (combination, variable) pair, and each slot keeps the
//! last N artifacts on the backing store, deleting older ones as new
//! days are tracked. Disk usage per slot is O(N) regardless of run
//! length.

use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use crate::error::StoreError;
use crate::store::RasterStore;

/// How many artifacts a slot keeps on the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// Keep every artifact (the variable's retain flag is set).
    KeepAll,
    /// Keep only the most recent N artifacts.
    KeepLast(usize),
}

#[derive(Debug, Default)]
struct SlotState {
    retention: Option<Retention>,
    keys: VecDeque<String>,
}

/// Tracks saved artifact keys per slot and enforces retention.
#[derive(Debug, Default)]
pub struct RasterLifecycle {
    slots: BTreeMap<String, SlotState>,
}

impl RasterLifecycle {
    /// Creates an empty lifecycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly saved artifact in `slot` and deletes the
    /// oldest tracked artifacts beyond the retention window.
    ///
    /// The retention passed on the first `track` call for a slot sticks
    /// for that slot's lifetime.
    pub fn track<S: RasterStore>(
        &mut self,
        slot: &str,
        retention: Retention,
        key: String,
        store: &mut S,
    ) -> Result<(), StoreError> {
        let state = self.slots.entry(slot.to_string()).or_default();
        let retention = *state.retention.get_or_insert(retention);
        state.keys.push_back(key);

        if let Retention::KeepLast(n) = retention {
            while state.keys.len() > n {
                let old = state.keys.pop_front().expect("len > n >= 0");
                debug!(slot, key = %old, "releasing artifact beyond retention window");
                store.delete(&old)?;
            }
        }
        Ok(())
    }

    /// Returns how many artifacts a slot currently tracks.
    pub fn tracked(&self, slot: &str) -> usize {
        self.slots.get(slot).map_or(0, |s| s.keys.len())
    }

    /// Deletes every artifact still tracked in `slot` and forgets it.
    pub fn clear_slot<S: RasterStore>(
        &mut self,
        slot: &str,
        store: &mut S,
    ) -> Result<(), StoreError> {
        if let Some(state) = self.slots.remove(slot) {
            for key in state.keys {
                store.delete(&key)?;
            }
        }
        Ok(())
    }

    /// Forgets a slot without touching the store (the variable's
    /// artifacts are being retained).
    pub fn release_slot(&mut self, slot: &str) {
        self.slots.remove(slot);
    }
}
