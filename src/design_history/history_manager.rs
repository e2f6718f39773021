use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::design_history::clock::{Clock, SystemClock};
use crate::design_history::types::{DesignRecord, NewDesign};
use crate::lifecycle::ManagerState;
use crate::storage::record_store::RecordStore;
use crate::storage::types::DESIGN_HISTORY_KEY;

/// The structure owning the design history
///
/// Holds the authoritative, newest-first list of designs for the lifetime of
/// the application and mirrors it to the `designHistory` slot.
///
/// # Fields Overview
///
/// - `designs`: the in-memory list, most recently added first
/// - `store`: where the list is persisted as a whole on every change
/// - `clock`: stamps new designs
/// - `state`: `Loading` until the slot has been read once, then `Ready`
pub struct DesignHistoryManager {
    designs: Vec<DesignRecord>,
    store: RecordStore,
    clock: Arc<dyn Clock>,
    state: ManagerState,
}

impl DesignHistoryManager {
    /// Creates a manager in the `Loading` state. Call `load` to read the slot.
    pub fn new(store: RecordStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            designs: Vec::new(),
            store,
            clock,
            state: ManagerState::Loading,
        }
    }

    /// Creates a manager and loads it, returning it `Ready`.
    pub fn open(store: RecordStore) -> Self {
        let mut manager = Self::new(store);
        manager.load();
        manager
    }

    /// Reads the persisted history and moves to `Ready`. Runs once; later
    /// calls are no-ops.
    ///
    /// Designs added while `Loading` stay in front of the loaded history.
    /// Ids stay unique: a stored design whose id is already held is dropped,
    /// keeping the first occurrence.
    pub fn load(&mut self) {
        if self.state.is_ready() {
            debug!("Design history already loaded");
            return;
        }

        let stored: Vec<DesignRecord> = self.store.load(DESIGN_HISTORY_KEY).unwrap_or_default();
        let mut designs = std::mem::take(&mut self.designs);
        let mut seen: HashSet<String> = designs.iter().map(|d| d.id.clone()).collect();
        for record in stored {
            if seen.insert(record.id.clone()) {
                designs.push(record);
            } else {
                warn!("Dropping design with duplicate id {}", record.id);
            }
        }
        self.designs = designs;

        self.state = ManagerState::Ready;
        info!("Design history ready with {} design(s)", self.designs.len());
        self.persist();
    }

    pub fn state(&self) -> ManagerState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        !self.state.is_ready()
    }

    /// The current list, newest first.
    pub fn designs(&self) -> &[DesignRecord] {
        &self.designs
    }

    pub fn get(&self, id: &str) -> Option<&DesignRecord> {
        self.designs.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    /// Stamps `design` with a fresh id and the current time and puts it at
    /// the front of the list.
    pub fn add(&mut self, design: NewDesign) -> DesignRecord {
        let record = DesignRecord {
            id: self.next_id(),
            image_url: design.image_url,
            theme: design.theme,
            room: design.room,
            timestamp: self.clock.now_millis(),
            name: design.name,
        };
        info!("Adding design {} ({})", record.id, record.name);
        self.designs.insert(0, record.clone());
        self.persist();
        record
    }

    /// Removes the design with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.designs.len();
        self.designs.retain(|d| d.id != id);
        let removed = self.designs.len() != before;
        if removed {
            info!("Removed design {}", id);
        } else {
            debug!("No design {} to remove", id);
        }
        self.persist();
        removed
    }

    pub fn clear(&mut self) {
        info!("Clearing {} design(s)", self.designs.len());
        self.designs.clear();
        self.persist();
    }

    fn next_id(&self) -> String {
        loop {
            let id = format!("design_{}", Uuid::new_v4().simple());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) {
        if !self.state.is_ready() {
            debug!("Design history still loading, not persisting");
            return;
        }
        self.store.save(DESIGN_HISTORY_KEY, &self.designs);
    }
}
