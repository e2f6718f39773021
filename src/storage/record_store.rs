//! JSON record store over a `Storage` backend.
//!
//! `load` fails open: a slot that cannot be decoded is deleted and reported
//! as absent. `save` and `remove` log backend failures and carry on, so the
//! managers above never see a storage error.

use std::sync::Arc;

use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::storage_trait::Storage;

#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn Storage>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn Storage>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn Storage> {
        &self.backend
    }

    /// Reads and decodes the value stored under `key`.
    ///
    /// Returns `None` when the slot is missing, unreadable, or corrupt. A
    /// corrupt slot (invalid JSON, or JSON of the wrong shape for `T`) is
    /// removed before returning.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                error!("Failed to read slot {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                debug!("Loaded slot {} ({} byte(s))", key, raw.len());
                Some(value)
            }
            Err(e) => {
                warn!("Discarding corrupted slot {}: {}", key, e);
                self.remove(key);
                None
            }
        }
    }

    /// Serializes `value` and overwrites the slot under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to serialize slot {}: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.backend.set_item(key, &raw) {
            error!("Failed to persist slot {}, keeping in-memory state only: {}", key, e);
        }
    }

    /// Deletes the slot under `key`.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            error!("Failed to remove slot {}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::types::StorageError;
    use crate::storage::file_storage::FileStorage;
    use crate::storage::memory_storage::MemoryStorage;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        label: String,
        count: u32,
    }

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::ReadFailed)
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed)
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed)
        }
        fn keys(&self) -> Result<Vec<String>, StorageError> {
            Err(StorageError::ReadFailed)
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { label: "first".into(), count: 1 },
            Entry { label: "second".into(), count: 2 },
        ]
    }

    #[test]
    fn test_save_then_load_returns_same_value() {
        let store = RecordStore::new(Arc::new(MemoryStorage::new()));
        store.save("designHistory", &entries());
        let loaded: Option<Vec<Entry>> = store.load("designHistory");
        assert_eq!(loaded, Some(entries()));
    }

    #[test]
    fn test_roundtrip_through_files_survives_new_instance() {
        let dir = TempDir::new().unwrap();
        let first = RecordStore::new(Arc::new(FileStorage::new(dir.path()).unwrap()));
        first.save("designHistory", &entries());

        let second = RecordStore::new(Arc::new(FileStorage::new(dir.path()).unwrap()));
        let loaded: Option<Vec<Entry>> = second.load("designHistory");
        assert_eq!(loaded, Some(entries()));
    }

    #[test]
    fn test_missing_slot_is_none() {
        let store = RecordStore::new(Arc::new(MemoryStorage::new()));
        let loaded: Option<Vec<Entry>> = store.load("designHistory");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_invalid_json_is_discarded() {
        let backend = Arc::new(MemoryStorage::new().with_item("designHistory", "{not json"));
        let store = RecordStore::new(backend.clone());

        let loaded: Option<Vec<Entry>> = store.load("designHistory");
        assert!(loaded.is_none());
        assert!(backend.get_item("designHistory").unwrap().is_none());

        let again: Option<Vec<Entry>> = store.load("designHistory");
        assert!(again.is_none());
    }

    #[test]
    fn test_wrong_shape_is_discarded() {
        let backend = Arc::new(MemoryStorage::new().with_item("user", "[1, 2, 3]"));
        let store = RecordStore::new(backend.clone());
        let loaded: Option<Entry> = store.load("user");
        assert!(loaded.is_none());
        assert!(backend.get_item("user").unwrap().is_none());
    }

    #[test]
    fn test_backend_failures_are_absorbed() {
        let store = RecordStore::new(Arc::new(BrokenStorage));
        store.save("designHistory", &entries());
        store.remove("designHistory");
        let loaded: Option<Vec<Entry>> = store.load("designHistory");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_remove_clears_slot() {
        let store = RecordStore::new(Arc::new(MemoryStorage::new()));
        store.save("user", &Entry { label: "x".into(), count: 0 });
        store.remove("user");
        let loaded: Option<Entry> = store.load("user");
        assert!(loaded.is_none());
    }
}
