use std::collections::HashMap;
use std::sync::Mutex;

use log::{debug, error};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;
use crate::storage::types::is_valid_key;

/// In-process slots. Nothing survives the process; handy for tests and for
/// running the managers without touching disk.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw text, bypassing any serialization.
    pub fn with_item(self, key: &str, value: &str) -> Self {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        self
    }

    fn check_key(key: &str) -> Result<(), StorageError> {
        if is_valid_key(key) {
            Ok(())
        } else {
            Err(StorageError::InvalidKey(key.to_string()))
        }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::check_key(key)?;
        let slots = self.slots.lock().map_err(|e| {
            error!("Memory storage lock poisoned: {}", e);
            StorageError::ConnectionFailed
        })?;
        Ok(slots.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::check_key(key)?;
        let mut slots = self.slots.lock().map_err(|e| {
            error!("Memory storage lock poisoned: {}", e);
            StorageError::ConnectionFailed
        })?;
        slots.insert(key.to_string(), value.to_string());
        debug!("Stored {} byte(s) under {}", value.len(), key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::check_key(key)?;
        let mut slots = self.slots.lock().map_err(|e| {
            error!("Memory storage lock poisoned: {}", e);
            StorageError::ConnectionFailed
        })?;
        slots.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let slots = self.slots.lock().map_err(|e| {
            error!("Memory storage lock poisoned: {}", e);
            StorageError::ConnectionFailed
        })?;
        let mut keys: Vec<String> = slots.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
