//! Storage Trait
//!
//! This module defines the `Storage` trait, the interface for durable
//! key-value slot backends.
//!
//! Implementors of this trait are responsible for:
//! - Returning the raw text stored under a key, if any
//! - Overwriting a slot with new text in full
//! - Removing a slot
//!
//! All methods return a `Result` to handle potential storage errors. Callers
//! outside the storage module go through `RecordStore`, which absorbs them.

use crate::error_handling::types::StorageError;

/// The `Storage` trait defines the interface for key-value slot backends.
pub trait Storage: Send + Sync {
    /// Reads the raw text stored under `key`.
    ///
    /// A missing slot is `Ok(None)`, not an error.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any prior content.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes the slot. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Lists the keys currently present, sorted.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
