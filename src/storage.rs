//! Storage subsystem
//!
//! This module provides the durable key-value slots that back the design
//! history and the logged-in identity, plus the JSON record store built on
//! top of them.
//!
//! Components:
//! - `storage_trait`: the Storage trait defining a uniform slot API.
//! - `types`: the logical slot names shared by the managers.
//! - `file_storage`: filesystem-backed implementation, one file per slot.
//! - `memory_storage`: in-process implementation for tests and throwaway sessions.
//! - `record_store`: JSON load/save with fail-open corruption recovery.

pub mod file_storage;
pub mod memory_storage;
pub mod record_store;
pub mod storage_trait;
pub mod types;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use record_store::RecordStore;
pub use storage_trait::Storage;
