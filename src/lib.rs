//! Local persistence for the AI interior designer: the saved design history,
//! the logged-in identity, and the gallery helpers that sit on top of them.

pub mod configuration;
pub mod controller;
pub mod design_history;
pub mod error_handling;
pub mod gallery;
pub mod lifecycle;
pub mod session_management;
pub mod storage;
pub mod validation;

pub use design_history::{DesignHistoryManager, DesignRecord, NewDesign};
pub use lifecycle::ManagerState;
pub use session_management::{IdentityRecord, SessionManager};
pub use storage::{FileStorage, MemoryStorage, RecordStore, Storage};
