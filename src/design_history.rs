//! Design history
//!
//! The ordered, persisted list of generated designs shown in the gallery.
//! Newest designs come first.

/// Wall-clock source used to stamp new designs.
pub mod clock;
/// Manager owning the in-memory list and mirroring it to storage.
pub mod history_manager;
/// Record types stored in the history slot.
pub mod types;

pub use clock::{Clock, SystemClock};
pub use history_manager::DesignHistoryManager;
pub use types::{DesignRecord, NewDesign};
