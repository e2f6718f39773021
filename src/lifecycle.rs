//! Lifecycle shared by the managers.

/// Where a manager stands with respect to its backing slot.
///
/// Variants:
/// - `Loading`: constructed, the one-shot read has not happened yet. Mutations
///   are applied in memory but not written back.
/// - `Ready`: the slot has been read; every mutation is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    Loading,
    Ready,
}

impl ManagerState {
    pub fn is_ready(self) -> bool {
        self == ManagerState::Ready
    }
}
