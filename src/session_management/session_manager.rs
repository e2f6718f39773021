use log::{debug, info};

use crate::error_handling::types::AccessError;
use crate::lifecycle::ManagerState;
use crate::session_management::session::IdentityRecord;
use crate::storage::record_store::RecordStore;
use crate::storage::types::USER_KEY;

/// The structure related to session management
///
/// Holds at most one logged-in identity and keeps the `user` slot in sync
/// with it.
///
/// # Fields Overview
///
/// - `user`: the identity currently held, if any
/// - `store`: backing record store
/// - `state`: `Loading` until the slot has been read once, then `Ready`
/// - `changed_while_loading`: a login or logout arrived before `load`, so the
///   in-memory identity wins over whatever is stored
pub struct SessionManager {
    user: Option<IdentityRecord>,
    store: RecordStore,
    state: ManagerState,
    changed_while_loading: bool,
}

impl SessionManager {
    pub fn new(store: RecordStore) -> Self {
        Self {
            user: None,
            store,
            state: ManagerState::Loading,
            changed_while_loading: false,
        }
    }

    pub fn open(store: RecordStore) -> Self {
        let mut manager = Self::new(store);
        manager.load();
        manager
    }

    pub fn load(&mut self) {
        if self.state.is_ready() {
            debug!("Session already loaded");
            return;
        }
        self.state = ManagerState::Ready;
        if self.changed_while_loading {
            info!("Session changed while loading, keeping in-memory identity");
            self.persist();
        } else {
            self.user = self.store.load(USER_KEY);
        }
        match &self.user {
            Some(user) => info!("Session ready for {}", user.email),
            None => info!("Session ready, nobody logged in"),
        }
    }

    pub fn state(&self) -> ManagerState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        !self.state.is_ready()
    }

    pub fn current_user(&self) -> Option<&IdentityRecord> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Replaces the held identity wholesale and persists it.
    pub fn login(&mut self, email: &str, name: &str) -> &IdentityRecord {
        info!("Logging in {}", email);
        let user = self.user.insert(IdentityRecord::new(email, name));
        if self.state.is_ready() {
            self.store.save(USER_KEY, user);
        } else {
            self.changed_while_loading = true;
        }
        user
    }

    /// Drops the held identity and removes the `user` slot.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Logging out {}", user.email);
        }
        if self.state.is_ready() {
            self.store.remove(USER_KEY);
        } else {
            self.changed_while_loading = true;
        }
    }

    /// Gate for pages that need a logged-in user.
    pub fn require_authenticated(&self) -> Result<&IdentityRecord, AccessError> {
        if self.is_loading() {
            return Err(AccessError::StillLoading);
        }
        self.user.as_ref().ok_or(AccessError::NotAuthenticated)
    }

    fn persist(&self) {
        match &self.user {
            Some(user) => self.store.save(USER_KEY, user),
            None => self.store.remove(USER_KEY),
        }
    }
}
