//! Session management core module.
//!
//! This module provides the logged-in identity and the manager that keeps it
//! in the `user` slot. "Authenticated" is never stored; it is derived from
//! whether an identity is currently held.

/// Submodule for the identity record.
pub mod session;
/// Submodule for session manager implementation.
pub mod session_manager;

pub use session::IdentityRecord;
pub use session_manager::SessionManager;
