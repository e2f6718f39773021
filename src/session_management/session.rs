use serde::{Deserialize, Serialize};

/// The logged-in identity, stored as `{ "email": ..., "name": ... }`.
///
/// Callers validate the fields before logging in; storage does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub email: String,
    pub name: String,
}

impl IdentityRecord {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}
