//! Login form checks.
//!
//! Pure functions; the storage layer never calls them.

use std::sync::OnceLock;

use regex::Regex;

use crate::error_handling::types::ValidationError;

pub const DEMO_EMAIL: &str = "demo@interiordesign.com";
pub const DEMO_NAME: &str = "John Designer";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Loose email shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Checks the login form in the order the user sees the messages: email
/// presence, name presence, then email shape.
pub fn validate_login(email: &str, name: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
