/// Slot holding the logged-in identity as a JSON object.
pub const USER_KEY: &str = "user";

/// Slot holding the design history as a JSON array, newest first.
pub const DESIGN_HISTORY_KEY: &str = "designHistory";

/// Returns true when `key` can be used as a slot name.
///
/// Slot names double as file stems in `FileStorage`, so they are limited to
/// ASCII alphanumerics, `_` and `-`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
