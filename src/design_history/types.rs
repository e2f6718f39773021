use serde::{Deserialize, Serialize};

/// One saved design, as stored in the `designHistory` slot.
///
/// `id` and `timestamp` are assigned by `DesignHistoryManager::add` and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
    pub id: String,
    pub image_url: String,
    pub theme: String,
    pub room: String,
    pub timestamp: i64,
    pub name: String,
}

/// Caller-supplied part of a design; the manager fills in id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDesign {
    pub image_url: String,
    pub theme: String,
    pub room: String,
    pub name: String,
}

impl NewDesign {
    pub fn new(
        theme: impl Into<String>,
        room: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            theme: theme.into(),
            room: room.into(),
            name: name.into(),
        }
    }
}
