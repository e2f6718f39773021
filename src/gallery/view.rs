use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::design_history::history_manager::DesignHistoryManager;
use crate::design_history::types::DesignRecord;
use crate::error_handling::types::ExportError;
use crate::gallery::export::{export_filename, ImageExporter};

/// `"Nov 14, 2023, 10:13 PM"`, in UTC.
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => millis.to_string(),
    }
}

/// A single open gallery over a history manager.
///
/// Reads are snapshots of the manager's list; every change is routed back
/// through the manager.
pub struct GalleryView<'a> {
    history: &'a mut DesignHistoryManager,
    selected: Option<String>,
}

impl<'a> GalleryView<'a> {
    pub fn new(history: &'a mut DesignHistoryManager) -> Self {
        Self {
            history,
            selected: None,
        }
    }

    pub fn entries(&self) -> &[DesignRecord] {
        self.history.designs()
    }

    pub fn summary(&self) -> String {
        let count = self.history.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("{} design{} saved", count, plural)
    }

    /// One line per design for plain-text listings.
    pub fn describe(record: &DesignRecord) -> String {
        format!(
            "{}  {}  [{} / {}]  {}",
            record.id,
            record.name,
            record.theme,
            record.room,
            format_timestamp(record.timestamp)
        )
    }

    /// Opens the detail view for `id`. Unknown ids leave the selection alone.
    pub fn select(&mut self, id: &str) -> bool {
        if self.history.get(id).is_none() {
            debug!("Cannot select unknown design {}", id);
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    pub fn selected(&self) -> Option<&DesignRecord> {
        self.selected.as_deref().and_then(|id| self.history.get(id))
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.history.remove(id)
    }

    /// Clears the history only when the user confirmed.
    pub fn clear_all(&mut self, confirmed: bool) -> bool {
        if !confirmed || self.history.is_empty() {
            return false;
        }
        self.selected = None;
        self.history.clear();
        true
    }

    /// Hands the design's image to `exporter` under a timestamped filename.
    pub fn download(
        &self,
        id: &str,
        exporter: &dyn ImageExporter,
        now_millis: i64,
    ) -> Result<PathBuf, ExportError> {
        let record = self
            .history
            .get(id)
            .ok_or_else(|| ExportError::UnknownDesign(id.to_string()))?;
        let filename = export_filename(&record.name, now_millis);
        let path = exporter.export(&record.image_url, &filename)?;
        info!("Exported design {} to {}", id, path.display());
        Ok(path)
    }
}
