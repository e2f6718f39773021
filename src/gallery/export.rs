//! Saving a design's image to disk.
//!
//! Image references come in three shapes: `data:` URIs, local paths (with or
//! without `file://`), and remote `http(s)://` URLs. Remote images are not
//! fetched.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info};

use crate::error_handling::types::ExportError;

/// Offers an image to the user as a file.
pub trait ImageExporter {
    /// Saves `image_ref` under `filename` and returns where it landed.
    fn export(&self, image_ref: &str, filename: &str) -> Result<PathBuf, ExportError>;
}

/// `"<name>-<millis>.png"`, with path separators in `name` replaced.
pub fn export_filename(name: &str, now_millis: i64) -> String {
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    format!("{}-{}.png", safe, now_millis)
}

/// Writes exported images into a download directory.
pub struct FileExporter {
    dest_dir: PathBuf,
}

impl FileExporter {
    pub fn new<P: AsRef<Path>>(dest_dir: P) -> Self {
        Self {
            dest_dir: dest_dir.as_ref().to_path_buf(),
        }
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }
}

impl ImageExporter for FileExporter {
    fn export(&self, image_ref: &str, filename: &str) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dest_dir)?;
        let target = self.dest_dir.join(filename);

        match ImageSource::parse(image_ref)? {
            ImageSource::Inline(bytes) => {
                debug!("Writing {} inline byte(s) to {}", bytes.len(), target.display());
                fs::write(&target, bytes)?;
            }
            ImageSource::Local(path) => {
                debug!("Copying {} to {}", path.display(), target.display());
                fs::copy(&path, &target)?;
            }
        }
        info!("Saved image to {}", target.display());
        Ok(target)
    }
}

enum ImageSource {
    Inline(Vec<u8>),
    Local(PathBuf),
}

impl ImageSource {
    fn parse(image_ref: &str) -> Result<Self, ExportError> {
        if let Some(rest) = image_ref.strip_prefix("data:") {
            return decode_data_uri(rest).map(ImageSource::Inline);
        }
        if image_ref.starts_with("http://") || image_ref.starts_with("https://") {
            return Err(ExportError::UnsupportedSource(image_ref.to_string()));
        }
        let path = PathBuf::from(image_ref.strip_prefix("file://").unwrap_or(image_ref));
        if path.is_file() {
            Ok(ImageSource::Local(path))
        } else {
            Err(ExportError::UnsupportedSource(image_ref.to_string()))
        }
    }
}

// `rest` is everything after "data:", i.e. "[<mediatype>][;base64],<data>"
fn decode_data_uri(rest: &str) -> Result<Vec<u8>, ExportError> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExportError::MalformedDataUri("missing ','".to_string()))?;
    if meta.ends_with(";base64") {
        STANDARD
            .decode(payload.trim())
            .map_err(|e| ExportError::MalformedDataUri(e.to_string()))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}
