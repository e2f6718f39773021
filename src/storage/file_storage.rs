use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;
use crate::storage::types::is_valid_key;

const SLOT_EXTENSION: &str = "json";

/// Filesystem-backed slots: each key is stored as `<base_path>/<key>.json`.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, StorageError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| {
            error!("Failed to create storage dir {}: {}", base_path.display(), e);
            StorageError::WriteFailed
        })?;
        info!("FileStorage initialized at {}", base_path.display());
        Ok(Self { base_path })
    }

    /// Construct FileStorage using env var DESIGN_VAULT_DIR if set, otherwise current directory.
    pub fn new_default() -> Result<Self, StorageError> {
        if let Ok(dir) = std::env::var("DESIGN_VAULT_DIR") {
            info!("Using FileStorage from DESIGN_VAULT_DIR: {}", dir);
            return Self::new(PathBuf::from(dir));
        }
        let cwd = std::env::current_dir().map_err(|e| {
            error!("Failed to get current dir: {}", e);
            StorageError::ReadFailed
        })?;
        info!("Using FileStorage at current directory: {}", cwd.display());
        Self::new(cwd)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!(".{}.{}.tmp", key, SLOT_EXTENSION))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        let mut content = String::new();
        match File::open(&path) {
            Ok(mut f) => {
                f.read_to_string(&mut content).map_err(|e| {
                    error!("Failed to read slot file {}: {}", path.display(), e);
                    StorageError::ReadFailed
                })?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Slot {} not present at {}", key, path.display());
                return Ok(None);
            }
            Err(e) => {
                error!("Failed to open slot file {}: {}", path.display(), e);
                return Err(StorageError::ReadFailed);
            }
        }
        debug!("Read {} byte(s) from {}", content.len(), path.display());
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let tmp = self.temp_path(key);
        // write-then-rename so readers never see a partial slot
        let mut f = File::create(&tmp).map_err(|e| {
            error!("Failed to create temp file {}: {}", tmp.display(), e);
            StorageError::WriteFailed
        })?;
        f.write_all(value.as_bytes()).map_err(|e| {
            error!("Failed to write temp file {}: {}", tmp.display(), e);
            StorageError::WriteFailed
        })?;
        f.sync_all().map_err(|e| {
            error!("Failed to sync temp file {}: {}", tmp.display(), e);
            StorageError::WriteFailed
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            error!("Failed to move {} into {}: {}", tmp.display(), path.display(), e);
            let _ = fs::remove_file(&tmp);
            StorageError::WriteFailed
        })?;
        debug!("Wrote {} byte(s) to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed slot {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Failed to remove slot {}: {}", path.display(), e);
                Err(StorageError::WriteFailed)
            }
        }
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.base_path).map_err(|e| {
            error!("Failed to read storage dir {}: {}", self.base_path.display(), e);
            StorageError::ReadFailed
        })? {
            let entry = entry.map_err(|e| {
                error!("Dir entry error: {}", e);
                StorageError::ReadFailed
            })?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some(SLOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_valid_key(stem) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
