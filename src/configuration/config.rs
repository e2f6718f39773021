use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;
use log::{debug, LevelFilter};
use serde::Deserialize;

use crate::error_handling::types::ConfigError;

/// Application configuration structure that defines all runtime parameters.
///
/// Values come either from the command line (the `clap` derive, with
/// `DESIGN_VAULT_DIR` as a fallback for the storage path) or from a TOML file
/// with the same keys.
///
/// # Examples
///
/// ```
/// use design_vault::configuration::Config;
///
/// let config: Config = toml::from_str("storage_path = \"/tmp/vault\"").unwrap();
/// assert_eq!(config.log_level, "info");
/// ```
///
/// # Fields Overview
///
/// - `storage_path`: directory holding the `user` and `designHistory` slots
/// - `log_level`: `env_logger` filter level
/// - `export_dir`: where downloaded images are written
#[derive(Args, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the persisted slots.
    ///
    /// # Command Line
    /// Use `--storage-path <PATH>` or set `DESIGN_VAULT_DIR`
    #[arg(long, env = "DESIGN_VAULT_DIR", default_value = ".")]
    #[serde(default = "default_dir")]
    pub storage_path: PathBuf,

    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[arg(long, default_value = "info")]
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory receiving exported images.
    #[arg(long, default_value = ".")]
    #[serde(default = "default_dir")]
    pub export_dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    String::from("info")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: default_dir(),
            log_level: default_log_level(),
            export_dir: default_dir(),
        }
    }
}

impl Config {
    /// Reads a TOML configuration file and validates it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&raw).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        debug!("Read configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level_filter()?;
        for dir in [&self.storage_path, &self.export_dir] {
            if dir.exists() && !dir.is_dir() {
                return Err(ConfigError::DirectoryDoesNotExist(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
