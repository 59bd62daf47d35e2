//! Configuration file and platform directories.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::CopyFormat;
use crate::toast::DEFAULT_TOAST_DURATION;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "swatchbook", "swatchbook")
}

/// Get the application configuration directory
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the application data directory
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the log directory
pub fn log_dir() -> Option<PathBuf> {
    data_dir().map(|d| d.join("logs"))
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

pub fn default_store_path() -> PathBuf {
    data_dir()
        .map(|d| d.join("storage.json"))
        .unwrap_or_else(|| PathBuf::from(".swatchbook-storage.json"))
}

/// Settings read from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog JSON file.
    pub catalog_path: Option<PathBuf>,
    /// Key-value store that holds the favorites.
    pub store_path: Option<PathBuf>,
    /// Copy format selected at startup.
    pub default_copy_format: CopyFormat,
    /// Log file used while the TUI is running.
    pub log_file: Option<PathBuf>,
    /// How long notifications stay on screen.
    pub toast_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            store_path: None,
            default_copy_format: CopyFormat::Hex,
            log_file: None,
            toast_seconds: DEFAULT_TOAST_DURATION.as_secs(),
        }
    }
}

impl AppConfig {
    /// Parse the config at `path`. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds.max(1))
    }
}
