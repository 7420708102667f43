//! Application configuration management.
//!
//! The configuration names the data directory, the password scheme for new
//! accounts, optional overrides for the listing file locations, and the last
//! login used (to prefill the login prompt).
//!
//! Configuration is stored at `~/.config/homefit/config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::auth::PasswordScheme;
use crate::listings::DatasetKind;

/// Application name used for config/data directory paths
const APP_NAME: &str = "homefit";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Credential table file name
pub const USERS_FILE: &str = "users.csv";

/// Preference table file name
pub const PREFERENCES_FILE: &str = "preferences.csv";

/// Fallback data directory when the platform has none
const FALLBACK_DATA_DIR: &str = "data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub password_scheme: PasswordScheme,
    /// Relative paths are resolved against the data directory.
    pub apartments_file: Option<PathBuf>,
    pub commercial_file: Option<PathBuf>,
    pub houses_file: Option<PathBuf>,
    pub last_login: Option<String>,
}

impl Config {
    /// Load from `path`, or defaults if there is no file yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Configured directory, else the platform data dir, else `./data`.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|d| d.join(APP_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir().join(USERS_FILE)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join(PREFERENCES_FILE)
    }

    pub fn dataset_path(&self, kind: DatasetKind) -> PathBuf {
        let configured = match kind {
            DatasetKind::Apartments => &self.apartments_file,
            DatasetKind::Commercial => &self.commercial_file,
            DatasetKind::Houses => &self.houses_file,
        };
        match configured {
            // join() keeps absolute paths as-is
            Some(path) => self.data_dir().join(path),
            None => self.data_dir().join(kind.default_file_name()),
        }
    }
}
