use crate::error::Result;
use crate::store::DEFAULT_STORAGE_KEY;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Explicit location of Arc's StorableSidebar.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<PathBuf>,

    /// Key the bookmark list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_path: None,
            storage_key: default_storage_key(),
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/arcmarks/config.yml)
    /// Falls back to default config if file doesn't exist or is broken
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {:?}: {}; using defaults",
                    config_path, e
                );
                Self::default()
            }
        }
    }
}
