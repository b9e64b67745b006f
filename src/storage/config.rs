//! User configuration
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/ahnen/` on Linux). Every field is optional; a missing file
//! means defaults.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// User-level settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Tree file used when `--tree` and `$AHNEN_TREE` are absent
    pub default_tree: Option<PathBuf>,

    /// Default generation cap for reports (unbounded when absent)
    pub max_generations: Option<u32>,
}

impl Config {
    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        let config_dir = match Self::config_dir() {
            Some(dir) => dir,
            None => return Ok(Self::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse config")
    }

    /// Returns the platform config directory for this tool
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "ahnen", "ahnen-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }
}
