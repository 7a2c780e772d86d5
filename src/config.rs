//! Configuration loading and management
//!
//! Handles parsing of the optional `config.toml` in the user's config
//! directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task file location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the task file path
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON without passing `--json`
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration if the file exists, or return defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(data_file) = &self.storage.data_file {
            if data_file.as_os_str().is_empty() {
                return Err(Error::InvalidConfig(
                    "storage.data_file cannot be empty".to_string(),
                ));
            }
            if data_file.file_name().is_none() {
                return Err(Error::InvalidConfig(format!(
                    "storage.data_file must name a file: {}",
                    data_file.display()
                )));
            }
        }
        Ok(())
    }
}
