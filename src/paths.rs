//! Locations of the task file and config file
//!
//! ```text
//! <data_local_dir>/Todo/todo.csv     # task table
//! <config_dir>/Todo/config.toml      # optional settings
//! ```
//!
//! On Linux these are `~/.local/share/Todo/todo.csv` and
//! `~/.config/Todo/config.toml`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::config::Config;
use crate::error::{Error, Result};

/// Application subdirectory under the data and config roots
pub const APP_DIR: &str = "Todo";

/// File name of the task table
pub const DATA_FILE: &str = "todo.csv";

/// File name of the optional config
pub const CONFIG_FILE: &str = "config.toml";

/// Default task file path for the current user
pub fn default_data_file() -> Result<PathBuf> {
    let dirs = base_dirs()?;
    Ok(dirs.data_local_dir().join(APP_DIR).join(DATA_FILE))
}

/// Default config file path for the current user
pub fn default_config_file() -> Result<PathBuf> {
    let dirs = base_dirs()?;
    Ok(dirs.config_dir().join(APP_DIR).join(CONFIG_FILE))
}

/// Pick the task file: explicit path, then config, then the default location.
pub fn resolve_data_file(explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.storage.data_file {
        return Ok(path.clone());
    }
    default_data_file()
}

fn base_dirs() -> Result<BaseDirs> {
    BaseDirs::new().ok_or(Error::DataDirUnavailable)
}
