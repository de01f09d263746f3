pub mod config;
pub mod find_port;
pub mod webui;

use std::path::PathBuf;

use anyhow::Result;
use portlaunch_core::ConfigStore;

/// Open the config store at `path`, or at the default location.
pub fn store(path: Option<PathBuf>) -> Result<ConfigStore> {
    Ok(match path {
        Some(path) => ConfigStore::with_path(path),
        None => ConfigStore::new()?,
    })
}
