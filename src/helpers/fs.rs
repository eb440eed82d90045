//! File System Utilities
//!
//! Platform directories for settings and log files.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "blockcatalog", "block-catalog").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/block-catalog/` or `$XDG_CONFIG_HOME/block-catalog/`
/// - **macOS**: `~/Library/Application Support/com.blockcatalog.block-catalog/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\blockcatalog\block-catalog\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory, where rolling log files live
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/block-catalog/`
/// - **macOS**: `~/Library/Application Support/com.blockcatalog.block-catalog/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\blockcatalog\block-catalog\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }
    Ok(data_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
