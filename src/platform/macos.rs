// PMVault platform paths for macOS
// Config: ~/Library/Application Support/PMVault
// Data:   ~/Library/Application Support/PMVault

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for PMVault on macOS.
/// `~/Library/Application Support/PMVault`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("PMVault")
}

/// Returns the data directory for PMVault on macOS.
/// `~/Library/Application Support/PMVault`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("PMVault")
}
