// PMVault platform paths for Windows
// Config: %APPDATA%/PMVault
// Data:   %APPDATA%/PMVault

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for PMVault on Windows.
/// `%APPDATA%/PMVault`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("PMVault")
}

/// Returns the data directory for PMVault on Windows.
/// `%APPDATA%/PMVault`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("PMVault")
}
