// PMVault platform paths for Linux
// Config: ~/.config/pmvault
// Data:   ~/.local/share/pmvault

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for PMVault on Linux.
/// Uses `$XDG_CONFIG_HOME/pmvault` if set, otherwise `~/.config/pmvault`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("pmvault")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("pmvault")
    }
}

/// Returns the data directory for PMVault on Linux.
/// Uses `$XDG_DATA_HOME/pmvault` if set, otherwise `~/.local/share/pmvault`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("pmvault")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("pmvault")
    }
}
