use serde::{Deserialize, Serialize};

/// Non-secret application settings, stored outside the encrypted vault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Minutes of inactivity before the UI locks the vault.
    pub auto_lock_timeout_minutes: u32,
    /// Seconds before a copied password is cleared from the clipboard.
    pub clipboard_clear_timeout_seconds: u32,
    /// Whether entry passwords are shown unmasked in lists.
    pub show_passwords: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_lock_timeout_minutes: 15,
            clipboard_clear_timeout_seconds: 30,
            show_passwords: false,
        }
    }
}
