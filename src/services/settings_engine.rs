// PMVault settings engine
// Manages non-secret application settings: loading, saving, updating
// individual values, and resetting to defaults. Settings are stored as a
// JSON file at the platform-specific config path, outside the encrypted
// vault.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::AppSettings;

/// Settings engine that persists [`AppSettings`] as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: AppSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with
    /// `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: AppSettings::default(),
        }
    }

    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    pub fn load(&mut self) -> Result<AppSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = AppSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        self.settings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file, creating parent
    /// directories if needed.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }

    /// Returns a reference to the current in-memory settings.
    pub fn get_settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Updates an individual setting by key and saves to disk.
    ///
    /// Known keys: `auto_lock_timeout_minutes`, `clipboard_clear_timeout_seconds`,
    /// `show_passwords`.
    pub fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let invalid_value = |e: serde_json::Error| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        };

        match key {
            "auto_lock_timeout_minutes" => {
                self.settings.auto_lock_timeout_minutes =
                    serde_json::from_value(value).map_err(invalid_value)?;
            }
            "clipboard_clear_timeout_seconds" => {
                self.settings.clipboard_clear_timeout_seconds =
                    serde_json::from_value(value).map_err(invalid_value)?;
            }
            "show_passwords" => {
                self.settings.show_passwords =
                    serde_json::from_value(value).map_err(invalid_value)?;
            }
            "" => return Err(SettingsError::InvalidKey("Key cannot be empty".to_string())),
            other => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    other
                )))
            }
        }

        self.save()
    }

    /// Resets all settings to factory defaults and saves to disk.
    pub fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = AppSettings::default();
        self.save()
    }

    /// Returns the path to the config file.
    pub fn get_config_path(&self) -> &str {
        &self.config_path
    }
}

impl Default for SettingsEngine {
    fn default() -> Self {
        Self::new(None)
    }
}
