//! Unit tests for the settings engine.
//!
//! Tests defaults, save/load roundtrip, individual value updates, and reset.

use std::fs;
use std::path::Path;

use pmvault::services::settings_engine::SettingsEngine;
use pmvault::types::settings::AppSettings;

fn temp_config_path() -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    // Leak the tempdir so it doesn't get cleaned up during the test
    std::mem::forget(dir);
    path
}

#[test]
fn test_default_settings_values() {
    let defaults = AppSettings::default();
    assert_eq!(defaults.auto_lock_timeout_minutes, 15);
    assert_eq!(defaults.clipboard_clear_timeout_seconds, 30);
    assert!(!defaults.show_passwords);
}

#[test]
fn test_load_defaults_when_no_file() {
    let path = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load().unwrap();
    assert_eq!(settings, AppSettings::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path.clone()));
    engine.load().unwrap();

    engine
        .set_value("auto_lock_timeout_minutes", serde_json::json!(5))
        .unwrap();

    let mut engine2 = SettingsEngine::new(Some(path));
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.auto_lock_timeout_minutes, 5);
}

#[test]
fn test_set_value_each_key() {
    let path = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();

    engine
        .set_value("auto_lock_timeout_minutes", serde_json::json!(60))
        .unwrap();
    assert_eq!(engine.get_settings().auto_lock_timeout_minutes, 60);

    engine
        .set_value("clipboard_clear_timeout_seconds", serde_json::json!(10))
        .unwrap();
    assert_eq!(engine.get_settings().clipboard_clear_timeout_seconds, 10);

    engine
        .set_value("show_passwords", serde_json::Value::Bool(true))
        .unwrap();
    assert!(engine.get_settings().show_passwords);
}

#[test]
fn test_set_value_invalid_key() {
    let path = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();

    let result = engine.set_value("nonexistent_key", serde_json::Value::Bool(true));
    assert!(result.is_err());
}

#[test]
fn test_set_value_empty_key() {
    let path = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();

    let result = engine.set_value("", serde_json::Value::Bool(true));
    assert!(result.is_err());
}

#[test]
fn test_set_value_invalid_value_type() {
    let path = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();

    let result = engine.set_value(
        "show_passwords",
        serde_json::Value::String("not_a_bool".to_string()),
    );
    assert!(result.is_err());
    // The in-memory value is unchanged.
    assert!(!engine.get_settings().show_passwords);
}

#[test]
fn test_reset_restores_defaults() {
    let path = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();

    engine
        .set_value("show_passwords", serde_json::Value::Bool(true))
        .unwrap();
    assert!(engine.get_settings().show_passwords);

    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), AppSettings::default());
}

#[test]
fn test_load_malformed_json() {
    let path = temp_config_path();
    if let Some(parent) = Path::new(&path).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "{ invalid json }").unwrap();

    let mut engine = SettingsEngine::new(Some(path));
    assert!(engine.load().is_err());
}

#[test]
fn test_get_config_path() {
    let path = "/tmp/test_settings.json".to_string();
    let engine = SettingsEngine::new(Some(path.clone()));
    assert_eq!(engine.get_config_path(), path);
}

#[test]
fn test_default_config_path_uses_platform() {
    let engine = SettingsEngine::new(None);
    let path = engine.get_config_path();
    assert!(path.contains("settings.json"));
    assert!(path.to_lowercase().contains("pmvault"));
}
