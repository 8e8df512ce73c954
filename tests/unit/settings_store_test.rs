//! Unit tests for the settings store: defaults for missing documents,
//! string-encoded booleans in stored data, and load-failure signaling.

use std::fs;

use tempfile::TempDir;

use ekill::services::settings_store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
use ekill::types::errors::SettingsError;
use ekill::types::settings::{StoredState, UserSettings, VersionRecord};

#[test]
fn test_store_keeps_constructed_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let store = FileSettingsStore::new(&path);
    assert_eq!(store.path(), path);
}

#[test]
fn test_absent_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(dir.path().join("missing.json"));

    let state = store.load().unwrap();
    assert_eq!(state, StoredState::default());
    assert_eq!(state.version.shown_changes_for, "0.0");
    assert!(!state.settings.holds_grudge);
}

#[test]
fn test_loads_both_documents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(
        &path,
        r#"{
            "ekillVersion": { "shownChangesFor": "1.2.0" },
            "ekillSettings": { "holdsGrudge": "true" }
        }"#,
    )
    .unwrap();

    let state = FileSettingsStore::new(&path).load().unwrap();
    assert_eq!(state.version.shown_changes_for, "1.2.0");
    assert!(state.settings.holds_grudge);
}

#[test]
fn test_missing_document_gets_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{ "ekillSettings": { "holdsGrudge": "true" } }"#).unwrap();

    let state = FileSettingsStore::new(&path).load().unwrap();
    assert_eq!(state.version.shown_changes_for, "0.0");
    assert!(state.settings.holds_grudge);
}

#[test]
fn test_string_false_and_plain_bool_both_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    fs::write(&path, r#"{ "ekillSettings": { "holdsGrudge": "false" } }"#).unwrap();
    assert!(!FileSettingsStore::new(&path).load().unwrap().settings.holds_grudge);

    fs::write(&path, r#"{ "ekillSettings": { "holdsGrudge": true } }"#).unwrap();
    assert!(FileSettingsStore::new(&path).load().unwrap().settings.holds_grudge);
}

#[test]
fn test_only_exact_true_string_enables_grudge() {
    // Stored data was compared with === "true"; "True" or garbage is false.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{ "ekillSettings": { "holdsGrudge": "True" } }"#).unwrap();

    let state = FileSettingsStore::new(&path).load().unwrap();
    assert!(!state.settings.holds_grudge);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "{ not json").unwrap();

    let err = FileSettingsStore::new(&path).load().unwrap_err();
    assert!(matches!(err, SettingsError::SerializationError(_)));
}

#[test]
fn test_malformed_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{ "ekillVersion": { "shownChangesFor": 42 } }"#).unwrap();

    let err = FileSettingsStore::new(&path).load().unwrap_err();
    assert!(matches!(err, SettingsError::SerializationError(_)));
}

#[test]
fn test_settings_roundtrip_keeps_string_encoding() {
    let settings = UserSettings { holds_grudge: true };
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(json, r#"{"holdsGrudge":"true"}"#);

    let back: UserSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn test_memory_store_primed_state() {
    let store = MemorySettingsStore::new(
        VersionRecord {
            shown_changes_for: "1.0".to_string(),
        },
        UserSettings { holds_grudge: true },
    );
    let state = store.load().unwrap();
    assert_eq!(state.version.shown_changes_for, "1.0");
    assert!(state.settings.holds_grudge);
}

#[test]
fn test_memory_store_failure_priming() {
    let store = MemorySettingsStore::failing(SettingsError::BackendError("sync down".to_string()));
    assert!(store.load().is_err());
}
