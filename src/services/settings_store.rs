// eKill settings store
// Loads the two persisted documents (last-shown version, user preferences)
// with defaults applied for whichever are missing. A load error is a
// terminal signal: the caller wires nothing and the extension behaves as
// freshly installed.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::types::errors::SettingsError;
use crate::types::settings::{StoredState, UserSettings, VersionRecord, SETTINGS_KEY, VERSION_KEY};

/// Read access to the persisted extension state.
pub trait SettingsStore {
    /// Loads both documents, substituting defaults for missing ones.
    fn load(&self) -> Result<StoredState, SettingsError>;
}

/// Settings store backed by a single JSON file holding both documents
/// keyed `ekillVersion` / `ekillSettings`.
///
/// An absent file is not an error; it yields pure defaults, the same as a
/// first run against empty browser storage. An unreadable or malformed
/// file is an error.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<StoredState, SettingsError> {
        if !self.path.exists() {
            return Ok(StoredState::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read store file: {}", e)))?;

        let root: Value = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse store file: {}", e))
        })?;

        Ok(StoredState {
            version: document(&root, VERSION_KEY)?,
            settings: document(&root, SETTINGS_KEY)?,
        })
    }
}

/// Extracts one document by key, defaulting if the key is absent.
fn document<T: Default + serde::de::DeserializeOwned>(
    root: &Value,
    key: &str,
) -> Result<T, SettingsError> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(doc) => serde_json::from_value(doc.clone()).map_err(|e| {
            SettingsError::SerializationError(format!("Malformed document '{}': {}", key, e))
        }),
    }
}

/// In-memory store for tests and the demo binary.
///
/// Can be primed with explicit documents or with a failure, so callers can
/// exercise both the success and the fail-closed startup path.
pub struct MemorySettingsStore {
    state: Result<StoredState, SettingsError>,
}

impl MemorySettingsStore {
    pub fn new(version: VersionRecord, settings: UserSettings) -> Self {
        Self {
            state: Ok(StoredState { version, settings }),
        }
    }

    /// A store whose every load fails, as when browser storage is unavailable.
    pub fn failing(error: SettingsError) -> Self {
        Self { state: Err(error) }
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self {
            state: Ok(StoredState::default()),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<StoredState, SettingsError> {
        self.state.clone()
    }
}
