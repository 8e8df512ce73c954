use serde::{Deserialize, Serialize};

/// Storage key for the [`VersionRecord`] document.
pub const VERSION_KEY: &str = "ekillVersion";
/// Storage key for the [`UserSettings`] document.
pub const SETTINGS_KEY: &str = "ekillSettings";

/// The last extension version for which the changelog notice was shown.
///
/// Mutated only when the user dismisses a pending notice by clicking the
/// toolbar icon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionRecord {
    #[serde(rename = "shownChangesFor")]
    pub shown_changes_for: String,
}

impl Default for VersionRecord {
    fn default() -> Self {
        Self {
            shown_changes_for: "0.0".to_string(),
        }
    }
}

/// User preferences consumed by the background core.
///
/// `holds_grudge` controls whether kill counts persist per tab and are
/// surfaced on the badge. Read once at startup; live changes are not
/// observed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSettings {
    #[serde(rename = "holdsGrudge", with = "string_bool")]
    pub holds_grudge: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            holds_grudge: false,
        }
    }
}

/// Both stored documents, with defaults applied for whichever were absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredState {
    pub version: VersionRecord,
    pub settings: UserSettings,
}

/// Serde adapter for booleans stored as the strings `"true"`/`"false"`.
///
/// Existing stored data encodes the flag as a string compared with
/// `=== "true"`, so only the exact string `"true"` (or a genuine JSON
/// `true`) reads as true; any other string reads as false. Writes keep
/// the string form so old and new data stay interchangeable.
mod string_bool {
    use serde::de::Deserializer;
    use serde::ser::Serializer;
    use serde::Deserialize;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BoolOrString {
            Bool(bool),
            Str(String),
        }

        match BoolOrString::deserialize(deserializer)? {
            BoolOrString::Bool(b) => Ok(b),
            BoolOrString::Str(s) => Ok(s == "true"),
        }
    }
}
