use std::fmt;

// === SettingsError ===

/// Errors related to loading persisted extension state.
#[derive(Debug, Clone)]
pub enum SettingsError {
    /// An I/O error occurred while reading the stored documents.
    IoError(String),
    /// Failed to deserialize a stored document.
    SerializationError(String),
    /// The storage backend reported a failure of its own.
    BackendError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::BackendError(msg) => write!(f, "Settings backend error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

// === MessagingError ===

/// Errors related to per-tab messaging with the content script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagingError {
    /// No content script is listening in the target tab.
    NoReceiver(u32),
    /// The message channel to the tab failed mid-flight.
    ChannelClosed(String),
}

impl fmt::Display for MessagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessagingError::NoReceiver(tab_id) => {
                write!(f, "No receiver in tab {}", tab_id)
            }
            MessagingError::ChannelClosed(msg) => write!(f, "Message channel closed: {}", msg),
        }
    }
}

impl std::error::Error for MessagingError {}
