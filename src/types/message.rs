//! Message protocol between the background core and per-tab content scripts.
//!
//! The wire format is the original extension's: bare strings carried by the
//! host runtime's messaging channel. Inbound strings that match no known
//! message are preserved as [`ContentMessage::Other`] and ignored by the
//! coordinator rather than rejected.

use crate::types::errors::MessagingError;

/// Host-runtime tab identifier.
pub type TabId = u32;

/// Messages the background core sends to a content script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundMessage {
    /// Toggle kill-mode in the receiving tab. Fire-and-forget; the content
    /// script owns what toggling means.
    Toggle,
    /// Ask the receiving tab for its current kill count. The answer comes
    /// back asynchronously as a `KillCountResolved` event.
    QueryKillCount,
}

impl OutboundMessage {
    pub fn wire_name(&self) -> &'static str {
        match self {
            OutboundMessage::Toggle => "toggle",
            OutboundMessage::QueryKillCount => "queryKillCount",
        }
    }
}

/// Messages a content script sends to the background core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    /// The kill count in the sender's tab changed.
    KillCountUpdated,
    /// The sender's page is loading fresh; any displayed count is stale.
    PageLoading,
    /// Anything else on the channel. Not an error, just not for us.
    Other(String),
}

impl ContentMessage {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "killCountUpdated" => ContentMessage::KillCountUpdated,
            "pageLoading" => ContentMessage::PageLoading,
            other => ContentMessage::Other(other.to_string()),
        }
    }
}

/// A kill-count query answer delivered back through the event queue.
///
/// `seq` is the sequence number the query was issued with; the coordinator
/// uses it to discard answers that arrive after a newer query went out.
#[derive(Debug, Clone)]
pub struct KillCountResolution {
    pub seq: u64,
    pub result: Result<Option<u64>, MessagingError>,
}
