// eKill host abstraction
// The browser runtime seen through three narrow seams: the badge sink, the
// per-tab message channel, and tab creation. Everything the runtime does to
// us arrives as a `BrowserEvent`; everything we do to it goes through these
// traits. The real extension binds them to the WebExtension API; tests and
// the demo bind them to recording doubles.

use crate::types::errors::MessagingError;
use crate::types::message::{KillCountResolution, OutboundMessage, TabId};

/// The toolbar-icon badge. Write-only; there is no read-back.
pub trait BadgeSink {
    fn set_background_color(&mut self, color: &str);
    /// Empty string clears the badge.
    fn set_text(&mut self, text: &str);
}

/// Per-tab messaging toward content scripts.
///
/// Both methods return as soon as the message is handed to the channel. A
/// kill-count answer does not come back here; the host delivers it later as
/// [`BrowserEvent::KillCountResolved`] carrying the same `seq`.
pub trait TabMessenger {
    /// Fire-and-forget notification.
    fn notify(&mut self, tab: TabId, message: OutboundMessage) -> Result<(), MessagingError>;

    /// Issues a kill-count query tagged with a correlation sequence number.
    fn request_kill_count(&mut self, tab: TabId, seq: u64) -> Result<(), MessagingError>;
}

/// Opens a browser tab on a URL. Used only for the changelog page.
pub trait TabOpener {
    fn open_tab(&mut self, url: &str);
}

/// One happening in the browser, delivered to the coordinator in arrival
/// order by a single consumer. This is the whole input surface of the core.
#[derive(Debug, Clone)]
pub enum BrowserEvent {
    /// The user clicked the toolbar icon while `tab_id` was active.
    IconClicked { tab_id: TabId },
    /// The active tab changed.
    TabActivated { tab_id: TabId },
    /// A content script sent us a message.
    ContentMessage { sender: TabId, raw: String },
    /// A previously issued kill-count query resolved (or failed).
    KillCountResolved(KillCountResolution),
}
