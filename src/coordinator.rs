//! Background coordinator for the eKill extension.
//!
//! Owns the badge protocol: on startup it loads persisted state, decides
//! whether a changelog notice is owed, and — when the user holds a grudge —
//! keeps the badge in sync with the active tab's kill count. All input
//! arrives as [`BrowserEvent`]s consumed one at a time; there is no other
//! entry point and no shared mutable state.

use std::sync::mpsc::Receiver;

use log::{debug, error};

use crate::host::{BadgeSink, BrowserEvent, TabMessenger, TabOpener};
use crate::services::settings_store::SettingsStore;
use crate::services::version_compare::is_newer_version;
use crate::types::badge::{BadgeState, BADGE_COLOR};
use crate::types::message::{ContentMessage, KillCountResolution, OutboundMessage, TabId};

/// Extension-relative URL of the changelog page opened on notice dismissal.
pub const CHANGELOG_URL: &str = "changelog.html";

/// Startup outcome, fixed for the coordinator's lifetime.
///
/// Whether the kill-counter is wired is decided exactly once, from the
/// settings snapshot taken at startup. Dismissing the notice later does not
/// retroactively install the wiring.
enum Wiring {
    /// Settings load failed. Fail-closed: no listeners, every event ignored.
    Inert,
    Active {
        /// True while a changelog notice is pending. Flips to false at most
        /// once, when the user clicks the icon.
        show_changes: bool,
        /// Kill-count badge updates are installed.
        kill_counter: bool,
        /// Sequence number of the most recent kill-count query.
        last_seq: u64,
    },
}

pub struct BackgroundCoordinator<B, M, T> {
    badge: B,
    messenger: M,
    tabs: T,
    wiring: Wiring,
}

impl<B: BadgeSink, M: TabMessenger, T: TabOpener> BackgroundCoordinator<B, M, T> {
    /// Runs the startup sequence and returns the wired coordinator.
    ///
    /// The badge background color is set before the settings load so it is
    /// in place regardless of the load outcome. A load failure logs and
    /// leaves the coordinator inert; there is no retry and no partial
    /// wiring on defaults.
    pub fn start(
        store: &dyn SettingsStore,
        mut badge: B,
        messenger: M,
        tabs: T,
        current_version: &str,
    ) -> Self {
        badge.set_background_color(BADGE_COLOR);

        let loaded = match store.load() {
            Ok(state) => state,
            Err(e) => {
                error!("settings load failed, leaving badge wiring uninstalled: {}", e);
                return Self {
                    badge,
                    messenger,
                    tabs,
                    wiring: Wiring::Inert,
                };
            }
        };

        let show_changes =
            is_newer_version(current_version, &loaded.version.shown_changes_for);
        if show_changes {
            badge.set_text(&BadgeState::ShowingNotice.text());
        }

        // Startup snapshot; never re-evaluated, even after the notice is
        // dismissed. The badge cannot show "New" and a count at once.
        let kill_counter = loaded.settings.holds_grudge && !show_changes;

        Self {
            badge,
            messenger,
            tabs,
            wiring: Wiring::Active {
                show_changes,
                kill_counter,
                last_seq: 0,
            },
        }
    }

    /// Dispatches one browser event. Single-threaded; callers must feed
    /// events in arrival order.
    pub fn handle_event(&mut self, event: BrowserEvent) {
        let (show_changes, kill_counter) = match &self.wiring {
            Wiring::Inert => return,
            Wiring::Active {
                show_changes,
                kill_counter,
                ..
            } => (*show_changes, *kill_counter),
        };

        match event {
            BrowserEvent::IconClicked { tab_id } => {
                if show_changes {
                    self.dismiss_notice();
                } else if let Err(e) = self.messenger.notify(tab_id, OutboundMessage::Toggle) {
                    error!("toggle for tab {} not delivered: {}", tab_id, e);
                }
            }
            BrowserEvent::TabActivated { tab_id } => {
                if kill_counter {
                    self.update_kill_counter(tab_id);
                }
            }
            BrowserEvent::ContentMessage { sender, raw } => {
                if kill_counter {
                    self.handle_content_message(sender, &raw);
                }
            }
            BrowserEvent::KillCountResolved(resolution) => {
                if kill_counter {
                    self.apply_resolution(resolution);
                }
            }
        }
    }

    /// Drains the event queue until the sending side closes.
    pub fn run(&mut self, events: Receiver<BrowserEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }

    /// One-shot: opens the changelog, clears the notice and the badge.
    fn dismiss_notice(&mut self) {
        self.tabs.open_tab(CHANGELOG_URL);
        if let Wiring::Active { show_changes, .. } = &mut self.wiring {
            *show_changes = false;
        }
        self.apply_badge(BadgeState::Empty);
    }

    fn handle_content_message(&mut self, sender: TabId, raw: &str) {
        match ContentMessage::from_wire(raw) {
            ContentMessage::KillCountUpdated => self.update_kill_counter(sender),
            // A fresh page has zero kills until the content script says otherwise.
            ContentMessage::PageLoading => self.apply_badge(BadgeState::Empty),
            ContentMessage::Other(msg) => {
                debug!("ignoring message {:?} from tab {}", msg, sender);
            }
        }
    }

    /// Issues a kill-count query for `tab_id` under a fresh sequence number.
    ///
    /// A send failure leaves the badge showing whatever it showed before.
    fn update_kill_counter(&mut self, tab_id: TabId) {
        let seq = match &mut self.wiring {
            Wiring::Active { last_seq, .. } => {
                *last_seq += 1;
                *last_seq
            }
            Wiring::Inert => return,
        };
        if let Err(e) = self.messenger.request_kill_count(tab_id, seq) {
            error!("kill-count query for tab {} not delivered: {}", tab_id, e);
        }
    }

    /// Applies a query answer, unless a newer query has been issued since.
    ///
    /// The staleness check is what keeps a slow answer for a previous tab
    /// from overwriting the count of the tab the user switched to.
    fn apply_resolution(&mut self, resolution: KillCountResolution) {
        let last_seq = match &self.wiring {
            Wiring::Active { last_seq, .. } => *last_seq,
            Wiring::Inert => return,
        };
        if resolution.seq != last_seq {
            debug!(
                "discarding stale kill-count answer (seq {}, newest {})",
                resolution.seq, last_seq
            );
            return;
        }
        match resolution.result {
            Ok(count) => self.apply_badge(BadgeState::from_count(count)),
            Err(e) => error!("kill-count query failed: {}", e),
        }
    }

    fn apply_badge(&mut self, state: BadgeState) {
        self.badge.set_text(&state.text());
    }

    /// True when startup failed and no events are acted on.
    pub fn is_inert(&self) -> bool {
        matches!(self.wiring, Wiring::Inert)
    }

    /// True while the changelog notice is still pending.
    pub fn notice_pending(&self) -> bool {
        matches!(
            self.wiring,
            Wiring::Active {
                show_changes: true,
                ..
            }
        )
    }

    /// True if kill-count badge updates were installed at startup.
    pub fn kill_counter_wired(&self) -> bool {
        matches!(
            self.wiring,
            Wiring::Active {
                kill_counter: true,
                ..
            }
        )
    }

    pub fn badge(&self) -> &B {
        &self.badge
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    pub fn tabs(&self) -> &T {
        &self.tabs
    }
}
