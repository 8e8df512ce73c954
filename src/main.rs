//! eKill background core — demo mode.
//!
//! Drives the coordinator against in-memory host doubles so the badge
//! protocol can be watched on the console without a browser.

use std::sync::mpsc;

use ekill::coordinator::BackgroundCoordinator;
use ekill::host::{BadgeSink, BrowserEvent, TabMessenger, TabOpener};
use ekill::services::settings_store::MemorySettingsStore;
use ekill::services::version_compare::is_newer_version;
use ekill::types::errors::MessagingError;
use ekill::types::message::{KillCountResolution, OutboundMessage, TabId};
use ekill::types::settings::{UserSettings, VersionRecord};

struct ConsoleBadge;

impl BadgeSink for ConsoleBadge {
    fn set_background_color(&mut self, color: &str) {
        println!("  [badge] background = {}", color);
    }

    fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            println!("  [badge] cleared");
        } else {
            println!("  [badge] text = {:?}", text);
        }
    }
}

/// Pretends every tab has a content script reporting a fixed kill count,
/// answering queries straight back into the event queue.
struct ConsoleMessenger {
    events: mpsc::Sender<BrowserEvent>,
    kill_count: u64,
}

impl TabMessenger for ConsoleMessenger {
    fn notify(&mut self, tab: TabId, message: OutboundMessage) -> Result<(), MessagingError> {
        println!("  [tab {}] <- {}", tab, message.wire_name());
        Ok(())
    }

    fn request_kill_count(&mut self, tab: TabId, seq: u64) -> Result<(), MessagingError> {
        println!("  [tab {}] <- queryKillCount (seq {})", tab, seq);
        let _ = self.events.send(BrowserEvent::KillCountResolved(KillCountResolution {
            seq,
            result: Ok(Some(self.kill_count)),
        }));
        Ok(())
    }
}

struct ConsoleTabs;

impl TabOpener for ConsoleTabs {
    fn open_tab(&mut self, url: &str) {
        println!("  [tabs] opened {}", url);
    }
}

fn main() {
    env_logger::init();

    println!();
    println!("eKill background core v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_version_compare();
    demo_notice_flow();
    demo_grudge_flow();
}

fn section(name: &str) {
    println!("--- {} ---", name);
}

fn demo_version_compare() {
    section("version comparison");
    for (candidate, baseline) in [("1.3.0", "0.0"), ("1.1", "1.1.0"), ("2.0", "1.9.9")] {
        println!(
            "  {} newer than {}: {}",
            candidate,
            baseline,
            is_newer_version(candidate, baseline)
        );
    }
    println!();
}

/// First run after an update: the notice shows, the first click opens the
/// changelog, the second click toggles kill-mode instead.
fn demo_notice_flow() {
    section("changelog notice");

    let store = MemorySettingsStore::new(
        VersionRecord {
            shown_changes_for: "1.2.0".to_string(),
        },
        UserSettings { holds_grudge: true },
    );
    let (tx, _rx) = mpsc::channel();
    let messenger = ConsoleMessenger {
        events: tx,
        kill_count: 0,
    };

    let mut coordinator =
        BackgroundCoordinator::start(&store, ConsoleBadge, messenger, ConsoleTabs, "1.3.0");
    println!("  notice pending: {}", coordinator.notice_pending());
    println!("  kill counter wired: {}", coordinator.kill_counter_wired());

    coordinator.handle_event(BrowserEvent::IconClicked { tab_id: 7 });
    coordinator.handle_event(BrowserEvent::IconClicked { tab_id: 7 });
    println!();
}

/// Grudge holder with no pending notice: the badge tracks the active tab's
/// kill count across switches and page loads.
fn demo_grudge_flow() {
    section("kill counter");

    let store = MemorySettingsStore::new(
        VersionRecord {
            shown_changes_for: "1.3.0".to_string(),
        },
        UserSettings { holds_grudge: true },
    );
    let (tx, rx) = mpsc::channel();
    let messenger = ConsoleMessenger {
        events: tx.clone(),
        kill_count: 5,
    };

    let mut coordinator =
        BackgroundCoordinator::start(&store, ConsoleBadge, messenger, ConsoleTabs, "1.3.0");
    println!("  kill counter wired: {}", coordinator.kill_counter_wired());

    let _ = tx.send(BrowserEvent::ContentMessage {
        sender: 7,
        raw: "pageLoading".to_string(),
    });
    let _ = tx.send(BrowserEvent::ContentMessage {
        sender: 7,
        raw: "killCountUpdated".to_string(),
    });
    let _ = tx.send(BrowserEvent::TabActivated { tab_id: 8 });
    drop(tx);

    // The messenger still holds a sender for query answers, so drain what is
    // queued instead of waiting for the channel to close.
    while let Ok(event) = rx.try_recv() {
        coordinator.handle_event(event);
    }
}
