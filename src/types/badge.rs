/// What the toolbar badge is showing.
///
/// The badge text is always the projection of exactly one of these states;
/// the coordinator never writes text that does not come from `text()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    /// No text on the badge.
    Empty,
    /// A per-tab kill count. Never zero; zero collapses to `Empty`.
    ShowingCount(u64),
    /// The "unread changelog" notice.
    ShowingNotice,
}

/// Literal shown while a changelog notice is pending.
pub const NOTICE_TEXT: &str = "New";

/// Badge background color, set once at startup.
pub const BADGE_COLOR: &str = "#000000";

impl BadgeState {
    /// Maps a queried kill count onto a badge state. `None` means the tab
    /// had no count to report, which displays the same as zero.
    pub fn from_count(count: Option<u64>) -> Self {
        match count {
            None | Some(0) => BadgeState::Empty,
            Some(n) => BadgeState::ShowingCount(n),
        }
    }

    /// The text to hand the badge sink; empty string clears the badge.
    pub fn text(&self) -> String {
        match self {
            BadgeState::Empty => String::new(),
            BadgeState::ShowingCount(n) => n.to_string(),
            BadgeState::ShowingNotice => NOTICE_TEXT.to_string(),
        }
    }
}
