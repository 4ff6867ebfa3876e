//! Feed state types

use crate::model::Card;
use std::fmt;

/// Title of the alert raised after a successful fresh load
pub const SUCCESS_TITLE: &str = "Success!";

/// Message of the alert raised after a successful fresh load
pub const SUCCESS_MESSAGE: &str = "Gotta fetch em all!";

/// Title of the alert raised after any failed fetch
pub const ERROR_TITLE: &str = "Error!";

// ============================================================================
// Status
// ============================================================================

/// Where the feed is in its fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch has been issued and not yet completed
    Loading,
    /// The last completed fetch succeeded
    Loaded,
    /// The last completed fetch failed
    Error,
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Alert
// ============================================================================

/// One-shot user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Alert shown after a successful fresh load
    pub fn success() -> Self {
        Self {
            title: SUCCESS_TITLE.to_string(),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Alert shown after a failed fetch
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: message.into(),
        }
    }

    /// Whether this is an error alert
    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

// ============================================================================
// Feed State
// ============================================================================

/// Accumulated list state read by the presentation layer
///
/// `cards` is `None` before the first load and after a manual refresh.
/// The alert fields persist after dismissal; only `show_alert` is cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    cards: Option<Vec<Card>>,
    page_no: u32,
    status: FeedStatus,
    alert: Option<Alert>,
    show_alert: bool,
}

impl FeedState {
    /// Create an idle state with no cards
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated cards, or `None` if unset
    pub fn cards(&self) -> Option<&[Card]> {
        self.cards.as_deref()
    }

    /// Number of accumulated cards (0 when unset)
    pub fn card_count(&self) -> usize {
        self.cards.as_ref().map_or(0, Vec::len)
    }

    /// Page number of the most recently issued fetch (0 before any)
    pub fn page_no(&self) -> u32 {
        self.page_no
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    /// Most recent alert, whether or not it is still shown
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn is_alert_shown(&self) -> bool {
        self.show_alert
    }

    /// The alert the view should currently display
    pub fn pending_alert(&self) -> Option<&Alert> {
        if self.show_alert {
            self.alert.as_ref()
        } else {
            None
        }
    }

    /// Find an accumulated card by id
    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards()?.iter().find(|card| card.id == id)
    }

    pub(crate) fn mark_loading(&mut self, page_no: u32) {
        self.page_no = page_no;
        self.status = FeedStatus::Loading;
    }

    pub(crate) fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = Some(cards);
        self.status = FeedStatus::Loaded;
    }

    pub(crate) fn append_cards(&mut self, cards: Vec<Card>) {
        self.cards.get_or_insert_with(Vec::new).extend(cards);
        self.status = FeedStatus::Loaded;
    }

    pub(crate) fn mark_failed(&mut self) {
        self.status = FeedStatus::Error;
    }

    pub(crate) fn clear_cards(&mut self) {
        self.cards = None;
    }

    pub(crate) fn raise_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
        self.show_alert = true;
    }

    pub(crate) fn dismiss_alert(&mut self) {
        self.show_alert = false;
    }
}
