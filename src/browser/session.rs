//! Browser session over a card feed

use crate::error::FetchError;
use crate::feed::{CardFeed, Completion, FeedState, FetchMode};
use crate::gateway::CardGateway;
use crate::model::Card;

/// First page requested by a new browser
pub const FIRST_PAGE: u32 = 1;

/// List-screen driver: page counter plus the feed it feeds
#[derive(Debug)]
pub struct CardBrowser<G> {
    feed: CardFeed<G>,
    page_no: u32,
}

impl<G: CardGateway> CardBrowser<G> {
    /// Create a browser positioned at the first page
    pub fn new(gateway: G) -> Self {
        Self {
            feed: CardFeed::new(gateway),
            page_no: FIRST_PAGE,
        }
    }

    /// Create a browser positioned at an arbitrary page
    pub fn starting_at(gateway: G, page_no: u32) -> Self {
        Self {
            feed: CardFeed::new(gateway),
            page_no,
        }
    }

    /// Current page counter
    pub fn page_no(&self) -> u32 {
        self.page_no
    }

    pub fn state(&self) -> &FeedState {
        self.feed.state()
    }

    pub fn feed(&self) -> &CardFeed<G> {
        &self.feed
    }

    /// The list became visible: fresh load of the current page
    pub async fn on_appear(&mut self) -> Completion {
        self.feed.fresh_load(self.page_no).await
    }

    /// The end-of-list sentinel became visible: advance and append
    ///
    /// The counter advances even if the fetch fails. Past the last
    /// representable page no request is sent and an error alert is raised.
    pub async fn on_list_end(&mut self) -> Completion {
        match self.page_no.checked_add(1) {
            Some(next) => {
                self.page_no = next;
                self.feed.paginate(next).await
            }
            None => {
                let ticket = self.feed.begin(FetchMode::Paginate, self.page_no);
                let err = FetchError::new(format!("No page after {}", self.page_no));
                self.feed.complete(ticket, Err(err))
            }
        }
    }

    /// Pull-to-refresh: unset the list, then reload the current page
    pub async fn on_refresh(&mut self) -> Completion {
        self.feed.clear_cards();
        self.feed.fresh_load(self.page_no).await
    }

    /// The user closed the alert
    pub fn on_alert_dismissed(&mut self) {
        self.feed.dismiss_alert();
    }

    /// Card to show on the detail screen
    pub fn select(&self, id: &str) -> Option<&Card> {
        self.feed.state().find(id)
    }
}
