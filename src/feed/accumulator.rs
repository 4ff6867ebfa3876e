//! The card feed: single writer of `FeedState`

use super::state::{Alert, FeedState};
use crate::error::FetchError;
use crate::gateway::CardGateway;
use crate::model::PageResponse;
use tracing::{info, warn};

/// How a fetched page is merged into the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Replace the list and raise the success alert
    Fresh,
    /// Append to the list without an alert
    Paginate,
}

/// Receipt for an issued fetch, handed back to `CardFeed::complete`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub mode: FetchMode,
    pub page_no: u32,
    /// Refresh epoch at issue time
    epoch: u64,
    /// Issue order, starting at 1
    seq: u64,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What happened when a completion was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub ticket: FetchTicket,
    /// The list was cleared by a refresh after this fetch was issued
    pub stale: bool,
    /// Cards merged into the list, or `None` if the fetch failed
    pub received: Option<usize>,
}

/// Pagination accumulator over an injected gateway
#[derive(Debug)]
pub struct CardFeed<G> {
    gateway: G,
    state: FeedState,
    epoch: u64,
    issued: u64,
}

impl<G: CardGateway> CardFeed<G> {
    /// Create an idle feed
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: FeedState::new(),
            epoch: 0,
            issued: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch `page_no` and replace the list with it
    pub async fn fresh_load(&mut self, page_no: u32) -> Completion {
        self.run(FetchMode::Fresh, page_no).await
    }

    /// Fetch `page_no` and append it to the list
    ///
    /// The caller advances the page number before calling.
    pub async fn paginate(&mut self, page_no: u32) -> Completion {
        self.run(FetchMode::Paginate, page_no).await
    }

    async fn run(&mut self, mode: FetchMode, page_no: u32) -> Completion {
        let ticket = self.begin(mode, page_no);
        let result = self.gateway.fetch_page(page_no).await;
        self.complete(ticket, result)
    }

    /// Mark a fetch as issued and return its ticket
    pub fn begin(&mut self, mode: FetchMode, page_no: u32) -> FetchTicket {
        self.issued += 1;
        self.state.mark_loading(page_no);
        info!(?mode, page = page_no, seq = self.issued, "Fetching cards");

        FetchTicket {
            mode,
            page_no,
            epoch: self.epoch,
            seq: self.issued,
        }
    }

    /// Merge the outcome of a ticketed fetch into the state
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageResponse, FetchError>,
    ) -> Completion {
        let stale = ticket.epoch != self.epoch;
        if stale {
            warn!(
                page = ticket.page_no,
                seq = ticket.seq,
                "Applying completion issued before the last refresh"
            );
        }

        let received = match result {
            Ok(page) => {
                let count = page.data.len();
                match ticket.mode {
                    FetchMode::Fresh => {
                        self.state.replace_cards(page.data);
                        self.state.raise_alert(Alert::success());
                    }
                    FetchMode::Paginate => self.state.append_cards(page.data),
                }
                info!(
                    page = ticket.page_no,
                    received = count,
                    total = self.state.card_count(),
                    "Cards loaded"
                );
                Some(count)
            }
            Err(err) => {
                warn!(page = ticket.page_no, error = %err, "Card fetch failed");
                self.state.mark_failed();
                self.state.raise_alert(Alert::error(err.message()));
                None
            }
        };

        Completion {
            ticket,
            stale,
            received,
        }
    }

    /// Unset the list ahead of a manual refresh
    pub fn clear_cards(&mut self) {
        self.epoch += 1;
        self.state.clear_cards();
    }

    /// Hide the current alert; its title and message are kept
    pub fn dismiss_alert(&mut self) {
        self.state.dismiss_alert();
    }

    pub fn into_parts(self) -> (G, FeedState) {
        (self.gateway, self.state)
    }
}
