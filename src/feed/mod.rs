//! Pagination accumulator
//!
//! Owns the visible card list and its loading/alert status. Every mutation
//! goes through one of two transitions:
//!
//! - **Fresh load**: the fetched page replaces the list and raises the
//!   success alert
//! - **Pagination**: the fetched page is appended to the list, silently
//!
//! A failed fetch never touches the list; it raises the error alert.
//!
//! # Overlapping fetches
//!
//! `CardFeed::fresh_load` and `CardFeed::paginate` borrow the feed mutably
//! across the await, so at most one fetch runs through them at a time. Hosts
//! that run the request elsewhere use `begin` + `complete`; completions are
//! applied in arrival order, and a completion issued before the latest
//! `clear_cards` is flagged stale but still applied.

mod accumulator;
mod state;

pub use accumulator::{CardFeed, Completion, FetchMode, FetchTicket};
pub use state::{Alert, FeedState, FeedStatus};
