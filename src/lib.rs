//! # tcg-feed
//!
//! Client for a paginated trading-card catalog, with an incremental card feed
//! for infinite-scroll list screens.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tcg_feed::browser::CardBrowser;
//! use tcg_feed::gateway::CatalogClient;
//!
//! #[tokio::main]
//! async fn main() -> tcg_feed::Result<()> {
//!     let mut browser = CardBrowser::new(CatalogClient::new()?);
//!
//!     // First appearance: fresh load of page 1
//!     browser.on_appear().await;
//!
//!     // Scrolled to the end: page 2 is appended
//!     browser.on_list_end().await;
//!
//!     if let Some(alert) = browser.state().pending_alert() {
//!         println!("{alert}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  CardBrowser  (page counter, UI events)      │
//! └──────────────────────┬───────────────────────┘
//!                        │ fresh_load / paginate
//! ┌──────────────────────┴───────────────────────┐
//! │  CardFeed     (FeedState: cards, alert)      │
//! └──────────────────────┬───────────────────────┘
//!                        │ fetch_page(n)
//! ┌──────────────────────┴───────────────────────┐
//! │  CardGateway  (CatalogClient → HttpClient)   │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Catalog client configuration
pub mod config;

/// Card and page types
pub mod model;

/// HTTP client
pub mod http;

/// Page fetching
pub mod gateway;

/// Pagination accumulator
pub mod feed;

/// List-screen driver
pub mod browser;

/// Text rendering of the list and detail screens
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, FetchError, Result};

pub use browser::CardBrowser;
pub use feed::{Alert, CardFeed, FeedState, FeedStatus};
pub use gateway::{CardGateway, CatalogClient};
pub use model::{Card, PageResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
