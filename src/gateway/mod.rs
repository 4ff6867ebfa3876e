//! Fetch gateway
//!
//! One method, one request: `fetch_page(n)` returns the decoded page or a
//! `FetchError`. The feed depends on the `CardGateway` trait so tests can
//! substitute a scripted gateway for the HTTP one.

mod catalog;
mod scripted;

pub use catalog::CatalogClient;
pub use scripted::ScriptedGateway;

use crate::error::FetchError;
use crate::model::PageResponse;
use async_trait::async_trait;

/// Source of catalog pages
#[async_trait]
pub trait CardGateway: Send + Sync {
    /// Fetch page `page_no` (1-based)
    async fn fetch_page(&self, page_no: u32) -> Result<PageResponse, FetchError>;
}

#[async_trait]
impl<G: CardGateway + ?Sized> CardGateway for std::sync::Arc<G> {
    async fn fetch_page(&self, page_no: u32) -> Result<PageResponse, FetchError> {
        (**self).fetch_page(page_no).await
    }
}
