//! Page envelope returned by the card listing endpoint

use super::Card;
use serde::{Deserialize, Serialize};

/// One page of catalog results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// Cards on this page, in catalog order
    pub data: Vec<Card>,
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Number of cards on this page
    pub count: u32,
    /// Number of cards across all pages
    pub total_count: u32,
}

impl PageResponse {
    /// Whether the catalog has cards beyond this page
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < u64::from(self.total_count)
    }

    /// Number of cards actually decoded on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the page carries no cards
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
