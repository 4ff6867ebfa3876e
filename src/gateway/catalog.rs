//! HTTP-backed gateway for the card catalog

use super::CardGateway;
use crate::config::CatalogConfig;
use crate::error::{Error, FetchError, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::model::PageResponse;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Gateway that reads pages from the catalog's `/v2/cards` endpoint
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
    cards_url: String,
    page_size: u32,
}

impl CatalogClient {
    /// Create a client for the public catalog
    pub fn new() -> Result<Self> {
        Self::with_config(&CatalogConfig::default())
    }

    /// Create a client from a validated config
    pub fn with_config(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;

        let http = HttpClient::with_config(
            HttpClientConfig::builder()
                .maybe_timeout(config.timeout())
                .user_agent(&config.user_agent)
                .header("Accept", "application/json")
                .build(),
        )?;

        Ok(Self {
            http,
            cards_url: config.cards_url()?.to_string(),
            page_size: config.page_size,
        })
    }

    /// Full URL of the card listing endpoint
    pub fn cards_url(&self) -> &str {
        &self.cards_url
    }

    /// Cards requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one page, keeping the detailed error
    pub async fn get_page(&self, page_no: u32) -> Result<PageResponse> {
        if page_no == 0 {
            return Err(Error::InvalidPage { page: page_no });
        }

        let request = RequestConfig::new()
            .query("page", page_no)
            .query("pageSize", self.page_size);

        let page: PageResponse = self
            .http
            .get_json_with_config(&self.cards_url, request)
            .await?;

        debug!(
            page = page.page,
            count = page.data.len(),
            total = page.total_count,
            "Decoded card page"
        );
        Ok(page)
    }
}

#[async_trait]
impl CardGateway for CatalogClient {
    async fn fetch_page(&self, page_no: u32) -> std::result::Result<PageResponse, FetchError> {
        self.get_page(page_no).await.map_err(|e| {
            warn!(page = page_no, error = %e, "Card page fetch failed");
            FetchError::from(e)
        })
    }
}
