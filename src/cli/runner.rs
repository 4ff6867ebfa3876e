//! CLI runner - executes commands

use crate::browser::CardBrowser;
use crate::cli::commands::{Cli, Commands};
use crate::config::CatalogConfig;
use crate::error::{Error, FetchError, Result};
use crate::feed::{Alert, Completion};
use crate::gateway::{CardGateway, CatalogClient};
use crate::render;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its output to stdout
    pub async fn run(&self) -> Result<()> {
        let client = CatalogClient::with_config(&self.load_config()?)?;
        let page_size = client.page_size();
        let (output, outcome) = self.execute(client, page_size).await;
        print!("{output}");
        outcome
    }

    /// Run the command against any gateway, returning the rendered output
    ///
    /// Output is returned even when the command fails, so a partially loaded
    /// grid is still shown.
    pub async fn execute<G: CardGateway>(
        &self,
        gateway: G,
        page_size: u32,
    ) -> (String, Result<()>) {
        let mut out = String::new();
        let outcome = match &self.cli.command {
            Commands::Browse { pages, columns } => {
                self.browse(gateway, page_size, *pages, *columns, &mut out)
                    .await
            }
            Commands::Show { id, pages } => {
                self.show(gateway, page_size, id, *pages, &mut out).await
            }
            Commands::Page { page_no } => self.page(gateway, *page_no, &mut out).await,
        };
        (out, outcome)
    }

    /// Load configuration: file first, then flag overrides
    fn load_config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.cli.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }

        config.validate()?;
        debug!(base_url = %config.base_url, page_size = config.page_size, "Loaded config");
        Ok(config)
    }

    /// Load up to `pages` pages and render the grid
    async fn browse<G: CardGateway>(
        &self,
        gateway: G,
        page_size: u32,
        pages: u32,
        columns: usize,
        out: &mut String,
    ) -> Result<()> {
        let mut browser = CardBrowser::new(gateway);
        let mut completion = browser.on_appear().await;

        // A short page means the catalog has nothing further
        let mut loaded = 1;
        while loaded < pages && is_full_page(&completion, page_size) {
            completion = browser.on_list_end().await;
            loaded += 1;
        }

        if let Some(cards) = browser.state().cards() {
            out.push_str(&render::grid(cards, columns));
        }
        info!(
            pages = browser.page_no(),
            cards = browser.state().card_count(),
            "Browse finished"
        );

        finish_with_alert(browser.state().pending_alert(), out)
    }

    /// Page through the catalog until `id` turns up, then render its detail
    async fn show<G: CardGateway>(
        &self,
        gateway: G,
        page_size: u32,
        id: &str,
        pages: u32,
        out: &mut String,
    ) -> Result<()> {
        let mut browser = CardBrowser::new(gateway);
        let mut completion = browser.on_appear().await;
        let mut loaded = 1;

        loop {
            if completion.received.is_none() {
                return finish_with_alert(browser.state().pending_alert(), out);
            }
            if let Some(card) = browser.select(id) {
                out.push_str(&render::detail(card));
                return Ok(());
            }
            if loaded >= pages || !is_full_page(&completion, page_size) {
                return Err(Error::CardNotFound { id: id.to_string() });
            }
            completion = browser.on_list_end().await;
            loaded += 1;
        }
    }

    /// Fetch one page and print it as JSON
    async fn page<G: CardGateway>(
        &self,
        gateway: G,
        page_no: u32,
        out: &mut String,
    ) -> Result<()> {
        let page = gateway.fetch_page(page_no).await?;
        info!(page = page.page, has_more = page.has_more(), "Fetched page");
        out.push_str(&serde_json::to_string_pretty(&page)?);
        out.push('\n');
        Ok(())
    }
}

fn is_full_page(completion: &Completion, page_size: u32) -> bool {
    completion
        .received
        .is_some_and(|n| n >= page_size as usize)
}

/// Print the pending alert; an error alert fails the command
fn finish_with_alert(alert: Option<&Alert>, out: &mut String) -> Result<()> {
    match alert {
        Some(alert) if alert.is_error() => Err(FetchError::new(alert.message.clone()).into()),
        Some(alert) => {
            out.push_str(&render::alert(alert));
            out.push('\n');
            Ok(())
        }
        None => Ok(()),
    }
}
