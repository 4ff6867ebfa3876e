//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trading-card catalog browser
#[derive(Parser, Debug)]
#[command(name = "tcg-feed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the card grid, scrolling through the given number of pages
    Browse {
        /// Pages to load (the first load plus N-1 scrolls)
        #[arg(short, long, default_value = "1")]
        pages: u32,

        /// Grid columns
        #[arg(long, default_value = "3")]
        columns: usize,
    },

    /// Show the detail screen for one card
    Show {
        /// Card id (e.g. "xy1-1")
        id: String,

        /// Give up after this many pages
        #[arg(short, long, default_value = "10")]
        pages: u32,
    },

    /// Print a single page as JSON
    Page {
        /// Page number (starts at 1)
        page_no: u32,
    },
}
