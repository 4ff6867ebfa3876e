//! CLI module
//!
//! Command-line front end standing in for the mobile list and detail screens.
//!
//! # Commands
//!
//! - `browse` - Load the first page and scroll through more
//! - `show` - Page through the catalog until a card is found, print its detail
//! - `page` - Print one decoded page as JSON

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
