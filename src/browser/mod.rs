//! Card browser
//!
//! Plays the role of the list screen: it owns the current page number and
//! translates UI events into feed transitions.

mod session;

pub use session::CardBrowser;
