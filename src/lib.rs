//! mention-report: search a document index for mentions of your contacts
//!
//! Reads a LinkedIn connections export, looks every contact up by exact
//! name in a full-text search API, and renders the counts as a standalone
//! HTML report.

pub mod app;
pub mod cli;
pub mod config;
pub mod contacts;
pub mod error;
pub mod lookup;
pub mod network;
pub mod report;
pub mod results;
pub mod search;

pub use config::Settings;
pub use contacts::Contact;
pub use error::{Error, Result};
pub use lookup::{Lookup, MentionSource, SearchClient};
pub use report::{Report, ReportRenderer};
pub use results::{Hit, SearchResult};
pub use search::Sweep;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
