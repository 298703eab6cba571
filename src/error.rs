//! Error types for mention-report
//!
//! Only fatal conditions live here. A failed lookup for a single contact is
//! not an error; it degrades to a zero-hit result.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run
#[derive(Debug, Error)]
pub enum Error {
    #[error("no contacts file specified")]
    MissingInput,

    #[error("contacts file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("no contacts found in {}; check the file format", .0.display())]
    NoContacts(PathBuf),

    #[error("invalid API URL '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("failed to parse settings: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("failed to read contacts: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to render report: {0}")]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
