//! Result type definitions

use crate::contacts::Contact;
use crate::lookup::Lookup;
use serde::{Deserialize, Serialize};

/// One matching document fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Preview text, possibly truncated
    pub preview: String,
    /// Path of the source document within the corpus
    pub file_path: Option<String>,
}

impl Hit {
    pub fn new(preview: impl Into<String>) -> Self {
        Self {
            preview: preview.into(),
            file_path: None,
        }
    }

    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        let file_path = file_path.into();
        self.file_path = if file_path.is_empty() {
            None
        } else {
            Some(file_path)
        };
        self
    }
}

/// Outcome of searching for one contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The contact that was searched for
    pub contact: Contact,
    /// Total hits reported by the search API
    pub total_hits: u64,
    /// Hit previews, in the order the API returned them
    pub hits: Vec<Hit>,
    /// Set when every attempt failed
    pub error: Option<String>,
}

impl SearchResult {
    pub fn new(contact: Contact, lookup: Lookup) -> Self {
        Self {
            contact,
            total_hits: lookup.total_hits,
            hits: lookup.hits,
            error: lookup.error,
        }
    }

    /// Whether the contact was mentioned at all
    pub fn has_mentions(&self) -> bool {
        self.total_hits > 0
    }

    /// Whether the lookup degraded after exhausting its attempts
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
