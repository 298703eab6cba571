//! Public links to the documents behind each hit

use serde::Serialize;

/// Lowercase path segment the index uses, and the spelling the document
/// host expects
const SEGMENT_FIXUP: (&str, &str) = ("dataset", "DataSet");

/// Link to a source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    /// Absolute, percent-encoded URL
    pub url: String,
    /// Corrected path shown as the link text
    pub label: String,
}

/// Turns index file paths into public document URLs
#[derive(Debug, Clone)]
pub struct DocumentLinker {
    base_url: String,
}

impl DocumentLinker {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Derive the public link for `file_path`; empty paths have none
    pub fn link(&self, file_path: &str) -> Option<DocumentLink> {
        if file_path.is_empty() {
            return None;
        }

        let path = file_path.replace(SEGMENT_FIXUP.0, SEGMENT_FIXUP.1);
        let base = if path.starts_with('/') {
            self.base_url.trim_end_matches('/')
        } else {
            self.base_url.as_str()
        };

        Some(DocumentLink {
            url: format!("{}{}", base, encode_path(&path)),
            label: path,
        })
    }
}

/// Percent-encode each segment, keeping the `/` separators
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
