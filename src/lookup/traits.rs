//! Lookup trait and outcome

use crate::results::Hit;
use async_trait::async_trait;

/// Normalized answer to one name query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    /// Total hits for the exact-phrase query
    pub total_hits: u64,
    /// Hit previews returned alongside the count
    pub hits: Vec<Hit>,
    /// Why the lookup degraded to zero hits, if it did
    pub error: Option<String>,
}

impl Lookup {
    /// No hits, no error
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn found(total_hits: u64, hits: Vec<Hit>) -> Self {
        Self {
            total_hits,
            hits,
            error: None,
        }
    }

    /// Zero hits carrying the last transport error
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Anything that can count mentions of a name
///
/// Implementations never fail: transport problems are folded into
/// [`Lookup::failed`].
#[async_trait]
pub trait MentionSource: Send + Sync {
    async fn lookup(&self, name: &str) -> Lookup;
}
