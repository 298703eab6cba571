//! Sequential sweep over all contacts

use crate::config::SweepSettings;
use crate::contacts::Contact;
use crate::lookup::MentionSource;
use crate::report::Report;
use crate::results::SearchResult;
use std::time::Duration;
use tracing::{debug, info};

/// Looks up every contact, one at a time, pausing between requests
pub struct Sweep<S> {
    source: S,
    delay: Duration,
    min_mentions: u64,
}

impl<S: MentionSource> Sweep<S> {
    /// Create a sweep with the default pacing and threshold
    pub fn new(source: S) -> Self {
        Self::from_settings(source, &SweepSettings::default())
    }

    pub fn from_settings(source: S, settings: &SweepSettings) -> Self {
        Self {
            source,
            delay: settings.delay(),
            min_mentions: settings.min_mentions,
        }
    }

    /// Set the pause between successive lookups
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the minimum mention count a result needs to be reported
    pub fn with_min_mentions(mut self, min_mentions: u64) -> Self {
        self.min_mentions = min_mentions;
        self
    }

    /// Search for every contact in order and build the report
    ///
    /// The delay is applied between lookups only, never after the last one.
    pub async fn run(&self, contacts: &[Contact]) -> Report {
        let total = contacts.len();
        let mut results = Vec::with_capacity(total);

        info!("Searching {} contacts", total);

        for (i, contact) in contacts.iter().enumerate() {
            let lookup = self.source.lookup(contact.full_name()).await;
            info!(
                "[{}/{}] {} -> {} hits",
                i + 1,
                total,
                contact.full_name(),
                lookup.total_hits
            );
            results.push(SearchResult::new(contact.clone(), lookup));

            if !self.delay.is_zero() && i + 1 < total {
                debug!("Waiting {:?} before next lookup", self.delay);
                tokio::time::sleep(self.delay).await;
            }
        }

        Report::build(total, results, self.min_mentions)
    }
}
