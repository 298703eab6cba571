//! Report building and rendering
//!
//! A [`Report`] is filtered by the mention threshold and sorted once, when it
//! is built. Rendering applies a second, separate check that hides detail
//! blocks for contacts with zero mentions.

mod links;
mod summary;
mod templates;

pub use links::{DocumentLink, DocumentLinker};
pub use summary::{format_count, summary};
pub use templates::{escape, ReportRenderer};

use crate::results::SearchResult;

/// Filtered and ordered results of one sweep
#[derive(Debug, Clone, Default)]
pub struct Report {
    searched: usize,
    results: Vec<SearchResult>,
}

impl Report {
    /// Keep results with at least `min_mentions` hits, most mentioned first
    ///
    /// The sort is stable, so contacts with equal counts keep their input
    /// order.
    pub fn build(searched: usize, mut results: Vec<SearchResult>, min_mentions: u64) -> Self {
        results.retain(|r| r.total_hits >= min_mentions);
        results.sort_by(|a, b| b.total_hits.cmp(&a.total_hits));

        Self { searched, results }
    }

    /// Number of contacts that were looked up
    pub fn searched(&self) -> usize {
        self.searched
    }

    /// Results that passed the threshold, in report order
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Results with at least one mention
    pub fn with_mentions(&self) -> usize {
        self.detail_entries().count()
    }

    /// Results that get a detail block
    pub fn detail_entries(&self) -> impl Iterator<Item = &SearchResult> {
        self.results.iter().filter(|r| r.has_mentions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::Contact;
    use crate::lookup::Lookup;

    fn result(name: &str, hits: u64) -> SearchResult {
        let contact = Contact::new(name, "Test", None, None);
        SearchResult::new(contact, Lookup::found(hits, vec![]))
    }

    #[test]
    fn test_threshold_filter() {
        let report = Report::build(
            3,
            vec![result("A", 0), result("B", 2), result("C", 5)],
            3,
        );

        assert_eq!(report.searched(), 3);
        assert_eq!(report.results().len(), 1);
        assert_eq!(report.results()[0].total_hits, 5);
    }

    #[test]
    fn test_zero_threshold_keeps_zero_mentions_out_of_details() {
        let report = Report::build(2, vec![result("A", 0), result("B", 4)], 0);

        assert_eq!(report.results().len(), 2);
        assert_eq!(report.with_mentions(), 1);

        let details: Vec<_> = report
            .detail_entries()
            .map(|r| r.contact.first_name())
            .collect();
        assert_eq!(details, vec!["B"]);
    }

    #[test]
    fn test_stable_descending_sort() {
        let report = Report::build(
            4,
            vec![result("A", 1), result("B", 9), result("C", 1), result("D", 9)],
            1,
        );

        let order: Vec<_> = report
            .results()
            .iter()
            .map(|r| r.contact.first_name())
            .collect();
        assert_eq!(order, vec!["B", "D", "A", "C"]);
    }
}
