//! Plain-text summary printed after a run

use super::Report;

/// Format a count with comma thousands separators
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Console summary listing up to `top_n` of the most mentioned contacts
pub fn summary(report: &Report, top_n: usize) -> String {
    let rule = "=".repeat(60);
    let mut lines = vec![
        rule.clone(),
        "SUMMARY".to_string(),
        rule,
        format!("Total contacts searched: {}", report.searched()),
        format!("Contacts with mentions: {}", report.with_mentions()),
    ];

    if report.with_mentions() == 0 {
        lines.push("\nNo contacts found in the Epstein files.".to_string());
    } else {
        lines.push("\nTop mentions:".to_string());
        lines.extend(report.detail_entries().take(top_n).map(|result| {
            format!(
                "  {:>6} - {}",
                format_count(result.total_hits),
                result.contact.full_name()
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::Contact;
    use crate::lookup::Lookup;
    use crate::results::SearchResult;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_summary_lists_top_contacts() {
        let results = (1..=3)
            .map(|n| {
                SearchResult::new(
                    Contact::new(format!("Person{}", n), "Doe", None, None),
                    Lookup::found(n * 1000, vec![]),
                )
            })
            .collect();
        let report = Report::build(5, results, 1);

        let text = summary(&report, 2);
        assert!(text.contains("Total contacts searched: 5"));
        assert!(text.contains("Contacts with mentions: 3"));
        assert!(text.contains(" 3,000 - Person3 Doe"));
        assert!(text.contains(" 2,000 - Person2 Doe"));
        assert!(!text.contains("Person1 Doe"));
    }

    #[test]
    fn test_summary_without_mentions() {
        let text = summary(&Report::build(4, vec![], 1), 20);
        assert!(text.contains("Total contacts searched: 4"));
        assert!(text.contains("No contacts found"));
    }

    #[test]
    fn test_summary_layout() {
        let results = vec![SearchResult::new(
            Contact::new("Alice", "Smith", None, None),
            Lookup::found(1500, vec![]),
        )];
        let text = summary(&Report::build(2, results, 1), 20);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "SUMMARY");
        assert_eq!(lines[3], "Total contacts searched: 2");
        assert_eq!(lines[4], "Contacts with mentions: 1");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Top mentions:");
        assert_eq!(lines[7], "   1,500 - Alice Smith");
        assert!(text.ends_with("Alice Smith\n"));
    }
}
