//! Command line interface

use crate::config::Settings;
use clap::Parser;
use std::path::PathBuf;

/// Printed when no contacts file is given
pub const EXPORT_INSTRUCTIONS: &str = r#"
No contacts file specified.

To export your LinkedIn connections:
  1. Go to linkedin.com and log in
  2. Click your profile icon in the top right
  3. Select "Settings & Privacy"
  4. Click "Data privacy" in the left sidebar
  5. Under "How LinkedIn uses your data", click "Get a copy of your data"
  6. Select "Connections" (or "Want something in particular?" and check Connections)
  7. Click "Request archive"
  8. Wait for LinkedIn's email (may take up to 24 hours)
  9. Download and extract the ZIP file
  10. Use the Connections.csv file with this tool:

     mention-report --contacts /path/to/Connections.csv
"#;

#[derive(Parser, Debug)]
#[command(
    name = "mention-report",
    version,
    about = "Search the Epstein files for mentions of your LinkedIn contacts"
)]
pub struct Cli {
    #[arg(short = 'c', long, help = "Path to LinkedIn connections CSV export")]
    pub contacts: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        help = "Output HTML file for the report [default: epstein_mentions_report.html]"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'm',
        long,
        help = "Only include contacts with at least this many mentions [default: 1]"
    )]
    pub min_mentions: Option<u64>,

    #[arg(
        short = 'D',
        long,
        help = "Delay between API requests in seconds [default: 0.2]"
    )]
    pub delay: Option<f64>,

    #[arg(long, help = "Attempts per contact before giving up [default: 1]")]
    pub max_attempts: Option<u32>,

    #[arg(long, help = "Path to a settings.yml file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Log request details")]
    pub verbose: bool,
}

impl Cli {
    /// Apply flags on top of file and environment settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ref output) = self.output {
            settings.report.output = output.clone();
        }
        if let Some(min) = self.min_mentions {
            settings.sweep.min_mentions = min;
        }
        if let Some(delay) = self.delay {
            settings.sweep.delay = delay;
        }
        if let Some(attempts) = self.max_attempts {
            settings.api.max_attempts = attempts;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OUTPUT;

    #[test]
    fn test_defaults_come_from_settings() {
        let cli = Cli::try_parse_from(["mention-report", "-c", "Connections.csv"]).unwrap();
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(cli.contacts, Some(PathBuf::from("Connections.csv")));
        assert_eq!(settings.report.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.sweep.min_mentions, 1);
        assert_eq!(settings.sweep.delay, 0.2);
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "mention-report",
            "--contacts",
            "in.csv",
            "-o",
            "out.html",
            "-m",
            "0",
            "-D",
            "1.5",
            "--max-attempts",
            "3",
        ])
        .unwrap();
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.report.output, PathBuf::from("out.html"));
        assert_eq!(settings.sweep.min_mentions, 0);
        assert_eq!(settings.sweep.delay, 1.5);
        assert_eq!(settings.api.max_attempts, 3);
    }

    #[test]
    fn test_contacts_is_optional() {
        let cli = Cli::try_parse_from(["mention-report"]).unwrap();
        assert!(cli.contacts.is_none());
        assert!(!cli.verbose);
    }
}
