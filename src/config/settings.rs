//! Settings structures for mention-report configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default search endpoint
pub const DEFAULT_API_URL: &str = "https://analytics.dugganusa.com/api/v1/search";

/// Default index selector sent with every query
pub const DEFAULT_INDEX: &str = "epstein_files";

/// Public location of the indexed documents
pub const DEFAULT_DOCUMENT_BASE_URL: &str = "https://www.justice.gov/epstein/files/";

/// Default report file name
pub const DEFAULT_OUTPUT: &str = "epstein_mentions_report.html";

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub sweep: SweepSettings,
    pub report: ReportSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (MENTION_REPORT_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MENTION_REPORT_API_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("MENTION_REPORT_INDEX") {
            self.api.index = val;
        }
        if let Ok(val) = std::env::var("MENTION_REPORT_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.api.request_timeout = timeout;
            }
        }
        if let Ok(val) = std::env::var("MENTION_REPORT_MAX_ATTEMPTS") {
            if let Ok(attempts) = val.parse() {
                self.api.max_attempts = attempts;
            }
        }
        if let Ok(val) = std::env::var("MENTION_REPORT_DELAY") {
            if let Ok(delay) = val.parse() {
                self.sweep.delay = delay;
            }
        }
        if let Ok(val) = std::env::var("MENTION_REPORT_MIN_MENTIONS") {
            if let Ok(min) = val.parse() {
                self.sweep.min_mentions = min;
            }
        }
        if let Ok(val) = std::env::var("MENTION_REPORT_OUTPUT") {
            self.report.output = PathBuf::from(val);
        }
    }
}

/// Remote search API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Search endpoint
    pub base_url: String,
    /// Value of the `indexes` query parameter
    pub index: String,
    /// Per-request timeout in seconds
    pub request_timeout: f64,
    /// Attempts per contact before giving up
    pub max_attempts: u32,
    /// Pause between attempts in seconds
    pub retry_backoff: f64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Duration {
        seconds(self.request_timeout)
    }

    pub fn retry_backoff(&self) -> Duration {
        seconds(self.retry_backoff)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            index: DEFAULT_INDEX.to_string(),
            request_timeout: 30.0,
            max_attempts: 1,
            retry_backoff: 1.0,
            user_agent: format!("mention-report/{}", crate::VERSION),
        }
    }
}

/// Sweep pacing and filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Delay between lookups in seconds
    pub delay: f64,
    /// Minimum mention count for a contact to be reported
    pub min_mentions: u64,
}

impl SweepSettings {
    pub fn delay(&self) -> Duration {
        seconds(self.delay)
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            delay: 0.2,
            min_mentions: 1,
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Where the HTML report is written
    pub output: PathBuf,
    /// Document heading and page title
    pub title: String,
    /// Base URL that hit file paths are appended to
    pub document_base_url: String,
    /// How many contacts the console summary lists
    pub top_n: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: "LinkedIn Contacts in Epstein Files".to_string(),
            document_base_url: DEFAULT_DOCUMENT_BASE_URL.to_string(),
            top_n: 20,
        }
    }
}

/// Negative or non-finite values collapse to zero
fn seconds(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}
