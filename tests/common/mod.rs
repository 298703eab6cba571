#![allow(dead_code)]

use mention_report::config::{ApiSettings, Settings};
use serde_json::{json, Value};
use std::path::Path;
use wiremock::MockServer;

pub const SEARCH_PATH: &str = "/api/v1/search";

/// API settings pointed at the mock server, with fast retries
pub fn api_settings(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: format!("{}{}", server.uri(), SEARCH_PATH),
        request_timeout: 2.0,
        retry_backoff: 0.01,
        ..Default::default()
    }
}

/// Full settings for a run writing its report into `dir`
pub fn settings(server: &MockServer, dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.api = api_settings(server);
    settings.sweep.delay = 0.01;
    settings.report.output = dir.join("report.html");
    settings
}

/// A successful search response
pub fn hits_body(total: u64, hits: Value) -> Value {
    json!({
        "success": true,
        "data": {
            "totalHits": total,
            "hits": hits
        }
    })
}

pub fn quoted(name: &str) -> String {
    format!("\"{}\"", name)
}
