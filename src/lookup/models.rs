//! Wire format of the search API
//!
//! Every field is optional. Absent, null or oddly typed values fall back
//! to the defaults documented on each field rather than rejecting the
//! whole body.

use super::Lookup;
use crate::results::Hit;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Longest preview taken from a hit's full `content`
pub const PREVIEW_CHARS: usize = 500;

/// Top-level response body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Read by truthiness; missing means failure
    pub success: Value,
    /// Payload; anything but an object reads as empty
    pub data: Value,
}

/// Payload of a successful search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchData {
    /// Count or numeric string; anything else means zero
    pub total_hits: Value,
    /// Missing or not a list means no previews
    pub hits: Value,
}

/// A single hit as returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiHit {
    pub content_preview: Option<String>,
    pub content: Option<String>,
    pub file_path: Option<String>,
}

impl SearchResponse {
    /// Normalize into a [`Lookup`]; an unsuccessful response counts as zero hits
    pub fn into_lookup(self) -> Lookup {
        if !truthy(&self.success) {
            return Lookup::empty();
        }

        let data: SearchData = serde_json::from_value(self.data).unwrap_or_default();
        let hits = match data.hits {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<ApiHit>(item) {
                    Ok(hit) => Some(hit.into_hit()),
                    Err(e) => {
                        debug!("Skipping unreadable hit: {}", e);
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        Lookup::found(count(&data.total_hits), hits)
    }
}

impl ApiHit {
    /// Preview text: `content_preview`, else the head of `content`
    pub fn preview(&self) -> String {
        match self.content_preview.as_deref() {
            Some(preview) if !preview.is_empty() => preview.to_string(),
            _ => self
                .content
                .as_deref()
                .map(|content| content.chars().take(PREVIEW_CHARS).collect())
                .unwrap_or_default(),
        }
    }

    pub fn into_hit(self) -> Hit {
        let hit = Hit::new(self.preview());
        match self.file_path {
            Some(path) => hit.with_file_path(path),
            None => hit,
        }
    }
}

/// Loose truthiness: `false`, `0`, `""`, empty containers and null are false
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Hit count from a number or numeric string; negatives and junk read as zero
fn count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Lookup {
        serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_lookup()
    }

    #[test]
    fn test_successful_response() {
        let lookup = parse(
            r#"{"success": true, "data": {"totalHits": 12, "hits": [
                {"content_preview": "Alice Smith attended", "file_path": "/dataset 1/a.pdf"},
                {"content": "full text"}
            ]}}"#,
        );

        assert_eq!(lookup.total_hits, 12);
        assert_eq!(lookup.error, None);
        assert_eq!(lookup.hits.len(), 2);
        assert_eq!(lookup.hits[0].preview, "Alice Smith attended");
        assert_eq!(lookup.hits[0].file_path.as_deref(), Some("/dataset 1/a.pdf"));
        assert_eq!(lookup.hits[1].preview, "full text");
        assert_eq!(lookup.hits[1].file_path, None);
    }

    #[test]
    fn test_failure_flag_is_zero_hits() {
        let lookup = parse(r#"{"success": false, "data": {"totalHits": 99}}"#);
        assert_eq!(lookup, Lookup::empty());

        assert_eq!(parse("{}"), Lookup::empty());
        assert_eq!(parse(r#"{"success": null}"#), Lookup::empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let lookup = parse(r#"{"success": true}"#);
        assert_eq!(lookup.total_hits, 0);
        assert!(lookup.hits.is_empty());

        let lookup = parse(r#"{"success": true, "data": {"totalHits": null, "hits": null}}"#);
        assert_eq!(lookup.total_hits, 0);
        assert!(lookup.hits.is_empty());
    }

    #[test]
    fn test_loosely_typed_fields() {
        let lookup = parse(r#"{"success": 1, "data": {"totalHits": "5", "hits": "none"}}"#);
        assert_eq!(lookup.total_hits, 5);
        assert!(lookup.hits.is_empty());
        assert_eq!(lookup.error, None);

        let lookup = parse(r#"{"success": "yes", "data": {"totalHits": 7.0}}"#);
        assert_eq!(lookup.total_hits, 7);

        assert_eq!(parse(r#"{"success": 0, "data": {"totalHits": 3}}"#), Lookup::empty());
        assert_eq!(parse(r#"{"success": "", "data": {"totalHits": 3}}"#), Lookup::empty());
        assert_eq!(parse(r#"{"success": true, "data": {"totalHits": -2}}"#).total_hits, 0);
        assert_eq!(parse(r#"{"success": true, "data": {"totalHits": "many"}}"#).total_hits, 0);
        assert_eq!(parse(r#"{"success": true, "data": []}"#).total_hits, 0);
    }

    #[test]
    fn test_unreadable_hits_are_skipped() {
        let lookup = parse(
            r#"{"success": true, "data": {"totalHits": 2, "hits": [
                "not an object",
                {"content_preview": "kept", "file_path": 3},
                {"content_preview": "also kept"}
            ]}}"#,
        );
        assert_eq!(lookup.total_hits, 2);
        assert_eq!(lookup.hits.len(), 1);
        assert_eq!(lookup.hits[0].preview, "also kept");
    }

    #[test]
    fn test_preview_falls_back_to_truncated_content() {
        let hit = ApiHit {
            content_preview: Some(String::new()),
            content: Some("é".repeat(PREVIEW_CHARS + 20)),
            file_path: None,
        };
        assert_eq!(hit.preview().chars().count(), PREVIEW_CHARS);

        assert_eq!(ApiHit::default().preview(), "");
    }
}
