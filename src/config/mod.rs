//! Configuration module for mention-report
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "MENTION_REPORT_SETTINGS_PATH";

/// Load settings from an explicit file, the usual locations, or defaults.
///
/// Environment overrides are merged on top of whichever source was used.
pub fn load(explicit: Option<PathBuf>) -> Result<Settings> {
    let explicit = explicit.or_else(|| std::env::var(SETTINGS_PATH_ENV).ok().map(PathBuf::from));

    if let Some(path) = explicit {
        info!("Loading settings from: {}", path.display());
        let mut settings = Settings::from_file(&path)?;
        settings.merge_env();
        return Ok(settings);
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("mention-report/settings.yml"));
    }

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
