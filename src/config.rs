//! Read-only application settings.
//!
//! Settings only seed UI defaults and ingestion options. The font library
//! itself never outlives the session, so nothing here is written back.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::library::IngestOptions;

// Default configuration
pub const DEFAULT_PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog";
pub const DEFAULT_FONT_SIZE: f32 = 48.0;
pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 128.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Initial text of the try page.
    pub preview_text: String,
    /// Initial preview size in points.
    pub font_size: f32,
    /// "dark" or "light".
    pub theme: String,
    /// Mime types accepted as fonts in addition to `font/ttf` and `font/otf`.
    pub extra_mime_types: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_text: DEFAULT_PREVIEW_TEXT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            theme: "dark".to_string(),
            extra_mime_types: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings JSON, clamping out-of-range values.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(content)?;
        settings.font_size = settings.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        Ok(settings)
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            extra_mime_types: self.extra_mime_types.clone(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("app", "typeset", "typeset").map(|proj| proj.config_dir().join("settings.json"))
}

/// Load settings from the config directory, falling back to defaults.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    let Ok(content) = fs::read_to_string(&path) else {
        return Settings::default();
    };
    match Settings::from_json(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring malformed settings");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings = Settings::from_json(r#"{"theme": "light"}"#).unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.preview_text, DEFAULT_PREVIEW_TEXT);
        assert_eq!(settings.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_font_size_is_clamped() {
        let settings = Settings::from_json(r#"{"font_size": 1000}"#).unwrap();
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_ingest_options() {
        let settings =
            Settings::from_json(r#"{"extra_mime_types": ["font/sfnt"]}"#).unwrap();
        assert_eq!(settings.ingest_options().extra_mime_types, vec!["font/sfnt"]);
    }

    #[test]
    fn test_malformed_settings_error() {
        assert!(Settings::from_json("{not json").is_err());
    }
}
