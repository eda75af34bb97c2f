//! Configuration management and validation.
//!
//! Provides the document-template configuration (which physical grid
//! columns feed each logical time slot), the institution name reported in
//! headers, and the optional fallback extraction service. Settings are
//! layered: defaults, then a JSON config file, then environment, then CLI
//! overrides applied by the caller.

use crate::constants::{FALLBACK_EXTRACT_PATH, FALLBACK_URL_ENV, SLOT_COUNT, header};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Physical grid column(s) holding one logical time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSource {
    /// Slot content sits in one column
    Single(usize),
    /// Slot content is split across two columns, joined in this order
    Split(usize, usize),
}

/// Mapping from logical slot index to physical grid columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnLayout {
    slots: Vec<ColumnSource>,
}

impl Default for ColumnLayout {
    /// Layout of the single supported timetable template
    fn default() -> Self {
        Self {
            slots: vec![
                ColumnSource::Single(2),
                ColumnSource::Single(4),
                ColumnSource::Split(6, 7),
                ColumnSource::Split(8, 9),
                ColumnSource::Single(11),
                ColumnSource::Split(12, 13),
            ],
        }
    }
}

impl ColumnLayout {
    /// Create a layout, requiring exactly one source per time slot
    pub fn new(slots: Vec<ColumnSource>) -> Result<Self> {
        let layout = Self { slots };
        layout.validate()?;
        Ok(layout)
    }

    pub fn sources(&self) -> &[ColumnSource] {
        &self.slots
    }

    pub fn validate(&self) -> Result<()> {
        if self.slots.len() != SLOT_COUNT {
            return Err(Error::configuration(format!(
                "column layout must map exactly {} time slots, found {}",
                SLOT_COUNT,
                self.slots.len()
            )));
        }
        Ok(())
    }
}

/// External fallback extraction service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Base URL of the service, e.g. `http://localhost:5000`
    pub endpoint: String,
}

impl FallbackConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Full URL of the extraction route
    pub fn extract_url(&self) -> String {
        format!(
            "{}{}",
            self.endpoint.trim().trim_end_matches('/'),
            FALLBACK_EXTRACT_PATH
        )
    }
}

/// Top-level processor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    pub column_layout: ColumnLayout,
    pub institution: String,
    pub fallback: Option<FallbackConfig>,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            column_layout: ColumnLayout::default(),
            institution: header::DEFAULT_INSTITUTION.to_string(),
            fallback: None,
        }
    }
}

impl TimetableConfig {
    /// Load a configuration file, falling back to defaults for absent keys
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, then the optional file, then environment overrides
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(std::env::var(FALLBACK_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply the fallback URL taken from the environment, if any
    pub fn apply_env_overrides(&mut self, fallback_url: Option<String>) {
        if let Some(url) = fallback_url.filter(|url| !url.trim().is_empty()) {
            debug!("Fallback endpoint taken from {}", FALLBACK_URL_ENV);
            self.fallback = Some(FallbackConfig::new(url));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.column_layout.validate()?;

        if let Some(fallback) = &self.fallback {
            if fallback.endpoint.trim().is_empty() {
                return Err(Error::configuration("fallback endpoint must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_layout() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.sources().len(), SLOT_COUNT);
        assert_eq!(layout.sources()[2], ColumnSource::Split(6, 7));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_rejects_wrong_slot_count() {
        let result = ColumnLayout::new(vec![ColumnSource::Single(1)]);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_layout_json_shape() {
        let json = serde_json::to_string(&ColumnLayout::default()).unwrap();
        assert_eq!(json, "[2,4,[6,7],[8,9],11,[12,13]]");

        let layout: ColumnLayout = serde_json::from_str("[1,[2,3],4,5,6,[7,8]]").unwrap();
        assert_eq!(layout.sources()[1], ColumnSource::Split(2, 3));
    }

    #[test]
    fn test_config_file_partial_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"column_layout": [1, 3, 5, [6, 7], 9, 10], "fallback": {{"endpoint": "http://localhost:5000/"}}}}"#
        )
        .unwrap();

        let config = TimetableConfig::load_layered(Some(file.path())).unwrap();
        assert_eq!(config.column_layout.sources()[0], ColumnSource::Single(1));
        assert_eq!(config.institution, header::DEFAULT_INSTITUTION);
        assert_eq!(
            config.fallback.unwrap().extract_url(),
            "http://localhost:5000/api/schedule/extract-with-gemini"
        );
    }

    #[test]
    fn test_config_file_invalid_layout() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"column_layout": [1, 2]}}"#).unwrap();

        let result = TimetableConfig::load_layered(Some(file.path()));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_env_override() {
        let mut config = TimetableConfig::default();
        config.apply_env_overrides(Some("  ".to_string()));
        assert!(config.fallback.is_none());

        config.apply_env_overrides(Some("http://fallback".to_string()));
        assert_eq!(config.fallback, Some(FallbackConfig::new("http://fallback")));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let config = TimetableConfig {
            fallback: Some(FallbackConfig::new("")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
