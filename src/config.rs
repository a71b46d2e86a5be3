//! Event source configuration.
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Tunables for an [`EventSource`](crate::source::EventSource).
///
/// Every field has a default, so an empty TOML document is a valid config.
///
/// ```toml
/// wait_slice_ms = 20
/// log_unknown = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Slice length used by `wait_event_until` between stop checks.
    pub wait_slice_ms: u64,
    /// Trace-log every record classified as `Unknown`.
    pub log_unknown: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            wait_slice_ms: 50,
            log_unknown: false,
        }
    }
}

impl SourceConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Slice length as a `Duration`. Never zero, so a cancellable wait
    /// always blocks a little between stop checks.
    pub fn wait_slice(&self) -> Duration {
        Duration::from_millis(self.wait_slice_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = SourceConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, SourceConfig::default());
        assert_eq!(cfg.wait_slice(), Duration::from_millis(50));
    }

    #[test]
    fn partial_document_overrides_fields() {
        let cfg = SourceConfig::from_toml_str("log_unknown = true").unwrap();
        assert!(cfg.log_unknown);
        assert_eq!(cfg.wait_slice_ms, 50);
    }

    #[test]
    fn zero_slice_is_clamped() {
        let cfg = SourceConfig::from_toml_str("wait_slice_ms = 0").unwrap();
        assert_eq!(cfg.wait_slice(), Duration::from_millis(1));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_types() {
        assert!(matches!(
            SourceConfig::from_toml_str("key_repeat = false"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SourceConfig::from_toml_str("wait_slice_ms = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            SourceConfig::load("/nonexistent/gamevents.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
