//! Runtime configuration.
//!
//! Loaded from an optional JSON file; every field has a default so an empty
//! object (or no file at all) is a valid configuration. CLI flags override
//! individual fields after loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use platform::config::{EVENT_LOG_CAPACITY, REFRESH_INTERVAL_SECS, SCROLL_COOLDOWN_MS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ui::Location;

/// Configuration errors. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Host application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Place to show weather for. Without one, refreshes do nothing.
    pub location: Option<Location>,
    /// Snapshot JSON read on every refresh.
    pub fixture_path: PathBuf,
    /// Where the file bridge writes page layouts and images.
    pub output_dir: PathBuf,
    /// Background refresh period.
    pub refresh_interval_secs: u64,
    /// Window in which repeated scroll events are dropped.
    pub scroll_cooldown_ms: u64,
    /// Diagnostic log lines kept.
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            location: None,
            fixture_path: PathBuf::from("fixtures/sample_weather.json"),
            output_dir: PathBuf::from("out"),
            refresh_interval_secs: REFRESH_INTERVAL_SECS,
            scroll_cooldown_ms: SCROLL_COOLDOWN_MS,
            log_capacity: EVENT_LOG_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Reject values the runtime cannot work with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid("refresh_interval_secs must be positive"));
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::Invalid("log_capacity must be positive"));
        }
        Ok(self)
    }

    /// Background refresh period.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
