//! Weather data sources.
//!
//! The remote forecast service sits outside this repository; the host binary
//! reads a snapshot from a local JSON fixture instead, re-reading it on every
//! refresh so edits show up on the next cycle.

use std::path::{Path, PathBuf};

use thiserror::Error;
use ui::{conditions, Location, WeatherSnapshot};

/// Why a refresh produced no snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed weather data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("weather unavailable: {0}")]
    Unavailable(String),
}

/// Produces a fresh snapshot for a location.
#[allow(async_fn_in_trait)] // single-threaded runtime, Send bounds not needed
pub trait WeatherSource {
    /// Fetch the current snapshot for `location`.
    async fn fetch(&mut self, location: &Location) -> Result<WeatherSnapshot, FetchError>;
}

/// Snapshot read from a JSON file.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WeatherSource for FixtureSource {
    async fn fetch(&mut self, location: &Location) -> Result<WeatherSnapshot, FetchError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;
        let snapshot: WeatherSnapshot = serde_json::from_str(&raw)?;
        tracing::debug!(
            path = %self.path.display(),
            hours = snapshot.hourly.len(),
            days = snapshot.daily.len(),
            "fixture loaded"
        );
        Ok(complete(snapshot, location))
    }
}

/// Fill what the fixture may leave out: the city comes from the configured
/// location, the description from the condition code.
pub fn complete(mut snapshot: WeatherSnapshot, location: &Location) -> WeatherSnapshot {
    if snapshot.city.is_empty() {
        snapshot.city = location.name.clone();
    }
    if snapshot.current_description.is_empty() {
        snapshot.current_description =
            platform::text::truncated(conditions::description(snapshot.current_wmo_code));
    }
    snapshot
}
