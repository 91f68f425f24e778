//! Application configuration and constants
//!
//! Central naming and timing values used across the application.
//! All branding and fixed timing should reference these constants
//! rather than hardcoding values.

/// The application name
pub const APP_NAME: &str = "G2 Weather";

/// The application short name (used in compact displays and file names)
pub const APP_NAME_SHORT: &str = "g2-weather";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Period of the background weather refresh, in seconds (15 minutes).
pub const REFRESH_INTERVAL_SECS: u64 = 15 * 60;

/// Window inside which repeated scroll events are treated as one swipe.
pub const SCROLL_COOLDOWN_MS: u64 = 300;

/// Number of lines kept by the diagnostic event log.
pub const EVENT_LOG_CAPACITY: usize = 200;

/// Application title for logs and headers. The version is kept apart in
/// [`APP_VERSION`].
pub const fn app_title() -> &'static str {
    APP_NAME
}
