//! weather-app - host application for the G2 weather display.
//!
//! Wires the rendering core to its collaborators: a weather source, a display
//! bridge, an input source and the refresh channel, and drives them from one
//! cooperative loop.
//!
//! ```text
//! stdin (JSON lines) ──▶ JsonLinesSource ──┐
//! refresh channel ─────────────────────────┼──▶ runtime::run ──▶ App ──▶ FileBridge
//! background timer ────────────────────────┘                     │
//!                                                   FixtureSource ┘
//! ```

// TODO: Add rustdoc to all public items (tracked as tech debt)
#![allow(missing_docs)]

pub mod app;
pub mod bridge;
pub mod config;
pub mod input;
pub mod log;
pub mod page;
pub mod refresh;
pub mod render;
pub mod runtime;
pub mod source;

pub use app::App;
pub use bridge::{FileBridge, FileBridgeError};
pub use config::{AppConfig, ConfigError};
pub use input::JsonLinesSource;
pub use log::DiagnosticLog;
pub use refresh::{RefreshHandle, RefreshRequests};
pub use render::PngRenderer;
pub use runtime::{run, RuntimeOptions, Shutdown};
pub use source::{FetchError, FixtureSource, WeatherSource};
