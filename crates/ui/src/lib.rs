//! Application UI layer: screen set, navigation state, weather snapshot and
//! input event handling.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.
//!
//! ```text
//! RawEvent ──normalize──▶ CanonicalEvent ──Dispatcher──▶ Navigator
//!                                              │
//!                                              └──▶ RefreshTrigger
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod conditions;
pub mod dispatch;
pub mod event;
pub mod navigation;
pub mod screen;
pub mod weather;

pub use dispatch::{Dispatcher, Effect, EventSink, RefreshTrigger, ScrollCooldown};
pub use event::{normalize, CanonicalEvent};
pub use navigation::Navigator;
pub use screen::Screen;
pub use weather::{DailyPoint, HourlyPoint, Location, WeatherSnapshot};
