//! Platform seams for the G2 weather display.
//!
//! This crate holds the trait abstractions and wire shapes shared by the
//! rendering core and the host application, so that the core can be driven
//! and tested without a pair of glasses attached.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (weather-app crate)
//!         ↓
//! Feature Layers (ui, weather-screens, g2-components)
//!         ↓
//! Platform seams (this crate - traits + page/event shapes)
//!         ↓
//! Display host (glasses bridge, or the file bridge on desktop)
//! ```
//!
//! # Seams
//!
//! - [`DisplayBridge`] - page layout + image upload to the glasses
//! - [`InputSource`] - raw input events from the glasses host
//!
//! # Features
//!
//! - `std`: Standard library support (`std::error::Error` impls, string tags
//!   in raw events kept whole)
//! - `serde`: (De)serialise page layouts and raw events as JSON-shaped data

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)]
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-threaded host loop, Send bounds not needed

pub mod config;
pub mod display;
pub mod input;
pub mod text;

pub use display::{
    BridgeError, Container, ContainerFrame, DisplayBridge, ImageContainer, ImageUpdate,
    ImageUploadResult, ListContainer, ListItem, PageLayout, TextContainer, DISPLAY_HEIGHT,
    DISPLAY_SIZE, DISPLAY_WIDTH, IMAGE_HEIGHT, IMAGE_WIDTH,
};
pub use input::{ContainerEvent, InputSource, JsonData, RawEvent, RawEventType};
