//! Shared screen geometry.

use platform::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Display width in pixels.
pub const WIDTH: i32 = DISPLAY_WIDTH as i32;
/// Display height in pixels.
pub const HEIGHT: i32 = DISPLAY_HEIGHT as i32;

/// Outer margin on every side.
pub const PADDING: i32 = 8;
/// Baseline of the header row text.
pub const HEADER_BASELINE: i32 = 20;
/// Row of the rule under the header.
pub const SEPARATOR_Y: i32 = 30;
/// First row of content below the header rule.
pub const BODY_TOP: i32 = 38;
/// Rows kept free at the bottom for the page dots.
pub const FOOTER_RESERVE: i32 = 22;
/// Centre row of the page dots.
pub const DOTS_Y: i32 = HEIGHT - 10;
