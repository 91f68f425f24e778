//! Gray levels used across screens.
//!
//! The G2 is a 16-level grayscale panel that draws light on black. Each
//! constant is calibrated from the `#rgb` gray it stands for, at
//! `round(level / 17)`.

use embedded_graphics::pixelcolor::{Gray4, GrayColor};

/// Background, `#000`.
pub const BACKGROUND: Gray4 = Gray4::BLACK;
/// Primary text and strokes, `#fff`.
pub const TEXT: Gray4 = Gray4::WHITE;
/// Secondary text (descriptions), `#aaa`.
pub const TEXT_MUTED: Gray4 = Gray4::new(0xA);
/// Captions and minimum temperatures, `#888`.
pub const TEXT_DIM: Gray4 = Gray4::new(0x8);
/// Low-priority values, `#777`.
pub const TEXT_FAINT: Gray4 = Gray4::new(0x7);
/// Precipitation sums, `#666`.
pub const TEXT_FAINTER: Gray4 = Gray4::new(0x6);
/// Axis labels and dim bars, `#555`.
pub const AXIS: Gray4 = Gray4::new(0x5);
/// Header separator, `#444`.
pub const SEPARATOR: Gray4 = Gray4::new(0x4);
/// Panel outlines and area fills, `#333`.
pub const OUTLINE: Gray4 = Gray4::new(0x3);
/// Gridlines and row rules, `#222`.
pub const GRID: Gray4 = Gray4::new(0x2);
/// Bar tracks and the gust area, `#181818`.
pub const TRACK: Gray4 = Gray4::new(0x1);
/// Highlighted precipitation, `#aaf` rendered to gray.
pub const ACCENT: Gray4 = Gray4::new(0xC);
