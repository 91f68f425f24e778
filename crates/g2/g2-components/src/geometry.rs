//! Float-to-pixel helpers for components laid out in fractional units.

use embedded_graphics::prelude::Point;

/// Round a fractional position to the nearest pixel.
pub(crate) fn point(x: f32, y: f32) -> Point {
    Point::new(libm::roundf(x) as i32, libm::roundf(y) as i32)
}

/// Pixel diameter of a circle with radius `r`, at least 1.
pub(crate) fn diameter(r: f32) -> u32 {
    (libm::roundf(r * 2.0) as u32).max(1)
}

/// Stroke width in whole pixels, at least 1.
pub(crate) fn stroke_width(w: f32) -> u32 {
    (libm::roundf(w) as u32).max(1)
}

/// Rotate `(x, y)` clockwise by `deg` in screen coordinates (y down).
pub(crate) fn rotate(x: f32, y: f32, deg: f32) -> (f32, f32) {
    let rad = deg * (core::f32::consts::PI / 180.0);
    let (sin, cos) = (libm::sinf(rad), libm::cosf(rad));
    (x * cos - y * sin, x * sin + y * cos)
}
