//! Vertical bar component: a full-height track with a bottom-anchored fill

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
};

use crate::palette;

/// Fill height for `percent` (0–100) of a `height`-pixel track.
///
/// Zero percent draws nothing. Any positive percent draws at least
/// `min_visible` pixels, and the fill never exceeds the track.
pub fn scaled_fill(percent: u8, height: u32, min_visible: u32) -> u32 {
    if percent == 0 || height == 0 {
        return 0;
    }
    let pct = u32::from(percent.min(100));
    let scaled = (pct * height + 50) / 100;
    scaled.max(min_visible).min(height)
}

/// Vertical bar
pub struct Bar {
    width: u32,
    height: u32,
    fill_height: u32,
    radius: u32,
    track: Gray4,
    fill: Gray4,
}

impl Bar {
    /// Create an empty bar
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill_height: 0,
            radius: 3,
            track: palette::TRACK,
            fill: palette::TEXT,
        }
    }

    /// Set the filled height in pixels (clamped to the track)
    pub fn fill_height(mut self, fill_height: u32) -> Self {
        self.fill_height = fill_height.min(self.height);
        self
    }

    /// Set colors
    pub fn colors(mut self, track: Gray4, fill: Gray4) -> Self {
        self.track = track;
        self.fill = fill;
        self
    }

    /// Get dimensions
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Top edge of the fill, relative to the bar's top
    pub fn fill_top(&self) -> u32 {
        self.height - self.fill_height
    }

    /// Render bar with its top-left corner at `position`
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let corners = Size::new(self.radius, self.radius);

        RoundedRectangle::with_equal_corners(Rectangle::new(position, self.size()), corners)
            .into_styled(PrimitiveStyle::with_fill(self.track))
            .draw(display)?;

        if self.fill_height > 0 {
            let top = position + Point::new(0, self.fill_top() as i32);
            RoundedRectangle::with_equal_corners(
                Rectangle::new(top, Size::new(self.width, self.fill_height)),
                corners,
            )
            .into_styled(PrimitiveStyle::with_fill(self.fill))
            .draw(display)?;
        }

        Ok(())
    }
}
