//! Page position indicator: one dot per screen, centered horizontally.

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
};

use crate::palette;

/// Row of page dots; the active page is filled, the rest are outlined.
pub struct PageDots {
    total: u32,
    active: u32,
    radius: u32,
    gap: u32,
    color: Gray4,
}

impl PageDots {
    /// Dots for `total` pages with `active` highlighted
    pub fn new(total: u32, active: u32) -> Self {
        Self {
            total,
            active,
            radius: 3,
            gap: 12,
            color: palette::TEXT,
        }
    }

    /// Set dot color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Width of the whole row
    pub fn row_width(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        self.total * self.radius * 2 + (self.total - 1) * self.gap
    }

    /// Center of dot `index` for a display `width` wide, on row `y`
    pub fn dot_center(&self, index: u32, width: u32, y: i32) -> Point {
        let start = (width as i32 - self.row_width() as i32) / 2 + self.radius as i32;
        let step = (self.radius * 2 + self.gap) as i32;
        Point::new(start + index as i32 * step, y)
    }

    /// Render the row centered in `width`, dot centers on `y`
    pub fn render<D>(&self, display: &mut D, width: u32, y: i32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let diameter = self.radius * 2 + 1;
        for i in 0..self.total {
            let style = if i == self.active {
                PrimitiveStyle::with_fill(self.color)
            } else {
                PrimitiveStyle::with_stroke(self.color, 1)
            };
            Circle::with_center(self.dot_center(i, width, y), diameter)
                .into_styled(style)
                .draw(display)?;
        }
        Ok(())
    }
}
