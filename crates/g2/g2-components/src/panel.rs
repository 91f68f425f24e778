//! Panel outlines and separator rules

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle},
};

use crate::palette;

/// Rounded-corner outline around a region
pub struct Panel {
    bounds: Rectangle,
    radius: u32,
    stroke: Gray4,
}

impl Panel {
    /// Outline `bounds` with the default 8px corner radius
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            radius: 8,
            stroke: palette::OUTLINE,
        }
    }

    /// Set outline color
    pub fn stroke(mut self, color: Gray4) -> Self {
        self.stroke = color;
        self
    }

    /// Panel bounds
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Render panel to display
    pub fn render<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        RoundedRectangle::with_equal_corners(self.bounds, Size::new(self.radius, self.radius))
            .into_styled(PrimitiveStyle::with_stroke(self.stroke, 1))
            .draw(display)
    }
}

/// 1px rule between two points
pub struct Separator {
    start: Point,
    end: Point,
    color: Gray4,
}

impl Separator {
    /// Horizontal rule on row `y` from `x0` to `x1`
    pub fn horizontal(y: i32, x0: i32, x1: i32) -> Self {
        Self {
            start: Point::new(x0, y),
            end: Point::new(x1, y),
            color: palette::SEPARATOR,
        }
    }

    /// Vertical rule on column `x` from `y0` to `y1`
    pub fn vertical(x: i32, y0: i32, y1: i32) -> Self {
        Self {
            start: Point::new(x, y0),
            end: Point::new(x, y1),
            color: palette::SEPARATOR,
        }
    }

    /// Set rule color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Render rule to display
    pub fn render<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        Line::new(self.start, self.end)
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(display)
    }
}
