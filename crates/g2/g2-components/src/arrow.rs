//! Wind direction arrow
//!
//! A filled dart whose tip points up at 0° and turns clockwise with the
//! rotation. Wind is reported as the bearing it blows *from*, so callers
//! pass `direction + 180` to point the arrow downwind.

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Triangle},
};

use crate::geometry::{point, rotate};
use crate::palette;

/// Dart outline in units of the arrow size: tip, left barb, notch, right barb.
const OUTLINE: [(f32, f32); 4] = [(0.0, -1.0), (-0.35, 0.4), (0.0, 0.15), (0.35, 0.4)];

/// Rotated arrow marker
pub struct WindArrow {
    size: u32,
    rotation_deg: f32,
    color: Gray4,
}

impl WindArrow {
    /// Arrow of half-length `size`, pointing up
    pub fn new(size: u32) -> Self {
        Self {
            size,
            rotation_deg: 0.0,
            color: palette::TEXT,
        }
    }

    /// Arrow pointing downwind for wind blowing from `direction_deg`
    pub fn downwind(size: u32, direction_deg: u16) -> Self {
        Self::new(size).rotation(f32::from(direction_deg) + 180.0)
    }

    /// Set clockwise rotation in degrees
    pub fn rotation(mut self, deg: f32) -> Self {
        self.rotation_deg = deg;
        self
    }

    /// Set arrow color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Outline vertices around `center`, in tip, left, notch, right order
    pub fn vertices(&self, center: Point) -> [Point; 4] {
        let s = self.size as f32;
        OUTLINE.map(|(fx, fy)| {
            let (x, y) = rotate(fx * s, fy * s, self.rotation_deg);
            point(center.x as f32 + x, center.y as f32 + y)
        })
    }

    /// Render arrow centered on `center`
    pub fn render<D>(&self, display: &mut D, center: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let [tip, left, notch, right] = self.vertices(center);
        let fill = PrimitiveStyle::with_fill(self.color);

        Triangle::new(tip, left, notch).into_styled(fill).draw(display)?;
        Triangle::new(tip, notch, right).into_styled(fill).draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrotated_tip_points_up() {
        let [tip, ..] = WindArrow::new(6).vertices(Point::new(50, 50));
        assert_eq!(tip, Point::new(50, 44));
    }

    #[test]
    fn test_north_wind_points_south() {
        let [tip, ..] = WindArrow::downwind(6, 0).vertices(Point::new(50, 50));
        assert_eq!(tip, Point::new(50, 56));
    }

    #[test]
    fn test_west_wind_points_east() {
        let [tip, ..] = WindArrow::downwind(10, 270).vertices(Point::new(0, 0));
        assert_eq!(tip, Point::new(10, 0));
    }
}
