//! Filled area under a series of points, down to a baseline row.
//!
//! Each segment between neighbouring points is filled as a trapezoid made of
//! two triangles, so the shape needs no polygon fill support from the target.

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Triangle},
};

use crate::palette;

/// Area chart fill
pub struct Area<'a> {
    points: &'a [Point],
    baseline: i32,
    start_x: Option<i32>,
    color: Gray4,
}

impl<'a> Area<'a> {
    /// Fill between `points` (left to right) and row `baseline`
    pub fn new(points: &'a [Point], baseline: i32) -> Self {
        Self {
            points,
            baseline,
            start_x: None,
            color: palette::OUTLINE,
        }
    }

    /// Start the area on the baseline at `x`, left of the first point
    pub fn from_x(mut self, x: i32) -> Self {
        self.start_x = Some(x);
        self
    }

    /// Set fill color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Render the area
    pub fn render<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let style = PrimitiveStyle::with_fill(self.color);

        if let (Some(x), Some(first)) = (self.start_x, self.points.first()) {
            Triangle::new(
                Point::new(x, self.baseline),
                *first,
                Point::new(first.x, self.baseline),
            )
            .into_styled(style)
            .draw(display)?;
        }

        for pair in self.points.windows(2) {
            let &[a, b] = pair else { continue };
            let a_base = Point::new(a.x, self.baseline);
            let b_base = Point::new(b.x, self.baseline);
            Triangle::new(a, b, b_base).into_styled(style).draw(display)?;
            Triangle::new(a, b_base, a_base)
                .into_styled(style)
                .draw(display)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g2_canvas::Framebuffer;

    #[test]
    fn test_area_fills_under_line() {
        let mut fb = Framebuffer::new(60, 60);
        let points = [Point::new(10, 20), Point::new(50, 20)];
        Area::new(&points, 50)
            .color(Gray4::WHITE)
            .render(&mut fb)
            .unwrap();
        assert_eq!(fb.get_pixel(30, 35), Some(Gray4::WHITE));
        assert_eq!(fb.get_pixel(30, 10), Some(Gray4::BLACK));
        assert_eq!(fb.get_pixel(55, 35), Some(Gray4::BLACK));
    }

    #[test]
    fn test_area_lead_in_from_baseline() {
        let mut fb = Framebuffer::new(60, 60);
        let points = [Point::new(20, 10), Point::new(40, 10)];
        Area::new(&points, 50)
            .from_x(0)
            .color(Gray4::WHITE)
            .render(&mut fb)
            .unwrap();
        // Inside the lead-in triangle, close to the baseline
        assert_eq!(fb.get_pixel(15, 48), Some(Gray4::WHITE));
    }

    #[test]
    fn test_single_point_draws_nothing_without_lead_in() {
        let mut fb = Framebuffer::new(20, 20);
        let points = [Point::new(10, 5)];
        Area::new(&points, 15).render(&mut fb).unwrap();
        assert_eq!(fb.lit_pixel_count(), 0);
    }
}
