//! Weather icon component
//!
//! Maps a WMO condition code to one of seven archetypes and draws it as
//! filled vector primitives around a center point. Every primitive carries
//! its own style value, so drawing an icon never changes the color or line
//! width any other drawing code sees, on success or on an early error.

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle},
};

use crate::geometry::{diameter, point, stroke_width};
use crate::palette;

/// Size multipliers per archetype, so a sun and a cloud requested at the
/// same size occupy a similar box.
pub mod scale {
    /// Bare sun.
    pub const CLEAR: f32 = 1.0;
    /// Sun behind a cloud.
    pub const PARTLY_CLOUDY: f32 = 1.3;
    /// Two clouds.
    pub const CLOUDY: f32 = 1.5;
    /// Haze strokes.
    pub const FOG: f32 = 1.4;
    /// Cloud with streaks.
    pub const RAIN: f32 = 1.4;
    /// Cloud with flakes.
    pub const SNOW: f32 = 1.4;
    /// Cloud with a bolt.
    pub const STORM: f32 = 1.3;
}

/// Icon archetypes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IconKind {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Storm,
}

impl IconKind {
    /// Archetype for a WMO condition code. Unmapped codes are cloudy.
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => IconKind::Clear,
            1..=2 => IconKind::PartlyCloudy,
            3 => IconKind::Cloudy,
            45 | 48 => IconKind::Fog,
            51..=67 | 80..=82 => IconKind::Rain,
            71..=77 | 85..=86 => IconKind::Snow,
            95.. => IconKind::Storm,
            _ => IconKind::Cloudy,
        }
    }

    /// Size multiplier for this archetype.
    pub const fn scale(self) -> f32 {
        match self {
            IconKind::Clear => scale::CLEAR,
            IconKind::PartlyCloudy => scale::PARTLY_CLOUDY,
            IconKind::Cloudy => scale::CLOUDY,
            IconKind::Fog => scale::FOG,
            IconKind::Rain => scale::RAIN,
            IconKind::Snow => scale::SNOW,
            IconKind::Storm => scale::STORM,
        }
    }
}

/// Weather icon component
pub struct WeatherIcon {
    kind: IconKind,
    size: u32,
    color: Gray4,
}

impl WeatherIcon {
    /// Create a new icon of the given archetype
    pub fn new(kind: IconKind, size: u32) -> Self {
        Self {
            kind,
            size,
            color: palette::TEXT,
        }
    }

    /// Create the icon for a WMO condition code
    pub fn for_code(code: u8, size: u32) -> Self {
        Self::new(IconKind::from_code(code), size)
    }

    /// Base stroke width, `max(1, size / 12)`
    pub fn line_width(&self) -> u32 {
        (self.size / 12).max(1)
    }

    /// Render icon centered on `center`
    pub fn render<D>(&self, display: &mut D, center: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let s = self.size as f32 * self.kind.scale();
        let (cx, cy) = (center.x as f32, center.y as f32);

        match self.kind {
            IconKind::Clear => self.sun(display, cx, cy, s),
            IconKind::PartlyCloudy => {
                self.sun(display, cx - s * 0.3, cy - s * 0.25, s * 0.55)?;
                self.cloud(display, cx + s * 0.15, cy + s * 0.15, s, s * 0.5)
            }
            IconKind::Cloudy => {
                self.cloud(display, cx, cy - s * 0.1, s * 1.1, s * 0.55)?;
                self.cloud(display, cx - s * 0.25, cy + s * 0.2, s * 0.8, s * 0.4)
            }
            IconKind::Fog => self.fog(display, cx, cy, s * 1.2, s * 0.5),
            IconKind::Rain => {
                self.cloud(display, cx, cy - s * 0.25, s * 1.1, s * 0.45)?;
                self.rain(display, cx, cy + s * 0.3, s * 0.8, s * 0.35)
            }
            IconKind::Snow => {
                self.cloud(display, cx, cy - s * 0.25, s * 1.1, s * 0.45)?;
                self.snow(display, cx, cy + s * 0.3, s * 0.8, s * 0.3)
            }
            IconKind::Storm => {
                self.cloud(display, cx, cy - s * 0.3, s * 1.1, s * 0.45)?;
                self.lightning(display, cx, cy + s * 0.15, s * 0.5)
            }
        }
    }

    fn sun<D>(&self, display: &mut D, cx: f32, cy: f32, r: f32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        Circle::with_center(point(cx, cy), diameter(r * 0.4))
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(display)?;

        let ray = PrimitiveStyle::with_stroke(self.color, self.line_width());
        for i in 0..8 {
            let angle = i as f32 * core::f32::consts::FRAC_PI_4;
            let (dx, dy) = (libm::cosf(angle), libm::sinf(angle));
            Line::new(
                point(cx + dx * r * 0.55, cy + dy * r * 0.55),
                point(cx + dx * r, cy + dy * r),
            )
            .into_styled(ray)
            .draw(display)?;
        }
        Ok(())
    }

    fn cloud<D>(&self, display: &mut D, cx: f32, cy: f32, w: f32, h: f32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let fill = PrimitiveStyle::with_fill(self.color);
        for (x, y, r) in [
            (cx - w * 0.25, cy, h * 0.45),
            (cx, cy - h * 0.2, h * 0.55),
            (cx + w * 0.25, cy, h * 0.45),
        ] {
            Circle::with_center(point(x, y), diameter(r))
                .into_styled(fill)
                .draw(display)?;
        }
        Rectangle::new(
            point(cx - w * 0.35, cy),
            Size::new(stroke_width(w * 0.7), stroke_width(h * 0.3)),
        )
        .into_styled(fill)
        .draw(display)
    }

    fn rain<D>(&self, display: &mut D, cx: f32, cy: f32, w: f32, s: f32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let streak = PrimitiveStyle::with_stroke(self.color, stroke_width((s * 0.15).max(1.0)));
        for i in 0..5 {
            let x = cx - w / 2.0 + (i as f32 + 0.5) * (w / 5.0);
            let y = cy + (i % 2) as f32 * s * 0.5;
            Line::new(point(x, y), point(x - s * 0.25, y + s))
                .into_styled(streak)
                .draw(display)?;
        }
        Ok(())
    }

    fn snow<D>(&self, display: &mut D, cx: f32, cy: f32, w: f32, s: f32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let flake = PrimitiveStyle::with_fill(self.color);
        let r = (s * 0.2).max(1.5);
        for i in 0..6 {
            let x = cx - w / 2.0 + (i as f32 + 0.5) * (w / 6.0);
            let y = cy + (i % 2) as f32 * s * 0.7;
            Circle::with_center(point(x, y), diameter(r))
                .into_styled(flake)
                .draw(display)?;
        }
        Ok(())
    }

    fn fog<D>(&self, display: &mut D, cx: f32, cy: f32, w: f32, s: f32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let haze = PrimitiveStyle::with_stroke(self.color, stroke_width((s * 0.2).max(1.0)));
        for i in 0..4 {
            let y = cy - s * 0.8 + i as f32 * s * 0.55;
            let inset = if i % 2 == 0 { 0.0 } else { s * 0.3 };
            Line::new(
                point(cx - w / 2.0 + inset, y),
                point(cx + w / 2.0 - inset, y),
            )
            .into_styled(haze)
            .draw(display)?;
        }
        Ok(())
    }

    fn lightning<D>(&self, display: &mut D, cx: f32, cy: f32, s: f32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let at = |fx: f32, fy: f32| point(cx + fx * s, cy + fy * s);
        let top = at(0.3, 0.0);
        let upper_left = at(-0.3, 0.5);
        let upper_right = at(0.1, 0.5);
        let lower_left = at(-0.2, 0.65);
        let lower_right = at(0.2, 0.65);
        let tip = at(-0.5, 1.2);

        let fill = PrimitiveStyle::with_fill(self.color);
        for (a, b, c) in [
            (top, upper_left, upper_right),
            (upper_left, upper_right, lower_right),
            (upper_left, lower_right, lower_left),
            (lower_left, lower_right, tip),
        ] {
            Triangle::new(a, b, c).into_styled(fill).draw(display)?;
        }
        Ok(())
    }
}
