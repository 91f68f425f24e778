//! Property-based tests for icon mapping and chart geometry.

use embedded_graphics::{pixelcolor::Gray4, prelude::*};
use g2_canvas::Framebuffer;
use g2_components::prelude::*;

const ALL_KINDS: [IconKind; 7] = [
    IconKind::Clear,
    IconKind::PartlyCloudy,
    IconKind::Cloudy,
    IconKind::Fog,
    IconKind::Rain,
    IconKind::Snow,
    IconKind::Storm,
];

proptest::proptest! {
    /// Every code 0–99 maps to exactly one archetype, the same one every time.
    #[test]
    fn code_mapping_is_total_and_deterministic(code in 0u8..=99) {
        let kind = IconKind::from_code(code);
        assert!(ALL_KINDS.contains(&kind));
        assert_eq!(IconKind::from_code(code), kind);
    }

    /// Bar fill never exceeds the track and grows with the percentage.
    #[test]
    fn scaled_fill_is_monotonic_and_bounded(a in 0u8..=100, b in 0u8..=100, h in 1u32..400) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let f_lo = scaled_fill(lo, h, 4);
        let f_hi = scaled_fill(hi, h, 4);
        assert!(f_lo <= f_hi, "fill({lo})={f_lo} > fill({hi})={f_hi}");
        assert!(f_hi <= h);
        if hi > 0 {
            assert!(f_hi >= 4.min(h));
        }
    }

    /// Icons draw something and stay inside a box a few sizes around the center.
    #[test]
    fn icon_stays_near_center(code in 0u8..=99, size in 6u32..40) {
        let mut fb = Framebuffer::new(240, 240);
        let center = Point::new(120, 120);
        WeatherIcon::for_code(code, size).render(&mut fb, center).unwrap();

        assert!(fb.lit_pixel_count() > 0);
        let reach = (size * 2 + 4) as i32;
        for y in 0..240u32 {
            for x in 0..240u32 {
                if fb.get_pixel(x, y) != Some(Gray4::BLACK) {
                    assert!((x as i32 - center.x).abs() <= reach, "x={x} for code {code}");
                    assert!((y as i32 - center.y).abs() <= reach, "y={y} for code {code}");
                }
            }
        }
    }

    /// Arrows keep their length under any rotation.
    #[test]
    fn arrow_tip_distance_is_rotation_invariant(dir in 0u16..360) {
        let [tip, ..] = WindArrow::downwind(10, dir).vertices(Point::zero());
        let d2 = tip.x * tip.x + tip.y * tip.y;
        assert!((81..=121).contains(&d2), "tip {tip:?} at {dir}°");
    }
}

#[test]
fn icon_uses_only_its_own_color() {
    let mut fb = Framebuffer::new(100, 100);
    WeatherIcon::for_code(95, 16)
        .color(palette::TEXT_MUTED)
        .render(&mut fb, Point::new(50, 50))
        .unwrap();
    for y in 0..100 {
        for x in 0..100 {
            let p = fb.get_pixel(x, y).unwrap();
            assert!(p == Gray4::BLACK || p == palette::TEXT_MUTED);
        }
    }
}

#[test]
fn page_dots_fill_only_active() {
    let mut fb = Framebuffer::new(576, 288);
    let dots = PageDots::new(5, 2);
    dots.render(&mut fb, 576, 278).unwrap();
    for i in 0..5 {
        let c = dots.dot_center(i, 576, 278);
        let lit = fb.get_pixel(c.x as u32, c.y as u32) == Some(palette::TEXT);
        assert_eq!(lit, i == 2, "dot {i}");
    }
}

#[test]
fn bar_fill_sits_on_track_bottom() {
    let mut fb = Framebuffer::new(20, 100);
    Bar::new(10, 100)
        .fill_height(30)
        .colors(palette::TRACK, palette::TEXT)
        .render(&mut fb, Point::zero())
        .unwrap();
    assert_eq!(fb.get_pixel(5, 99), Some(palette::TEXT));
    assert_eq!(fb.get_pixel(5, 70), Some(palette::TEXT));
    assert_eq!(fb.get_pixel(5, 69), Some(palette::TRACK));
}

#[test]
fn label_render_reports_bounds() {
    let mut fb = Framebuffer::new(200, 40);
    let bounds = Label::new("Today")
        .bold(true)
        .align(TextAlign::Center)
        .render(&mut fb, Point::new(100, 20))
        .unwrap();
    assert!(bounds.top_left.x < 100);
    assert!(bounds.top_left.x + bounds.size.width as i32 > 100);
    assert!(fb.lit_pixel_count() > 0);
}
