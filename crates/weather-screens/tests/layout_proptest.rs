//! Property tests for chart scaling and screen rendering bounds.

use g2_canvas::Framebuffer;
use proptest::prelude::*;
use ui::{HourlyPoint, Screen, WeatherSnapshot};
use weather_screens::{rain, render_screen_to, wind};

fn snapshot(hours: &[(u8, u16, u16)]) -> WeatherSnapshot {
    let mut w = WeatherSnapshot::default();
    for &(prob, speed, gust) in hours {
        let _ = w.hourly.push(HourlyPoint {
            precip_prob: prob,
            wind_speed: speed,
            wind_gust: gust.max(speed),
            ..HourlyPoint::default()
        });
    }
    w
}

proptest! {
    #[test]
    fn rain_fill_never_leaves_the_track(prob in 0u8..=100) {
        let fill = rain::bar_fill(prob);
        prop_assert!(fill <= (rain::CHART_BOTTOM - rain::CHART_TOP) as u32);
        prop_assert_eq!(fill == 0, prob == 0);
        if prob > 0 {
            prop_assert!(fill >= rain::MIN_VISIBLE_FILL);
        }
    }

    #[test]
    fn rain_fill_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rain::bar_fill(lo) <= rain::bar_fill(hi));
    }

    #[test]
    fn wind_axis_covers_every_gust(gust in 0u16..=400) {
        let step = wind::axis_step(gust);
        prop_assert_eq!(step % 5, 0);
        prop_assert!(wind::axis_max(gust) >= u32::from(gust.max(1)));
        // No coarser than needed
        prop_assert!(wind::axis_max(gust) < u32::from(gust.max(1)) + 20);
    }

    #[test]
    fn any_hour_count_renders_every_screen(
        hours in prop::collection::vec((0u8..=100, 0u16..150, 0u16..200), 0..=24)
    ) {
        let w = snapshot(&hours);
        let mut fb = Framebuffer::for_display();
        for screen in Screen::ALL {
            let rendered = render_screen_to(&mut fb, screen, &w, |_, _, _, _| {});
            prop_assert!(rendered.is_ok());
        }
    }
}
