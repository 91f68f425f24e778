//! Precipitation chance per hour as a 24-slot bar chart.

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};
use g2_components::prelude::*;
use heapless::String;
use ui::{weather::MAX_HOURLY, Screen, WeatherSnapshot};

use crate::common::{header_aside, header_rule, header_title, render_page_dots_to, report};
use crate::format::{text, OneDecimal};
use crate::layout::{PADDING, WIDTH};

/// Top of every bar track.
pub const CHART_TOP: i32 = 44;
/// Bottom of every bar track.
pub const CHART_BOTTOM: i32 = 242;
/// Fill height of any bar with a non-zero chance.
pub const MIN_VISIBLE_FILL: u32 = 4;
/// Chance at which the value is printed over the bar.
pub const LABEL_FROM: u8 = 30;
/// Hours summed for the header total.
pub const TOTAL_HOURS: usize = 12;

const TIME_BASELINE: i32 = 258;

/// Bar fill brightness: brightest from 60%, mid from 30%, dim below.
pub fn bar_color(prob: u8) -> Gray4 {
    match prob {
        60.. => palette::TEXT,
        30.. => palette::TEXT_MUTED,
        _ => palette::AXIS,
    }
}

/// Filled height of the bar for `prob` percent.
pub fn bar_fill(prob: u8) -> u32 {
    scaled_fill(prob, (CHART_BOTTOM - CHART_TOP) as u32, MIN_VISIBLE_FILL)
}

/// Render the rain screen.
pub fn render_rain_to<D, F>(
    display: &mut D,
    weather: &WeatherSnapshot,
    mut on_component: F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    header_title(display, "Precipitation", &mut on_component)?;
    let total: String<32> = text(format_args!(
        "{} mm next 12h",
        OneDecimal(weather.precip_total(TOTAL_HOURS))
    ));
    header_aside(display, &total, palette::TEXT_DIM, &mut on_component)?;
    header_rule(display)?;

    let count = weather.hourly.len().min(MAX_HOURLY);
    if count > 0 {
        let chart_w = WIDTH - PADDING * 2;
        let chart_h = (CHART_BOTTOM - CHART_TOP) as u32;
        let slot_w = chart_w / count as i32;
        let bar_w = (slot_w - 3).max(4);

        for (i, hour) in weather.hourly.iter().take(count).enumerate() {
            let cx = PADDING + i as i32 * slot_w + slot_w / 2;
            let left = cx - bar_w / 2;
            let fill = bar_fill(hour.precip_prob);

            let bar = Bar::new(bar_w as u32, chart_h)
                .fill_height(fill)
                .colors(palette::TRACK, bar_color(hour.precip_prob));
            bar.render(display, Point::new(left, CHART_TOP))?;

            let id: String<16> = text(format_args!("rain-bar-{i}"));
            report(
                &mut on_component,
                &id,
                "Bar",
                Rectangle::new(
                    Point::new(left, CHART_TOP + bar.fill_top() as i32),
                    Size::new(bar_w as u32, fill),
                ),
            );

            if hour.precip_prob >= LABEL_FROM {
                let value: String<4> = text(format_args!("{}", hour.precip_prob));
                let raw = scaled_fill(hour.precip_prob, chart_h, 0) as i32;
                let bounds = Label::new(&value)
                    .size(TextSize::Tiny)
                    .align(TextAlign::Center)
                    .render(display, Point::new(cx, CHART_BOTTOM - raw - 4))?;
                let id: String<16> = text(format_args!("rain-value-{i}"));
                report(&mut on_component, &id, "Label", bounds);
            }

            if i % 3 == 0 {
                Label::new(&hour.time)
                    .size(TextSize::Small)
                    .color(palette::TEXT_DIM)
                    .align(TextAlign::Center)
                    .render(display, Point::new(cx, TIME_BASELINE))?;
            }
        }
    }

    render_page_dots_to(display, Screen::Rain, &mut on_component)
}
