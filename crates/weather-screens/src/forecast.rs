//! 7-day forecast: one outlined column per day, today first.

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};
use g2_components::prelude::*;
use heapless::String;
use ui::{DailyPoint, Screen, WeatherSnapshot};

use crate::common::{header_aside, header_rule, render_page_dots_to, report};
use crate::format::{text, OneDecimal};
use crate::layout::{BODY_TOP, HEADER_BASELINE, HEIGHT, PADDING, WIDTH};

/// Columns on the screen, today plus six days.
pub const DAY_COLUMNS: usize = 7;

/// Precipitation probability drawn in the accent color from here up.
pub const PROB_ACCENT_FROM: u8 = 50;

/// UV index drawn at full brightness from here up.
pub const UV_HIGH_FROM: f32 = 6.0;

/// Column header: "Today" for the first day, the weekday otherwise.
pub fn day_label(index: usize, day: &DailyPoint) -> &str {
    if index == 0 {
        "Today"
    } else {
        &day.day
    }
}

/// Color of the precipitation-probability line.
pub fn probability_color(prob: u8) -> Gray4 {
    if prob >= PROB_ACCENT_FROM {
        palette::ACCENT
    } else {
        palette::TEXT_FAINT
    }
}

/// Color of the UV line.
pub fn uv_color(uv: f32) -> Gray4 {
    if uv >= UV_HIGH_FROM {
        palette::TEXT
    } else {
        palette::TEXT_FAINT
    }
}

/// Render the forecast screen.
pub fn render_forecast_to<D, F>(
    display: &mut D,
    weather: &WeatherSnapshot,
    mut on_component: F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    // Header: city, current temperature, description
    let city = LabelBuilder::heading(&weather.city)
        .render(display, Point::new(PADDING, HEADER_BASELINE))?;
    report(&mut on_component, "header-title", "Label", city);

    let temp: String<8> = text(format_args!("{}°", weather.current_temp));
    Label::new(&temp)
        .size(TextSize::Large)
        .bold(true)
        .align(TextAlign::Right)
        .render(display, Point::new(WIDTH / 2 + 20, HEADER_BASELINE))?;

    header_aside(
        display,
        &weather.current_description,
        palette::TEXT_MUTED,
        &mut on_component,
    )?;
    header_rule(display)?;

    let col_w = (WIDTH - PADDING * 2) / DAY_COLUMNS as i32;
    let y0 = BODY_TOP;
    let col_h = HEIGHT - y0 - 26;

    for (i, day) in weather.daily.iter().take(DAY_COLUMNS).enumerate() {
        let x = PADDING + i as i32 * col_w;
        let cx = x + col_w / 2;

        let bounds = Rectangle::new(
            Point::new(x + 2, y0),
            Size::new((col_w - 4) as u32, col_h as u32),
        );
        Panel::new(bounds).render(display)?;
        let id: String<24> = text(format_args!("forecast-day-{i}"));
        report(&mut on_component, &id, "Column", bounds);

        let label = Label::new(day_label(i, day))
            .size(TextSize::Small)
            .bold(i == 0)
            .align(TextAlign::Center)
            .render(display, Point::new(cx, y0 + 18))?;
        let id: String<24> = text(format_args!("forecast-label-{i}"));
        report(&mut on_component, &id, "Label", label);

        WeatherIcon::for_code(day.wmo_code, 16).render(display, Point::new(cx, y0 + 50))?;

        let max: String<8> = text(format_args!("{}°", day.temp_max));
        LabelBuilder::value(&max)
            .align(TextAlign::Center)
            .render(display, Point::new(cx, y0 + 88))?;

        let min: String<8> = text(format_args!("{}°", day.temp_min));
        Label::new(&min)
            .size(TextSize::Normal)
            .color(palette::TEXT_DIM)
            .align(TextAlign::Center)
            .render(display, Point::new(cx, y0 + 106))?;

        if day.precip_prob > 0 {
            let prob: String<8> = text(format_args!("{}%", day.precip_prob));
            let bounds = Label::new(&prob)
                .size(TextSize::Tiny)
                .color(probability_color(day.precip_prob))
                .align(TextAlign::Center)
                .render(display, Point::new(cx, y0 + 132))?;
            let id: String<24> = text(format_args!("forecast-prob-{i}"));
            report(&mut on_component, &id, "Label", bounds);
        }

        if day.precip_sum > 0.0 {
            let sum: String<16> = text(format_args!("{}mm", OneDecimal(day.precip_sum)));
            Label::new(&sum)
                .size(TextSize::Tiny)
                .color(palette::TEXT_FAINTER)
                .align(TextAlign::Center)
                .render(display, Point::new(cx, y0 + 148))?;
        }

        let wind: String<16> = text(format_args!("{}km/h", day.wind_max));
        Label::new(&wind)
            .size(TextSize::Tiny)
            .color(palette::TEXT_FAINT)
            .align(TextAlign::Center)
            .render(display, Point::new(cx, y0 + 172))?;

        if day.uv_max > 0.0 {
            let uv: String<16> = text(format_args!("UV {}", OneDecimal(day.uv_max)));
            let bounds = Label::new(&uv)
                .size(TextSize::Tiny)
                .color(uv_color(day.uv_max))
                .align(TextAlign::Center)
                .render(display, Point::new(cx, y0 + 188))?;
            let id: String<24> = text(format_args!("forecast-uv-{i}"));
            report(&mut on_component, &id, "Label", bounds);
        }
    }

    render_page_dots_to(display, Screen::Forecast, &mut on_component)
}
