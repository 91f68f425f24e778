//! Hourly list: twenty rows in two columns of ten.

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};
use g2_components::prelude::*;
use heapless::String;
use ui::{conditions, HourlyPoint, Screen, WeatherSnapshot};

use crate::common::{header_rule, header_title, render_page_dots_to, report};
use crate::format::text;
use crate::layout::{BODY_TOP, FOOTER_RESERVE, HEIGHT, PADDING, WIDTH};

/// Rows per column.
pub const ROWS_PER_COLUMN: usize = 10;
/// Height of one row.
pub const ROW_HEIGHT: i32 = 24;
/// Precipitation chance drawn at full brightness from here up.
pub const PRECIP_BRIGHT_FROM: u8 = 50;

const COLUMN_GAP: i32 = 12;

/// Color of a row's precipitation chance.
pub fn precip_color(prob: u8) -> Gray4 {
    if prob >= PRECIP_BRIGHT_FROM {
        palette::TEXT
    } else {
        palette::TEXT_FAINT
    }
}

/// Time column text; the very first row reads "Now".
pub fn time_label(row: usize, hour: &HourlyPoint) -> &str {
    if row == 0 {
        "Now"
    } else {
        &hour.time
    }
}

/// Render the hours screen.
pub fn render_hours_to<D, F>(
    display: &mut D,
    weather: &WeatherSnapshot,
    mut on_component: F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    header_title(display, "Hourly forecast", &mut on_component)?;
    header_rule(display)?;

    let col_w = (WIDTH - PADDING * 2 - COLUMN_GAP) / 2;
    let divider_x = PADDING + col_w + COLUMN_GAP / 2;
    Separator::vertical(divider_x, BODY_TOP, HEIGHT - FOOTER_RESERVE)
        .color(palette::OUTLINE)
        .render(display)?;

    for (row, hour) in weather.hourly.iter().take(ROWS_PER_COLUMN * 2).enumerate() {
        let column = (row / ROWS_PER_COLUMN) as i32;
        let x0 = PADDING + column * (col_w + COLUMN_GAP);
        let y = BODY_TOP + (row % ROWS_PER_COLUMN) as i32 * ROW_HEIGHT;
        render_row(display, row, hour, x0, y, col_w, &mut on_component)?;
    }

    render_page_dots_to(display, Screen::Hours, &mut on_component)
}

fn render_row<D, F>(
    display: &mut D,
    row: usize,
    hour: &HourlyPoint,
    x0: i32,
    y: i32,
    col_w: i32,
    on_component: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    if row % ROWS_PER_COLUMN > 0 {
        Separator::horizontal(y, x0, x0 + col_w)
            .color(palette::GRID)
            .render(display)?;
    }

    let baseline = y + 16;
    Label::new(time_label(row, hour))
        .size(TextSize::Small)
        .color(palette::TEXT_MUTED)
        .render(display, Point::new(x0, baseline))?;

    WeatherIcon::for_code(hour.wmo_code, 7).render(display, Point::new(x0 + 52, y + 11))?;

    let temp: String<8> = text(format_args!("{}°C", hour.temp));
    Label::new(&temp)
        .size(TextSize::Normal)
        .bold(true)
        .render(display, Point::new(x0 + 72, baseline))?;

    Label::new(conditions::short_label(hour.wmo_code))
        .size(TextSize::Small)
        .color(palette::TEXT_DIM)
        .render(display, Point::new(x0 + 120, baseline))?;

    if hour.precip_prob > 0 {
        let prob: String<8> = text(format_args!("{}%", hour.precip_prob));
        let bounds = Label::new(&prob)
            .size(TextSize::Small)
            .color(precip_color(hour.precip_prob))
            .align(TextAlign::Right)
            .render(display, Point::new(x0 + col_w, baseline))?;
        let id: String<16> = text(format_args!("hours-prob-{row}"));
        report(on_component, &id, "Label", bounds);
    }

    let id: String<16> = text(format_args!("hours-row-{row}"));
    report(
        on_component,
        &id,
        "Row",
        Rectangle::new(Point::new(x0, y), Size::new(col_w as u32, ROW_HEIGHT as u32)),
    );
    Ok(())
}
