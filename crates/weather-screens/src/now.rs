//! Today in detail: a bordered summary panel and six labeled cards.

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};
use g2_components::prelude::*;
use heapless::String;
use ui::{conditions, Screen, WeatherSnapshot};

use crate::common::{render_page_dots_to, report};
use crate::format::text;
use crate::layout::{FOOTER_RESERVE, HEIGHT, PADDING, WIDTH};

const PANEL_GAP: i32 = 8;
const CARD_GAP: i32 = 6;
const CARD_COLUMNS: usize = 2;

/// Card labels and values, in grid order.
pub fn cards(weather: &WeatherSnapshot) -> [(&'static str, String<24>); 6] {
    [
        ("FEELS LIKE", text(format_args!("{}°C", weather.feels_like))),
        (
            "WIND",
            text(format_args!(
                "{} km/h {}",
                weather.wind_speed,
                conditions::compass_label(weather.wind_direction)
            )),
        ),
        ("HUMIDITY", text(format_args!("{}%", weather.humidity))),
        ("PRESSURE", text(format_args!("{} hPa", weather.pressure))),
        ("SUNRISE", text(format_args!("{}", weather.sunrise))),
        ("SUNSET", text(format_args!("{}", weather.sunset))),
    ]
}

/// Render the now screen.
pub fn render_now_to<D, F>(
    display: &mut D,
    weather: &WeatherSnapshot,
    mut on_component: F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let y0 = PADDING;
    let content_h = HEIGHT - y0 - FOOTER_RESERVE;
    let inner_w = WIDTH - PADDING * 2 - PANEL_GAP;
    let left_w = inner_w * 33 / 100;
    let right_w = inner_w - left_w;
    let left_x = PADDING;
    let right_x = left_x + left_w + PANEL_GAP;

    // Left summary panel
    let panel = Rectangle::new(
        Point::new(left_x, y0),
        Size::new(left_w as u32, content_h as u32),
    );
    Panel::new(panel).stroke(palette::SEPARATOR).render(display)?;
    report(&mut on_component, "now-panel", "Panel", panel);

    let cx = left_x + left_w / 2;
    WeatherIcon::for_code(weather.current_wmo_code, 40).render(display, Point::new(cx, y0 + 60))?;

    let temp: String<8> = text(format_args!("{}°", weather.current_temp));
    let bounds = Label::new(&temp)
        .size(TextSize::Huge)
        .align(TextAlign::Center)
        .render(display, Point::new(cx, y0 + 130))?;
    report(&mut on_component, "now-temp", "Label", bounds);

    Label::new(&weather.city)
        .size(TextSize::Large)
        .color(palette::TEXT_MUTED)
        .align(TextAlign::Center)
        .render(display, Point::new(cx, y0 + 155))?;
    Label::new(&weather.current_description)
        .size(TextSize::Small)
        .color(palette::TEXT_FAINT)
        .align(TextAlign::Center)
        .render(display, Point::new(cx, y0 + 175))?;

    // 2x3 card grid
    let card_w = (right_w - CARD_GAP) / 2;
    let card_h = (content_h - CARD_GAP * 2) / 3;

    for (i, (label, value)) in cards(weather).iter().enumerate() {
        let col = (i % CARD_COLUMNS) as i32;
        let row = (i / CARD_COLUMNS) as i32;
        let x = right_x + col * (card_w + CARD_GAP);
        let y = y0 + row * (card_h + CARD_GAP);

        let card = Rectangle::new(Point::new(x, y), Size::new(card_w as u32, card_h as u32));
        Panel::new(card).stroke(palette::SEPARATOR).render(display)?;
        let id: String<16> = text(format_args!("now-card-{i}"));
        report(&mut on_component, &id, "Card", card);

        LabelBuilder::caption(label).render(display, Point::new(x + 8, y + 18))?;
        LabelBuilder::value(value).render(display, Point::new(x + 8, y + 44))?;
    }

    render_page_dots_to(display, Screen::Now, &mut on_component)
}
