//! Weather screens for the G2 glasses display.
//!
//! Five full-display layouts, each a pure function of a [`WeatherSnapshot`]:
//!
//! | Screen | Function |
//! |---|---|
//! | Forecast | [`forecast::render_forecast_to`] |
//! | Now | [`now::render_now_to`] |
//! | Rain | [`rain::render_rain_to`] |
//! | Wind | [`wind::render_wind_to`] |
//! | Hours | [`hours::render_hours_to`] |
//!
//! Every render function draws onto any `DrawTarget<Color = Gray4>` and
//! reports the regions it lays out through an `on_component` callback
//! `(test_id, kind, top_left, size)`. Headless tests register those regions
//! on a test canvas; the app passes a no-op.
//!
//! ```no_run
//! # use embedded_graphics::{pixelcolor::Gray4, prelude::*};
//! # fn demo<D: DrawTarget<Color = Gray4>>(d: &mut D, w: &ui::WeatherSnapshot) -> Result<(), D::Error> {
//! weather_screens::render_screen_to(d, ui::Screen::Rain, w, |_, _, _, _| {})?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
// Pixel geometry: every coordinate is bounded by the 576x288 display.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

pub mod forecast;
pub mod hours;
pub mod layout;
pub mod now;
pub mod rain;
pub mod wind;

mod common;
mod format;

use embedded_graphics::{pixelcolor::Gray4, prelude::*};
use g2_components::palette;
use ui::{Screen, WeatherSnapshot};

pub use common::render_page_dots_to;
pub use format::OneDecimal;

/// Turns a screen plus snapshot into a finished image for the display.
///
/// The bitmap renderer in the app produces PNG bytes; a text-region
/// renderer would produce positioned strings instead.
pub trait ScreenRenderer {
    /// Finished image handed to the display bridge
    type Image;
    /// Failure while producing the image
    type Error;

    /// Render `screen` for `weather`.
    fn render(&mut self, screen: Screen, weather: &WeatherSnapshot)
        -> Result<Self::Image, Self::Error>;
}

/// Clear `display` and draw `screen` onto it.
pub fn render_screen_to<D, F>(
    display: &mut D,
    screen: Screen,
    weather: &WeatherSnapshot,
    on_component: F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    display.clear(palette::BACKGROUND)?;

    match screen {
        Screen::Forecast => forecast::render_forecast_to(display, weather, on_component),
        Screen::Now => now::render_now_to(display, weather, on_component),
        Screen::Rain => rain::render_rain_to(display, weather, on_component),
        Screen::Wind => wind::render_wind_to(display, weather, on_component),
        Screen::Hours => hours::render_hours_to(display, weather, on_component),
    }
}
