//! G2 UI Components
//!
//! Drawing building blocks shared by every weather screen. All components
//! draw onto any `DrawTarget<Color = Gray4>` and follow the same builder
//! shape: `Component::new(..).option(..).render(display, position)`.
//!
//! # Components
//!
//! - `WeatherIcon` - WMO condition code to one of seven vector icons
//! - `Label` - Text with size, weight and alignment
//! - `PageDots` - One dot per screen, the active one filled
//! - `Panel` / `Separator` - Rounded outlines and rules
//! - `Bar` - Track plus bottom-anchored fill
//! - `Area` - Filled region under a point series
//! - `WindArrow` - Filled arrow rotated to a bearing
//! - `palette` - Gray levels used across screens
//!
//! # Example
//!
//! ```no_run
//! use g2_components::prelude::*;
//! use embedded_graphics::prelude::*;
//! # fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Gray4>>(d: &mut D) -> Result<(), D::Error> {
//! WeatherIcon::for_code(61, 16).render(d, Point::new(40, 40))?;
//! Label::new("Today").bold(true).align(TextAlign::Center).render(d, Point::new(40, 20))?;
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

pub mod area;
pub mod arrow;
pub mod bar;
pub mod icon;
pub mod label;
pub mod page_dots;
pub mod palette;
pub mod panel;

mod geometry;

pub mod prelude {
    pub use crate::area::*;
    pub use crate::arrow::*;
    pub use crate::bar::*;
    pub use crate::icon::*;
    pub use crate::label::*;
    pub use crate::page_dots::*;
    pub use crate::palette;
    pub use crate::panel::*;
}
