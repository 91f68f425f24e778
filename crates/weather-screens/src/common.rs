//! Header and footer pieces every screen shares.

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};
use g2_components::prelude::*;
use heapless::String;
use ui::Screen;

use crate::format::text;
use crate::layout::{DOTS_Y, HEADER_BASELINE, PADDING, SEPARATOR_Y, WIDTH};

/// Forward a laid-out region to the caller's component callback.
pub(crate) fn report<F>(on_component: &mut F, test_id: &str, kind: &str, rect: Rectangle)
where
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    on_component(
        test_id,
        kind,
        (rect.top_left.x, rect.top_left.y),
        (rect.size.width, rect.size.height),
    );
}

/// Left-aligned header title.
pub(crate) fn header_title<D, F>(
    display: &mut D,
    title: &str,
    on_component: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let bounds =
        LabelBuilder::heading(title).render(display, Point::new(PADDING, HEADER_BASELINE))?;
    report(on_component, "header-title", "Label", bounds);
    Ok(())
}

/// Right-aligned secondary text at the end of the header row.
pub(crate) fn header_aside<D, F>(
    display: &mut D,
    content: &str,
    color: Gray4,
    on_component: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let bounds = Label::new(content)
        .size(TextSize::Normal)
        .color(color)
        .align(TextAlign::Right)
        .render(display, Point::new(WIDTH - PADDING, HEADER_BASELINE))?;
    report(on_component, "header-aside", "Label", bounds);
    Ok(())
}

/// Rule under the header.
pub(crate) fn header_rule<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    Separator::horizontal(SEPARATOR_Y, PADDING, WIDTH - PADDING).render(display)
}

/// Draw the page-position dots for `active`, one per screen.
pub fn render_page_dots_to<D, F>(
    display: &mut D,
    active: Screen,
    on_component: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let dots = PageDots::new(Screen::COUNT as u32, active.index() as u32);
    dots.render(display, WIDTH as u32, DOTS_Y)?;

    for screen in Screen::ALL {
        let center = dots.dot_center(screen.index() as u32, WIDTH as u32, DOTS_Y);
        let id: String<16> = text(format_args!("page-dot-{}", screen.index()));
        let kind = if screen == active { "ActiveDot" } else { "Dot" };
        report(
            on_component,
            &id,
            kind,
            Rectangle::with_center(center, Size::new(7, 7)),
        );
    }
    Ok(())
}
