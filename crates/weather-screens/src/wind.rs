//! Wind speed and gusts over the next 24 hours, with direction arrows.

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{Line, Polyline, PrimitiveStyle, Rectangle},
};
use g2_components::prelude::*;
use heapless::{String, Vec};
use ui::{conditions, weather::MAX_HOURLY, Screen, WeatherSnapshot};

use crate::common::{header_aside, header_rule, header_title, render_page_dots_to, report};
use crate::format::text;
use crate::layout::{PADDING, WIDTH};

/// Horizontal gridlines above the zero line.
pub const GRID_STEPS: u32 = 4;
/// Left edge of the plot, leaving room for axis labels.
pub const CHART_X: i32 = PADDING + 30;
/// Top of the plot.
pub const CHART_TOP: i32 = 44;
/// Zero line of the plot.
pub const CHART_BOTTOM: i32 = 230;

const ARROW_SIZE: u32 = 6;
const ARROW_LIFT: i32 = 12;
const TIME_BASELINE: i32 = 248;
const LEGEND_BASELINE: i32 = 262;

/// Value between gridlines: a multiple of 5 so that four steps cover the
/// strongest gust. Gusts are floored at 1 km/h.
pub fn axis_step(max_gust: u16) -> u32 {
    u32::from(max_gust.max(1)).div_ceil(GRID_STEPS * 5) * 5
}

/// Top of the y axis in km/h.
pub fn axis_max(max_gust: u16) -> u32 {
    axis_step(max_gust) * GRID_STEPS
}

struct Plot {
    slot_w: f32,
    scale_max: f32,
}

impl Plot {
    fn height() -> f32 {
        (CHART_BOTTOM - CHART_TOP) as f32
    }

    fn x(&self, i: usize) -> i32 {
        libm::roundf(CHART_X as f32 + (i as f32 + 0.5) * self.slot_w) as i32
    }

    fn y(&self, value: u16) -> i32 {
        let h = f32::from(value) / self.scale_max * Self::height();
        CHART_BOTTOM - libm::roundf(h) as i32
    }
}

/// Render the wind screen.
pub fn render_wind_to<D, F>(
    display: &mut D,
    weather: &WeatherSnapshot,
    mut on_component: F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    header_title(display, "Wind", &mut on_component)?;
    let now: String<32> = text(format_args!(
        "Now {} km/h {}",
        weather.wind_speed,
        conditions::compass_label(weather.wind_direction)
    ));
    header_aside(display, &now, palette::TEXT_DIM, &mut on_component)?;
    header_rule(display)?;

    let chart_w = WIDTH - CHART_X - PADDING;
    let step = axis_step(weather.max_gust());

    // Gridlines and y labels
    for i in 0..=GRID_STEPS {
        let y = CHART_BOTTOM - (i as i32 * (CHART_BOTTOM - CHART_TOP)) / GRID_STEPS as i32;
        Line::new(Point::new(CHART_X, y), Point::new(CHART_X + chart_w, y))
            .into_styled(PrimitiveStyle::with_stroke(palette::GRID, 1))
            .draw(display)?;

        let value: String<8> = text(format_args!("{}", i * step));
        let bounds = Label::new(&value)
            .size(TextSize::Tiny)
            .color(palette::AXIS)
            .align(TextAlign::Right)
            .render(display, Point::new(CHART_X - 4, y + 3))?;
        let id: String<16> = text(format_args!("wind-axis-{i}"));
        report(&mut on_component, &id, "Label", bounds);
    }

    let count = weather.hourly.len().min(MAX_HOURLY);
    if count > 0 {
        let plot = Plot {
            slot_w: chart_w as f32 / count as f32,
            scale_max: (step * GRID_STEPS) as f32,
        };

        let gusts: Vec<Point, MAX_HOURLY> = weather
            .hourly
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, h)| Point::new(plot.x(i), plot.y(h.wind_gust)))
            .collect();
        let speeds: Vec<Point, MAX_HOURLY> = weather
            .hourly
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, h)| Point::new(plot.x(i), plot.y(h.wind_speed)))
            .collect();

        Area::new(&gusts, CHART_BOTTOM)
            .from_x(CHART_X)
            .color(palette::TRACK)
            .render(display)?;
        Area::new(&speeds, CHART_BOTTOM)
            .from_x(CHART_X)
            .color(palette::OUTLINE)
            .render(display)?;
        Polyline::new(&speeds)
            .into_styled(PrimitiveStyle::with_stroke(palette::TEXT, 2))
            .draw(display)?;
        report(
            &mut on_component,
            "wind-chart",
            "Chart",
            Rectangle::new(
                Point::new(CHART_X, CHART_TOP),
                Size::new(chart_w as u32, (CHART_BOTTOM - CHART_TOP) as u32),
            ),
        );

        for (i, (hour, at)) in weather.hourly.iter().zip(speeds.iter()).enumerate().step_by(3) {
            let center = Point::new(at.x, at.y - ARROW_LIFT);
            WindArrow::downwind(ARROW_SIZE, hour.wind_dir).render(display, center)?;
            let id: String<16> = text(format_args!("wind-arrow-{i}"));
            report(
                &mut on_component,
                &id,
                "Arrow",
                Rectangle::with_center(center, Size::new(ARROW_SIZE * 2, ARROW_SIZE * 2)),
            );

            Label::new(&hour.time)
                .size(TextSize::Small)
                .color(palette::TEXT_DIM)
                .align(TextAlign::Center)
                .render(display, Point::new(at.x, TIME_BASELINE))?;
        }
    }

    Label::new("Speed")
        .size(TextSize::Tiny)
        .color(palette::TEXT_DIM)
        .render(display, Point::new(CHART_X, LEGEND_BASELINE))?;
    Label::new("Gusts")
        .size(TextSize::Tiny)
        .color(palette::AXIS)
        .render(display, Point::new(CHART_X + 50, LEGEND_BASELINE))?;

    render_page_dots_to(display, Screen::Wind, &mut on_component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_step_rounds_up_to_five() {
        assert_eq!(axis_step(0), 5);
        assert_eq!(axis_step(1), 5);
        assert_eq!(axis_step(20), 5);
        assert_eq!(axis_step(21), 10);
        assert_eq!(axis_step(47), 15);
    }

    #[test]
    fn test_axis_max_covers_gust() {
        for gust in [1u16, 19, 20, 21, 64, 99, 150] {
            assert!(axis_max(gust) >= u32::from(gust));
        }
        assert_eq!(axis_max(47), 60);
    }

    #[test]
    fn test_plot_zero_sits_on_baseline() {
        let plot = Plot {
            slot_w: 10.0,
            scale_max: 20.0,
        };
        assert_eq!(plot.y(0), CHART_BOTTOM);
        assert_eq!(plot.y(20), CHART_TOP);
        assert_eq!(plot.x(0), CHART_X + 5);
    }
}
