//! Temperature-vs-time graph.
//!
//! Drawn in canvas coordinates. The Y axis stands at
//! [`Layout::graph_origin_x`], the X axis runs along `y = AXIS_Y_SIZE` up to
//! the right edge of the canvas. Both axes end in arrow heads.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, Polyline};
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::{ArrowDir, draw_arrow_head};
use crate::config::{AXIS_Y_SIZE, GRAPH_COUNT_Y, GRAPH_STEP_Y, GRAPH_TRIANGLE_SIZE, Layout, NUMS_DISTANCE};
use crate::series::GraphSeries;
use crate::styles::{AXIS_STROKE, BLACK_FILL, CENTERED, CURVE_STROKE, LABEL_STYLE_BLACK, RIGHT_ALIGNED};

/// Length of a tick mark on either axis.
const TICK_LEN: i32 = 3;

/// Baseline of the X tick labels and the `t` caption.
const X_LABEL_Y: i32 = AXIS_Y_SIZE + 15;

/// Caption of the temperature axis.
const Y_CAPTION: &str = "C°";

/// Keep the last X tick clear of the arrow head.
const X_TICK_MARGIN: i32 = 20;

/// Draw both axes with arrow heads, tick marks, tick labels and captions.
pub fn draw_axes<D>(
    display: &mut D,
    layout: &Layout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let ox = layout.graph_origin_x() as i32;
    let end_x = layout.graph_end_x() - 1;
    let origin = Point::new(ox, AXIS_Y_SIZE);

    // Y axis
    Line::new(origin, Point::new(ox, 0)).into_styled(AXIS_STROKE).draw(display).ok();
    draw_arrow_head(display, Point::new(ox, 0), ArrowDir::Up, GRAPH_TRIANGLE_SIZE, BLACK_FILL);
    Text::with_text_style(Y_CAPTION, Point::new(ox - 20, 9), LABEL_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();

    // X axis
    Line::new(origin, Point::new(end_x, AXIS_Y_SIZE)).into_styled(AXIS_STROKE).draw(display).ok();
    draw_arrow_head(display, Point::new(end_x, AXIS_Y_SIZE), ArrowDir::Right, GRAPH_TRIANGLE_SIZE, BLACK_FILL);
    Text::with_text_style("t", Point::new(end_x - 10, X_LABEL_Y), LABEL_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();

    draw_y_ticks(display, ox);
    draw_x_ticks(display, layout, ox, end_x);
}

fn draw_y_ticks<D>(
    display: &mut D,
    ox: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut label: String<8> = String::new();
    for i in 1..=GRAPH_COUNT_Y {
        let y = AXIS_Y_SIZE - (i as f32 * NUMS_DISTANCE) as i32;
        Line::new(Point::new(ox - TICK_LEN, y), Point::new(ox + TICK_LEN, y))
            .into_styled(AXIS_STROKE)
            .draw(display)
            .ok();

        label.clear();
        let _ = write!(label, "{}", i * GRAPH_STEP_Y as i32);
        Text::with_text_style(&label, Point::new(ox - 5, y + 4), LABEL_STYLE_BLACK, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_x_ticks<D>(
    display: &mut D,
    layout: &Layout,
    ox: i32,
    end_x: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut label: String<8> = String::new();
    for i in 1.. {
        let x = ox + (i as f32 * NUMS_DISTANCE) as i32;
        if x > end_x - X_TICK_MARGIN {
            break;
        }
        Line::new(Point::new(x, AXIS_Y_SIZE - TICK_LEN), Point::new(x, AXIS_Y_SIZE + TICK_LEN))
            .into_styled(AXIS_STROKE)
            .draw(display)
            .ok();

        label.clear();
        let _ = write!(label, "{}", (i as f32 * layout.graph_step_x) as i32);
        Text::with_text_style(&label, Point::new(x, X_LABEL_Y), LABEL_STYLE_BLACK, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Draw the polyline through every accumulated sample.
pub fn draw_curve<D>(
    display: &mut D,
    series: &GraphSeries,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if series.len() < 2 {
        return;
    }
    Polyline::new(series.points()).into_styled(CURVE_STROKE).draw(display).ok();
}

/// Axes and curve in one call.
pub fn draw_graph<D>(
    display: &mut D,
    layout: &Layout,
    series: &GraphSeries,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_axes(display, layout);
    draw_curve(display, series);
}
