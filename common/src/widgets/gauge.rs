//! Thermocouple gauge.
//!
//! Two vertical leads with short terminal stubs top and bottom, a column of
//! millivolt scale marks between them and a red indicator bar that moves with
//! the shown temperature.
//!
//! ```text
//!  x: 25   50   62..87  100  125
//!     ───┐  ┃    ─── 11  ┃ ┌───
//!        │  ┃    ─── 10  ┃ │
//!        │  ┃     ...    ┃ │
//!        │  ┣━━━━━━━━━━━━┫ │   <- indicator at gauge_y(T)
//!     ───┘  ┃    ───     ┃ └───  y = AXIS_Y_SIZE
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Line;
use embedded_graphics::text::Text;
use heapless::String;
use micromath::F32;

use super::primitives::fill_rect;
use crate::config::{AXIS_WEIGHT, AXIS_Y_SIZE, GAUGE_COUNT_Y, GAUGE_DIST, GAUGE_MARK_SPACING};
use crate::styles::{BLACK_FILL, CENTERED, INDICATOR_FILL, LABEL_STYLE_BLACK, MARK_STROKE};

/// X of the left lead.
const LEFT_LEAD_X: i32 = GAUGE_DIST;

/// X of the right lead.
const RIGHT_LEAD_X: i32 = GAUGE_DIST * 2;

/// Length of the terminal stubs.
const STUB_LEN: u32 = (GAUGE_DIST / 2) as u32;

/// Horizontal center of the scale.
const SCALE_CENTER_X: i32 = GAUGE_DIST + GAUGE_DIST / 2;

/// Half width of a scale mark.
const MARK_HALF_WIDTH: i32 = 12;

/// Canvas Y of scale mark `i`, counted from the bottom.
#[inline]
pub fn mark_y(i: i32) -> i32 { AXIS_Y_SIZE - (i as f32 * GAUGE_MARK_SPACING) as i32 }

/// Draw leads, stubs and the labelled scale.
pub fn draw_gauge_frame<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let height = AXIS_Y_SIZE as u32;
    fill_rect(display, LEFT_LEAD_X, 0, AXIS_WEIGHT, height, BLACK_FILL);
    fill_rect(display, RIGHT_LEAD_X, 0, AXIS_WEIGHT, height, BLACK_FILL);

    for y in [0, AXIS_Y_SIZE] {
        fill_rect(display, LEFT_LEAD_X - STUB_LEN as i32, y, STUB_LEN, AXIS_WEIGHT, BLACK_FILL);
        fill_rect(display, RIGHT_LEAD_X, y, STUB_LEN, AXIS_WEIGHT, BLACK_FILL);
    }

    let mut label: String<4> = String::new();
    for i in 0..GAUGE_COUNT_Y {
        let y = mark_y(i);
        Line::new(
            Point::new(SCALE_CENTER_X - MARK_HALF_WIDTH, y),
            Point::new(SCALE_CENTER_X + MARK_HALF_WIDTH, y),
        )
        .into_styled(MARK_STROKE)
        .draw(display)
        .ok();

        if i > 0 {
            label.clear();
            let _ = write!(label, "{i}");
            Text::with_text_style(&label, Point::new(SCALE_CENTER_X, y - 5), LABEL_STYLE_BLACK, CENTERED)
                .draw(display)
                .ok();
        }
    }
}

/// Draw the indicator bar at canvas height `indicator_y`.
pub fn draw_indicator<D>(
    display: &mut D,
    indicator_y: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let y = F32(indicator_y).round().0 as i32;
    fill_rect(display, LEFT_LEAD_X, y, (RIGHT_LEAD_X - LEFT_LEAD_X) as u32, AXIS_WEIGHT, INDICATOR_FILL);
}

/// Frame and indicator in one call.
pub fn draw_gauge<D>(
    display: &mut D,
    indicator_y: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gauge_frame(display);
    draw_indicator(display, indicator_y);
}
