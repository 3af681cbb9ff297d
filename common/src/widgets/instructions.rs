//! Instruction page: the lab procedure and the key bindings.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::WHITE;
use crate::config::HEADER_HEIGHT;
use crate::model::HeatingParams;
use crate::styles::{LABEL_STYLE_BLACK, LABEL_STYLE_GRAY, LEFT_ALIGNED};

const MARGIN_X: i32 = 10;
const FIRST_LINE_Y: i32 = HEADER_HEIGHT as i32 + 18;
const LINE_HEIGHT: i32 = 14;

const KEY_LINES: [&str; 3] = [
    "SPACE / P  switch the heater on or off",
    "I  instructions    D  debug page",
    "ENTER  close an alert    ESC  quit",
];

/// Draw the instruction page below the header.
///
/// The threshold values come from `params` so the text matches the running
/// configuration.
pub fn draw_instructions<D>(
    display: &mut D,
    params: &HeatingParams,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let size = display.bounding_box().size;
    let body = Rectangle::new(
        Point::new(0, HEADER_HEIGHT as i32),
        Size::new(size.width, size.height.saturating_sub(HEADER_HEIGHT)),
    );
    display.fill_solid(&body, WHITE).ok();

    let mut y = FIRST_LINE_Y;
    let mut line: String<64> = String::new();
    let put = |display: &mut D, text: &str, gray: bool, y: &mut i32| {
        let style = if gray { LABEL_STYLE_GRAY } else { LABEL_STYLE_BLACK };
        Text::with_text_style(text, Point::new(MARGIN_X, *y), style, LEFT_ALIGNED)
            .draw(display)
            .ok();
        *y += LINE_HEIGHT;
    };

    put(display, "HOW THE LAB WORKS", false, &mut y);
    y += LINE_HEIGHT / 2;

    put(display, "1. Switch the heater on.", false, &mut y);
    put(display, "2. Watch the gauge and the graph climb.", false, &mut y);

    line.clear();
    let _ = write!(line, "3. Tin melts at {:.0} C: the reading holds.", params.melting_temp);
    put(display, &line, false, &mut y);

    line.clear();
    let _ = write!(line, "4. Above {:.0} C the heater cuts out.", params.max_temp);
    put(display, &line, false, &mut y);

    line.clear();
    let _ = write!(line, "5. Let the sample cool back to {:.0} C.", params.room_temp);
    put(display, &line, false, &mut y);

    y += LINE_HEIGHT / 2;
    for key_line in KEY_LINES {
        put(display, key_line, true, &mut y);
    }
}
