//! Header strip: title, elapsed-time label and the power button.
//!
//! Positions that do not depend on the canvas width are `const`; the timer and
//! the button are placed relative to the right edge at draw time.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{DARK_GRAY, RED, SECONDARY_GRAY, SUCCESS_GREEN};
use crate::config::HEADER_HEIGHT;
use crate::lab::PowerButton;
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, LEFT_ALIGNED, TIMER_STYLE_WHITE, TITLE_STYLE_WHITE};

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_GRAY);

const TITLE_POS: Point = Point::new(5, 19);

const BUTTON_WIDTH: u32 = 80;
const BUTTON_HEIGHT: u32 = 20;
const BUTTON_MARGIN: i32 = 5;
const BUTTON_Y: i32 = (HEADER_HEIGHT - BUTTON_HEIGHT) as i32 / 2;

/// Baseline of the timer and the button caption.
const TEXT_BASELINE: i32 = 17;

/// Fill color of the power button in each state.
pub const fn power_button_color(button: PowerButton) -> Rgb565 {
    match button {
        PowerButton::Danger => RED,
        PowerButton::Secondary => SECONDARY_GRAY,
        PowerButton::Success => SUCCESS_GREEN,
    }
}

/// Area of the power button for a screen `width` pixels wide.
pub const fn power_button_area(width: u32) -> Rectangle {
    Rectangle::new(
        Point::new(width as i32 - BUTTON_WIDTH as i32 - BUTTON_MARGIN, BUTTON_Y),
        Size::new(BUTTON_WIDTH, BUTTON_HEIGHT),
    )
}

/// Draw the header across a screen `width` pixels wide.
///
/// `button_color` is passed separately from `button` so the caller can fade
/// between state colors.
pub fn draw_header<D>(
    display: &mut D,
    width: u32,
    timer: &str,
    button: PowerButton,
    button_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::zero(), Size::new(width, HEADER_HEIGHT))
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style("THERMO LAB", TITLE_POS, TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let area = power_button_area(width);
    let timer_x = (TITLE_POS.x + 110 + area.top_left.x) / 2;
    Text::with_text_style(timer, Point::new(timer_x, TEXT_BASELINE), TIMER_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    area.into_styled(PrimitiveStyle::with_fill(button_color)).draw(display).ok();
    Text::with_text_style(
        button.label(),
        Point::new(area.center().x, TEXT_BASELINE),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();
}
