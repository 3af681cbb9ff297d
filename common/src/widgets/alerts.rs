//! Melting and overheating alerts.
//!
//! Two surfaces exist. Banners are strips across the top of the graph area
//! that stay visible as long as their [`AlertFlags`] bit is set; the
//! overheating banner blinks and shakes. The modal box is a popup centered on
//! the screen that the host keeps up until the user acknowledges it.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use super::primitives::{draw_framed_box, fill_rect};
use crate::animations::{blink_on, shake_offset};
use crate::config::Layout;
use crate::lab::AlertFlags;
use crate::styles::{CENTERED, LABEL_STYLE_BLACK, LABEL_STYLE_WHITE, ORANGE_FILL, RED_FILL, TITLE_STYLE_WHITE, WHITE_FILL};

/// Which alert a modal box shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertKind {
    Melting,
    Overheating,
}

impl AlertKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Melting => "TIN MELTING",
            Self::Overheating => "OVERHEATING",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Melting => "Temperature holds at the melting point",
            Self::Overheating => "Element too hot, power was cut",
        }
    }
}

// =============================================================================
// Banners
// =============================================================================

const BANNER_HEIGHT: u32 = 16;
const MELTING_BANNER_Y: i32 = 22;
const OVERHEAT_BANNER_Y: i32 = MELTING_BANNER_Y + BANNER_HEIGHT as i32 + 2;
const BANNER_INSET: i32 = 10;

/// Draw the visible banners over the graph area (canvas coordinates).
pub fn draw_banners<D>(
    display: &mut D,
    layout: &Layout,
    alerts: AlertFlags,
    frame: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let left = layout.graph_origin_x() as i32 + BANNER_INSET;
    let width = (layout.graph_end_x() - BANNER_INSET - left).max(0) as u32;
    let center_x = left + width as i32 / 2;

    if alerts.melting {
        fill_rect(display, left, MELTING_BANNER_Y, width, BANNER_HEIGHT, ORANGE_FILL);
        Text::with_text_style(
            "TIN IS MELTING",
            Point::new(center_x, MELTING_BANNER_Y + 11),
            LABEL_STYLE_BLACK,
            CENTERED,
        )
        .draw(display)
        .ok();
    }

    if alerts.overheating && blink_on(frame) {
        let dx = shake_offset(frame, true);
        fill_rect(display, left + dx, OVERHEAT_BANNER_Y, width, BANNER_HEIGHT, RED_FILL);
        Text::with_text_style(
            "OVERHEATING - POWER CUT",
            Point::new(center_x + dx, OVERHEAT_BANNER_Y + 11),
            LABEL_STYLE_WHITE,
            CENTERED,
        )
        .draw(display)
        .ok();
    }
}

// =============================================================================
// Modal Box
// =============================================================================

const MODAL_WIDTH: u32 = 240;
const MODAL_HEIGHT: u32 = 70;

/// Draw a modal alert centered on a screen of `screen` size.
pub fn draw_modal<D>(
    display: &mut D,
    screen: Size,
    kind: AlertKind,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let area = Rectangle::with_center(
        Point::new(screen.width as i32 / 2, screen.height as i32 / 2),
        Size::new(MODAL_WIDTH, MODAL_HEIGHT),
    );
    draw_framed_box(display, area, WHITE_FILL, RED_FILL);

    let center = area.center();
    Text::with_text_style(kind.title(), center + Point::new(0, -12), TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(kind.message(), center + Point::new(0, 8), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("press ENTER", center + Point::new(0, 24), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
