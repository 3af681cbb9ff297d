//! Pre-computed static styles shared by every widget.
//!
//! `MonoTextStyle`, `TextStyle` and `PrimitiveStyle` constructors are all
//! `const fn` in embedded-graphics 0.8, so every style used per frame is a
//! compile-time constant and drawing never builds style objects on the fly.
//!
//! The canvas fonts come from the ISO 8859-1 sets so the degree sign in the
//! axis caption renders instead of the replacement glyph.
//!
//! For text whose color changes at runtime (debug page columns, log levels)
//! the font itself is exported so callers can write
//! `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        iso_8859_1::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    primitives::PrimitiveStyle,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

use crate::colors::{BLACK, GRAY, ORANGE, RED, WHITE};
use crate::config::AXIS_WEIGHT;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Axis labels, button captions and alert text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Header title and instruction page.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Y tick labels.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Text Styles
// =============================================================================

/// Small black text on the white canvas.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Small white text on dark fills.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for secondary information.
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Medium white text for the header title and alert boxes.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Header timer (`ProFont` 12pt).
pub const TIMER_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);

// =============================================================================
// Primitive Styles
// =============================================================================

/// White canvas background.
pub const CANVAS_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Graph axes and the graph polyline.
pub const AXIS_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 1);

/// Solid black fill for arrow heads, gauge leads and stubs.
pub const BLACK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Gauge scale marks.
pub const MARK_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// Gauge indicator bar.
pub const INDICATOR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// Polyline stroke of the temperature curve.
pub const CURVE_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, AXIS_WEIGHT);

/// Melting banner background.
pub const ORANGE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ORANGE);

/// White frame of the modal alert box.
pub const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Red popup and alert background.
pub const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);
