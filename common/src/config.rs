//! Layout configuration for the lab canvas.
//!
//! Fixed geometry (axis length, tick spacing, gauge dimensions) is `const` and
//! computed at compile time. The canvas width and the graph's time scale depend
//! on the host window and the selected [`Variant`], so they live in [`Layout`],
//! which is built once at start-up and passed to the mapper and the widgets.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ THERMO LAB          12.34 s              [ POWER OFF ]   │  HEADER_HEIGHT
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌┐   ┌┐  11               ^ C                           │
//! │  ││ - ││  10               │                             │
//! │  ││ - ││  ..               │        ______               │  CANVAS_HEIGHT
//! │  ││ - ││                   │   ____/                     │
//! │  ││===││  <- indicator     │__/                          │
//! │  └┘   └┘                   └──────────────────────> t    │
//! └──────────────────────────────────────────────────────────┘
//!   gauge (x = 25..125)        graph (x = canvas_width/3 + 40 ..)
//! ```

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Canvas Configuration
// =============================================================================

/// Height of the drawing canvas in pixels.
pub const CANVAS_HEIGHT: u32 = 230;

/// Minimum (and compact) canvas width in pixels.
pub const BASE_CANVAS_WIDTH: u32 = 350;

/// Window widths below this always get the compact geometry.
pub const NARROW_WINDOW_WIDTH: u32 = 500;

/// Header strip above the canvas (title, timer, power button).
pub const HEADER_HEIGHT: u32 = 26;

/// Offset of the canvas inside the screen.
pub const CANVAS_OFFSET: Point = Point::new(0, HEADER_HEIGHT as i32);

// =============================================================================
// Graph Configuration
// =============================================================================

/// Length of the Y axis; also the canvas Y coordinate of the X axis.
pub const AXIS_Y_SIZE: i32 = 200;

/// Pixels between neighbouring tick marks on both graph axes.
pub const NUMS_DISTANCE: f32 = 20.0;

/// Degrees Celsius per Y tick mark.
pub const GRAPH_STEP_Y: f32 = 50.0;

/// Number of labelled Y tick marks (50..450 C).
pub const GRAPH_COUNT_Y: i32 = 9;

/// Seconds per X tick mark in the wide layout.
pub const GRAPH_STEP_X_WIDE: f32 = 15.0;

/// Seconds per X tick mark in the compact layout.
pub const GRAPH_STEP_X_COMPACT: f32 = 30.0;

/// Size of the arrow heads at the end of each axis.
pub const GRAPH_TRIANGLE_SIZE: i32 = 10;

// =============================================================================
// Thermocouple Gauge Configuration
// =============================================================================

/// Horizontal distance unit of the gauge; lead positions are multiples of it.
pub const GAUGE_DIST: i32 = 50;

/// Thickness of the gauge leads and of the indicator bar.
pub const AXIS_WEIGHT: u32 = 2;

/// Number of scale marks on the gauge (labelled 1..GAUGE_COUNT_Y-1).
pub const GAUGE_COUNT_Y: i32 = 12;

/// Pixels between neighbouring gauge scale marks.
pub const GAUGE_MARK_SPACING: f32 = 17.0;

/// Millivolts per gauge scale mark.
pub const GAUGE_STEP_Y: f32 = 1.0;

// =============================================================================
// Layout Variants
// =============================================================================

/// The two flavours of the lab page.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Variant {
    /// Canvas grows with the window, banner alerts, gauge drawn first.
    #[default]
    Wide,
    /// Fixed 350 px canvas, modal alerts, graph drawn first.
    Compact,
}

/// How threshold alerts are surfaced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertStyle {
    /// Non-blocking banners over the graph.
    Banner,
    /// A blocking box that pauses the simulation until acknowledged.
    Modal,
}

/// Which canvas element is painted first each frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RedrawOrder {
    GaugeFirst,
    GraphFirst,
}

/// Runtime layout of the lab canvas.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Layout {
    pub variant: Variant,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Seconds per X tick mark on the graph.
    pub graph_step_x: f32,
    pub alert_style: AlertStyle,
    pub redraw_order: RedrawOrder,
}

impl Layout {
    /// Build the layout for a variant on a host window of `window_width` pixels.
    ///
    /// The wide variant adds a tenth of the window width to the base canvas,
    /// unless the window is narrower than [`NARROW_WINDOW_WIDTH`].
    pub const fn new(
        variant: Variant,
        window_width: u32,
    ) -> Self {
        match variant {
            Variant::Wide if window_width >= NARROW_WINDOW_WIDTH => Self {
                variant,
                canvas_width: BASE_CANVAS_WIDTH + window_width / 10,
                graph_step_x: GRAPH_STEP_X_WIDE,
                alert_style: AlertStyle::Banner,
                redraw_order: RedrawOrder::GaugeFirst,
            },
            Variant::Wide => Self {
                variant,
                canvas_width: BASE_CANVAS_WIDTH,
                graph_step_x: GRAPH_STEP_X_COMPACT,
                alert_style: AlertStyle::Banner,
                redraw_order: RedrawOrder::GaugeFirst,
            },
            Variant::Compact => Self {
                variant,
                canvas_width: BASE_CANVAS_WIDTH,
                graph_step_x: GRAPH_STEP_X_COMPACT,
                alert_style: AlertStyle::Modal,
                redraw_order: RedrawOrder::GraphFirst,
            },
        }
    }

    /// Override the alert surface of the variant.
    #[must_use]
    pub const fn with_alert_style(
        mut self,
        alert_style: AlertStyle,
    ) -> Self {
        self.alert_style = alert_style;
        self
    }

    /// X coordinate of the graph's Y axis.
    #[inline]
    pub fn graph_origin_x(&self) -> f32 { self.canvas_width as f32 / 3.0 + 40.0 }

    /// Total screen size: header strip plus canvas.
    #[inline]
    pub const fn screen_size(&self) -> Size { Size::new(self.canvas_width, HEADER_HEIGHT + CANVAS_HEIGHT) }

    /// Canvas X coordinate of the graph's X axis tip.
    #[inline]
    pub const fn graph_end_x(&self) -> i32 { self.canvas_width as i32 }
}

impl Default for Layout {
    fn default() -> Self { Self::new(Variant::Wide, 1280) }
}

// =============================================================================
// Unit Tests
// =============================================================================
