//! Debug page rendering.
//!
//! Shows a snapshot of the lab model, frame timing statistics and the last
//! log lines. Toggled with `D`; the simulation keeps running underneath.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ DEBUG VIEW               UP 00:12:34          62 FPS │
//! ├──────────────────────────────────────────────────────┤
//! │ LAB               │ TIMING          │ COUNTERS       │
//! │ Phase: HEATING    │ Frame: 16.2ms   │ Frames: 4211   │
//! │ Body:  181.3C     │ Render:0.4ms    │ Ticks:  3980   │
//! │ Shown: 181.3C     │ Sleep: 15.8ms   │ Paused: 0      │
//! │ Time:  60.12 s    │ Min:   16.0ms   │ Melt:   no     │
//! │ Power: ON         │ Max:   19.7ms   │ Over:   no     │
//! │ Points:240        │ Avg:   16.3ms   │                │
//! │ Runs:  1          │                 │                │
//! ├──────────────────────────────────────────────────────┤
//! │ > INFO  power on at 24.0 C                           │
//! │ > _                                                  │
//! └──────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use log::Level;
use thermolab_common::colors::{GRAY, GREEN, ORANGE, RED, WHITE, YELLOW};
use thermolab_common::lab::Lab;
use thermolab_common::profiling::DebugLog;
use thermolab_common::styles::LABEL_FONT;

use crate::profiling::ProfilingMetrics;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header Y position (text baseline)
const HEADER_Y: i32 = 12;

const HEADER_DIVIDER_Y: i32 = 18;

const SECTION_HEADER_Y: i32 = 30;

/// Y position where stats values start
const STATS_Y: i32 = 43;

const LOG_DIVIDER_Y: i32 = 140;

/// Y position where the log terminal starts
const LOG_Y: i32 = 153;

const LOG_LINE_HEIGHT: i32 = 12;

/// X position for left column (lab state)
const COL1_X: i32 = 4;

/// X position for middle column (frame timing)
const COL2_X: i32 = 122;

/// X position for right column (counters)
const COL3_X: i32 = 238;

const STAT_LINE_HEIGHT: i32 = 13;

/// Width of the level tag in the log terminal, in characters.
const LEVEL_TAG_CHARS: i32 = 6;

/// Character advance of [`LABEL_FONT`].
const CHAR_WIDTH: i32 = 6;

// =============================================================================
// Colors
// =============================================================================

const HEADER_COLOR: Rgb565 = GREEN;

const SECTION_COLOR: Rgb565 = GRAY;

const VALUE_COLOR: Rgb565 = WHITE;

/// Highlight color for min/max/avg
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;

const LOG_PROMPT_COLOR: Rgb565 = GREEN;

const LOG_TEXT_COLOR: Rgb565 = ORANGE;

/// Very dark green terminal background.
const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);

const DIVIDER_COLOR: Rgb565 = GRAY;

/// Everything the debug page shows.
pub struct DebugInfo<'a> {
    pub lab: &'a Lab,
    pub metrics: &'a ProfilingMetrics,
    pub log: &'a DebugLog,
    pub fps: f32,
    pub sessions: u32,
}

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug page onto an already cleared display.
pub fn draw_debug_page<D>(
    display: &mut D,
    info: &DebugInfo<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let size = display.bounding_box().size;

    draw_title(display, size.width, info.metrics, info.fps);
    draw_horizontal_line(display, size.width, HEADER_DIVIDER_Y);

    draw_section_headers(display);
    draw_lab_column(display, info.lab, info.sessions);
    draw_timing_column(display, info.metrics);
    draw_counter_column(display, info.lab, info.metrics);

    draw_horizontal_line(display, size.width, LOG_DIVIDER_Y);
    draw_log_terminal(display, size, info.log);
}

/// Title, uptime and FPS.
fn draw_title<D>(
    display: &mut D,
    width: u32,
    metrics: &ProfilingMetrics,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let mut uptime: String<24> = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    Text::new(&uptime, Point::new(width as i32 / 2 - 30, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(width as i32 - 50, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);

    for (label, x) in [("LAB", COL1_X), ("TIMING", COL2_X), ("COUNTERS", COL3_X)] {
        Text::new(label, Point::new(x, SECTION_HEADER_Y), style)
            .draw(display)
            .ok();
    }
}

/// Draw one column of pre-formatted lines starting at [`STATS_Y`].
fn draw_column<D>(
    display: &mut D,
    x: i32,
    lines: &[(&str, Rgb565)],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut y = STATS_Y;
    for &(line, color) in lines {
        Text::new(line, Point::new(x, y), MonoTextStyle::new(LABEL_FONT, color))
            .draw(display)
            .ok();
        y += STAT_LINE_HEIGHT;
    }
}

/// Model snapshot (left column).
fn draw_lab_column<D>(
    display: &mut D,
    lab: &Lab,
    sessions: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let state = lab.state();

    let mut phase: String<20> = String::new();
    let _ = write!(phase, "Phase: {}", lab.phase().label());
    let mut body: String<20> = String::new();
    let _ = write!(body, "Body:  {:.1}C", state.body_temperature);
    let mut shown: String<20> = String::new();
    let _ = write!(shown, "Shown: {:.1}C", lab.shown_temperature());
    let mut time: String<20> = String::new();
    let _ = write!(time, "Time:  {}", lab.timer_label());
    let mut power: String<20> = String::new();
    let _ = write!(power, "Power: {}", if state.is_powered { "ON" } else { "OFF" });
    let mut points: String<20> = String::new();
    let _ = write!(points, "Points:{}", lab.series().len());
    let mut runs: String<20> = String::new();
    let _ = write!(runs, "Runs:  {sessions}");

    draw_column(
        display,
        COL1_X,
        &[
            (phase.as_str(), VALUE_COLOR),
            (body.as_str(), VALUE_COLOR),
            (shown.as_str(), HIGHLIGHT_COLOR),
            (time.as_str(), VALUE_COLOR),
            (power.as_str(), VALUE_COLOR),
            (points.as_str(), VALUE_COLOR),
            (runs.as_str(), VALUE_COLOR),
        ],
    );
}

/// Frame timing statistics (middle column).
fn draw_timing_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let ms = |us: u32| us as f32 / 1000.0;

    let mut frame: String<20> = String::new();
    let _ = write!(frame, "Frame: {:.1}ms", ms(metrics.frame_time_us));
    let mut render: String<20> = String::new();
    let _ = write!(render, "Render:{:.1}ms", ms(metrics.render_time_us));
    let mut sleep: String<20> = String::new();
    let _ = write!(sleep, "Sleep: {:.1}ms", ms(metrics.sleep_time_us));
    let mut min: String<20> = String::new();
    let _ = write!(min, "Min:   {:.1}ms", ms(metrics.frame_time_min_us()));
    let mut max: String<20> = String::new();
    let _ = write!(max, "Max:   {:.1}ms", ms(metrics.frame_time_max_us));
    let mut avg: String<20> = String::new();
    let _ = write!(avg, "Avg:   {:.1}ms", ms(metrics.frame_time_avg_us()));

    draw_column(
        display,
        COL2_X,
        &[
            (frame.as_str(), VALUE_COLOR),
            (render.as_str(), VALUE_COLOR),
            (sleep.as_str(), VALUE_COLOR),
            (min.as_str(), HIGHLIGHT_COLOR),
            (max.as_str(), HIGHLIGHT_COLOR),
            (avg.as_str(), HIGHLIGHT_COLOR),
        ],
    );
}

/// Frame and tick counters plus alert flags (right column).
fn draw_counter_column<D>(
    display: &mut D,
    lab: &Lab,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let alerts = lab.alerts();
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let mut frames: String<20> = String::new();
    let _ = write!(frames, "Frames: {}", metrics.total_frames);
    let mut ticks: String<20> = String::new();
    let _ = write!(ticks, "Ticks:  {}", metrics.ticks);
    let mut paused: String<20> = String::new();
    let _ = write!(paused, "Paused: {}", metrics.paused_frames);
    let mut melt: String<20> = String::new();
    let _ = write!(melt, "Melt:   {}", yes_no(alerts.melting));
    let mut over: String<20> = String::new();
    let _ = write!(over, "Over:   {}", yes_no(alerts.overheating));

    draw_column(
        display,
        COL3_X,
        &[
            (frames.as_str(), VALUE_COLOR),
            (ticks.as_str(), VALUE_COLOR),
            (paused.as_str(), VALUE_COLOR),
            (melt.as_str(), if alerts.melting { ORANGE } else { VALUE_COLOR }),
            (over.as_str(), if alerts.overheating { RED } else { VALUE_COLOR }),
        ],
    );
}

/// Color of the level tag in the log terminal.
const fn level_color(level: Level) -> Rgb565 {
    match level {
        Level::Error => RED,
        Level::Warn => YELLOW,
        Level::Info => GREEN,
        Level::Debug | Level::Trace => GRAY,
    }
}

fn draw_log_terminal<D>(
    display: &mut D,
    size: Size,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    let top = LOG_DIVIDER_Y + 2;
    Rectangle::new(
        Point::new(0, top),
        Size::new(size.width, size.height.saturating_sub(top as u32)),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let tag_x = COL1_X + 2 * CHAR_WIDTH;
    let text_x = tag_x + LEVEL_TAG_CHARS * CHAR_WIDTH;
    let mut y = LOG_Y;

    for (level, line) in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(
            level.as_str(),
            Point::new(tag_x, y),
            MonoTextStyle::new(LABEL_FONT, level_color(level)),
        )
        .draw(display)
        .ok();
        Text::new(line, Point::new(text_x, y), text_style).draw(display).ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line<D>(
    display: &mut D,
    width: u32,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(width as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
