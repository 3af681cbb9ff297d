//! Mapping from simulated time and temperature to canvas pixels.
//!
//! All functions are pure; the only input besides the value is the runtime
//! [`Layout`], which fixes the graph origin and the time scale. Canvas
//! coordinates grow downward, so higher temperatures map to smaller Y.
//!
//! ```text
//! graph_x(t) = t / graph_step_x * NUMS_DISTANCE + graph_origin_x
//! graph_y(T) = AXIS_Y_SIZE - T / GRAPH_STEP_Y * NUMS_DISTANCE
//! gauge_y(T) = AXIS_Y_SIZE - (0.035 * T) / GAUGE_STEP_Y * GAUGE_MARK_SPACING
//! ```

use embedded_graphics::prelude::Point;
use micromath::F32;

use crate::config::{AXIS_Y_SIZE, GAUGE_MARK_SPACING, GAUGE_STEP_Y, GRAPH_STEP_Y, Layout, NUMS_DISTANCE};
use crate::thresholds::THERMOCOUPLE_MV_PER_C;

/// Canvas X of the graph point at `seconds` since power-on.
#[inline]
pub fn graph_x(
    layout: &Layout,
    seconds: f32,
) -> f32 {
    seconds / layout.graph_step_x * NUMS_DISTANCE + layout.graph_origin_x()
}

/// Canvas Y of the graph point at `temperature` degrees.
#[inline]
pub fn graph_y(temperature: f32) -> f32 { AXIS_Y_SIZE as f32 - temperature / GRAPH_STEP_Y * NUMS_DISTANCE }

/// Canvas Y of the thermocouple indicator at `temperature` degrees.
#[inline]
pub fn gauge_y(temperature: f32) -> f32 {
    AXIS_Y_SIZE as f32 - (THERMOCOUPLE_MV_PER_C * temperature) / GAUGE_STEP_Y * GAUGE_MARK_SPACING
}

/// Round a floating point canvas position to the nearest pixel.
#[inline]
pub fn to_point(
    x: f32,
    y: f32,
) -> Point {
    Point::new(F32(x).round().0 as i32, F32(y).round().0 as i32)
}

/// Pixel of the graph sample `(seconds, temperature)`.
#[inline]
pub fn graph_point(
    layout: &Layout,
    seconds: f32,
    temperature: f32,
) -> Point {
    to_point(graph_x(layout, seconds), graph_y(temperature))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRAPH_STEP_X_COMPACT, Variant};

    fn compact() -> Layout { Layout::new(Variant::Compact, 350) }

    #[test]
    fn test_graph_x_starts_at_origin() {
        let layout = compact();
        assert_eq!(graph_x(&layout, 0.0), layout.graph_origin_x());
    }

    #[test]
    fn test_graph_x_one_step_per_mark() {
        let layout = compact();
        let x = graph_x(&layout, GRAPH_STEP_X_COMPACT);
        assert!((x - layout.graph_origin_x() - NUMS_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_graph_y_values() {
        assert_eq!(graph_y(0.0), 200.0, "0 C sits on the X axis");
        assert_eq!(graph_y(50.0), 180.0, "one tick per 50 C");
        assert!((graph_y(270.0) - 92.0).abs() < 1e-3);
    }

    #[test]
    fn test_gauge_y_values() {
        assert_eq!(gauge_y(0.0), 200.0);
        // 270 C -> 9.45 mV -> 160.65 px above the base
        assert!((gauge_y(270.0) - 39.35).abs() < 1e-3);
    }

    #[test]
    fn test_gauge_reads_against_scale_marks() {
        // 1 mV of thermocouple output must land on the first scale mark
        let one_mv = 1.0 / THERMOCOUPLE_MV_PER_C;
        assert!((gauge_y(one_mv) - (AXIS_Y_SIZE as f32 - GAUGE_MARK_SPACING)).abs() < 1e-3);
    }

    #[test]
    fn test_higher_temperature_is_higher_on_screen() {
        assert!(graph_y(100.0) < graph_y(50.0));
        assert!(gauge_y(100.0) < gauge_y(50.0));
    }

    #[test]
    fn test_to_point_rounds() {
        assert_eq!(to_point(10.4, 20.6), Point::new(10, 21));
        assert_eq!(to_point(156.666, 92.0), Point::new(157, 92));
    }

    #[test]
    fn test_graph_point_at_room_temperature() {
        let layout = compact();
        assert_eq!(graph_point(&layout, 0.0, 24.0), Point::new(157, 190));
    }
}
