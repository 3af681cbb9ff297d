//! Widget components for the lab display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so they draw into
//! the SDL simulator window as well as into the test canvas below. Everything
//! except the header and the modal box is drawn in canvas coordinates; the
//! lab page translates the target by [`CANVAS_OFFSET`] before drawing them.

mod alerts;
mod gauge;
mod graph;
mod header;
mod instructions;
mod primitives;

pub use alerts::{AlertKind, draw_banners, draw_modal};
pub use gauge::{draw_gauge, draw_gauge_frame, draw_indicator, mark_y};
pub use graph::{draw_axes, draw_curve, draw_graph};
pub use header::{draw_header, power_button_area, power_button_color};
pub use instructions::draw_instructions;
pub use primitives::{ArrowDir, draw_arrow_head, draw_framed_box, fill_rect};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{AlertStyle, CANVAS_HEIGHT, CANVAS_OFFSET, RedrawOrder};
use crate::lab::Lab;
use crate::styles::CANVAS_FILL;

/// Per-frame presentation state owned by the host loop.
#[derive(Clone, Copy, Debug)]
pub struct FrameView {
    /// Frame counter driving blink and shake.
    pub frame: u32,
    /// Current (possibly fading) power button color.
    pub button_color: Rgb565,
    /// Modal alert waiting for acknowledgement.
    pub modal: Option<AlertKind>,
}

/// Redraw the whole lab page: header, gauge, graph and alerts.
pub fn draw_lab_page<D>(
    display: &mut D,
    lab: &Lab,
    view: &FrameView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let layout = lab.layout();
    let screen = layout.screen_size();

    draw_header(display, screen.width, &lab.timer_label(), lab.power_button(), view.button_color);

    {
        let mut canvas = display.translated(CANVAS_OFFSET);
        Rectangle::new(Point::zero(), Size::new(screen.width, CANVAS_HEIGHT))
            .into_styled(CANVAS_FILL)
            .draw(&mut canvas)
            .ok();

        match layout.redraw_order {
            RedrawOrder::GaugeFirst => {
                draw_gauge(&mut canvas, lab.gauge_indicator_y());
                draw_graph(&mut canvas, layout, lab.series());
            }
            RedrawOrder::GraphFirst => {
                draw_graph(&mut canvas, layout, lab.series());
                draw_gauge(&mut canvas, lab.gauge_indicator_y());
            }
        }

        if layout.alert_style == AlertStyle::Banner {
            draw_banners(&mut canvas, layout, lab.alerts(), view.frame);
        }
    }

    if let Some(kind) = view.modal {
        draw_modal(display, screen, kind);
    }
}

// =============================================================================
// Test Canvas
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use micromath::F32;

    use super::test_canvas::TestCanvas;
    use super::*;
    use crate::colors::{BLACK, DARK_GRAY, ORANGE, RED, SUCCESS_GREEN, WHITE};
    use crate::config::{AXIS_Y_SIZE, HEADER_HEIGHT, Layout, RedrawOrder, Variant};
    use crate::lab::{AlertFlags, PowerButton};
    use crate::mapper::gauge_y;
    use crate::model::HeatingParams;
    use crate::series::GraphSeries;
    use crate::thresholds::ROOM_TEMP;

    fn view() -> FrameView {
        FrameView {
            frame: 0,
            button_color: SUCCESS_GREEN,
            modal: None,
        }
    }

    // -------------------------------------------------------------------------
    // Gauge Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_gauge_indicator_is_red_at_mapped_height() {
        let mut canvas = TestCanvas::new();
        let y = gauge_y(200.0);
        draw_gauge(&mut canvas, y);

        let row = F32(y).round().0 as i32;
        assert_eq!(canvas.pixel(75, row), RED, "indicator spans between the leads");
        assert_eq!(canvas.pixel(75, row + 1), RED, "indicator is two pixels thick");
        assert_eq!(canvas.count(RED), 50 * 2);
    }

    #[test]
    fn test_gauge_leads_and_stubs() {
        let mut canvas = TestCanvas::new();
        canvas.fill_solid(&canvas.bounding_box(), WHITE).ok();
        draw_gauge_frame(&mut canvas);

        assert_eq!(canvas.pixel(50, 100), BLACK, "left lead");
        assert_eq!(canvas.pixel(100, 100), BLACK, "right lead");
        assert_eq!(canvas.pixel(30, 0), BLACK, "top-left stub");
        assert_eq!(canvas.pixel(120, AXIS_Y_SIZE), BLACK, "bottom-right stub");
        assert_eq!(canvas.pixel(30, 100), WHITE, "nothing between the stubs");
    }

    #[test]
    fn test_gauge_marks_spacing() {
        assert_eq!(mark_y(0), AXIS_Y_SIZE);
        assert_eq!(mark_y(1), AXIS_Y_SIZE - 17);
        assert_eq!(mark_y(11), AXIS_Y_SIZE - 187);
    }

    // -------------------------------------------------------------------------
    // Graph Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_axes_pass_through_origin() {
        let layout = Layout::new(Variant::Compact, 350);
        let mut canvas = TestCanvas::new();
        canvas.fill_solid(&canvas.bounding_box(), WHITE).ok();
        draw_axes(&mut canvas, &layout);

        let ox = layout.graph_origin_x() as i32;
        assert_eq!(canvas.pixel(ox, AXIS_Y_SIZE), BLACK);
        assert_eq!(canvas.pixel(ox, 100), BLACK, "Y axis");
        assert_eq!(canvas.pixel(300, AXIS_Y_SIZE), BLACK, "X axis");
    }

    #[test]
    fn test_curve_needs_two_points() {
        let mut canvas = TestCanvas::new();
        let mut series = GraphSeries::new();
        series.reset(Point::new(200, 100));
        canvas.fill_solid(&canvas.bounding_box(), WHITE).ok();
        draw_curve(&mut canvas, &series);
        assert_eq!(canvas.count(BLACK), 0, "a single point draws nothing");

        series.push(Point::new(220, 80));
        draw_curve(&mut canvas, &series);
        assert!(canvas.count(BLACK) > 20);
    }

    // -------------------------------------------------------------------------
    // Banner Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_banners_follow_flags() {
        let layout = Layout::new(Variant::Wide, 1280);
        let mut canvas = TestCanvas::new();

        draw_banners(&mut canvas, &layout, AlertFlags::default(), 0);
        assert_eq!(canvas.count(ORANGE), 0);
        assert_eq!(canvas.count(RED), 0);

        let flags = AlertFlags {
            melting: true,
            overheating: true,
        };
        draw_banners(&mut canvas, &layout, flags, 0);
        assert!(canvas.count(ORANGE) > 0, "melting banner");
        assert!(canvas.count(RED) > 0, "overheating banner on a blink-on frame");
    }

    // -------------------------------------------------------------------------
    // Page Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_lab_page_header_and_canvas() {
        let lab = Lab::new(HeatingParams::DEFAULT, Layout::new(Variant::Compact, 350));
        let mut canvas = TestCanvas::new();
        draw_lab_page(&mut canvas, &lab, &view());

        assert_eq!(canvas.pixel(1, 1), DARK_GRAY, "header strip");
        assert_eq!(canvas.pixel(340, HEADER_HEIGHT as i32 + 100), WHITE, "canvas background");

        let indicator_row = HEADER_HEIGHT as i32 + F32(gauge_y(ROOM_TEMP)).round().0 as i32;
        assert_eq!(canvas.pixel(75, indicator_row), RED, "indicator at room temperature");

        let button = power_button_area(350);
        assert_eq!(lab.power_button(), PowerButton::Success);
        assert_eq!(canvas.pixel(button.top_left.x + 1, button.top_left.y + 1), SUCCESS_GREEN);
    }

    #[test]
    fn test_redraw_order_decides_what_paints_last() {
        // A narrow canvas pulls the Y axis (x = 150 / 3 + 40) across the indicator
        let narrow = Layout {
            canvas_width: 150,
            ..Layout::new(Variant::Wide, 350)
        };
        let ox = narrow.graph_origin_x() as i32;
        assert_eq!(ox, 90, "axis lies between the gauge leads");
        let row = HEADER_HEIGHT as i32 + F32(gauge_y(ROOM_TEMP)).round().0 as i32;

        let lab = Lab::new(HeatingParams::DEFAULT, Layout {
            redraw_order: RedrawOrder::GaugeFirst,
            ..narrow
        });
        let mut canvas = TestCanvas::new();
        draw_lab_page(&mut canvas, &lab, &view());
        assert_eq!(canvas.pixel(ox, row), BLACK, "graph drawn last covers the indicator");
        assert_eq!(canvas.pixel(ox - 10, row), RED, "indicator away from the axis");

        let lab = Lab::new(HeatingParams::DEFAULT, Layout {
            redraw_order: RedrawOrder::GraphFirst,
            ..narrow
        });
        let mut canvas = TestCanvas::new();
        draw_lab_page(&mut canvas, &lab, &view());
        assert_eq!(canvas.pixel(ox, row), RED, "gauge drawn last covers the axis");
    }

    #[test]
    fn test_lab_page_draws_modal() {
        let lab = Lab::new(HeatingParams::DEFAULT, Layout::new(Variant::Compact, 350));
        let mut canvas = TestCanvas::new();
        let view = FrameView {
            modal: Some(AlertKind::Overheating),
            ..view()
        };
        draw_lab_page(&mut canvas, &lab, &view);

        let center = lab.layout().screen_size();
        let (cx, cy) = (center.width as i32 / 2, center.height as i32 / 2);
        assert_eq!(canvas.pixel(cx - 117, cy - 30), RED, "modal background");
    }

    #[test]
    fn test_instructions_leave_header_alone() {
        let mut canvas = TestCanvas::new();
        draw_instructions(&mut canvas, &HeatingParams::DEFAULT);
        assert_eq!(canvas.pixel(1, 0), BLACK, "header area is left alone");
        assert!(canvas.count_in_rows(HEADER_HEIGHT as i32..HEADER_HEIGHT as i32 + 200, WHITE) > 0);
    }
}
