//! Simulator state between the window loop and the lab session.
//!
//! [`App`] owns the [`Lab`], the current page, the pending modal alert and the
//! power button fade. The window loop feeds it key actions and the current
//! time once per frame, then asks it to draw. It never touches the window, so
//! whole sessions can be driven from tests with a `ManualClock`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use thermolab_common::Clock;
use thermolab_common::animations::ColorFade;
use thermolab_common::colors::BLACK;
use thermolab_common::config::{AlertStyle, Layout};
use thermolab_common::lab::{Lab, LabPhase, TickReport};
use thermolab_common::model::HeatingParams;
use thermolab_common::pages::Page;
use thermolab_common::profiling::DebugLog;
use thermolab_common::widgets::{
    AlertKind,
    FrameView,
    draw_header,
    draw_instructions,
    draw_lab_page,
    power_button_color,
};

use crate::input::Action;
use crate::profiling::ProfilingMetrics;
use crate::logging;
use crate::screens::{DebugInfo, draw_debug_page};

pub struct App {
    lab: Lab,
    page: Page,
    /// Modal alert waiting for acknowledgement; the lab is paused meanwhile.
    modal: Option<AlertKind>,
    button_fade: ColorFade,
    frame: u32,
    sessions: u32,
}

impl App {
    pub fn new(
        params: HeatingParams,
        layout: Layout,
    ) -> Self {
        let lab = Lab::new(params, layout);
        let button_fade = ColorFade::new(power_button_color(lab.power_button()));
        Self {
            lab,
            page: Page::default(),
            modal: None,
            button_fade,
            frame: 0,
            sessions: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Apply a user action at `now_ms`. Returns `false` when the app should quit.
    ///
    /// While a modal alert is open only acknowledging it and quitting work.
    pub fn apply(
        &mut self,
        action: Action,
        now_ms: u64,
    ) -> bool {
        match action {
            Action::Quit => return false,
            Action::Acknowledge => {
                if let Some(kind) = self.modal.take() {
                    log::debug!("{} alert closed", kind.title());
                }
            }
            _ if self.modal.is_some() => {
                log::debug!("{action:?} ignored while an alert is open");
            }
            Action::TogglePower => {
                if self.lab.toggle(now_ms) == LabPhase::Heating {
                    self.sessions += 1;
                }
            }
            Action::ToggleInstructions => {
                self.page = self.page.toggle_instructions();
                log::debug!("page: {}", self.page.name());
            }
            Action::ToggleDebug => {
                self.page = self.page.toggle_debug();
                log::debug!("page: {}", self.page.name());
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Frame Update
    // -------------------------------------------------------------------------

    /// Advance animations and, unless paused by a modal alert, the lab.
    pub fn update<C: Clock>(
        &mut self,
        clock: &C,
    ) -> Option<TickReport> {
        self.frame = self.frame.wrapping_add(1);
        self.button_fade.set_target(power_button_color(self.lab.power_button()));
        self.button_fade.update();

        if self.is_paused() {
            return None;
        }

        let report = self.lab.tick_with(clock)?;
        if self.lab.layout().alert_style == AlertStyle::Modal {
            if report.overheated {
                self.modal = Some(AlertKind::Overheating);
            } else if report.melting_started {
                self.modal = Some(AlertKind::Melting);
            }
        }
        Some(report)
    }

    /// Whether a modal alert is holding the simulation.
    #[inline]
    pub const fn is_paused(&self) -> bool { self.modal.is_some() }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub fn view(&self) -> FrameView {
        FrameView {
            frame: self.frame,
            button_color: self.button_fade.current(),
            modal: self.modal,
        }
    }

    /// Redraw the current page.
    pub fn draw<D>(
        &self,
        display: &mut D,
        metrics: &ProfilingMetrics,
        fps: f32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        match self.page {
            Page::Lab => draw_lab_page(display, &self.lab, &self.view()),
            Page::Instructions => {
                let width = self.lab.layout().screen_size().width;
                draw_header(
                    display,
                    width,
                    &self.lab.timer_label(),
                    self.lab.power_button(),
                    self.button_fade.current(),
                );
                draw_instructions(display, self.lab.params());
            }
            Page::Debug => {
                display.clear(BLACK).ok();
                let log = logging::with_debug_log(DebugLog::clone);
                draw_debug_page(
                    display,
                    &DebugInfo {
                        lab: &self.lab,
                        metrics,
                        log: &log,
                        fps,
                        sessions: self.sessions,
                    },
                );
            }
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn lab(&self) -> &Lab { &self.lab }

    #[cfg(test)]
    pub const fn page(&self) -> Page { self.page }

    #[cfg(test)]
    pub const fn modal(&self) -> Option<AlertKind> { self.modal }

    #[inline]
    pub const fn sessions(&self) -> u32 { self.sessions }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use thermolab_common::ManualClock;
    use thermolab_common::config::Variant;
    use thermolab_common::lab::PowerButton;
    use thermolab_common::thresholds::MELTING_TEMP;

    use super::*;

    const FRAME_MS: u64 = 16;

    fn app(variant: Variant) -> App { App::new(HeatingParams::DEFAULT, Layout::new(variant, 350)) }

    /// Run frames from `*now` until `until`, returning every report.
    fn run(
        app: &mut App,
        now: &mut u64,
        until: u64,
    ) -> Vec<TickReport> {
        let mut clock = ManualClock::new(*now);
        let mut reports = Vec::new();
        while *now < until {
            *now += FRAME_MS;
            clock.set(*now);
            reports.extend(app.update(&clock));
        }
        reports
    }

    // -------------------------------------------------------------------------
    // Action Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_quit_stops_the_loop() {
        let mut app = app(Variant::Wide);
        assert!(app.apply(Action::TogglePower, 0));
        assert!(!app.apply(Action::Quit, 0));
    }

    #[test]
    fn test_toggle_power_counts_sessions() {
        let mut app = app(Variant::Wide);
        app.apply(Action::TogglePower, 0);
        assert_eq!(app.lab().phase(), LabPhase::Heating);
        app.apply(Action::TogglePower, 1_000);
        assert_eq!(app.lab().phase(), LabPhase::Cooling);
        app.apply(Action::TogglePower, 2_000);
        assert_eq!(app.lab().phase(), LabPhase::Heating, "power on while cooling restarts");
        assert_eq!(app.sessions(), 2);
    }

    #[test]
    fn test_page_toggles() {
        let mut app = app(Variant::Wide);
        app.apply(Action::ToggleInstructions, 0);
        assert_eq!(app.page(), Page::Instructions);
        app.apply(Action::ToggleDebug, 0);
        assert_eq!(app.page(), Page::Debug);
        app.apply(Action::ToggleDebug, 0);
        assert_eq!(app.page(), Page::Lab);
    }

    #[test]
    fn test_simulation_runs_on_other_pages() {
        let mut app = app(Variant::Wide);
        app.apply(Action::TogglePower, 0);
        app.apply(Action::ToggleDebug, 0);
        let mut now = 0;
        let reports = run(&mut app, &mut now, 5_000);
        assert!(!reports.is_empty());
        assert!(app.lab().state().elapsed_seconds > 4.9);
    }

    // -------------------------------------------------------------------------
    // Modal Alert Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_compact_variant_pauses_on_melting() {
        let mut app = app(Variant::Compact);
        let mut now = 0;
        app.apply(Action::TogglePower, now);
        run(&mut app, &mut now, 100_000);

        assert_eq!(app.modal(), Some(AlertKind::Melting));
        assert!(app.is_paused());

        let frozen = app.lab().state().elapsed_seconds;
        assert!(run(&mut app, &mut now, 105_000).is_empty(), "no ticks while the alert is open");
        assert_eq!(app.lab().state().elapsed_seconds, frozen);
    }

    #[test]
    fn test_modal_blocks_other_actions() {
        let mut app = app(Variant::Compact);
        let mut now = 0;
        app.apply(Action::TogglePower, now);
        run(&mut app, &mut now, 100_000);

        app.apply(Action::TogglePower, now);
        app.apply(Action::ToggleDebug, now);
        assert_eq!(app.lab().phase(), LabPhase::Heating);
        assert_eq!(app.page(), Page::Lab);

        app.apply(Action::Acknowledge, now);
        assert!(!app.is_paused());
    }

    #[test]
    fn test_tick_after_acknowledge_absorbs_gap() {
        let mut app = app(Variant::Compact);
        let mut now = 0;
        app.apply(Action::TogglePower, now);
        run(&mut app, &mut now, 100_000);
        run(&mut app, &mut now, 110_000);
        app.apply(Action::Acknowledge, now);

        let report = app.update(&ManualClock::new(now + FRAME_MS)).unwrap();
        assert!(report.elapsed_seconds > 110.0, "elapsed time includes the paused gap");
        assert_eq!(report.temperature, MELTING_TEMP);
    }

    #[test]
    fn test_compact_variant_raises_overheat_alert() {
        let mut app = app(Variant::Compact);
        let mut now = 0;
        app.apply(Action::TogglePower, now);
        run(&mut app, &mut now, 100_000);
        app.apply(Action::Acknowledge, now);
        run(&mut app, &mut now, 140_000);

        assert_eq!(app.modal(), Some(AlertKind::Overheating));
        assert_eq!(app.lab().phase(), LabPhase::Cooling);
    }

    #[test]
    fn test_wide_variant_never_pauses() {
        let mut app = app(Variant::Wide);
        let mut now = 0;
        app.apply(Action::TogglePower, now);
        run(&mut app, &mut now, 140_000);
        assert_eq!(app.modal(), None);
        assert!(app.lab().alerts().overheating, "banner flag is up instead");
    }

    // -------------------------------------------------------------------------
    // View Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_button_fades_to_state_color() {
        let mut app = app(Variant::Wide);
        assert_eq!(app.view().button_color, power_button_color(PowerButton::Success));

        let mut now = 0;
        app.apply(Action::TogglePower, now);
        app.update(&ManualClock::new(FRAME_MS));
        assert_ne!(app.view().button_color, power_button_color(PowerButton::Danger), "fade takes several frames");

        run(&mut app, &mut now, 2_000);
        assert_eq!(app.view().button_color, power_button_color(PowerButton::Danger));
    }
}
