//! Lab session: the state bag, the graph and the power switch.
//!
//! A [`Lab`] owns everything one run of the experiment mutates and is ticked
//! exactly once per frame by the host loop. It never reads a platform clock;
//! the current time is passed in (or read from an injected [`Clock`]).
//!
//! # Phases
//!
//! ```text
//!            toggle                 toggle / overheat
//!   Idle ─────────────> Heating ─────────────────────> Cooling
//!    ^                    ^                               │
//!    │                    └────────── toggle ─────────────┤
//!    └──────────── shown temperature < room ──────────────┘
//! ```
//!
//! Switching power on always restarts the session: the timer, the sample
//! temperature and the graph are reset. The loop keeps running (and plotting)
//! while the sample cools and halts once it is back below room temperature.
//!
//! # Alerts
//!
//! The melting alert is visible while the body is past the melting point.
//! The overheating alert is raised when the shutdown trips and stays up until
//! the body has cooled below the melting point again; at that moment both
//! alerts are cleared together.

use core::fmt::Write;

use heapless::String;
use micromath::F32;

use crate::clock::Clock;
use crate::config::Layout;
use crate::mapper::{gauge_y, graph_point};
use crate::model::{HeatingParams, SimulationState, advance};
use crate::series::GraphSeries;

// =============================================================================
// Phase and Alert State
// =============================================================================

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LabPhase {
    /// Loop halted; the sample rests at room temperature.
    #[default]
    Idle,
    /// Heater powered, temperature rising.
    Heating,
    /// Heater off, temperature falling, loop still running.
    Cooling,
}

impl LabPhase {
    /// Whether the animation loop should keep ticking.
    #[inline]
    pub const fn is_running(self) -> bool { !matches!(self, Self::Idle) }

    /// Short upper-case name for status displays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Heating => "HEATING",
            Self::Cooling => "COOLING",
        }
    }
}

/// Visibility of the two threshold alerts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AlertFlags {
    pub melting: bool,
    pub overheating: bool,
}

impl AlertFlags {
    #[inline]
    pub const fn any(self) -> bool { self.melting || self.overheating }

    #[inline]
    pub const fn clear(&mut self) {
        self.melting = false;
        self.overheating = false;
    }
}

/// Look of the power button, named after the bootstrap classes the lab page
/// used: danger while powered, secondary while cooling, success once halted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PowerButton {
    Danger,
    Secondary,
    Success,
}

impl PowerButton {
    /// Caption of the button: the action a press performs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Danger => "POWER OFF",
            Self::Secondary | Self::Success => "POWER ON",
        }
    }
}

// =============================================================================
// Tick Report
// =============================================================================

/// What happened during one tick.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TickReport {
    /// Seconds since power-on.
    pub elapsed_seconds: f32,
    /// Temperature shown on the gauge and graph.
    pub temperature: f32,
    /// The melting alert became visible this tick.
    pub melting_started: bool,
    /// The overheat shutdown tripped this tick.
    pub overheated: bool,
    /// The sample cooled below room temperature and the loop stopped.
    pub halted: bool,
}

// =============================================================================
// Lab Session
// =============================================================================

/// One thermocouple lab session.
pub struct Lab {
    params: HeatingParams,
    layout: Layout,
    state: SimulationState,
    series: GraphSeries,
    alerts: AlertFlags,
    phase: LabPhase,
    /// Temperature currently displayed (plateau-clamped).
    shown_temperature: f32,
}

impl Lab {
    /// Idle session with the sample at room temperature.
    pub fn new(
        params: HeatingParams,
        layout: Layout,
    ) -> Self {
        let mut series = GraphSeries::new();
        series.reset(graph_point(&layout, 0.0, params.room_temp));
        Self {
            params,
            layout,
            state: SimulationState::new(params.room_temp),
            series,
            alerts: AlertFlags::default(),
            phase: LabPhase::Idle,
            shown_temperature: params.room_temp,
        }
    }

    // -------------------------------------------------------------------------
    // Power Control
    // -------------------------------------------------------------------------

    /// Switch the heater on and restart the session at `now_ms`.
    pub fn power_on(
        &mut self,
        now_ms: u64,
    ) {
        self.state.reset(self.params.room_temp, now_ms);
        self.state.is_powered = true;
        self.series.reset(graph_point(&self.layout, 0.0, self.params.room_temp));
        self.alerts.clear();
        self.shown_temperature = self.params.room_temp;
        self.phase = LabPhase::Heating;
        log::info!("power on at {:.1} C", self.params.room_temp);
    }

    /// Switch the heater off. The loop keeps running while the sample cools.
    pub fn power_off(&mut self) {
        if self.phase != LabPhase::Heating {
            return;
        }
        self.state.is_powered = false;
        self.phase = LabPhase::Cooling;
        log::info!("power off at {:.1} C", self.state.body_temperature);
    }

    /// Flip the power switch. Returns the new phase.
    pub fn toggle(
        &mut self,
        now_ms: u64,
    ) -> LabPhase {
        if self.state.is_powered {
            self.power_off();
        } else {
            self.power_on(now_ms);
        }
        self.phase
    }

    // -------------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------------

    /// Advance the session to `now_ms`.
    ///
    /// Returns `None` without touching any state when the loop is halted.
    pub fn tick(
        &mut self,
        now_ms: u64,
    ) -> Option<TickReport> {
        if !self.phase.is_running() {
            return None;
        }

        let was_melting = self.alerts.melting;
        let sample = advance(&mut self.state, &self.params, now_ms);

        if sample.overheated {
            self.alerts.overheating = true;
            self.phase = LabPhase::Cooling;
            log::warn!("overheat: body clamped to {:.0} C, heater cut off", self.params.max_temp);
        }

        if sample.melting {
            self.alerts.melting = true;
        } else {
            self.alerts.clear();
        }

        let melting_started = self.alerts.melting && !was_melting;
        if melting_started {
            log::info!("tin is melting at {:.1} s", self.state.elapsed_seconds);
        }

        self.shown_temperature = sample.temperature;
        self.series
            .push(graph_point(&self.layout, self.state.elapsed_seconds, sample.temperature));

        let halted = sample.temperature < self.params.room_temp;
        if halted {
            self.halt();
        }

        Some(TickReport {
            elapsed_seconds: self.state.elapsed_seconds,
            temperature: sample.temperature,
            melting_started,
            overheated: sample.overheated,
            halted,
        })
    }

    /// Advance the session to the clock's current time.
    pub fn tick_with<C: Clock>(
        &mut self,
        clock: &C,
    ) -> Option<TickReport> {
        self.tick(clock.now_ms())
    }

    /// Stop the loop and settle the sample back at room temperature.
    fn halt(&mut self) {
        self.alerts.clear();
        self.state.is_powered = false;
        self.state.body_temperature = self.params.room_temp;
        self.shown_temperature = self.params.room_temp;
        self.phase = LabPhase::Idle;
        log::info!("sample back at room temperature after {:.1} s", self.state.elapsed_seconds);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn phase(&self) -> LabPhase { self.phase }

    #[inline]
    pub const fn state(&self) -> &SimulationState { &self.state }

    #[inline]
    pub const fn params(&self) -> &HeatingParams { &self.params }

    #[inline]
    pub const fn layout(&self) -> &Layout { &self.layout }

    #[inline]
    pub const fn series(&self) -> &GraphSeries { &self.series }

    #[inline]
    pub const fn alerts(&self) -> AlertFlags { self.alerts }

    /// Temperature on the gauge and at the head of the graph.
    #[inline]
    pub const fn shown_temperature(&self) -> f32 { self.shown_temperature }

    /// Canvas Y of the gauge indicator.
    #[inline]
    pub fn gauge_indicator_y(&self) -> f32 { gauge_y(self.shown_temperature) }

    pub const fn power_button(&self) -> PowerButton {
        match self.phase {
            LabPhase::Heating => PowerButton::Danger,
            LabPhase::Cooling => PowerButton::Secondary,
            LabPhase::Idle => PowerButton::Success,
        }
    }

    /// Elapsed time label, e.g. `"12.34 s"`.
    pub fn timer_label(&self) -> String<16> { format_timer(self.state.elapsed_seconds) }
}

/// Format seconds rounded to hundredths, e.g. `"12.34 s"`.
pub fn format_timer(seconds: f32) -> String<16> {
    let rounded = F32(seconds * 100.0).round().0 / 100.0;
    let mut s = String::new();
    let _ = write!(s, "{rounded:.2} s");
    s
}

// =============================================================================
// Unit Tests
// =============================================================================
