//! Temperature model of the tin sample.
//!
//! # Update Rule
//!
//! While powered, the body temperature follows a linear joule-heating curve
//! measured from the moment power was switched on:
//!
//! ```text
//! T = room + (elapsed_s * I * V) / (c * m)
//! ```
//!
//! The curve is evaluated from total elapsed time rather than integrated per
//! step, so frame jitter never accumulates. While unpowered the body loses a
//! fixed amount of heat per millisecond since the previous tick.
//!
//! # Thresholds
//!
//! | Body temperature       | Body value  | Displayed value | Effect            |
//! |------------------------|-------------|-----------------|-------------------|
//! | `<= melting`           | unchanged   | body            | -                 |
//! | `melting < T <= max`   | unchanged   | melting         | melting plateau   |
//! | `> max`                | `max`       | melting         | power is cut      |
//!
//! Overheating is a domain event reported through [`Sample`], not an error.

use thiserror::Error;

use crate::thresholds::{
    COOLING_RATE_PER_MS,
    CURRENT,
    MASS_OF_TIN,
    MAX_TEMP,
    MELTING_TEMP,
    ROOM_TEMP,
    SPECIFIC_HEAT,
    VOLTAGE,
};

// =============================================================================
// Parameters
// =============================================================================

/// Physical parameters of the heating element and the sample.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeatingParams {
    /// Supply voltage in volts.
    pub voltage: f32,
    /// Element current in amperes.
    pub current: f32,
    /// Specific heat of the sample in J/(kg*K).
    pub specific_heat: f32,
    /// Sample mass in kilograms.
    pub mass: f32,
    pub room_temp: f32,
    pub melting_temp: f32,
    pub max_temp: f32,
    /// Degrees lost per millisecond while unpowered.
    pub cooling_rate: f32,
}

/// Rejected parameter combinations.
#[derive(Error, Clone, Copy, PartialEq, Debug)]
pub enum ParamError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("thresholds must satisfy room < melting < max ({room} / {melting} / {max})")]
    ThresholdOrder { room: f32, melting: f32, max: f32 },
    #[error("heating rate must be a positive finite number, got {rate} degrees per second")]
    HeatingRate { rate: f32 },
}

impl HeatingParams {
    /// A 2 g tin sample on a 1.2 W element.
    pub const DEFAULT: Self = Self {
        voltage: VOLTAGE,
        current: CURRENT,
        specific_heat: SPECIFIC_HEAT,
        mass: MASS_OF_TIN,
        room_temp: ROOM_TEMP,
        melting_temp: MELTING_TEMP,
        max_temp: MAX_TEMP,
        cooling_rate: COOLING_RATE_PER_MS,
    };

    /// Degrees gained per second of powered time.
    #[inline]
    pub fn heating_rate(&self) -> f32 { (self.current * self.voltage) / (self.specific_heat * self.mass) }

    /// Body temperature after `elapsed_s` seconds of heating from room temperature.
    #[inline]
    pub fn heated_temperature(
        &self,
        elapsed_s: f32,
    ) -> f32 {
        let delta = (elapsed_s * self.current * self.voltage) / (self.specific_heat * self.mass);
        delta + self.room_temp
    }

    /// Body temperature after cooling from `temperature` for `delta_ms` milliseconds.
    #[inline]
    pub fn cooled_temperature(
        &self,
        temperature: f32,
        delta_ms: u64,
    ) -> f32 {
        temperature - self.cooling_rate * delta_ms as f32
    }

    /// Seconds of heating until the melting plateau is reached.
    pub fn time_to_melt(&self) -> f32 { (self.melting_temp - self.room_temp) / self.heating_rate() }

    /// Seconds of heating until the overheat shutdown trips.
    pub fn time_to_overheat(&self) -> f32 { (self.max_temp - self.room_temp) / self.heating_rate() }

    /// Check that every quantity is usable by the model.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [
            ("voltage", self.voltage),
            ("current", self.current),
            ("specific_heat", self.specific_heat),
            ("mass", self.mass),
            ("cooling_rate", self.cooling_rate),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamError::NotPositive { name, value });
            }
        }

        // Each factor can be in range while the product over- or underflows
        let rate = self.heating_rate();
        if !(rate.is_finite() && rate > 0.0) {
            return Err(ParamError::HeatingRate { rate });
        }

        let ordered = self.room_temp < self.melting_temp && self.melting_temp < self.max_temp;
        if !ordered || !self.max_temp.is_finite() || !self.room_temp.is_finite() {
            return Err(ParamError::ThresholdOrder {
                room: self.room_temp,
                melting: self.melting_temp,
                max: self.max_temp,
            });
        }
        Ok(())
    }
}

impl Default for HeatingParams {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Simulation State
// =============================================================================

/// The mutable state bag of one lab session.
///
/// Owned by [`Lab`](crate::lab::Lab) and mutated once per tick by [`advance`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SimulationState {
    pub is_powered: bool,
    /// Temperature of the sample in degrees Celsius.
    pub body_temperature: f32,
    /// Seconds since the session started.
    pub elapsed_seconds: f32,
    /// Clock time the session started.
    pub start_ms: u64,
    /// Clock time of the previous tick.
    pub last_tick_ms: u64,
}

impl SimulationState {
    /// Unpowered sample resting at room temperature.
    pub const fn new(room_temp: f32) -> Self {
        Self {
            is_powered: false,
            body_temperature: room_temp,
            elapsed_seconds: 0.0,
            start_ms: 0,
            last_tick_ms: 0,
        }
    }

    /// Restart the session clock at `now_ms` with the sample at room temperature.
    pub const fn reset(
        &mut self,
        room_temp: f32,
        now_ms: u64,
    ) {
        self.body_temperature = room_temp;
        self.elapsed_seconds = 0.0;
        self.start_ms = now_ms;
        self.last_tick_ms = now_ms;
    }
}

/// Result of one model step.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sample {
    /// Temperature shown on the gauge and plotted on the graph.
    pub temperature: f32,
    /// Milliseconds since the previous tick.
    pub delta_ms: u64,
    /// Body is past the melting point (displayed value holds at the plateau).
    pub melting: bool,
    /// Body crossed the overheat limit this tick and power was cut.
    pub overheated: bool,
}

/// Advance the state to `now_ms` and return the temperature to display.
///
/// A clock that runs backwards is treated as no time passing.
pub fn advance(
    state: &mut SimulationState,
    params: &HeatingParams,
    now_ms: u64,
) -> Sample {
    let delta_ms = now_ms.saturating_sub(state.last_tick_ms);
    state.last_tick_ms = now_ms.max(state.last_tick_ms);
    state.elapsed_seconds = now_ms.saturating_sub(state.start_ms) as f32 / 1000.0;

    if state.is_powered {
        state.body_temperature = params.heated_temperature(state.elapsed_seconds);
    } else {
        state.body_temperature = params.cooled_temperature(state.body_temperature, delta_ms);
    }

    let overheated = state.body_temperature > params.max_temp;
    if overheated {
        state.body_temperature = params.max_temp;
        state.is_powered = false;
    }

    let melting = state.body_temperature > params.melting_temp;
    let temperature = if melting { params.melting_temp } else { state.body_temperature };

    Sample {
        temperature,
        delta_ms,
        melting,
        overheated,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn powered_state(start_ms: u64) -> SimulationState {
        let mut state = SimulationState::new(ROOM_TEMP);
        state.reset(ROOM_TEMP, start_ms);
        state.is_powered = true;
        state
    }

    // -------------------------------------------------------------------------
    // Parameter Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_params_validate() {
        assert_eq!(HeatingParams::DEFAULT.validate(), Ok(()));
        assert_eq!(HeatingParams::default(), HeatingParams::DEFAULT);
    }

    #[test]
    fn test_heated_temperature_at_zero_is_room() {
        let params = HeatingParams::DEFAULT;
        assert_eq!(params.heated_temperature(0.0), ROOM_TEMP);
    }

    #[test]
    fn test_heated_temperature_is_linear() {
        let params = HeatingParams::DEFAULT;
        let t10 = params.heated_temperature(10.0) - ROOM_TEMP;
        let t20 = params.heated_temperature(20.0) - ROOM_TEMP;
        assert!((t20 - 2.0 * t10).abs() < 1e-3, "heating must be linear in elapsed time");
    }

    #[test]
    fn test_time_to_melt_and_overheat() {
        let params = HeatingParams::DEFAULT;
        assert!((params.time_to_melt() - 93.9).abs() < 0.2, "got {}", params.time_to_melt());
        assert!((params.time_to_overheat() - 132.1).abs() < 0.5, "got {}", params.time_to_overheat());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let params = HeatingParams {
            mass: 0.0,
            ..HeatingParams::DEFAULT
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::NotPositive {
                name: "mass",
                value: 0.0
            })
        );

        let params = HeatingParams {
            voltage: f32::NAN,
            ..HeatingParams::DEFAULT
        };
        assert!(matches!(params.validate(), Err(ParamError::NotPositive { name: "voltage", .. })));
    }

    #[test]
    fn test_validate_rejects_threshold_order() {
        let params = HeatingParams {
            melting_temp: 400.0,
            ..HeatingParams::DEFAULT
        };
        assert!(matches!(params.validate(), Err(ParamError::ThresholdOrder { .. })));
    }

    #[test]
    fn test_validate_rejects_degenerate_heating_rate() {
        let underflow = HeatingParams {
            specific_heat: 1e-30,
            mass: 1e-30,
            ..HeatingParams::DEFAULT
        };
        assert!(
            matches!(underflow.validate(), Err(ParamError::HeatingRate { .. })),
            "c * m underflows to zero"
        );

        let vanishing = HeatingParams {
            voltage: 1e-30,
            current: 1e-30,
            ..HeatingParams::DEFAULT
        };
        assert_eq!(vanishing.validate(), Err(ParamError::HeatingRate { rate: 0.0 }), "I * V underflows to zero");

        let overflow = HeatingParams {
            voltage: 1e30,
            current: 1e30,
            ..HeatingParams::DEFAULT
        };
        assert!(matches!(overflow.validate(), Err(ParamError::HeatingRate { .. })), "I * V overflows");
    }

    // -------------------------------------------------------------------------
    // Powered Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_advance_powered_at_start_is_room() {
        let mut state = powered_state(5_000);
        let sample = advance(&mut state, &HeatingParams::DEFAULT, 5_000);
        assert_eq!(sample.temperature, ROOM_TEMP);
        assert!(!sample.melting);
        assert!(!sample.overheated);
    }

    #[test]
    fn test_advance_powered_is_monotonic_until_plateau() {
        let params = HeatingParams::DEFAULT;
        let mut state = powered_state(0);
        let mut prev = f32::MIN;

        // 130 s in 16 ms steps: stays below the overheat limit
        let mut now = 0;
        while now <= 130_000 {
            let sample = advance(&mut state, &params, now);
            assert!(sample.temperature >= prev, "temperature fell at {now} ms");
            assert!(sample.temperature <= params.melting_temp);
            prev = sample.temperature;
            now += 16;
        }
        assert_eq!(prev, params.melting_temp, "should have reached the plateau");
    }

    #[test]
    fn test_advance_plateau_holds_exactly() {
        let params = HeatingParams::DEFAULT;
        let mut state = powered_state(0);

        for now in [100_000, 110_000, 120_000, 130_000] {
            let sample = advance(&mut state, &params, now);
            assert!(sample.melting);
            assert_eq!(sample.temperature, params.melting_temp);
        }
        assert!(state.body_temperature > params.melting_temp, "body keeps heating under the plateau");
    }

    #[test]
    fn test_advance_overheat_clamps_and_cuts_power() {
        let params = HeatingParams::DEFAULT;
        let mut state = powered_state(0);

        let sample = advance(&mut state, &params, 200_000);
        assert!(sample.overheated);
        assert!(sample.melting);
        assert_eq!(sample.temperature, params.melting_temp);
        assert_eq!(state.body_temperature, params.max_temp);
        assert!(!state.is_powered, "overheat must cut power");
    }

    #[test]
    fn test_body_never_exceeds_max() {
        let params = HeatingParams::DEFAULT;
        let mut state = powered_state(0);
        for now in (0..400_000).step_by(1_000) {
            advance(&mut state, &params, now);
            assert!(state.body_temperature <= params.max_temp);
        }
    }

    // -------------------------------------------------------------------------
    // Cooling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_advance_unpowered_cools_by_delta() {
        let params = HeatingParams::DEFAULT;
        let mut state = SimulationState::new(ROOM_TEMP);
        state.reset(ROOM_TEMP, 0);
        state.body_temperature = 200.0;

        let sample = advance(&mut state, &params, 1_000);
        assert_eq!(sample.delta_ms, 1_000);
        // 0.005 C/ms * 1000 ms = 5 C
        assert!((state.body_temperature - 195.0).abs() < 1e-3);
        assert!((sample.temperature - 195.0).abs() < 1e-3);
    }

    #[test]
    fn test_advance_unpowered_strictly_decreases() {
        let params = HeatingParams::DEFAULT;
        let mut state = SimulationState::new(ROOM_TEMP);
        state.reset(ROOM_TEMP, 0);
        state.body_temperature = params.max_temp;

        let mut prev = state.body_temperature;
        for now in (16..60_000).step_by(16) {
            advance(&mut state, &params, now);
            assert!(state.body_temperature < prev, "cooling stalled at {now} ms");
            prev = state.body_temperature;
        }
    }

    #[test]
    fn test_advance_backwards_clock_is_no_time() {
        let params = HeatingParams::DEFAULT;
        let mut state = SimulationState::new(ROOM_TEMP);
        state.reset(ROOM_TEMP, 10_000);
        state.body_temperature = 100.0;

        let sample = advance(&mut state, &params, 9_000);
        assert_eq!(sample.delta_ms, 0);
        assert_eq!(state.body_temperature, 100.0);
        assert_eq!(state.elapsed_seconds, 0.0);
        assert_eq!(state.last_tick_ms, 10_000);
    }

    #[test]
    fn test_param_error_display() {
        use core::fmt::Write;

        let mut s: heapless::String<96> = heapless::String::new();
        let err = ParamError::NotPositive {
            name: "mass",
            value: -1.0,
        };
        write!(s, "{err}").ok();
        assert!(s.starts_with("mass must be a positive"));
    }
}
