//! Default physical constants and temperature thresholds for the tin sample.
//!
//! All thresholds are compile-time constants with validation assertions.
//! The runtime [`HeatingParams`](crate::model::HeatingParams) start from these
//! values and may be overridden from the simulator's config file.
//!
//! # Compile-Time Validation
//!
//! Each threshold group includes `const` assertions that verify ordering at
//! compile time. If thresholds are configured incorrectly (e.g.
//! `MELTING_TEMP > MAX_TEMP`), compilation fails.
//!
//! # Timeline With Default Values
//!
//! ```text
//! heating rate = (0.1 A * 12 V) / (229 J/(kg*K) * 0.002 kg) ~= 2.62 C/s
//!
//!   t =   0 s   24 C  (room)
//!   t ~  94 s  270 C  tin starts melting, displayed value holds
//!   t ~ 132 s  370 C  overheat, heater is cut off
//! ```

// =============================================================================
// Temperature Thresholds
// =============================================================================

/// Ambient temperature. The sample starts here and the loop halts once it
/// cools back below it.
pub const ROOM_TEMP: f32 = 24.0;

/// Melting point of tin. Above this the displayed temperature holds at the
/// plateau while the phase change absorbs the heat.
pub const MELTING_TEMP: f32 = 270.0;

/// Overheat limit. Crossing it clamps the body temperature here and cuts
/// power to the heater.
pub const MAX_TEMP: f32 = 370.0;

const _: () = assert!(ROOM_TEMP < MELTING_TEMP);
const _: () = assert!(MELTING_TEMP < MAX_TEMP);

// =============================================================================
// Heating Element
// =============================================================================

/// Supply voltage across the heating element, in volts.
pub const VOLTAGE: f32 = 12.0;

/// Current through the heating element, in amperes.
pub const CURRENT: f32 = 0.1;

/// Specific heat of tin, in J/(kg*K).
pub const SPECIFIC_HEAT: f32 = 229.0;

/// Mass of the tin sample, in kilograms.
pub const MASS_OF_TIN: f32 = 0.002;

const _: () = assert!(VOLTAGE > 0.0);
const _: () = assert!(CURRENT > 0.0);
const _: () = assert!(SPECIFIC_HEAT > 0.0);
const _: () = assert!(MASS_OF_TIN > 0.0);

// =============================================================================
// Cooling
// =============================================================================

/// Temperature lost per millisecond of wall time while unpowered (5 C/s).
pub const COOLING_RATE_PER_MS: f32 = 0.005;

const _: () = assert!(COOLING_RATE_PER_MS > 0.0);

// =============================================================================
// Thermocouple
// =============================================================================

/// Thermocouple output in millivolts per degree Celsius.
pub const THERMOCOUPLE_MV_PER_C: f32 = 0.035;


// =============================================================================
// Unit Tests
// =============================================================================
