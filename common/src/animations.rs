//! Animation effects for the alert banners and the power button.
//!
//! - **Blink**: the overheating banner flashes on a fixed frame cadence
//! - **Shake**: the overheating banner wiggles horizontally
//! - **Color fade**: the power button eases between its state colors
//!
//! # Shake Effect
//!
//! ```text
//! offset = sin(frame * SHAKE_FREQUENCY) * SHAKE_AMPLITUDE
//! ```
//!
//! The sine comes from `micromath` so the effect is available without `std`.
//!
//! # Color Fade
//!
//! Interpolation runs per channel in RGB565 space with 8-bit fixed point math.
//! Every step moves each differing channel by at least one unit, so a fade
//! always terminates.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};
use micromath::F32;

// =============================================================================
// Constants
// =============================================================================

/// Maximum horizontal shake offset in pixels.
const SHAKE_AMPLITUDE: f32 = 3.0;

/// Shake oscillation speed. At 60 FPS, 0.5 gives roughly 5 wiggles per second.
const SHAKE_FREQUENCY: f32 = 0.5;

/// Frames per blink half-period (~0.2 s at 60 FPS).
const BLINK_FRAMES: u32 = 12;

/// Fraction of the remaining distance covered per frame.
const COLOR_LERP_SPEED: f32 = 0.2;

/// Manhattan distance below which a fade snaps to its target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

// =============================================================================
// Blink and Shake
// =============================================================================

/// Whether a blinking element is visible on `frame`.
#[inline]
pub const fn blink_on(frame: u32) -> bool { (frame / BLINK_FRAMES) % 2 == 0 }

/// Horizontal offset of a shaking element, or 0 when `active` is false.
#[inline]
pub fn shake_offset(
    frame: u32,
    active: bool,
) -> i32 {
    if !active {
        return 0;
    }
    let phase = frame as f32 * SHAKE_FREQUENCY;
    (F32(phase).sin().0 * SHAKE_AMPLITUDE) as i32
}

// =============================================================================
// Color Fade
// =============================================================================

/// A single color easing toward a target over several frames.
#[derive(Clone, Copy, Debug)]
pub struct ColorFade {
    current: Rgb565,
    target: Rgb565,
}

impl ColorFade {
    /// Start settled on `color`.
    pub const fn new(color: Rgb565) -> Self {
        Self {
            current: color,
            target: color,
        }
    }

    /// Retarget the fade. Returns `true` if the target changed.
    pub fn set_target(
        &mut self,
        target: Rgb565,
    ) -> bool {
        if self.target == target {
            return false;
        }
        self.target = target;
        true
    }

    /// Advance one frame. Returns `true` while the color is still moving.
    pub fn update(&mut self) -> bool {
        if self.current == self.target {
            return false;
        }
        let next = lerp_rgb565(self.current, self.target, COLOR_LERP_SPEED);
        self.current = if colors_close_enough(next, self.target) {
            self.target
        } else {
            next
        };
        true
    }

    #[inline]
    pub const fn current(&self) -> Rgb565 { self.current }
}

fn channels(color: Rgb565) -> [i32; 3] {
    let raw = color.into_storage();
    [
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    ]
}

/// Interpolate `from` toward `to` by `t` (0.0..=1.0), at least one unit per
/// differing channel.
fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let t_fixed = (t * 256.0) as i32;
    let step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            return 0;
        }
        match (delta * t_fixed) >> 8 {
            0 => delta.signum(),
            s => s,
        }
    };

    let [fr, fg, fb] = channels(from);
    let [tr, tg, tb] = channels(to);
    let r = (fr + step(tr - fr)).clamp(0, 31);
    let g = (fg + step(tg - fg)).clamp(0, 63);
    let b = (fb + step(tb - fb)).clamp(0, 31);
    Rgb565::new(r as u8, g as u8, b as u8)
}

fn colors_close_enough(
    a: Rgb565,
    b: Rgb565,
) -> bool {
    let [ar, ag, ab] = channels(a);
    let [br, bg, bb] = channels(b);
    (ar - br).abs() + (ag - bg).abs() + (ab - bb).abs() <= COLOR_SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================
