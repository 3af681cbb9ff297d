//! Color constants for the lab display.
//!
//! Standard colors come from the `RgbColor` trait constants so they map to the
//! exact RGB565 extremes; the rest are tuned by hand for the white canvas.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Axes, graph line, gauge leads and canvas text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Canvas background and text on dark fills.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Gauge indicator, overheating alert, "power off" button.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Log prompt on the debug page.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Highlighted values on the debug page.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Orange warning color. Melting banner.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Gray for the gauge scale marks and dividers.
/// RGB565: (16, 32, 16) - roughly 50% brightness, readable on white.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Dark gray for the header strip and the debug page section titles.
/// RGB565: (6, 12, 6).
pub const DARK_GRAY: Rgb565 = Rgb565::new(6, 12, 6);

/// Muted green for the "power on" button once the sample has cooled down.
/// RGB565: (3, 40, 8) - close to a bootstrap "success" button.
pub const SUCCESS_GREEN: Rgb565 = Rgb565::new(3, 40, 8);

/// Slate gray for the "power on" button while the sample is still cooling.
/// RGB565: (13, 29, 15) - close to a bootstrap "secondary" button.
pub const SECONDARY_GRAY: Rgb565 = Rgb565::new(13, 29, 15);
