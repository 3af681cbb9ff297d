//! Full-screen pages drawn by the simulator binary.
//!
//! The lab and instruction pages are pure widgets and live in the common
//! crate. The debug page needs host frame timing and the log backend, so it
//! lives here.

mod debug;

pub use debug::{DebugInfo, draw_debug_page};
