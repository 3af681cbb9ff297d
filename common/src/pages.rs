//! Page navigation.
//!
//! # Pages
//!
//! - [`Page::Lab`]: header, thermocouple gauge and temperature graph
//! - [`Page::Instructions`]: procedure and key bindings
//! - [`Page::Debug`]: model snapshot, frame timing and the log terminal
//!
//! `I` flips between the lab and the instructions, `D` between the lab and
//! the debug page. The simulation keeps ticking whichever page is shown.

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    #[default]
    Lab,
    Instructions,
    Debug,
}

impl Page {
    /// Show or hide the instruction page.
    #[inline]
    pub const fn toggle_instructions(self) -> Self {
        match self {
            Self::Instructions => Self::Lab,
            Self::Lab | Self::Debug => Self::Instructions,
        }
    }

    /// Show or hide the debug page.
    #[inline]
    pub const fn toggle_debug(self) -> Self {
        match self {
            Self::Debug => Self::Lab,
            Self::Lab | Self::Instructions => Self::Debug,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lab => "Lab",
            Self::Instructions => "Instructions",
            Self::Debug => "Debug",
        }
    }
}
