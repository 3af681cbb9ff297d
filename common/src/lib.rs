//! Heating model, coordinate mapping and drawing for the thermocouple lab.
//!
//! This crate holds everything that does not need an operating system:
//!
//! - [`model`]: joule-heating and cooling update rule
//! - [`mapper`]: time/temperature to canvas pixel mapping
//! - [`series`]: the accumulated graph polyline
//! - [`lab`]: session state machine ticked once per frame
//! - [`clock`]: injectable millisecond time source
//! - [`widgets`]: header, gauge, graph, alerts and instruction page
//! - [`config`] / [`thresholds`]: layout geometry and physical defaults
//! - [`animations`], [`colors`], [`styles`], [`pages`], [`profiling`]
//!
//! # no_std Compatibility
//!
//! The crate is `no_std`. Time comes in through [`clock::Clock`], floating
//! point helpers through `micromath`, and buffers are `heapless`.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod clock;
pub mod colors;
pub mod config;
pub mod lab;
pub mod mapper;
pub mod model;
pub mod pages;
pub mod profiling;
pub mod series;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use clock::{Clock, ManualClock};
pub use config::{Layout, Variant};
pub use lab::{Lab, LabPhase, TickReport};
pub use model::HeatingParams;
pub use pages::Page;
