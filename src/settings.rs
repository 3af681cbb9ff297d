//! Runtime configuration: optional TOML file plus command-line overrides.
//!
//! Every key is optional. A missing file section or key falls back to the
//! compile-time defaults from `thermolab_common::thresholds` and
//! `thermolab_common::config`.
//!
//! ```toml
//! [physics]
//! voltage = 12.0
//! current = 0.1
//! specific_heat = 229.0
//! mass = 0.002
//! room_temp = 24.0
//! melting_temp = 270.0
//! max_temp = 370.0
//! cooling_rate = 0.005
//!
//! [layout]
//! variant = "wide"        # or "compact"
//! window_width = 1280
//!
//! [alerts]
//! style = "banner"        # or "modal"; defaults to the variant's style
//!
//! [window]
//! scale = 2
//! title = "Thermocouple Lab"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thermolab_common::config::{AlertStyle, Layout, Variant};
use thermolab_common::model::HeatingParams;
use thiserror::Error;

use crate::cli::Cli;

/// Largest accepted window scale factor.
pub const MAX_SCALE: u32 = 8;

/// Widest accepted window in pixels (8K).
pub const MAX_WINDOW_WIDTH: u32 = 7680;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// File Schema
// =============================================================================

/// Layout variant as written in the config file and on the command line.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VariantName {
    #[default]
    Wide,
    Compact,
}

impl From<VariantName> for Variant {
    fn from(name: VariantName) -> Self {
        match name {
            VariantName::Wide => Self::Wide,
            VariantName::Compact => Self::Compact,
        }
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AlertStyleName {
    Banner,
    Modal,
}

impl From<AlertStyleName> for AlertStyle {
    fn from(name: AlertStyleName) -> Self {
        match name {
            AlertStyleName::Banner => Self::Banner,
            AlertStyleName::Modal => Self::Modal,
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub physics: PhysicsSettings,
    pub layout: LayoutSettings,
    pub alerts: AlertSettings,
    pub window: WindowSettings,
}

/// Overrides for [`HeatingParams`]; unset keys keep the default.
#[derive(Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsSettings {
    pub voltage: Option<f32>,
    pub current: Option<f32>,
    pub specific_heat: Option<f32>,
    pub mass: Option<f32>,
    pub room_temp: Option<f32>,
    pub melting_temp: Option<f32>,
    pub max_temp: Option<f32>,
    pub cooling_rate: Option<f32>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    pub variant: VariantName,
    /// Width of the host window the canvas width is derived from.
    pub window_width: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            variant: VariantName::Wide,
            window_width: 1280,
        }
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AlertSettings {
    pub style: Option<AlertStyleName>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    pub scale: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            scale: 2,
            title: "Thermocouple Lab".to_owned(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

impl Settings {
    /// Parse and validate a TOML document.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Build the final settings from the command line: config file first,
    /// then flag overrides.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(variant) = cli.variant {
            settings.layout.variant = variant;
        }
        if let Some(scale) = cli.scale {
            settings.window.scale = scale;
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.heating_params()
            .validate()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        if !(1..=MAX_SCALE).contains(&self.window.scale) {
            return Err(ConfigError::Invalid(format!(
                "window scale must be between 1 and {MAX_SCALE}, got {}",
                self.window.scale
            )));
        }
        if !(1..=MAX_WINDOW_WIDTH).contains(&self.layout.window_width) {
            return Err(ConfigError::Invalid(format!(
                "window_width must be between 1 and {MAX_WINDOW_WIDTH}, got {}",
                self.layout.window_width
            )));
        }
        Ok(())
    }

    /// Physical parameters with file overrides applied.
    pub fn heating_params(&self) -> HeatingParams {
        let p = &self.physics;
        let d = HeatingParams::DEFAULT;
        HeatingParams {
            voltage: p.voltage.unwrap_or(d.voltage),
            current: p.current.unwrap_or(d.current),
            specific_heat: p.specific_heat.unwrap_or(d.specific_heat),
            mass: p.mass.unwrap_or(d.mass),
            room_temp: p.room_temp.unwrap_or(d.room_temp),
            melting_temp: p.melting_temp.unwrap_or(d.melting_temp),
            max_temp: p.max_temp.unwrap_or(d.max_temp),
            cooling_rate: p.cooling_rate.unwrap_or(d.cooling_rate),
        }
    }

    /// Canvas layout for the selected variant and alert style.
    pub fn layout(&self) -> Layout {
        let layout = Layout::new(self.layout.variant.into(), self.layout.window_width);
        match self.alerts.style {
            Some(style) => layout.with_alert_style(style.into()),
            None => layout,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
