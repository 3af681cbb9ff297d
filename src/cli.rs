//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::settings::VariantName;

/// Thermocouple lab: heat a tin sample and watch the gauge and the graph.
#[derive(Parser, Debug)]
#[command(name = "thermolab")]
#[command(version, about)]
pub struct Cli {
    /// TOML file with physics, layout, alert and window settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Layout variant; overrides the config file
    #[arg(long, value_enum)]
    pub variant: Option<VariantName>,

    /// Window pixel scale; overrides the config file
    #[arg(long)]
    pub scale: Option<u32>,

    /// Most verbose log level written to stderr and the debug page
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}
