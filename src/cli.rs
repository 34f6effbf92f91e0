//! Command-line interface for tictally.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{AppConfig, ConfigError};

/// Tictally - two-player tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictally")]
#[command(about = "Two-player terminal tic-tac-toe that keeps score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "tictally.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Hide the 1-9 hints on empty squares
    #[arg(long)]
    pub no_hints: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load_or_default(&self.config)?;
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.no_hints {
            config = config.with_show_hints(false);
        }
        Ok(config)
    }
}
