//! Tictally - two-player tic-tac-toe with a running scoreboard
//!
//! This crate is the terminal front end over [`tictally_core`].
//!
//! # Architecture
//!
//! - **Engine**: [`tictally_core::GameEngine`] owns rounds and scores
//! - **App**: owns the engine and mirrors its events into UI state
//! - **UI**: stateless `ratatui` rendering of an [`App`]
//! - **Input**: key to [`Action`] mapping
//! - **Config**: TOML settings plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use input::{Action, action_for, move_cursor};
pub use logging::init_tracing;
pub use ui::draw;
