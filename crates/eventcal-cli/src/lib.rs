//! CLI, configuration loading, logging, subcommands
//!
//! This crate provides the `eventcal` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use config::AppConfig;
pub use error::{CliError, CliResult};
