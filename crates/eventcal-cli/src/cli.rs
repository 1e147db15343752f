//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::LogFormat;

/// eventcal - calendar invitations and attendee emails for event sessions
#[derive(Debug, Parser)]
#[command(name = "eventcal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, global = true, env = "EVENTCAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Log line format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate an iCalendar file from an event JSON file
    Ics {
        /// JSON file with `event` and `sessions` (`-` for stdin)
        input: PathBuf,

        /// Write the calendar here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit the calendar base64-encoded, as carried in email attachments
        #[arg(long)]
        base64: bool,
    },

    /// Compose an attendee email and print it as JSON
    Email {
        #[command(subcommand)]
        kind: EmailKind,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Email variants.
#[derive(Debug, Subcommand)]
pub enum EmailKind {
    /// Registration confirmation with the full schedule
    Confirmation {
        /// JSON confirmation request (`-` for stdin)
        input: PathBuf,
    },

    /// Reminder for one session, sent the day before
    Reminder {
        /// JSON reminder request (`-` for stdin)
        input: PathBuf,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
