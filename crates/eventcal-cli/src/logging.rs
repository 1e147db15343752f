//! Log output for the `eventcal` binary.
//!
//! Logs always go to stderr: stdout carries the calendar or email payload.
//! `RUST_LOG` overrides the level chosen on the command line.

use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose events are shown by default.
const LOG_TARGETS: [&str; 3] = ["eventcal_core", "eventcal_mail", "eventcal_cli"];

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Filter directive covering the eventcal crates at `level`.
pub fn default_directive(level: Level) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// `RUST_LOG` if set and valid, otherwise [`default_directive`].
fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

/// Installs the global subscriber.
///
/// `debug` lowers the level from `WARN` to `DEBUG` and adds source locations.
pub fn init(debug: bool, format: LogFormat) -> Result<(), TryInitError> {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(debug)
        .with_line_number(debug);

    let registry = tracing_subscriber::registry().with(env_filter(level));
    match format {
        LogFormat::Text => registry.with(layer.compact().without_time()).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    }
}
