//! CLI error types.

use std::fmt;
use std::path::PathBuf;

use eventcal_core::CalendarError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error.
    Config(String),
    /// IO error, with the path involved when there is one.
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    /// Input or output JSON error.
    Json(serde_json::Error),
    /// The calendar could not be generated.
    Calendar(CalendarError),
}

impl CliError {
    /// Wraps an IO error that happened on `path`.
    pub fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "{}: {}", path.display(), source),
            Self::Io { path: None, source } => write!(f, "IO error: {}", source),
            Self::Json(err) => write!(f, "invalid JSON: {}", err),
            Self::Calendar(err) => write!(f, "calendar error: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Calendar(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(format!("failed to serialize config: {}", err))
    }
}

impl From<CalendarError> for CliError {
    fn from(err: CalendarError) -> Self {
        Self::Calendar(err)
    }
}
