//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/eventcal/config.toml` by default:
//!
//! ```toml
//! [calendar]
//! product_id = "-//Retreats & Co//Event Sessions//EN"
//! organizer_email = "events@retreats.example"
//! uid_domain = "retreats.example"
//!
//! [mail]
//! site_name = "Retreats & Co"
//! support_email = "help@retreats.example"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use eventcal_core::CalendarSettings;
use eventcal_mail::MailSettings;

use crate::error::{CliError, CliResult};

/// Configuration for the eventcal CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Calendar generation settings.
    pub calendar: CalendarSettings,

    /// Email composition settings.
    pub mail: MailSettings,
}

impl AppConfig {
    /// Loads configuration from the default path, or defaults if absent.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::io_at(path, e))?;
        let config: Self = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventcal")
    }

    /// Checks that the values can produce well-formed calendars and emails.
    pub fn validate(&self) -> CliResult<()> {
        let calendar = &self.calendar;
        if calendar.product_id.trim().is_empty() {
            return Err(CliError::Config(
                "calendar.product_id must not be empty".to_string(),
            ));
        }
        if !looks_like_email(&calendar.organizer_email) {
            return Err(CliError::Config(format!(
                "calendar.organizer_email is not an email address: {:?}",
                calendar.organizer_email
            )));
        }
        let domain = calendar.uid_domain.trim();
        if domain.is_empty() || domain.contains(char::is_whitespace) || domain.contains('@') {
            return Err(CliError::Config(format!(
                "calendar.uid_domain is not a domain: {:?}",
                calendar.uid_domain
            )));
        }
        if !looks_like_email(&self.mail.support_email) {
            return Err(CliError::Config(format!(
                "mail.support_email is not an email address: {:?}",
                self.mail.support_email
            )));
        }
        Ok(())
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}
