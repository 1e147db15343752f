//! Time types for session schedules.
//!
//! Session times reach this crate either as an instant that was already parsed
//! upstream or as the raw string an admin form stored. [`EventTime`] carries
//! both shapes; [`parse_instant`] turns the textual forms we accept into a UTC
//! instant.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Length in minutes of a session that has no explicit end time.
pub const DEFAULT_SESSION_MINUTES: i64 = 60;

/// Naive layouts accepted for textual times. They carry no offset and are
/// read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Represents the start or end of a session.
///
/// - **Instant**: a specific point in time, stored as UTC
/// - **Text**: an unparsed value that must go through [`EventTime::resolve`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    /// A parsed instant, stored in UTC.
    Instant(DateTime<Utc>),
    /// A textual time that has not been parsed yet.
    Text(String),
}

impl EventTime {
    /// Creates a new `EventTime::Instant` from a UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::Instant(dt)
    }

    /// Creates a new `EventTime::Instant` from a datetime in any timezone.
    pub fn from_local<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self::Instant(dt.with_timezone(&Utc))
    }

    /// Creates a new `EventTime::Text` holding an unparsed value.
    pub fn from_text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the instant if this is an `Instant` variant.
    pub fn as_instant(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Instant(dt) => Some(dt),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw representation, for error messages.
    pub fn raw(&self) -> String {
        match self {
            Self::Instant(dt) => dt.to_rfc3339(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Resolves this time to a UTC instant.
    ///
    /// Returns `None` when a textual value matches none of the accepted forms,
    /// or when the instant falls outside [`in_calendar_range`].
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Instant(dt) => Some(*dt).filter(in_calendar_range),
            Self::Text(s) => parse_instant(s),
        }
    }
}

impl From<DateTime<Utc>> for EventTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Instant(dt)
    }
}

impl From<&str> for EventTime {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Whether `dt` has a four-digit year, as iCalendar DATE-TIME requires.
pub fn in_calendar_range(dt: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&dt.year())
}

/// Returns the end of a session that only has a start time.
pub fn default_end(start: DateTime<Utc>) -> DateTime<Utc> {
    start + Duration::minutes(DEFAULT_SESSION_MINUTES)
}

/// Parses a textual timestamp into a UTC instant.
///
/// Handles:
/// - RFC 3339 with an offset (`2025-01-10T12:00:00+03:00`, `2025-01-10T09:00:00Z`)
/// - iCalendar UTC form (`20250110T090000Z`)
/// - naive ISO forms with or without seconds, read as UTC
///
/// Years outside `0..=9999` are rejected.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    parse_any(s).filter(in_calendar_range)
}

fn parse_any(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(compact) = s.strip_suffix('Z')
        && let Ok(naive) = NaiveDateTime::parse_from_str(compact, "%Y%m%dT%H%M%S")
    {
        return Some(naive.and_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
