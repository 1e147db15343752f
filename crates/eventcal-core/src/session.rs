//! Session and event input types.
//!
//! This module provides the caller-facing input of calendar generation:
//! - [`Session`]: one scheduled sitting of an event
//! - [`EventDetails`]: event-level metadata shared by every session
//! - [`session_label`]: the human-facing name of a session, used for both the
//!   calendar SUMMARY and the email schedule

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::time::{EventTime, default_end, in_calendar_range};

/// One scheduled session of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Ordering hint, unique within one event's session list. Starts at 1;
    /// calendar generation rejects 0.
    pub session_number: u32,
    /// Optional human label.
    #[serde(default)]
    pub title: Option<String>,
    /// When the session starts.
    pub start_time: EventTime,
    /// When the session ends; one hour after the start when absent.
    #[serde(default)]
    pub end_time: Option<EventTime>,
    /// Display-only timezone label (e.g. "Africa/Nairobi").
    ///
    /// Never used to shift the instant written into the calendar.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Physical or virtual location.
    #[serde(default)]
    pub location: Option<String>,
    /// Link attendees use to join this session.
    #[serde(default)]
    pub url: Option<String>,
}

impl Session {
    /// Creates a new session with the given number and start time.
    pub fn new(session_number: u32, start_time: impl Into<EventTime>) -> Self {
        Self {
            session_number,
            title: None,
            start_time: start_time.into(),
            end_time: None,
            timezone: None,
            description: None,
            location: None,
            url: None,
        }
    }

    /// Builder: set the session title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set the end time.
    pub fn with_end_time(mut self, end_time: impl Into<EventTime>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Builder: set the display timezone label.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Builder: set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder: set the join URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the title if it is present and not blank.
    pub fn display_title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Resolves the start time to a UTC instant.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimestamp`] if the value cannot be parsed.
    pub fn start_utc(&self) -> CalendarResult<DateTime<Utc>> {
        self.start_time.resolve().ok_or_else(|| {
            CalendarError::invalid_timestamp(
                "start_time",
                self.session_number,
                self.start_time.raw(),
            )
        })
    }

    /// Resolves the effective end time to a UTC instant.
    ///
    /// Sessions without an end time last one hour.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimestamp`] if the start or the end
    /// cannot be parsed.
    pub fn end_utc(&self) -> CalendarResult<DateTime<Utc>> {
        match &self.end_time {
            Some(end) => end.resolve().ok_or_else(|| {
                CalendarError::invalid_timestamp("end_time", self.session_number, end.raw())
            }),
            None => {
                let end = default_end(self.start_utc()?);
                if in_calendar_range(&end) {
                    Ok(end)
                } else {
                    Err(CalendarError::invalid_timestamp(
                        "end_time",
                        self.session_number,
                        end.to_rfc3339(),
                    ))
                }
            }
        }
    }
}

/// Event-level metadata shared by all sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    /// Event title; must not be blank.
    pub title: String,
    /// Organizer display name (the mailto address comes from settings).
    #[serde(default)]
    pub organizer_name: Option<String>,
    /// Event-wide meeting link, used when a session has no URL of its own.
    #[serde(default)]
    pub meeting_link: Option<String>,
}

impl EventDetails {
    /// Creates event details with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            organizer_name: None,
            meeting_link: None,
        }
    }

    /// Builder: set the organizer display name.
    pub fn with_organizer(mut self, name: impl Into<String>) -> Self {
        self.organizer_name = Some(name.into());
        self
    }

    /// Builder: set the meeting link.
    pub fn with_meeting_link(mut self, link: impl Into<String>) -> Self {
        self.meeting_link = Some(link.into());
        self
    }

    /// Returns the trimmed title.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyEventTitle`] if the title is blank.
    pub fn validated_title(&self) -> CalendarResult<&str> {
        non_blank(Some(self.title.as_str())).ok_or(CalendarError::EmptyEventTitle)
    }

    /// Returns the link attendees should use for `session`.
    pub fn join_url<'a>(&'a self, session: &'a Session) -> Option<&'a str> {
        non_blank(session.url.as_deref()).or_else(|| non_blank(self.meeting_link.as_deref()))
    }
}

/// Returns the display label of a session.
///
/// - titled session: `"<event>: <session>"`
/// - untitled, only session of the event: `"<event>"`
/// - untitled among several: `"<event> — Session <n>"`
pub fn session_label(event_title: &str, session: &Session, session_count: usize) -> String {
    match session.display_title() {
        Some(title) => format!("{}: {}", event_title, title),
        None if session_count <= 1 => event_title.to_string(),
        None => format!("{} — Session {}", event_title, session.session_number),
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
