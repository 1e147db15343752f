//! VCALENDAR assembly and attachment packaging.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::CalendarSettings;
use crate::error::CalendarResult;
use crate::ics::event::{EventContext, build_event};
use crate::ics::text::{CRLF, property, text_property};
use crate::ics::uid::{RandomUid, UidSource};
use crate::session::{EventDetails, Session};

static RANDOM_UID: RandomUid = RandomUid;

/// A generated iCalendar document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDocument {
    content: String,
    event_count: usize,
}

impl CalendarDocument {
    /// Returns the document text.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns the document as UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Consumes the document, returning its text.
    pub fn into_string(self) -> String {
        self.content
    }

    /// Number of VEVENT components in the document.
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// Returns the document base64-encoded for use as an attachment body.
    pub fn to_base64(&self) -> String {
        encode_base64(&self.content)
    }
}

impl fmt::Display for CalendarDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Encodes a calendar document with the standard, padded base64 alphabet.
pub fn encode_base64(document: &str) -> String {
    STANDARD.encode(document.as_bytes())
}

/// Assembles a VCALENDAR from an event and its sessions.
///
/// # Example
///
/// ```rust
/// use eventcal_core::{CalendarBuilder, CalendarSettings, EventDetails, Session};
/// use chrono::{TimeZone, Utc};
///
/// let settings = CalendarSettings::for_domain("retreats.example");
/// let event = EventDetails::new("Writing Retreat");
/// let sessions = vec![Session::new(1, Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap())];
///
/// let document = CalendarBuilder::new(&settings).build(&event, &sessions).unwrap();
/// assert!(document.as_str().contains("DTEND:20250110T100000Z"));
/// ```
pub struct CalendarBuilder<'a> {
    settings: &'a CalendarSettings,
    uid_source: &'a dyn UidSource,
    generated_at: Option<DateTime<Utc>>,
    session_count: Option<usize>,
}

impl<'a> CalendarBuilder<'a> {
    /// Creates a builder with random UIDs and the current time as DTSTAMP.
    pub fn new(settings: &'a CalendarSettings) -> Self {
        Self {
            settings,
            uid_source: &RANDOM_UID,
            generated_at: None,
            session_count: None,
        }
    }

    /// Builder: use a fixed DTSTAMP instead of the current time.
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Builder: draw UIDs from `source`.
    pub fn uid_source(mut self, source: &'a dyn UidSource) -> Self {
        self.uid_source = source;
        self
    }

    /// Builder: number sessions against an event of `count` sessions.
    ///
    /// Needed when only part of an event's schedule is rendered, such as a
    /// reminder for a single session. Defaults to the number of sessions
    /// passed to [`CalendarBuilder::build`].
    pub fn session_count(mut self, count: usize) -> Self {
        self.session_count = Some(count);
        self
    }

    /// Builds the document. VEVENTs follow the order of `sessions`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CalendarError::EmptyEventTitle`] for a blank title,
    /// [`crate::CalendarError::ZeroSessionNumber`] for a session numbered 0 and
    /// [`crate::CalendarError::InvalidTimestamp`] for a session whose times
    /// cannot be resolved.
    pub fn build(
        &self,
        event: &EventDetails,
        sessions: &[Session],
    ) -> CalendarResult<CalendarDocument> {
        let title = event.validated_title()?;
        let ctx = EventContext {
            settings: self.settings,
            event,
            title,
            session_count: self.session_count.unwrap_or(sessions.len()),
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
            uid_source: self.uid_source,
        };

        let mut lines = vec![
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            property("PRODID", &self.settings.product_id),
            "CALSCALE:GREGORIAN".to_string(),
            "METHOD:PUBLISH".to_string(),
            text_property("X-WR-CALNAME", title),
            "X-WR-TIMEZONE:UTC".to_string(),
        ];
        for session in sessions {
            lines.extend(build_event(session, &ctx)?);
        }
        lines.push("END:VCALENDAR".to_string());

        let content = lines.join(CRLF);
        debug!(
            event_title = title,
            sessions = sessions.len(),
            bytes = content.len(),
            "Generated calendar document"
        );

        Ok(CalendarDocument {
            content,
            event_count: sessions.len(),
        })
    }
}

/// Generates a calendar with random UIDs and the current time as DTSTAMP.
///
/// # Errors
///
/// See [`CalendarBuilder::build`].
pub fn generate_calendar(
    settings: &CalendarSettings,
    event: &EventDetails,
    sessions: &[Session],
) -> CalendarResult<CalendarDocument> {
    CalendarBuilder::new(settings).build(event, sessions)
}
