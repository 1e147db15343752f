//! VEVENT construction.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::config::CalendarSettings;
use crate::error::{CalendarError, CalendarResult};
use crate::ics::text::{fold_line, property, raw_value, text_property, utc_property};
use crate::ics::uid::UidSource;
use crate::session::{EventDetails, Session, session_label};

/// Event-level inputs shared by every VEVENT of one calendar.
pub struct EventContext<'a> {
    pub settings: &'a CalendarSettings,
    pub event: &'a EventDetails,
    /// Validated, trimmed event title.
    pub title: &'a str,
    /// Number of sessions the event has, used for SUMMARY numbering.
    pub session_count: usize,
    /// DTSTAMP value.
    pub generated_at: DateTime<Utc>,
    pub uid_source: &'a dyn UidSource,
}

/// Builds the content lines of one VEVENT, `BEGIN` and `END` included.
///
/// Property order is fixed: UID, DTSTAMP, DTSTART, DTEND, SUMMARY, then the
/// optional DESCRIPTION, LOCATION, URL and ORGANIZER. Each entry is already
/// folded and may span several physical lines.
///
/// # Errors
///
/// Returns [`CalendarError::ZeroSessionNumber`] for session number 0 and
/// [`CalendarError::InvalidTimestamp`] if the session's start or end cannot be
/// resolved.
pub fn build_event(session: &Session, ctx: &EventContext<'_>) -> CalendarResult<Vec<String>> {
    if session.session_number == 0 {
        return Err(CalendarError::ZeroSessionNumber);
    }
    let start = session.start_utc()?;
    let end = session.end_utc()?;
    if end < start {
        warn!(
            session = session.session_number,
            %start,
            %end,
            "Session ends before it starts"
        );
    }

    let join_url = ctx.event.join_url(session);

    let mut lines = Vec::with_capacity(11);
    lines.push("BEGIN:VEVENT".to_string());
    lines.push(property(
        "UID",
        &ctx.uid_source.next_uid(&ctx.settings.uid_domain),
    ));
    lines.push(utc_property("DTSTAMP", &ctx.generated_at));
    lines.push(utc_property("DTSTART", &start));
    lines.push(utc_property("DTEND", &end));
    lines.push(text_property(
        "SUMMARY",
        &session_label(ctx.title, session, ctx.session_count),
    ));

    if let Some(description) = describe(session, join_url) {
        lines.push(text_property("DESCRIPTION", &description));
    }
    if let Some(location) = present(session.location.as_deref()) {
        lines.push(text_property("LOCATION", location));
    }
    if let Some(url) = join_url {
        lines.push(property("URL", url));
    }
    if let Some(name) = present(ctx.event.organizer_name.as_deref()) {
        lines.push(organizer(name, &ctx.settings.organizer_email));
    }

    lines.push("END:VEVENT".to_string());
    Ok(lines)
}

/// Session description and join link, separated by a blank line.
fn describe(session: &Session, join_url: Option<&str>) -> Option<String> {
    let parts: Vec<String> = present(session.description.as_deref())
        .map(str::to_string)
        .into_iter()
        .chain(join_url.map(|url| format!("Join: {}", url)))
        .collect();

    (!parts.is_empty()).then(|| parts.join("\n\n"))
}

/// `ORGANIZER;CN=<name>:mailto:<email>`, quoting CN when it holds separators.
fn organizer(name: &str, email: &str) -> String {
    let name: String = name
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();
    let cn = if name.contains([':', ';', ',']) {
        format!("\"{}\"", name)
    } else {
        name
    };
    fold_line(&format!("ORGANIZER;CN={}:mailto:{}", cn, raw_value(email)))
}

fn present(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
