//! HTML fragments and display strings for email bodies.

use chrono::{DateTime, Utc};

use eventcal_core::{Session, session_label};

/// Shown in place of a session time that cannot be resolved.
pub const TIME_TO_BE_CONFIRMED: &str = "Time to be confirmed";

/// Escapes text for HTML display.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Formats an instant for people, always in UTC.
///
/// Example: `Friday, January 10, 2025 at 09:00 UTC`.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%A, %B %-d, %Y at %H:%M UTC").to_string()
}

/// Display start time of a session, or [`TIME_TO_BE_CONFIRMED`].
pub fn session_start_display(session: &Session) -> String {
    session
        .start_utc()
        .map(|start| format_utc(&start))
        .unwrap_or_else(|_| TIME_TO_BE_CONFIRMED.to_string())
}

/// File name for a calendar attachment.
///
/// ASCII letters and digits are kept and lower-cased, anything else becomes
/// `_`.
pub fn attachment_filename(event_title: &str) -> String {
    let stem: String = event_title
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.ics", stem)
}

/// Renders the session schedule as an HTML list.
///
/// Sessions keep their input order. Returns a placeholder paragraph when the
/// schedule is empty.
pub fn schedule_html(event_title: &str, sessions: &[Session]) -> String {
    if sessions.is_empty() {
        return "<p>The schedule will be shared soon.</p>".to_string();
    }

    let items: Vec<String> = sessions
        .iter()
        .map(|session| {
            format!(
                "<li><strong>{}</strong><br>{}</li>",
                html_escape(&session_label(event_title, session, sessions.len())),
                html_escape(&session_start_display(session)),
            )
        })
        .collect();

    let mut html = format!("<ul>\n{}\n</ul>", items.join("\n"));
    if let Some(note) = timezone_note(sessions) {
        html.push('\n');
        html.push_str(&note);
    }
    html
}

/// Notes that times are UTC and names the event's display timezone, if any.
pub(crate) fn timezone_note(sessions: &[Session]) -> Option<String> {
    let timezone = sessions
        .iter()
        .filter_map(|s| s.timezone.as_deref())
        .map(str::trim)
        .find(|tz| !tz.is_empty())?;
    Some(format!(
        "<p><small>Times are shown in UTC. Local event time zone: {}.</small></p>",
        html_escape(timezone)
    ))
}
