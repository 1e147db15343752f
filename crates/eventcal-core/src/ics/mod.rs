//! iCalendar (RFC 5545) generation.
//!
//! This module turns an event and its sessions into a `VCALENDAR` document:
//! - [`text`]: TEXT escaping, 75-octet line folding, UTC timestamps
//! - [`uid`]: UID generation
//! - [`event`]: one VEVENT per session
//! - [`calendar`]: the envelope, plus base64 packaging for attachments

pub mod calendar;
pub mod event;
pub mod text;
pub mod uid;

#[cfg(test)]
mod golden_tests;

pub use calendar::{CalendarBuilder, CalendarDocument, encode_base64, generate_calendar};
pub use event::{EventContext, build_event};
pub use text::{
    MAX_LINE_OCTETS, escape_text, fold_line, format_timestamp, unescape_text, unfold,
};
pub use uid::{RandomUid, UidSource};
