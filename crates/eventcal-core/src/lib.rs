//! Core types: sessions, time, iCalendar generation

pub mod config;
pub mod error;
pub mod ics;
pub mod session;
pub mod time;

pub use config::CalendarSettings;
pub use error::{CalendarError, CalendarResult};
pub use ics::{
    CalendarBuilder, CalendarDocument, RandomUid, UidSource, encode_base64, generate_calendar,
};
pub use session::{EventDetails, Session, session_label};
pub use time::{EventTime, parse_instant};
