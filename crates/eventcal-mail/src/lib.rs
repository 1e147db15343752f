//! Attendee emails: registration confirmations and session reminders.
//!
//! Both variants carry the event's sessions as a base64 `.ics` attachment
//! built by [`eventcal_core`]. A calendar that cannot be built never blocks
//! the email; it is sent without the attachment.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use eventcal_core::{CalendarSettings, EventDetails, Session};
//! use eventcal_mail::{MailComposer, MailSettings, Recipient, ReminderRequest};
//!
//! let composer = MailComposer::new(MailSettings::default(), CalendarSettings::default());
//! let request = ReminderRequest {
//!     recipient: Recipient::new("Amina", "amina@example.com"),
//!     event: EventDetails::new("Writing Retreat"),
//!     session: Session::new(2, Utc.with_ymd_and_hms(2025, 1, 11, 9, 0, 0).unwrap()),
//!     session_count: 3,
//! };
//!
//! let email = composer.reminder(&request);
//! assert_eq!(email.subject, "Reminder: Writing Retreat — Session 2 starts tomorrow");
//! assert!(email.attachment.is_some());
//! ```

mod compose;
mod config;
mod format;
mod message;

pub use compose::MailComposer;
pub use config::MailSettings;
pub use format::{TIME_TO_BE_CONFIRMED, attachment_filename, format_utc, html_escape};
pub use message::{
    Attachment, CALENDAR_CONTENT_TYPE, ConfirmationRequest, EmailNotification, Recipient,
    ReminderRequest, TicketInfo,
};
