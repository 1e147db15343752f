//! Email inputs and the notification payload handed to a mail transport.

use serde::{Deserialize, Serialize};

use eventcal_core::{EventDetails, Session};

/// MIME type of calendar attachments.
pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar";

/// Who the email goes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Recipient {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// The ticket bought at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    /// Ticket tier, e.g. "Early Bird".
    pub tier_name: String,
    /// Number of seats.
    #[serde(default = "one")]
    pub quantity: u32,
    /// Order reference shown to the attendee.
    pub order_reference: String,
}

fn one() -> u32 {
    1
}

/// Input for the post-payment confirmation email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRequest {
    pub recipient: Recipient,
    pub event: EventDetails,
    pub ticket: TicketInfo,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// Input for the reminder sent a day before one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub recipient: Recipient,
    pub event: EventDetails,
    pub session: Session,
    /// Total number of sessions the event has; drives "Session N" labels.
    #[serde(default = "one_session")]
    pub session_count: usize,
}

fn one_session() -> usize {
    1
}

/// A file attached to an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    /// Base64-encoded body.
    pub content: String,
    pub content_type: String,
}

/// A composed email, ready for a mail transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailNotification {
    pub to: Recipient,
    pub subject: String,
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}
