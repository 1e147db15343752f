//! Confirmation and reminder emails with calendar attachments.

use tracing::{debug, warn};

use eventcal_core::{CalendarBuilder, CalendarSettings, EventDetails, Session, session_label};

use crate::config::MailSettings;
use crate::format::{
    attachment_filename, html_escape, schedule_html, session_start_display, timezone_note,
};
use crate::message::{
    Attachment, CALENDAR_CONTENT_TYPE, ConfirmationRequest, EmailNotification, ReminderRequest,
};

/// Builds the emails sent to attendees.
///
/// Composing never fails. If the calendar cannot be generated the email is
/// still produced, without an attachment, and the failure is logged.
#[derive(Debug, Clone, Default)]
pub struct MailComposer {
    mail: MailSettings,
    calendar: CalendarSettings,
}

impl MailComposer {
    /// Creates a composer.
    pub fn new(mail: MailSettings, calendar: CalendarSettings) -> Self {
        Self { mail, calendar }
    }

    /// Returns the mail settings.
    pub fn mail_settings(&self) -> &MailSettings {
        &self.mail
    }

    /// Returns the calendar settings.
    pub fn calendar_settings(&self) -> &CalendarSettings {
        &self.calendar
    }

    /// Composes the email sent once a registration has been paid.
    ///
    /// The attachment holds one VEVENT per session.
    pub fn confirmation(&self, request: &ConfirmationRequest) -> EmailNotification {
        let title = request.event.title.trim();
        let ticket = &request.ticket;

        let mut body = vec![
            greeting(&request.recipient.name),
            format!(
                "<p>Your registration for <strong>{}</strong> is confirmed.</p>",
                html_escape(title)
            ),
            format!(
                "<p>Ticket: {} &times; {}<br>Order reference: {}</p>",
                html_escape(&ticket.tier_name),
                ticket.quantity,
                html_escape(&ticket.order_reference)
            ),
            "<h3>Schedule</h3>".to_string(),
            schedule_html(title, &request.sessions),
        ];
        if let Some(link) = present(request.event.meeting_link.as_deref()) {
            body.push(join_paragraph(link));
        }

        let attachment = self.attachment(&request.event, &request.sessions, None);
        if attachment.is_some() {
            body.push("<p>A calendar invitation with every session is attached.</p>".to_string());
        }
        body.push(self.footer());

        debug!(
            event_title = title,
            sessions = request.sessions.len(),
            attached = attachment.is_some(),
            "Composed confirmation email"
        );

        EmailNotification {
            to: request.recipient.clone(),
            subject: format!("Registration confirmed: {}", title),
            html: body.join("\n"),
            attachment,
        }
    }

    /// Composes the reminder sent 24 hours before a session.
    ///
    /// The attachment holds that one session, labelled against the event's
    /// total session count.
    pub fn reminder(&self, request: &ReminderRequest) -> EmailNotification {
        let title = request.event.title.trim();
        let session = &request.session;
        let label = session_label(title, session, request.session_count);

        let mut body = vec![
            greeting(&request.recipient.name),
            format!(
                "<p>This is a reminder that <strong>{}</strong> starts in 24 hours.</p>",
                html_escape(&label)
            ),
        ];
        if request.session_count > 1 {
            body.push(format!(
                "<p>Session {} of {}</p>",
                session.session_number, request.session_count
            ));
        }
        body.push(format!(
            "<p>When: {}</p>",
            html_escape(&session_start_display(session))
        ));
        body.extend(timezone_note(std::slice::from_ref(session)));
        if let Some(location) = present(session.location.as_deref()) {
            body.push(format!("<p>Where: {}</p>", html_escape(location)));
        }
        if let Some(link) = request.event.join_url(session) {
            body.push(join_paragraph(link));
        }

        let attachment = self.attachment(
            &request.event,
            std::slice::from_ref(session),
            Some(request.session_count),
        );
        if attachment.is_some() {
            body.push("<p>The session is attached as a calendar invitation.</p>".to_string());
        }
        body.push(self.footer());

        debug!(
            event_title = title,
            session_number = session.session_number,
            attached = attachment.is_some(),
            "Composed reminder email"
        );

        EmailNotification {
            to: request.recipient.clone(),
            subject: format!("Reminder: {} starts tomorrow", label),
            html: body.join("\n"),
            attachment,
        }
    }

    fn attachment(
        &self,
        event: &EventDetails,
        sessions: &[Session],
        session_count: Option<usize>,
    ) -> Option<Attachment> {
        let mut builder = CalendarBuilder::new(&self.calendar);
        if let Some(count) = session_count {
            builder = builder.session_count(count);
        }

        match builder.build(event, sessions) {
            Ok(document) => Some(Attachment {
                filename: attachment_filename(&event.title),
                content: document.to_base64(),
                content_type: CALENDAR_CONTENT_TYPE.to_string(),
            }),
            Err(e) => {
                warn!(
                    event_title = event.title.as_str(),
                    error = %e,
                    "Calendar generation failed, sending email without attachment"
                );
                None
            }
        }
    }

    fn footer(&self) -> String {
        let support = html_escape(&self.mail.support_email);
        format!(
            "<p>Questions? Reply to <a href=\"mailto:{support}\">{support}</a>.</p>\n\
             <p>See you soon,<br>{}</p>",
            html_escape(&self.mail.site_name)
        )
    }
}

fn greeting(name: &str) -> String {
    format!("<p>Hi {},</p>", html_escape(name))
}

fn join_paragraph(link: &str) -> String {
    let link = html_escape(link);
    format!("<p>Join online: <a href=\"{link}\">{link}</a></p>")
}

fn present(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use chrono::{DateTime, TimeZone, Utc};

    use crate::message::{Recipient, TicketInfo};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn composer() -> MailComposer {
        MailComposer::new(
            MailSettings::new("Retreats & Co").with_support_email("help@retreats.example"),
            CalendarSettings::for_domain("retreats.example"),
        )
    }

    fn decode(attachment: &Attachment) -> String {
        let bytes = STANDARD.decode(&attachment.content).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    fn vevent_count(ics: &str) -> usize {
        ics.split("\r\n").filter(|l| *l == "BEGIN:VEVENT").count()
    }

    fn confirmation_request(sessions: Vec<Session>) -> ConfirmationRequest {
        ConfirmationRequest {
            recipient: Recipient::new("Amina", "amina@example.com"),
            event: EventDetails::new("Writing Retreat")
                .with_organizer("Jane Doe")
                .with_meeting_link("https://meet.example/wr"),
            ticket: TicketInfo {
                tier_name: "Early Bird".to_string(),
                quantity: 2,
                order_reference: "ORD-1042".to_string(),
            },
            sessions,
        }
    }

    fn three_sessions() -> Vec<Session> {
        vec![
            Session::new(1, utc(2025, 1, 10, 9, 0, 0)).with_title("Opening Circle"),
            Session::new(2, utc(2025, 1, 11, 9, 0, 0)),
            Session::new(3, utc(2025, 1, 12, 9, 0, 0)),
        ]
    }

    mod confirmation {
        use super::*;

        #[test]
        fn subject_and_recipient() {
            let email = composer().confirmation(&confirmation_request(three_sessions()));
            assert_eq!(email.subject, "Registration confirmed: Writing Retreat");
            assert_eq!(email.to.email, "amina@example.com");
        }

        #[test]
        fn body_lists_ticket_and_schedule() {
            let email = composer().confirmation(&confirmation_request(three_sessions()));
            assert!(email.html.contains("<p>Hi Amina,</p>"));
            assert!(email.html.contains("Early Bird &times; 2"));
            assert!(email.html.contains("Order reference: ORD-1042"));
            assert!(email.html.contains("Writing Retreat: Opening Circle"));
            assert!(email.html.contains("Writing Retreat — Session 3"));
            assert!(email.html.contains("Sunday, January 12, 2025 at 09:00 UTC"));
            assert!(email.html.contains("href=\"https://meet.example/wr\""));
        }

        #[test]
        fn body_is_one_block_per_line() {
            let email = composer().confirmation(&confirmation_request(three_sessions()));
            let lines: Vec<&str> = email.html.lines().collect();
            assert_eq!(lines.first(), Some(&"<p>Hi Amina,</p>"));
            assert_eq!(lines.last(), Some(&"<p>See you soon,<br>Retreats &amp; Co</p>"));
            assert!(lines.iter().all(|l| !l.trim().is_empty()));
        }

        #[test]
        fn footer_uses_mail_settings() {
            let email = composer().confirmation(&confirmation_request(three_sessions()));
            assert!(email.html.contains("mailto:help@retreats.example"));
            assert!(email.html.contains("Retreats &amp; Co"));
        }

        #[test]
        fn attachment_has_one_event_per_session() {
            let email = composer().confirmation(&confirmation_request(three_sessions()));
            let attachment = email.attachment.expect("attachment");
            assert_eq!(attachment.filename, "writing_retreat.ics");
            assert_eq!(attachment.content_type, "text/calendar");

            let ics = decode(&attachment);
            assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
            assert!(ics.ends_with("END:VCALENDAR"));
            assert_eq!(vevent_count(&ics), 3);
            assert!(ics.contains("SUMMARY:Writing Retreat — Session 2"));
            assert!(ics.contains("ORGANIZER;CN=Jane Doe:mailto:events@retreats.example"));
        }

        #[test]
        fn empty_schedule_still_attaches_calendar() {
            let email = composer().confirmation(&confirmation_request(vec![]));
            assert!(email.html.contains("The schedule will be shared soon."));
            let ics = decode(&email.attachment.expect("attachment"));
            assert_eq!(vevent_count(&ics), 0);
        }

        #[test]
        fn bad_timestamp_degrades_to_no_attachment() {
            let sessions = vec![
                Session::new(1, utc(2025, 1, 10, 9, 0, 0)),
                Session::new(2, "sometime next week"),
            ];
            let email = composer().confirmation(&confirmation_request(sessions));
            assert!(email.attachment.is_none());
            assert!(email.html.contains("Time to be confirmed"));
            assert!(!email.html.contains("calendar invitation"));
            assert_eq!(email.subject, "Registration confirmed: Writing Retreat");
        }

        #[test]
        fn user_text_is_escaped() {
            let mut request = confirmation_request(three_sessions());
            request.recipient.name = "<Amina>".to_string();
            request.ticket.tier_name = "VIP & Friends".to_string();
            let email = composer().confirmation(&request);
            assert!(email.html.contains("Hi &lt;Amina&gt;,"));
            assert!(email.html.contains("VIP &amp; Friends"));
            assert!(!email.html.contains("<Amina>"));
        }
    }

    mod reminder {
        use super::*;

        fn reminder_request(session: Session, session_count: usize) -> ReminderRequest {
            ReminderRequest {
                recipient: Recipient::new("Amina", "amina@example.com"),
                event: EventDetails::new("Writing Retreat")
                    .with_meeting_link("https://meet.example/wr"),
                session,
                session_count,
            }
        }

        #[test]
        fn untitled_session_of_many() {
            let session = Session::new(2, utc(2025, 1, 11, 9, 0, 0));
            let email = composer().reminder(&reminder_request(session, 3));
            assert_eq!(
                email.subject,
                "Reminder: Writing Retreat — Session 2 starts tomorrow"
            );
            assert!(email.html.contains("Session 2 of 3"));
            assert!(email.html.contains("starts in 24 hours"));
            assert!(email.html.contains("Saturday, January 11, 2025 at 09:00 UTC"));
        }

        #[test]
        fn single_session_event_uses_event_title() {
            let session = Session::new(1, utc(2025, 1, 10, 9, 0, 0));
            let email = composer().reminder(&reminder_request(session, 1));
            assert_eq!(email.subject, "Reminder: Writing Retreat starts tomorrow");
            assert!(!email.html.contains(" of 1"));
        }

        #[test]
        fn attachment_holds_the_one_session() {
            let session = Session::new(2, utc(2025, 1, 11, 9, 0, 0)).with_location("Main Hall");
            let email = composer().reminder(&reminder_request(session, 3));
            assert!(email.html.contains("<p>Where: Main Hall</p>"));

            let ics = decode(&email.attachment.expect("attachment"));
            assert_eq!(vevent_count(&ics), 1);
            assert!(ics.contains("SUMMARY:Writing Retreat — Session 2"));
            assert!(ics.contains("DTSTART:20250111T090000Z"));
        }

        #[test]
        fn session_url_wins_over_meeting_link() {
            let session =
                Session::new(1, utc(2025, 1, 10, 9, 0, 0)).with_url("https://meet.example/s1");
            let email = composer().reminder(&reminder_request(session, 2));
            assert!(email.html.contains("href=\"https://meet.example/s1\""));
            assert!(!email.html.contains("https://meet.example/wr"));
        }

        #[test]
        fn blank_event_title_degrades() {
            let mut request = reminder_request(Session::new(1, utc(2025, 1, 10, 9, 0, 0)), 1);
            request.event.title = "   ".to_string();
            let email = composer().reminder(&request);
            assert!(email.attachment.is_none());
        }
    }
}
