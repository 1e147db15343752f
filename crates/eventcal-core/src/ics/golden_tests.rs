//! Golden tests for calendar output.
//!
//! These tests use insta inline snapshots to pin the exact bytes calendar
//! clients receive. Run with `cargo insta review` to update snapshots after
//! intentional changes.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, TimeZone, Utc};

use crate::config::CalendarSettings;
use crate::ics::{CalendarBuilder, CalendarDocument, UidSource};
use crate::session::{EventDetails, Session};

/// Hands out `session-1@…`, `session-2@…` in call order.
#[derive(Default)]
struct SequentialUid(AtomicU32);

impl UidSource for SequentialUid {
    fn next_uid(&self, domain: &str) -> String {
        let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
        format!("session-{}@{}", n, domain)
    }
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// The generation time for all golden tests: 2024-12-01 08:00:00 UTC.
fn reference_time() -> DateTime<Utc> {
    utc(2024, 12, 1, 8, 0, 0)
}

fn retreat() -> EventDetails {
    EventDetails::new("Writing Retreat")
        .with_organizer("Jane Doe")
        .with_meeting_link("https://meet.example/writing-retreat")
}

fn retreat_sessions() -> Vec<Session> {
    vec![
        Session::new(1, utc(2025, 1, 10, 9, 0, 0))
            .with_title("Opening Circle")
            .with_end_time(utc(2025, 1, 10, 10, 30, 0))
            .with_timezone("Africa/Nairobi")
            .with_description(
                "Introductions, goals for the week; bring a notebook and the current draft. \
                 We will also walk through the schedule for the remaining days.",
            )
            .with_location("Lakeside Lodge, Main Hall"),
        Session::new(2, "2025-01-11T12:00:00+03:00").with_timezone("Africa/Nairobi"),
    ]
}

fn build(event: &EventDetails, sessions: &[Session]) -> CalendarDocument {
    let settings = CalendarSettings::for_domain("retreats.example");
    let uids = SequentialUid::default();
    CalendarBuilder::new(&settings)
        .generated_at(reference_time())
        .uid_source(&uids)
        .build(event, sessions)
        .unwrap()
}

/// LF-joined view of the document, so snapshots stay readable.
fn readable(document: &CalendarDocument) -> String {
    document.as_str().replace("\r\n", "\n")
}

#[test]
fn golden_two_session_retreat() {
    let document = build(&retreat(), &retreat_sessions());

    insta::assert_snapshot!(readable(&document), @r"
BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//eventcal//Event Sessions//EN
CALSCALE:GREGORIAN
METHOD:PUBLISH
X-WR-CALNAME:Writing Retreat
X-WR-TIMEZONE:UTC
BEGIN:VEVENT
UID:session-1@retreats.example
DTSTAMP:20241201T080000Z
DTSTART:20250110T090000Z
DTEND:20250110T103000Z
SUMMARY:Writing Retreat: Opening Circle
DESCRIPTION:Introductions\, goals for the week\; bring a notebook and the c
 urrent draft. We will also walk through the schedule for the remaining day
 s.\n\nJoin: https://meet.example/writing-retreat
LOCATION:Lakeside Lodge\, Main Hall
URL:https://meet.example/writing-retreat
ORGANIZER;CN=Jane Doe:mailto:events@retreats.example
END:VEVENT
BEGIN:VEVENT
UID:session-2@retreats.example
DTSTAMP:20241201T080000Z
DTSTART:20250111T090000Z
DTEND:20250111T100000Z
SUMMARY:Writing Retreat — Session 2
DESCRIPTION:Join: https://meet.example/writing-retreat
URL:https://meet.example/writing-retreat
ORGANIZER;CN=Jane Doe:mailto:events@retreats.example
END:VEVENT
END:VCALENDAR
");
}

#[test]
fn golden_retreat_physical_lines_fit() {
    let document = build(&retreat(), &retreat_sessions());
    let longest = document
        .as_str()
        .split("\r\n")
        .map(str::len)
        .max()
        .unwrap();
    assert_eq!(longest, 75);
}

#[test]
fn golden_empty_schedule() {
    let document = build(&EventDetails::new("Writing Retreat"), &[]);

    insta::assert_snapshot!(readable(&document), @r"
BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//eventcal//Event Sessions//EN
CALSCALE:GREGORIAN
METHOD:PUBLISH
X-WR-CALNAME:Writing Retreat
X-WR-TIMEZONE:UTC
END:VCALENDAR
");
}

#[test]
fn golden_empty_schedule_base64() {
    let document = build(&EventDetails::new("Writing Retreat"), &[]);

    insta::assert_snapshot!(
        document.to_base64(),
        @"QkVHSU46VkNBTEVOREFSDQpWRVJTSU9OOjIuMA0KUFJPRElEOi0vL2V2ZW50Y2FsLy9FdmVudCBTZXNzaW9ucy8vRU4NCkNBTFNDQUxFOkdSRUdPUklBTg0KTUVUSE9EOlBVQkxJU0gNClgtV1ItQ0FMTkFNRTpXcml0aW5nIFJldHJlYXQNClgtV1ItVElNRVpPTkU6VVRDDQpFTkQ6VkNBTEVOREFS"
    );
}

#[test]
fn golden_single_untitled_session() {
    let sessions = vec![Session::new(1, utc(2025, 1, 10, 9, 0, 0))];
    let document = build(&EventDetails::new("Writing Retreat"), &sessions);

    insta::assert_snapshot!(readable(&document), @r"
BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//eventcal//Event Sessions//EN
CALSCALE:GREGORIAN
METHOD:PUBLISH
X-WR-CALNAME:Writing Retreat
X-WR-TIMEZONE:UTC
BEGIN:VEVENT
UID:session-1@retreats.example
DTSTAMP:20241201T080000Z
DTSTART:20250110T090000Z
DTEND:20250110T100000Z
SUMMARY:Writing Retreat
END:VEVENT
END:VCALENDAR
");
}
