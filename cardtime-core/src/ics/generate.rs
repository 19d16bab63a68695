//! ICS file generation.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike};
use uuid::Uuid;

use crate::constants::{ICS_MIME_TYPE, ICS_UTC_FORMAT, PRODID, UID_DOMAIN};
use crate::error::CardTimeResult;
use crate::event::CalendarEvent;

/// A calendar file ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsPayload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl IcsPayload {
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Generate the calendar file for an event, stamped with the current time.
pub fn generate_ics(event: &CalendarEvent) -> CardTimeResult<IcsPayload> {
    generate_ics_at(event, Utc::now())
}

/// Generate the calendar file for an event with an explicit DTSTAMP.
pub fn generate_ics_at(
    event: &CalendarEvent,
    dtstamp: DateTime<Utc>,
) -> CardTimeResult<IcsPayload> {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&new_uid());
    ics_event.summary(&event.title);
    ics_event.description(&event.description);

    ics_event.add_property("DTSTAMP", format_utc(dtstamp));
    ics_event.add_property("DTSTART", format_utc(event.start_date_time));
    ics_event.add_property("DTEND", format_utc(event.end_date_time()));

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    Ok(IcsPayload {
        file_name: event.file_name(),
        mime_type: ICS_MIME_TYPE,
        content: strip_ics_bloat(&cal.to_string()),
    })
}

/// Time-ordered UID, unique per generated file.
fn new_uid() -> String {
    format!("{}@{}", Uuid::now_v7(), UID_DOMAIN)
}

fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format(ICS_UTC_FORMAT).to_string()
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with ours
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
