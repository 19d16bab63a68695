//! Calendar events built from confirmed appointments.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::appointment::{AppointmentData, Field};
use crate::constants::ATTRIBUTION;
use crate::date::parse_iso_date;
use crate::duration::EventDuration;
use crate::error::{CardTimeError, CardTimeResult};
use crate::labels::Labels;
use crate::locale::Locale;
use crate::observer::Observer;
use crate::time::parse_time;

/// A confirmed appointment, ready to be written as a calendar file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(flatten)]
    pub appointment: AppointmentData,
    pub title: String,
    pub description: String,
    /// UTC instant of the local date and time on the card.
    pub start_date_time: DateTime<Utc>,
    pub duration: EventDuration,
}

impl CalendarEvent {
    /// Compose title and description and pin the start to a UTC instant.
    pub fn build(
        appointment: AppointmentData,
        duration: EventDuration,
        locale: Locale,
        observer: &Observer,
    ) -> CardTimeResult<Self> {
        let local = local_start(&appointment)?;
        let start_date_time = start_instant(local, observer.utc_offset_minutes(local));

        Ok(CalendarEvent {
            title: title(&appointment, locale),
            description: description(&appointment, locale),
            start_date_time,
            duration,
            appointment,
        })
    }

    pub fn end_date_time(&self) -> DateTime<Utc> {
        self.start_date_time + self.duration.as_chrono()
    }

    /// Download name for the calendar file, e.g. `appointment-2024-03-15.ics`.
    pub fn file_name(&self) -> String {
        format!("appointment-{}.ics", self.appointment.date)
    }

    /// "Friday, March 15, 2024" and "2:30 PM", in the observer's wall clock.
    pub fn render_when(&self, observer: &Observer) -> (String, String) {
        let local = observer.local_time(self.start_date_time);
        (
            local.format("%A, %B %-d, %Y").to_string(),
            local.format("%-I:%M %p").to_string(),
        )
    }
}

pub fn title(appointment: &AppointmentData, locale: Locale) -> String {
    format!(
        "{} {}",
        Labels::for_locale(locale).appointment_with,
        appointment.artist
    )
}

pub fn description(appointment: &AppointmentData, locale: Locale) -> String {
    let labels = Labels::for_locale(locale);
    [
        format!("{}: {}", labels.size, appointment.size),
        format!("{}: {}", labels.deposit, appointment.deposit),
        ATTRIBUTION.to_string(),
    ]
    .join("\n")
}

/// The card's date and time as a naive local wall-clock value.
pub fn local_start(appointment: &AppointmentData) -> CardTimeResult<NaiveDateTime> {
    let date = parse_iso_date(&appointment.date)
        .ok_or_else(|| CardTimeError::invalid(Field::Date, &appointment.date))?;
    let time = parse_time(&appointment.time)
        .ok_or_else(|| CardTimeError::invalid(Field::Time, &appointment.time))?;
    Ok(date.and_time(time))
}

/// Read the local value as if it were UTC, then take away the observer's
/// offset, giving the real UTC instant.
pub fn start_instant(local: NaiveDateTime, utc_offset_minutes: i32) -> DateTime<Utc> {
    local.and_utc() - Duration::minutes(i64::from(utc_offset_minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn appointment() -> AppointmentData {
        AppointmentData {
            date: "2024-03-15".into(),
            time: "14:30".into(),
            artist: "John Doe".into(),
            deposit: "$50".into(),
            size: "Medium".into(),
        }
    }

    fn offset(hours: i32) -> Observer {
        Observer::Offset(FixedOffset::east_opt(hours * 3600).unwrap())
    }

    #[test]
    fn english_title_and_description() {
        let event =
            CalendarEvent::build(appointment(), EventDuration::Hour, Locale::En, &offset(0))
                .unwrap();
        assert_eq!(event.title, "Appointment with John Doe");
        assert_eq!(
            event.description,
            "Size: Medium\nDeposit: $50\nCreated with CardTime"
        );
    }

    #[test]
    fn bulgarian_title_and_description() {
        let mut data = appointment();
        data.artist = "Иван".into();
        data.deposit = "50 лв".into();
        data.size = "Среден".into();
        let event =
            CalendarEvent::build(data, EventDuration::Hour, Locale::Bg, &offset(2)).unwrap();
        assert_eq!(event.title, "Час с Иван");
        assert_eq!(
            event.description,
            "Размер: Среден\nДепозит: 50 лв\nCreated with CardTime"
        );
    }

    #[test]
    fn start_is_local_wall_clock_in_utc() {
        let event =
            CalendarEvent::build(appointment(), EventDuration::Hour, Locale::En, &offset(2))
                .unwrap();
        assert_eq!(
            event.start_date_time,
            Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap()
        );

        let event =
            CalendarEvent::build(appointment(), EventDuration::Hour, Locale::En, &offset(-5))
                .unwrap();
        assert_eq!(
            event.start_date_time,
            Utc.with_ymd_and_hms(2024, 3, 15, 19, 30, 0).unwrap()
        );
    }

    #[test]
    fn start_can_cross_midnight() {
        let mut data = appointment();
        data.time = "01:00".into();
        let event = CalendarEvent::build(data, EventDuration::Hour, Locale::En, &offset(3))
            .unwrap();
        assert_eq!(
            event.start_date_time,
            Utc.with_ymd_and_hms(2024, 3, 14, 22, 0, 0).unwrap()
        );
    }

    #[test]
    fn utc_observer_keeps_wall_clock() {
        let event =
            CalendarEvent::build(appointment(), EventDuration::Hour, Locale::En, &Observer::utc())
                .unwrap();
        assert_eq!(event.start_date_time.to_rfc3339(), "2024-03-15T14:30:00+00:00");
    }

    #[test]
    fn duration_and_end() {
        let event = CalendarEvent::build(
            appointment(),
            EventDuration::HourAndHalf,
            Locale::En,
            &Observer::utc(),
        )
        .unwrap();
        assert_eq!(event.duration.minutes(), 90);
        assert_eq!(
            event.end_date_time(),
            Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap()
        );
    }

    #[test]
    fn invalid_date_or_time_is_rejected() {
        let mut data = appointment();
        data.date = "15.03.24".into();
        let err = CalendarEvent::build(data, EventDuration::Hour, Locale::En, &Observer::utc())
            .unwrap_err();
        assert!(matches!(err, CardTimeError::InvalidField { field: Field::Date, .. }));

        let mut data = appointment();
        data.time = "2:30 pm".into();
        let err = CalendarEvent::build(data, EventDuration::Hour, Locale::En, &Observer::utc())
            .unwrap_err();
        assert!(matches!(err, CardTimeError::InvalidField { field: Field::Time, .. }));
    }

    #[test]
    fn file_name_uses_date() {
        let event =
            CalendarEvent::build(appointment(), EventDuration::Hour, Locale::En, &Observer::utc())
                .unwrap();
        assert_eq!(event.file_name(), "appointment-2024-03-15.ics");
    }

    #[test]
    fn render_when_in_observer_clock() {
        let observer = offset(2);
        let event =
            CalendarEvent::build(appointment(), EventDuration::Hour, Locale::En, &observer)
                .unwrap();
        let (date, time) = event.render_when(&observer);
        assert_eq!(date, "Friday, March 15, 2024");
        assert_eq!(time, "2:30 PM");
    }

    #[test]
    fn serializes_with_camel_case_start() {
        let event =
            CalendarEvent::build(appointment(), EventDuration::Hour, Locale::En, &Observer::utc())
                .unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["artist"], "John Doe");
        assert_eq!(json["duration"], 60);
        assert_eq!(json["startDateTime"], "2024-03-15T14:30:00Z");
    }
}
