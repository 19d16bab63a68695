//! The wall clock of the person entering the appointment.
//!
//! Card times are local. To get a real UTC instant the builder needs the UTC
//! offset of whoever wrote (or confirmed) the card.

use std::str::FromStr;

use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{CardTimeError, CardTimeResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observer {
    /// A fixed UTC offset, e.g. `+02:00`.
    Offset(FixedOffset),
    /// An IANA zone; the offset follows its daylight-saving rules.
    Zone(Tz),
}

impl Observer {
    pub fn utc() -> Self {
        Observer::Offset(Utc.fix())
    }

    /// The system time zone, falling back to the current local offset.
    pub fn system() -> Self {
        match iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| Tz::from_str(&name).ok())
        {
            Some(tz) => Observer::Zone(tz),
            None => {
                debug!("system time zone unknown, using current local offset");
                Observer::Offset(Local::now().offset().fix())
            }
        }
    }

    /// Parse an IANA zone name (`Europe/Sofia`) or a fixed offset (`+02:00`).
    pub fn parse(value: &str) -> CardTimeResult<Self> {
        let value = value.trim();
        if let Ok(tz) = Tz::from_str(value) {
            return Ok(Observer::Zone(tz));
        }
        FixedOffset::from_str(value)
            .map(Observer::Offset)
            .map_err(|_| CardTimeError::Config(format!("Unknown time zone '{value}'")))
    }

    /// Offset from UTC, in minutes, in effect at a local wall-clock time.
    ///
    /// For a local time skipped by a daylight-saving jump the offset in effect
    /// just before the jump is used.
    pub fn utc_offset_minutes(&self, local: NaiveDateTime) -> i32 {
        let offset = match self {
            Observer::Offset(offset) => *offset,
            Observer::Zone(tz) => tz
                .offset_from_local_datetime(&local)
                .earliest()
                .or_else(|| {
                    tz.offset_from_local_datetime(&(local - Duration::hours(1)))
                        .earliest()
                })
                .map(|o| o.fix())
                .unwrap_or_else(|| tz.offset_from_utc_datetime(&local).fix()),
        };
        offset.local_minus_utc() / 60
    }

    pub fn today(&self) -> NaiveDate {
        self.local_time(Utc::now()).date()
    }

    /// Wall-clock time of a UTC instant for this observer.
    pub fn local_time(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Observer::Offset(offset) => instant.with_timezone(offset).naive_local(),
            Observer::Zone(tz) => instant.with_timezone(tz).naive_local(),
        }
    }
}
