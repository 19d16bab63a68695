//! Appointment lengths offered at confirmation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardTimeError;
use crate::labels::Labels;
use crate::locale::Locale;

/// One of the fixed appointment lengths. Anything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum EventDuration {
    HalfHour,
    #[default]
    Hour,
    HourAndHalf,
    TwoHours,
    ThreeHours,
}

impl EventDuration {
    pub const ALL: [EventDuration; 5] = [
        EventDuration::HalfHour,
        EventDuration::Hour,
        EventDuration::HourAndHalf,
        EventDuration::TwoHours,
        EventDuration::ThreeHours,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            EventDuration::HalfHour => 30,
            EventDuration::Hour => 60,
            EventDuration::HourAndHalf => 90,
            EventDuration::TwoHours => 120,
            EventDuration::ThreeHours => 180,
        }
    }

    pub fn as_chrono(self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.minutes()))
    }

    /// Human label, e.g. "1 hour", "1h 30m", "2 часа".
    pub fn label(self, locale: Locale) -> String {
        let mins = self.minutes();
        let (hours, rest) = (mins / 60, mins % 60);
        let labels = Labels::for_locale(locale);

        if mins < 60 {
            return format!("{mins} {}", labels.minutes);
        }
        if mins == 60 {
            return format!("1 {}", labels.hour);
        }
        if rest == 0 {
            return format!("{hours} {}", labels.hours);
        }
        match locale {
            Locale::En => format!("{hours}h {rest}m"),
            Locale::Bg => format!("{hours} {} {rest} {}", labels.hours, labels.minutes),
        }
    }
}

impl TryFrom<u32> for EventDuration {
    type Error = CardTimeError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        EventDuration::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or(CardTimeError::InvalidDuration(minutes))
    }
}

impl From<EventDuration> for u32 {
    fn from(duration: EventDuration) -> Self {
        duration.minutes()
    }
}

impl FromStr for EventDuration {
    type Err = CardTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes: u32 = s
            .trim()
            .parse()
            .map_err(|_| CardTimeError::Config(format!("Invalid duration '{s}'")))?;
        EventDuration::try_from(minutes)
    }
}

impl fmt::Display for EventDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}
