//! The appointment record read off a card.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::labels::Labels;
use crate::locale::Locale;

/// Appointment details as read from a card (or typed in by a human).
///
/// `date` is `YYYY-MM-DD`, `time` is 24-hour `HH:MM`; the rest is free text.
/// While extraction is in progress fields may be empty; once the pipeline
/// hands the record out every field is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentData {
    pub date: String,
    pub time: String,
    pub artist: String,
    pub deposit: String,
    pub size: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Date,
    Time,
    Artist,
    Deposit,
    Size,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Date,
        Field::Time,
        Field::Artist,
        Field::Deposit,
        Field::Size,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Time => "time",
            Field::Artist => "artist",
            Field::Deposit => "deposit",
            Field::Size => "size",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let labels = Labels::for_locale(locale);
        match self {
            Field::Date => labels.date,
            Field::Time => labels.time,
            Field::Artist => labels.artist,
            Field::Deposit => labels.deposit,
            Field::Size => labels.size,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AppointmentData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Artist => &self.artist,
            Field::Deposit => &self.deposit,
            Field::Size => &self.size,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Artist => &mut self.artist,
            Field::Deposit => &mut self.deposit,
            Field::Size => &mut self.size,
        }
    }

    /// Overwrite a field unconditionally.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Write a field only if it is still empty. Returns whether it was written.
    pub fn fill(&mut self, field: Field, value: impl Into<String>) -> bool {
        let slot = self.slot_mut(field);
        if !slot.is_empty() {
            return false;
        }
        *slot = value.into();
        true
    }

    pub fn is_filled(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    /// True once every field holds a value.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| self.is_filled(*f))
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.is_filled(*f))
            .collect()
    }
}
