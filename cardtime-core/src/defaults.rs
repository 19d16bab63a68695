//! Locale defaults for fields a card did not yield.

use chrono::NaiveDate;

use crate::appointment::{AppointmentData, Field};
use crate::constants::{DEFAULT_TIME, ISO_DATE_FORMAT};
use crate::locale::Locale;

struct LocaleDefaults {
    artist: &'static str,
    deposit: &'static str,
    size: &'static str,
}

const EN: LocaleDefaults = LocaleDefaults {
    artist: "Unknown Artist",
    deposit: "$0",
    size: "Standard",
};

const BG: LocaleDefaults = LocaleDefaults {
    artist: "Неизвестен артист",
    deposit: "0 лв",
    size: "Стандартен",
};

fn defaults_for(locale: Locale) -> &'static LocaleDefaults {
    match locale {
        Locale::En => &EN,
        Locale::Bg => &BG,
    }
}

/// The value used for `field` when nothing was extracted.
pub fn default_value(field: Field, locale: Locale, today: NaiveDate) -> String {
    let defaults = defaults_for(locale);
    match field {
        Field::Date => today.format(ISO_DATE_FORMAT).to_string(),
        Field::Time => DEFAULT_TIME.to_string(),
        Field::Artist => defaults.artist.to_string(),
        Field::Deposit => defaults.deposit.to_string(),
        Field::Size => defaults.size.to_string(),
    }
}

/// Fill every empty field. Afterwards the record is complete.
pub fn fill_defaults(data: &mut AppointmentData, locale: Locale, today: NaiveDate) {
    for field in Field::ALL {
        if !data.is_filled(field) {
            data.fill(field, default_value(field, locale, today));
        }
    }
}

/// A record made entirely of defaults, used when recognition fails.
pub fn defaulted(locale: Locale, today: NaiveDate) -> AppointmentData {
    let mut data = AppointmentData::default();
    fill_defaults(&mut data, locale, today);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn english_defaults() {
        let data = defaulted(Locale::En, today());
        assert_eq!(
            data,
            AppointmentData {
                date: "2024-06-01".into(),
                time: "14:00".into(),
                artist: "Unknown Artist".into(),
                deposit: "$0".into(),
                size: "Standard".into(),
            }
        );
    }

    #[test]
    fn bulgarian_defaults() {
        let data = defaulted(Locale::Bg, today());
        assert_eq!(data.artist, "Неизвестен артист");
        assert_eq!(data.deposit, "0 лв");
        assert_eq!(data.size, "Стандартен");
        assert_eq!(data.time, "14:00");
    }

    #[test]
    fn extracted_values_are_kept() {
        let mut data = AppointmentData {
            artist: "Ana".into(),
            ..Default::default()
        };
        fill_defaults(&mut data, Locale::En, today());
        assert_eq!(data.artist, "Ana");
        assert_eq!(data.size, "Standard");
        assert!(data.is_complete());
    }
}
