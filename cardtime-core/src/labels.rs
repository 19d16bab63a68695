//! Localized labels used in event text and the review step.

use crate::locale::Locale;

#[derive(Debug)]
pub struct Labels {
    pub appointment_with: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub artist: &'static str,
    pub deposit: &'static str,
    pub size: &'static str,
    pub duration: &'static str,
    pub minutes: &'static str,
    pub hour: &'static str,
    pub hours: &'static str,
}

const EN: Labels = Labels {
    appointment_with: "Appointment with",
    date: "Date",
    time: "Time",
    artist: "Artist",
    deposit: "Deposit",
    size: "Size",
    duration: "Duration",
    minutes: "minutes",
    hour: "hour",
    hours: "hours",
};

const BG: Labels = Labels {
    appointment_with: "Час с",
    date: "Дата",
    time: "Час",
    artist: "Артист",
    deposit: "Депозит",
    size: "Размер",
    duration: "Продължителност",
    minutes: "минути",
    hour: "час",
    hours: "часа",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &EN,
            Locale::Bg => &BG,
        }
    }
}
