//! Time detection and 24-hour conversion.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

static TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|\D)(\d{1,2}):(\d{2})(?:\s*(am|pm)(?-u:\b))?(?:\D|$)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "am" => Some(Meridiem::Am),
            "pm" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// 12-hour clock to 24-hour clock. Hours without a suffix pass through.
pub fn to_24_hour(hour: u32, meridiem: Option<Meridiem>) -> u32 {
    match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    }
}

/// Find an `H:MM` time (optionally `am`/`pm`) on a line and return it as `HH:MM`.
///
/// Results that are not a real time of day (`25:10`, `9:75`) are discarded.
pub fn extract_time(line: &str) -> Option<String> {
    let caps = TIME.captures(line)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes = caps.get(2)?.as_str();
    let meridiem = caps.get(3).and_then(|m| Meridiem::parse(m.as_str()));

    let hour = to_24_hour(hour, meridiem);
    let minute: u32 = minutes.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    Some(format!("{hour:02}:{minutes}"))
}

/// Canonicalize a time typed in during review.
pub fn normalize_time_input(input: &str) -> Option<String> {
    extract_time(input.trim())
}

pub fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()
}
