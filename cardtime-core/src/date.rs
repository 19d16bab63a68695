//! Date detection and canonicalization.
//!
//! Cards carry dates the way people write them locally: `15.03.24` in
//! Bulgaria, `3/15/2024` in the US, sometimes `2024-03-15`. Detection finds a
//! fragment in a line; normalization turns it into `YYYY-MM-DD` or discards it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::ISO_DATE_FORMAT;
use crate::locale::Locale;

// Guarded on digit edges, not word boundaries: Bulgarian cards write `15.03.24г`.
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\D)(\d{4})-(\d{1,2})-(\d{1,2})(?:\D|$)").unwrap());

static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\D)(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})(?:\D|$)").unwrap()
});

static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\D)(\d{1,2})[/\-](\d{1,2})[/\-](\d{4}|\d{2})(?:\D|$)").unwrap()
});

/// Order in which a written date lists its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    Iso,
    /// `D/M/Y` with `/`, `.` or `-` separators
    DayMonthYear,
    /// `M/D/Y` with `/` or `-` separators
    MonthDayYear,
}

impl DateStyle {
    /// The style handwritten cards use in a locale.
    pub fn handwritten(locale: Locale) -> Self {
        match locale {
            Locale::En => DateStyle::MonthDayYear,
            Locale::Bg => DateStyle::DayMonthYear,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            DateStyle::Iso => &ISO_DATE,
            DateStyle::DayMonthYear => &DAY_MONTH_YEAR,
            DateStyle::MonthDayYear => &MONTH_DAY_YEAR,
        }
    }
}

/// The raw parts of a date as written, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFragment<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
}

/// Find the first date written in `style` on a line.
pub fn find_date(line: &str, style: DateStyle) -> Option<DateFragment<'_>> {
    let caps = style.pattern().captures(line)?;
    let (a, b, c) = (
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    );

    let fragment = match style {
        DateStyle::Iso => DateFragment {
            year: a,
            month: b,
            day: c,
        },
        DateStyle::DayMonthYear => DateFragment {
            year: c,
            month: b,
            day: a,
        },
        DateStyle::MonthDayYear => DateFragment {
            year: c,
            month: a,
            day: b,
        },
    };
    Some(fragment)
}

/// Canonicalize a fragment to `YYYY-MM-DD`.
///
/// Two-digit years are taken to be in the 2000s. Fragments that do not name
/// a real calendar day are discarded.
pub fn normalize_date(fragment: &DateFragment<'_>) -> Option<String> {
    let year: i32 = match fragment.year.len() {
        2 => format!("20{}", fragment.year).parse().ok()?,
        4 => fragment.year.parse().ok()?,
        _ => return None,
    };
    let month: u32 = fragment.month.parse().ok()?;
    let day: u32 = fragment.day.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.format(ISO_DATE_FORMAT).to_string())
}

/// Detect and canonicalize in one step.
pub fn extract_date(line: &str, style: DateStyle) -> Option<String> {
    find_date(line, style).and_then(|fragment| normalize_date(&fragment))
}

/// Canonicalize a date typed in by a human during review.
///
/// Accepts the canonical form or the locale's handwritten form.
pub fn normalize_date_input(input: &str, locale: Locale) -> Option<String> {
    let input = input.trim();
    extract_date(input, DateStyle::Iso)
        .or_else(|| extract_date(input, DateStyle::handwritten(locale)))
}

pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), ISO_DATE_FORMAT).ok()
}

/// Render a canonical date the way the locale writes it: `15/03/24` or `3/15/2024`.
pub fn display_date(date: &str, locale: Locale) -> Option<String> {
    let date = parse_iso_date(date)?;
    let format = match locale {
        Locale::Bg => "%d/%m/%y",
        Locale::En => "%-m/%-d/%Y",
    };
    Some(date.format(format).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulgarian_short_date() {
        assert_eq!(
            extract_date("15.03.24", DateStyle::DayMonthYear).as_deref(),
            Some("2024-03-15")
        );
    }

    #[test]
    fn bulgarian_separators_and_padding() {
        let style = DateStyle::DayMonthYear;
        assert_eq!(extract_date("Дата: 5/3/2024", style).as_deref(), Some("2024-03-05"));
        assert_eq!(extract_date("1-12-25", style).as_deref(), Some("2025-12-01"));
    }

    #[test]
    fn us_month_day_year() {
        let style = DateStyle::MonthDayYear;
        assert_eq!(extract_date("Date: 3/15/2024", style).as_deref(), Some("2024-03-15"));
        assert_eq!(extract_date("03-15-24", style).as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn us_style_ignores_dots() {
        assert_eq!(extract_date("15.03.24", DateStyle::MonthDayYear), None);
    }

    #[test]
    fn canonical_date_is_unchanged() {
        for date in ["2024-03-15", "1999-12-31", "2030-01-01"] {
            assert_eq!(extract_date(date, DateStyle::Iso).as_deref(), Some(date));
        }
    }

    #[test]
    fn iso_with_single_digits_is_padded() {
        assert_eq!(
            extract_date("2024-3-5", DateStyle::Iso).as_deref(),
            Some("2024-03-05")
        );
    }

    #[test]
    fn impossible_dates_are_discarded() {
        assert_eq!(extract_date("31.02.24", DateStyle::DayMonthYear), None);
        assert_eq!(extract_date("13/40/2024", DateStyle::MonthDayYear), None);
    }

    #[test]
    fn three_digit_years_do_not_match() {
        assert_eq!(find_date("15.03.202", DateStyle::DayMonthYear), None);
    }

    #[test]
    fn cyrillic_year_suffix_is_not_a_barrier() {
        let style = DateStyle::DayMonthYear;
        assert_eq!(extract_date("15.03.2024г.", style).as_deref(), Some("2024-03-15"));
        assert_eq!(extract_date("Дата: 15.03.24г", style).as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn iso_date_followed_by_time() {
        assert_eq!(
            extract_date("2024-03-15T14:30", DateStyle::Iso).as_deref(),
            Some("2024-03-15")
        );
    }

    #[test]
    fn iso_date_is_not_read_as_day_month_year() {
        assert_eq!(find_date("2024-03-15", DateStyle::DayMonthYear), None);
        assert_eq!(find_date("2024-03-15", DateStyle::MonthDayYear), None);
    }

    #[test]
    fn same_text_reads_differently_per_locale() {
        // No cross-locale guessing: each locale trusts its own order.
        assert_eq!(
            normalize_date_input("03-04-24", Locale::Bg).as_deref(),
            Some("2024-04-03")
        );
        assert_eq!(
            normalize_date_input("03-04-24", Locale::En).as_deref(),
            Some("2024-03-04")
        );
    }

    #[test]
    fn input_accepts_canonical_form_in_any_locale() {
        assert_eq!(
            normalize_date_input(" 2024-03-15 ", Locale::Bg).as_deref(),
            Some("2024-03-15")
        );
    }

    #[test]
    fn input_rejects_garbage() {
        assert_eq!(normalize_date_input("next tuesday", Locale::En), None);
    }

    #[test]
    fn display_formats() {
        assert_eq!(display_date("2024-03-05", Locale::Bg).as_deref(), Some("05/03/24"));
        assert_eq!(display_date("2024-03-05", Locale::En).as_deref(), Some("3/5/2024"));
        assert_eq!(display_date("not a date", Locale::En), None);
    }
}
