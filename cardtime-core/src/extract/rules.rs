//! Per-locale rule tables.
//!
//! Rules are listed in evaluation order. Within one line, an earlier rule for
//! a field takes precedence over a later one for the same field.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::appointment::Field;
use crate::date::{self, DateStyle};
use crate::locale::Locale;
use crate::time;

/// How a rule recognizes its field on a line.
pub enum Matcher {
    /// A date written in the given style, canonicalized.
    Date(DateStyle),
    /// An `H:MM` time with optional am/pm, converted to 24-hour.
    Time,
    /// The line mentions one of the keywords. Each keyword (and a colon right
    /// after it) is removed once and the rest of the line is the value.
    Keyword(Keywords),
    /// A regex match rendered into the stored value.
    Pattern {
        regex: Regex,
        render: fn(&Captures<'_>) -> String,
    },
}

impl Matcher {
    pub fn apply(&self, line: &str) -> Option<String> {
        match self {
            Matcher::Date(style) => date::extract_date(line, *style),
            Matcher::Time => time::extract_time(line),
            Matcher::Keyword(keywords) => keywords.strip(line),
            Matcher::Pattern { regex, render } => regex.captures(line).map(|c| render(&c)),
        }
    }
}

/// A keyword set with each `(?i)keyword:?` pattern compiled up front.
pub struct Keywords {
    patterns: Vec<Regex>,
}

impl Keywords {
    fn new(words: &[&str]) -> Self {
        let patterns = words
            .iter()
            .map(|word| Regex::new(&format!("(?i){}:?", regex::escape(word))).unwrap())
            .collect();
        Keywords { patterns }
    }

    fn strip(&self, line: &str) -> Option<String> {
        if !self.patterns.iter().any(|re| re.is_match(line)) {
            return None;
        }

        let mut rest = line.to_string();
        for re in &self.patterns {
            rest = re.replacen(&rest, 1, "").into_owned();
        }

        let rest = rest.trim();
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    }
}

pub struct Rule {
    pub field: Field,
    pub matcher: Matcher,
}

impl Rule {
    fn new(field: Field, matcher: Matcher) -> Self {
        Rule { field, matcher }
    }
}

pub struct RuleTable {
    pub locale: Locale,
    pub rules: Vec<Rule>,
}

impl RuleTable {
    pub fn for_locale(locale: Locale) -> &'static RuleTable {
        match locale {
            Locale::En => &EN_RULES,
            Locale::Bg => &BG_RULES,
        }
    }
}

const EN_ARTIST: &[&str] = &["artist"];
const EN_SIZE: &[&str] = &["size"];

const BG_ARTIST: &[&str] = &["артист", "художник", "татуист", "майстор"];
const BG_SIZE: &[&str] = &["размер"];

static EN_RULES: Lazy<RuleTable> = Lazy::new(|| RuleTable {
    locale: Locale::En,
    rules: vec![
        Rule::new(Field::Date, Matcher::Date(DateStyle::Iso)),
        Rule::new(Field::Date, Matcher::Date(DateStyle::MonthDayYear)),
        Rule::new(Field::Time, Matcher::Time),
        Rule::new(Field::Artist, Matcher::Keyword(Keywords::new(EN_ARTIST))),
        Rule::new(
            Field::Deposit,
            Matcher::Pattern {
                regex: Regex::new(r"\$\d+").unwrap(),
                render: |caps| caps[0].to_string(),
            },
        ),
        Rule::new(Field::Size, Matcher::Keyword(Keywords::new(EN_SIZE))),
    ],
});

static BG_RULES: Lazy<RuleTable> = Lazy::new(|| RuleTable {
    locale: Locale::Bg,
    rules: vec![
        Rule::new(Field::Date, Matcher::Date(DateStyle::DayMonthYear)),
        Rule::new(Field::Time, Matcher::Time),
        Rule::new(Field::Artist, Matcher::Keyword(Keywords::new(BG_ARTIST))),
        Rule::new(
            Field::Deposit,
            Matcher::Pattern {
                regex: Regex::new(r"(?i)(\d+)\s*(?:лева|лв|bgn)").unwrap(),
                render: |caps| format!("{} лв", &caps[1]),
            },
        ),
        Rule::new(Field::Size, Matcher::Keyword(Keywords::new(BG_SIZE))),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(locale: Locale, field: Field, line: &str) -> Option<String> {
        RuleTable::for_locale(locale)
            .rules
            .iter()
            .filter(|r| r.field == field)
            .find_map(|r| r.matcher.apply(line))
    }

    #[test]
    fn english_keyword_is_stripped_case_insensitively() {
        assert_eq!(
            apply(Locale::En, Field::Artist, "ARTIST: John Doe").as_deref(),
            Some("John Doe")
        );
        assert_eq!(
            apply(Locale::En, Field::Size, "size palm").as_deref(),
            Some("palm")
        );
    }

    #[test]
    fn bulgarian_artist_keywords() {
        for line in [
            "Артист: Иван",
            "художник Иван",
            "Татуист:Иван",
            "МАЙСТОР: Иван",
        ] {
            assert_eq!(
                apply(Locale::Bg, Field::Artist, line).as_deref(),
                Some("Иван"),
                "line: {line}"
            );
        }
    }

    #[test]
    fn keyword_patterns_are_compiled_once_per_set() {
        let rules = &RuleTable::for_locale(Locale::Bg).rules;
        let artist = rules
            .iter()
            .find_map(|r| match &r.matcher {
                Matcher::Keyword(keywords) if r.field == Field::Artist => Some(keywords),
                _ => None,
            })
            .unwrap();
        assert_eq!(artist.patterns.len(), BG_ARTIST.len());
        assert_eq!(artist.strip("Майстор: Иван").as_deref(), Some("Иван"));
        assert_eq!(artist.strip("Размер: малък"), None);
    }

    #[test]
    fn keyword_alone_yields_nothing() {
        assert_eq!(apply(Locale::En, Field::Artist, "Artist:"), None);
    }

    #[test]
    fn dollar_deposit_is_verbatim() {
        assert_eq!(
            apply(Locale::En, Field::Deposit, "Deposit paid $120 cash").as_deref(),
            Some("$120")
        );
        assert_eq!(apply(Locale::En, Field::Deposit, "Deposit: 50"), None);
    }

    #[test]
    fn lev_deposit_is_normalized() {
        for line in ["Депозит: 50лв", "50 лева", "депозит 50 BGN", "50 ЛВ."] {
            assert_eq!(
                apply(Locale::Bg, Field::Deposit, line).as_deref(),
                Some("50 лв"),
                "line: {line}"
            );
        }
    }

    #[test]
    fn bulgarian_size() {
        assert_eq!(
            apply(Locale::Bg, Field::Size, "Размер: Среден").as_deref(),
            Some("Среден")
        );
    }

    #[test]
    fn english_table_prefers_iso_dates() {
        let rules = &RuleTable::for_locale(Locale::En).rules;
        assert!(matches!(rules[0].matcher, Matcher::Date(DateStyle::Iso)));
        assert_eq!(
            apply(Locale::En, Field::Date, "on 2024-03-15 or 4/1/2024").as_deref(),
            Some("2024-03-15")
        );
    }
}
