//! Field extraction from recognized card lines.
//!
//! A single interpreter walks the lines once, in order, and evaluates the
//! locale's rule table against each line. The first value found for a field
//! is kept; later matches for that field are ignored.

mod rules;

pub use rules::{Keywords, Matcher, Rule, RuleTable};

use tracing::trace;

use crate::appointment::AppointmentData;
use crate::locale::Locale;

/// Extract whatever fields the lines yield. Unmatched fields stay empty.
pub fn extract_fields(lines: &[&str], locale: Locale) -> AppointmentData {
    let table = RuleTable::for_locale(locale);
    let mut data = AppointmentData::default();

    for (index, line) in lines.iter().enumerate() {
        for rule in &table.rules {
            if data.is_filled(rule.field) {
                continue;
            }
            if let Some(value) = rule.matcher.apply(line) {
                trace!(field = %rule.field, line = index, %value, "field matched");
                data.fill(rule.field, value);
            }
        }

        if data.is_complete() {
            break;
        }
    }

    data
}
