//! Scan → appointment record.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::appointment::AppointmentData;
use crate::defaults::{defaulted, fill_defaults};
use crate::extract::extract_fields;
use crate::lines::normalize_lines;
use crate::locale::Locale;
use crate::recognizer::Recognizer;

/// Turn recognized card text into a complete appointment record.
pub fn parse_card_text(text: &str, locale: Locale, today: NaiveDate) -> AppointmentData {
    let lines = normalize_lines(text);
    let mut data = extract_fields(&lines, locale);

    let missing = data.missing_fields();
    if !missing.is_empty() {
        debug!(?missing, "filling defaults");
    }
    fill_defaults(&mut data, locale, today);
    data
}

/// Recognize a card image and parse it.
///
/// Recognition failures are not errors for the caller: the result is then a
/// record made entirely of defaults for the human to correct.
pub async fn scan_card(
    recognizer: &dyn Recognizer,
    image: &[u8],
    locale: Locale,
    today: NaiveDate,
) -> AppointmentData {
    match recognizer.recognize(image, locale.ocr_language()).await {
        Ok(text) => parse_card_text(&text, locale, today),
        Err(e) => {
            warn!(error = %e, "recognition failed, using defaults");
            defaulted(locale, today)
        }
    }
}
