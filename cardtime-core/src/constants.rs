/// Product identifier written into every generated calendar file.
pub const PRODID: &str = "-//CardTime//CardTime App//EN";

/// Domain suffix for generated UIDs.
pub const UID_DOMAIN: &str = "cardtime.app";

/// MIME type of the calendar payload.
pub const ICS_MIME_TYPE: &str = "text/calendar";

/// `YYYYMMDDTHHMMSSZ`
pub const ICS_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Canonical calendar date.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Start time used when the card has none.
pub const DEFAULT_TIME: &str = "14:00";

/// Last line of every event description.
pub const ATTRIBUTION: &str = "Created with CardTime";

/// Engine used when the config names none.
pub const DEFAULT_RECOGNIZER: &str = "tesseract";

pub const DEFAULT_RECOGNIZER_TIMEOUT: &str = "30s";
pub const DEFAULT_LOCALE_LOOKUP_TIMEOUT: &str = "5s";
