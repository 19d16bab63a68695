//! Error types for cardtime.

use thiserror::Error;

use crate::appointment::Field;

/// Errors that can occur at the boundaries of the pipeline.
///
/// The extraction stages themselves never fail; these come from the
/// recognizer subprocess, configuration, human edits and file output.
#[derive(Error, Debug)]
pub enum CardTimeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Recognizer error: {0}")]
    Recognizer(String),

    #[error("Recognizer '{0}' not found in PATH. Install it with: cargo install cardtime-ocr-{0}")]
    RecognizerNotInstalled(String),

    #[error("Recognizer request timed out after {0}s")]
    RecognizerTimeout(u64),

    #[error("Country lookup failed: {0}")]
    CountryLookup(String),

    #[error("Invalid {field}: \"{value}\"")]
    InvalidField { field: Field, value: String },

    #[error("Unsupported duration: {0} minutes (expected 30, 60, 90, 120 or 180)")]
    InvalidDuration(u32),

    #[error("Appointment was already confirmed")]
    AlreadyConfirmed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CardTimeError {
    pub(crate) fn invalid(field: Field, value: impl Into<String>) -> Self {
        CardTimeError::InvalidField {
            field,
            value: value.into(),
        }
    }
}

/// Result type alias for cardtime operations.
pub type CardTimeResult<T> = Result<T, CardTimeError>;
