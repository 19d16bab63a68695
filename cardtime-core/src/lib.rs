//! Core pipeline for turning handwritten appointment cards into calendar events.
//!
//! Recognized card text flows through these stages, leaves first:
//! - `locale`: pick `en` or `bg` from an ordered fallback chain
//! - `lines`: split recognized text into trimmed, non-empty lines
//! - `extract`: per-locale rule tables turning lines into appointment fields
//! - `date` / `time`: canonicalize matched fragments
//! - `defaults`: fill whatever the card did not yield
//! - `event`: title, description and the UTC start instant
//! - `ics`: the one-event calendar file handed to the user
//!
//! Recognition itself is an injected capability (`recognizer::Recognizer`);
//! the bundled `OcrEngine` talks to an external `cardtime-ocr-<name>` binary.

pub mod appointment;
pub mod config;
pub mod constants;
pub mod date;
pub mod defaults;
pub mod duration;
pub mod error;
pub mod event;
pub mod extract;
pub mod ics;
pub mod labels;
pub mod lines;
pub mod locale;
pub mod observer;
pub mod pipeline;
pub mod protocol;
pub mod recognizer;
pub mod review;
pub mod time;

pub use appointment::{AppointmentData, Field};
pub use duration::EventDuration;
pub use error::{CardTimeError, CardTimeResult};
pub use event::CalendarEvent;
pub use locale::Locale;
pub use observer::Observer;
