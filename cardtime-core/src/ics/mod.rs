//! Calendar file output.

mod generate;

pub use generate::{IcsPayload, generate_ics, generate_ics_at};
