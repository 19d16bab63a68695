//! Colored terminal rendering for cardtime types.

use cardtime_core::labels::Labels;
use cardtime_core::review::Review;
use cardtime_core::{CalendarEvent, Field, Locale, Observer};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Review {
    fn render(&self) -> String {
        let locale = self.locale();
        let labels = Labels::for_locale(locale);
        let appointment = self.appointment();

        let mut lines = Vec::with_capacity(Field::ALL.len() + 1);
        for field in Field::ALL {
            let value = match field {
                Field::Date => self.display_date(),
                _ => appointment.get(field).to_string(),
            };
            lines.push(row(field.label(locale), &value));
        }
        lines.push(row(labels.duration, &self.duration().label(locale)));

        lines.join("\n")
    }
}

impl Render for Locale {
    fn render(&self) -> String {
        format!("{} {}", self.code().bold(), format!("({})", self.native_name()).dimmed())
    }
}

fn row(label: &str, value: &str) -> String {
    let label = format!("{:<16}", format!("{label}:"));
    format!("  {} {}", label.dimmed(), value)
}

/// The confirmation block shown once the event is built.
pub fn render_event(event: &CalendarEvent, observer: &Observer, locale: Locale) -> String {
    let (date, time) = event.render_when(observer);
    let labels = Labels::for_locale(locale);

    let mut lines = vec![format!("  {}", event.title.bold())];
    lines.push(format!("  {} {}", date, time.dimmed()));
    lines.push(format!(
        "  {}: {}",
        labels.duration,
        event.duration.label(locale)
    ));
    for line in event.description.lines() {
        lines.push(format!("  {}", line.dimmed()));
    }
    lines.join("\n")
}
