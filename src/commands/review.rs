//! Interactive review of an extracted appointment.

use anyhow::Result;
use cardtime_core::review::Review;
use cardtime_core::{CalendarEvent, EventDuration, Field, Observer};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::render::Render;

#[derive(Clone, Copy)]
enum Choice {
    Edit(Field),
    Duration,
    Confirm,
}

/// Let the user correct fields until they confirm, then build the event.
pub fn run(mut review: Review, observer: &Observer, interactive: bool) -> Result<CalendarEvent> {
    if !interactive {
        return Ok(review.confirm(observer)?);
    }

    loop {
        println!("{}", review.render());
        println!();

        let mut choices: Vec<(String, Choice)> = Field::ALL
            .into_iter()
            .map(|field| {
                let label = format!("Edit {}", field.label(review.locale()).to_lowercase());
                (label, Choice::Edit(field))
            })
            .collect();
        choices.push(("Change duration".into(), Choice::Duration));
        choices.push(("Looks good, create event".into(), Choice::Confirm));

        let items: Vec<&str> = choices.iter().map(|(label, _)| label.as_str()).collect();
        let selection = Select::new()
            .with_prompt("  Anything to fix?")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;

        match choices[selection].1 {
            Choice::Edit(field) => edit_with_retry(&mut review, field)?,
            Choice::Duration => {
                let duration = prompt_duration(&review)?;
                review.set_duration(duration)?;
            }
            Choice::Confirm => match review.confirm(observer) {
                Ok(event) => return Ok(event),
                Err(e) => eprintln!("  {}", e.to_string().red()),
            },
        }
        println!();
    }
}

/// Prompt for a new field value, re-asking until it is accepted.
fn edit_with_retry(review: &mut Review, field: Field) -> Result<()> {
    let prompt = format!("  {}", field.label(review.locale()));
    loop {
        let current = match field {
            Field::Date => review.display_date(),
            _ => review.appointment().get(field).to_string(),
        };
        let input: String = Input::new()
            .with_prompt(&prompt)
            .with_initial_text(current)
            .interact_text()?;

        match review.edit(field, &input) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn prompt_duration(review: &Review) -> Result<EventDuration> {
    let locale = review.locale();
    let labels: Vec<String> = EventDuration::ALL
        .iter()
        .map(|d| d.label(locale))
        .collect();
    let current = EventDuration::ALL
        .iter()
        .position(|d| *d == review.duration())
        .unwrap_or_default();

    let selection = Select::new()
        .with_prompt("  How long?")
        .items(&labels)
        .default(current)
        .interact()?;

    Ok(EventDuration::ALL[selection])
}
