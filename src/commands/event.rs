use anyhow::Result;
use cardtime_core::config::CardTimeConfig;
use cardtime_core::defaults::defaulted;
use cardtime_core::ics::generate_ics;
use cardtime_core::review::Review;
use cardtime_core::{EventDuration, Field, Locale};
use owo_colors::OwoColorize;

use super::{working_locale, write_payload};
use crate::render::render_event;

pub struct EventArgs {
    pub date: Option<String>,
    pub time: Option<String>,
    pub artist: Option<String>,
    pub deposit: Option<String>,
    pub size: Option<String>,
    pub duration: Option<EventDuration>,
    pub locale: Option<Locale>,
    pub stdout: bool,
}

impl EventArgs {
    fn fields(&self) -> [(Field, Option<&str>); 5] {
        [
            (Field::Date, self.date.as_deref()),
            (Field::Time, self.time.as_deref()),
            (Field::Artist, self.artist.as_deref()),
            (Field::Deposit, self.deposit.as_deref()),
            (Field::Size, self.size.as_deref()),
        ]
    }
}

/// Build an event from flags; anything not given gets the locale default.
pub async fn run(config: &CardTimeConfig, args: EventArgs) -> Result<()> {
    let locale = working_locale(config, args.locale).await?;
    let observer = config.observer()?;

    let mut review = Review::new(defaulted(locale, observer.today()), locale)
        .with_duration(args.duration.unwrap_or(config.default_duration));

    for (field, value) in args.fields() {
        if let Some(value) = value {
            review.edit(field, value)?;
        }
    }

    let event = review.confirm(&observer)?;
    let payload = generate_ics(&event)?;

    if args.stdout {
        print!("{}", payload.content);
        return Ok(());
    }

    let path = write_payload(&payload, None, config)?;
    println!("{}", render_event(&event, &observer, locale));
    println!();
    println!("{}", format!("  Saved: {}", path.display()).green());

    Ok(())
}
