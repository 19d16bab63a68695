use std::path::PathBuf;

use anyhow::{Context, Result};
use cardtime_core::config::CardTimeConfig;
use cardtime_core::ics::generate_ics;
use cardtime_core::pipeline::scan_card;
use cardtime_core::recognizer::OcrEngine;
use cardtime_core::review::Review;
use cardtime_core::{EventDuration, Locale};
use owo_colors::OwoColorize;

use super::{create_spinner, working_locale, write_payload};
use crate::render::render_event;

pub struct ScanArgs {
    pub image: PathBuf,
    pub locale: Option<Locale>,
    pub duration: Option<EventDuration>,
    pub out: Option<PathBuf>,
    pub yes: bool,
}

pub async fn run(config: &CardTimeConfig, args: ScanArgs) -> Result<()> {
    let image = std::fs::read(&args.image)
        .with_context(|| format!("Could not read {}", args.image.display()))?;

    let locale = working_locale(config, args.locale).await?;
    let observer = config.observer()?;
    let engine = OcrEngine::from_name(&config.recognizer).with_timeout(config.recognizer_timeout()?);

    let spinner = create_spinner(format!("Reading card ({})", engine.name()));
    let appointment = scan_card(&engine, &image, locale, observer.today()).await;
    spinner.finish_and_clear();

    let review = Review::new(appointment, locale)
        .with_duration(args.duration.unwrap_or(config.default_duration));

    let event = super::review::run(review, &observer, !args.yes)?;
    let payload = generate_ics(&event)?;
    let path = write_payload(&payload, args.out.as_deref(), config)?;

    println!();
    println!("{}", render_event(&event, &observer, locale));
    println!();
    println!("{}", format!("  Saved: {}", path.display()).green());

    Ok(())
}
