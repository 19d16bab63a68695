use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cardtime_core::config::CardTimeConfig;
use cardtime_core::pipeline::parse_card_text;
use cardtime_core::{AppointmentData, Locale};
use serde::Serialize;

use super::working_locale;

#[derive(Serialize)]
struct ParseOutput {
    locale: Locale,
    #[serde(flatten)]
    appointment: AppointmentData,
}

pub async fn run(config: &CardTimeConfig, file: Option<PathBuf>, locale: Option<Locale>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Could not read stdin")?;
            buf
        }
    };

    let locale = working_locale(config, locale).await?;
    let today = config.observer()?.today();
    let appointment = parse_card_text(&text, locale, today);

    let output = ParseOutput { locale, appointment };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
