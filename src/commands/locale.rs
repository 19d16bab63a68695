use anyhow::Result;
use cardtime_core::config::CardTimeConfig;
use owo_colors::OwoColorize;

use super::working_locale;
use crate::render::Render;

pub async fn run(config: &CardTimeConfig) -> Result<()> {
    let locale = working_locale(config, None).await?;
    let config_path = CardTimeConfig::config_path()?;

    println!("{}", locale.render());
    println!();
    println!("{}", "Signals".bold());
    println!("  Config locale:  {}", show(config.locale.map(|l| l.to_string())));
    println!("  Country:        {}", show(config.country.clone()));
    println!("  System locale:  {}", show(sys_locale::get_locale()));
    println!();
    println!("  OCR language:   {}", locale.ocr_language());
    println!("  Config:         {}", config_path.display());

    Ok(())
}

fn show(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".dimmed().to_string())
}
