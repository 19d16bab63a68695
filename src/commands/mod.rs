pub mod event;
pub mod locale;
pub mod parse;
pub mod review;
pub mod scan;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardtime_core::config::CardTimeConfig;
use cardtime_core::ics::IcsPayload;
use cardtime_core::locale::{FixedCountry, resolve_locale};
use cardtime_core::Locale;
use tracing::debug;

pub use crate::utils::tui::create_spinner;

/// Flag beats config; then country, then the system language.
pub async fn working_locale(config: &CardTimeConfig, flag: Option<Locale>) -> Result<Locale> {
    let lookup = FixedCountry::new(config.country.clone());
    let wait = config.locale_lookup_timeout()?;

    Ok(resolve_locale(flag.or(config.locale), &lookup, sys_locale::get_locale(), wait).await)
}

/// Write the calendar file into `out` (a directory or a file path).
pub fn write_payload(payload: &IcsPayload, out: Option<&Path>, config: &CardTimeConfig) -> Result<PathBuf> {
    let target = match out {
        Some(path) if path.is_dir() => path.join(&payload.file_name),
        Some(path) => path.to_path_buf(),
        None => config.output_path().join(&payload.file_name),
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    std::fs::write(&target, payload.as_bytes())
        .with_context(|| format!("Could not write {}", target.display()))?;
    debug!(path = %target.display(), bytes = payload.content.len(), "wrote calendar file");

    Ok(target)
}
