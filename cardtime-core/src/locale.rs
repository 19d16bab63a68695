//! Working locale and its fallback chain.
//!
//! The locale is resolved once per session and then passed explicitly to
//! every pipeline stage. Resolution order:
//!
//! 1. explicit user selection
//! 2. country code from a geolocation signal (`BG` ⇒ `bg`, anything else ⇒ `en`)
//! 3. runtime language tag (`bg*` ⇒ `bg`, anything else ⇒ `en`)
//! 4. `en`
//!
//! A tier that is absent, fails or times out falls through to the next one.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::debug;

use crate::error::{CardTimeError, CardTimeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Bg,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Bg];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bg => "bg",
        }
    }

    /// Language hint passed to the recognition engine.
    pub fn ocr_language(self) -> &'static str {
        match self {
            Locale::En => "eng",
            Locale::Bg => "bul",
        }
    }

    /// Name of the language in that language, for selection menus.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Bg => "Български",
        }
    }

    pub fn from_country_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("BG") {
            Locale::Bg
        } else {
            Locale::En
        }
    }

    pub fn from_language_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("bg") {
            Locale::Bg
        } else {
            Locale::En
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CardTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "bg" => Ok(Locale::Bg),
            other => Err(CardTimeError::Config(format!(
                "Unknown locale '{other}'. Expected 'en' or 'bg'"
            ))),
        }
    }
}

/// The signals available for locale resolution, strongest first.
#[derive(Debug, Clone, Default)]
pub struct LocaleSignals {
    pub explicit: Option<Locale>,
    pub country: Option<String>,
    pub language_tag: Option<String>,
}

impl LocaleSignals {
    pub fn resolve(&self) -> Locale {
        if let Some(locale) = self.explicit {
            return locale;
        }

        if let Some(country) = non_blank(self.country.as_deref()) {
            return Locale::from_country_code(country);
        }

        if let Some(tag) = non_blank(self.language_tag.as_deref()) {
            return Locale::from_language_tag(tag);
        }

        Locale::default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Source of the country-code signal (geolocation, IP lookup, config).
#[async_trait]
pub trait CountryLookup: Send + Sync {
    async fn country_code(&self) -> CardTimeResult<String>;
}

/// Country code known up front, e.g. from the config file.
#[derive(Debug, Clone, Default)]
pub struct FixedCountry(Option<String>);

impl FixedCountry {
    pub fn new(code: Option<String>) -> Self {
        FixedCountry(code)
    }
}

#[async_trait]
impl CountryLookup for FixedCountry {
    async fn country_code(&self) -> CardTimeResult<String> {
        self.0
            .clone()
            .ok_or_else(|| CardTimeError::CountryLookup("no country configured".into()))
    }
}

/// Walk the fallback chain, waiting at most `wait` for the country lookup.
///
/// Never fails: every problem with a tier just moves on to the next one.
pub async fn resolve_locale(
    explicit: Option<Locale>,
    lookup: &dyn CountryLookup,
    language_tag: Option<String>,
    wait: Duration,
) -> Locale {
    if let Some(locale) = explicit {
        debug!(%locale, "using explicitly selected locale");
        return locale;
    }

    let country = match timeout(wait, lookup.country_code()).await {
        Ok(Ok(code)) => Some(code),
        Ok(Err(e)) => {
            debug!(error = %e, "country lookup failed, trying language tag");
            None
        }
        Err(_) => {
            debug!(?wait, "country lookup timed out, trying language tag");
            None
        }
    };

    let locale = LocaleSignals {
        explicit: None,
        country,
        language_tag,
    }
    .resolve();
    debug!(%locale, "resolved locale");
    locale
}
