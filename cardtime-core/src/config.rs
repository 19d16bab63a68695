//! Global cardtime configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOCALE_LOOKUP_TIMEOUT, DEFAULT_RECOGNIZER, DEFAULT_RECOGNIZER_TIMEOUT,
};
use crate::duration::EventDuration;
use crate::error::{CardTimeError, CardTimeResult};
use crate::locale::Locale;
use crate::observer::Observer;

static DEFAULT_OUTPUT_DIR: &str = ".";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn is_default_output_dir(p: &PathBuf) -> bool {
    *p == default_output_dir()
}

fn default_recognizer() -> String {
    DEFAULT_RECOGNIZER.to_string()
}

fn default_recognizer_timeout() -> String {
    DEFAULT_RECOGNIZER_TIMEOUT.to_string()
}

fn default_locale_lookup_timeout() -> String {
    DEFAULT_LOCALE_LOOKUP_TIMEOUT.to_string()
}

/// Configuration at ~/.config/cardtime/config.toml, overridable with
/// `CARDTIME_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTimeConfig {
    /// Explicit locale; skips every other detection tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// Two-letter country code used as the location signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// IANA zone or fixed offset of the person entering appointments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default = "default_recognizer")]
    pub recognizer: String,

    #[serde(default = "default_recognizer_timeout")]
    pub recognizer_timeout: String,

    #[serde(default = "default_locale_lookup_timeout")]
    pub locale_lookup_timeout: String,

    #[serde(default)]
    pub default_duration: EventDuration,

    #[serde(default = "default_output_dir", skip_serializing_if = "is_default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for CardTimeConfig {
    fn default() -> Self {
        CardTimeConfig {
            locale: None,
            country: None,
            timezone: None,
            recognizer: default_recognizer(),
            recognizer_timeout: default_recognizer_timeout(),
            locale_lookup_timeout: default_locale_lookup_timeout(),
            default_duration: EventDuration::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl CardTimeConfig {
    pub fn config_path() -> CardTimeResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CardTimeError::Config("Could not determine config directory".into()))?
            .join("cardtime");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented config on first run.
    pub fn load() -> CardTimeResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> CardTimeResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("CARDTIME"))
            .build()
            .map_err(|e| CardTimeError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CardTimeError::Config(e.to_string()))
    }

    pub fn save(&self) -> CardTimeResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> CardTimeResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CardTimeError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CardTimeError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CardTimeResult<()> {
        let contents = format!(
            "\
# cardtime configuration

# Card language (\"en\" or \"bg\"). When unset it is guessed from
# `country`, then from the system language.
# locale = \"bg\"

# Country code used to guess the locale:
# country = \"BG\"

# Time zone for appointment times (IANA name or offset like \"+02:00\").
# Defaults to the system time zone.
# timezone = \"Europe/Sofia\"

# Recognition engine; runs the `cardtime-ocr-<name>` binary:
# recognizer = \"{DEFAULT_RECOGNIZER}\"
# recognizer_timeout = \"{DEFAULT_RECOGNIZER_TIMEOUT}\"

# How long to wait for the country lookup:
# locale_lookup_timeout = \"{DEFAULT_LOCALE_LOOKUP_TIMEOUT}\"

# Appointment length in minutes (30, 60, 90, 120 or 180):
# default_duration = 60

# Where .ics files are written:
# output_dir = \"{DEFAULT_OUTPUT_DIR}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CardTimeError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CardTimeError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn recognizer_timeout(&self) -> CardTimeResult<Duration> {
        parse_timeout("recognizer_timeout", &self.recognizer_timeout)
    }

    pub fn locale_lookup_timeout(&self) -> CardTimeResult<Duration> {
        parse_timeout("locale_lookup_timeout", &self.locale_lookup_timeout)
    }

    pub fn output_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The configured time zone, or the system's when none is set.
    pub fn observer(&self) -> CardTimeResult<Observer> {
        match self.timezone.as_deref() {
            Some(tz) => Observer::parse(tz),
            None => Ok(Observer::system()),
        }
    }
}

fn parse_timeout(key: &str, value: &str) -> CardTimeResult<Duration> {
    humantime::parse_duration(value)
        .map_err(|e| CardTimeError::Config(format!("Invalid {key} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CardTimeConfig::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.recognizer, "tesseract");
        assert_eq!(config.recognizer_timeout().unwrap(), Duration::from_secs(30));
        assert_eq!(config.locale_lookup_timeout().unwrap(), Duration::from_secs(5));
        assert_eq!(config.default_duration, EventDuration::Hour);
        assert_eq!(config.output_path(), PathBuf::from("."));
    }

    #[test]
    fn commented_default_config_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        CardTimeConfig::create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = CardTimeConfig::load_from(&path).unwrap();
        assert!(config.locale.is_none());
        assert!(config.country.is_none());
        assert_eq!(config.recognizer, "tesseract");
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
locale = "bg"
country = "BG"
timezone = "Europe/Sofia"
recognizer_timeout = "1m 30s"
default_duration = 90
output_dir = "~/appointments"
"#,
        )
        .unwrap();

        let config = CardTimeConfig::load_from(&path).unwrap();
        assert_eq!(config.locale, Some(Locale::Bg));
        assert_eq!(config.country.as_deref(), Some("BG"));
        assert_eq!(config.recognizer_timeout().unwrap(), Duration::from_secs(90));
        assert_eq!(config.default_duration, EventDuration::HourAndHalf);
        assert!(matches!(config.observer().unwrap(), Observer::Zone(_)));
        assert!(!config.output_path().starts_with("~"));
    }

    #[test]
    fn unsupported_duration_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_duration = 45\n").unwrap();

        assert!(matches!(
            CardTimeConfig::load_from(&path),
            Err(CardTimeError::Config(_))
        ));
    }

    #[test]
    fn bad_timeout_is_reported() {
        let config = CardTimeConfig {
            recognizer_timeout: "soon".into(),
            ..CardTimeConfig::default()
        };
        assert!(matches!(
            config.recognizer_timeout(),
            Err(CardTimeError::Config(_))
        ));
    }

    #[test]
    fn save_round_trips_non_default_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = CardTimeConfig {
            locale: Some(Locale::Bg),
            default_duration: EventDuration::TwoHours,
            ..CardTimeConfig::default()
        };
        config.save_to(&path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("locale = \"bg\""));
        assert!(!saved.contains("output_dir"));

        let loaded = CardTimeConfig::load_from(&path).unwrap();
        assert_eq!(loaded.locale, Some(Locale::Bg));
        assert_eq!(loaded.default_duration, EventDuration::TwoHours);
    }
}
