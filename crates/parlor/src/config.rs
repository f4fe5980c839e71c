//! Parlor configuration loaded from TOML.

use crate::widgets::{dice::STANDARD_SIDES, typing};
use chrono::Weekday;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "parlor.toml";

/// Settings shared by the shell and the board.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ParlorConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Faces on the die rolled by `roll`.
    #[serde(default = "default_dice_sides")]
    dice_sides: u32,

    /// First column of the calendar.
    #[serde(default = "default_first_weekday")]
    first_weekday: Weekday,

    /// Seconds allowed for one typing test.
    #[serde(default = "default_typing_time_limit_secs")]
    typing_time_limit_secs: u64,

    /// Texts offered by the typing test.
    #[serde(default = "default_sample_texts")]
    sample_texts: Vec<String>,

    /// Fixed seed for reproducible sessions.
    #[serde(default)]
    rng_seed: Option<u64>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_dice_sides() -> u32 {
    STANDARD_SIDES
}

fn default_first_weekday() -> Weekday {
    Weekday::Sun
}

fn default_typing_time_limit_secs() -> u64 {
    typing::DEFAULT_TIME_LIMIT_SECS
}

fn default_sample_texts() -> Vec<String> {
    vec![typing::DEFAULT_SAMPLE_TEXT.to_string()]
}

impl Default for ParlorConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            dice_sides: default_dice_sides(),
            first_weekday: default_first_weekday(),
            typing_time_limit_secs: default_typing_time_limit_secs(),
            sample_texts: default_sample_texts(),
            rng_seed: None,
        }
    }
}

impl ParlorConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            dice_sides = config.dice_sides,
            seeded = config.rng_seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path`, or defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the RNG seed.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dice_sides == 0 {
            warn!("dice_sides must be positive");
            return Err(ConfigError::new("dice_sides must be at least 1".to_string()));
        }
        if !(1..=typing::MAX_TIME_LIMIT_SECS).contains(&self.typing_time_limit_secs) {
            warn!(
                secs = self.typing_time_limit_secs,
                "typing_time_limit_secs out of range"
            );
            return Err(ConfigError::new(format!(
                "typing_time_limit_secs must be between 1 and {}",
                typing::MAX_TIME_LIMIT_SECS
            )));
        }
        if self.sample_texts.iter().all(|t| t.trim().is_empty()) {
            warn!("No usable sample texts");
            return Err(ConfigError::new(
                "sample_texts needs at least one non-empty text".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ParlorConfig::from_toml("").expect("empty is valid");
        assert_eq!(config, ParlorConfig::default());
        assert_eq!(config.log_filter(), "info");
        assert_eq!(*config.dice_sides(), 6);
        assert_eq!(*config.first_weekday(), Weekday::Sun);
        assert_eq!(*config.typing_time_limit_secs(), 60);
        assert!(config.rng_seed().is_none());
    }

    #[test]
    fn test_partial_overrides() {
        let config = ParlorConfig::from_toml(
            r#"
            dice_sides = 20
            first_weekday = "Monday"
            rng_seed = 7
            "#,
        )
        .expect("valid");
        assert_eq!(*config.dice_sides(), 20);
        assert_eq!(*config.first_weekday(), Weekday::Mon);
        assert_eq!(*config.rng_seed(), Some(7));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_zero_sides_rejected_with_location() {
        let err = ParlorConfig::from_toml("dice_sides = 0").expect_err("invalid");
        assert!(err.message.contains("dice_sides"));
        assert!(err.file.ends_with("config.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_typing_limit_bounds() {
        assert!(ParlorConfig::from_toml("typing_time_limit_secs = 0").is_err());
        let err = ParlorConfig::from_toml("typing_time_limit_secs = 86401").expect_err("too long");
        assert!(err.message.contains("typing_time_limit_secs"));
        assert!(ParlorConfig::from_toml("typing_time_limit_secs = 86400").is_ok());
    }

    #[test]
    fn test_blank_samples_rejected() {
        assert!(ParlorConfig::from_toml("sample_texts = [\"  \"]").is_err());
    }
}
