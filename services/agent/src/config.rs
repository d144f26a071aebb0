use tracing::Level;
use voice_interrupt_core::FillerSet;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub ignored_words: FillerSet,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let ignored_words = match std::env::var("IGNORED_WORDS") {
            Ok(raw) => parse_ignored_words("IGNORED_WORDS", &raw)?,
            Err(_) => FillerSet::default(),
        };

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            ignored_words,
            log_level,
        })
    }
}

/// Parses a comma-separated filler list, rejecting lists that name no word.
pub fn parse_ignored_words(source: &str, raw: &str) -> Result<FillerSet, ConfigError> {
    let words = FillerSet::parse_list(raw);
    if words.is_empty() {
        return Err(ConfigError::InvalidValue(
            source.to_string(),
            format!("'{}' does not name any word", raw),
        ));
    }
    Ok(words)
}
