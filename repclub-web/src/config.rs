//! Build-time configuration
//!
//! The web bundle has no process environment at runtime, so settings are
//! read from the environment of the build via `option_env!`.

use thiserror::Error;
use tracing::Level;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid REPCLUB_LOG_LEVEL '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub log_level: Level,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl WebConfig {
    /// Load from the build environment. Returns the config together with the
    /// error for any setting that was present but invalid and fell back to
    /// its default; logging is not up yet, so the caller reports it.
    pub fn load() -> (Self, Option<ConfigError>) {
        Self::from_log_level(option_env!("REPCLUB_LOG_LEVEL"))
    }

    fn from_log_level(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        match raw.map(parse_log_level) {
            None => (Self::default(), None),
            Some(Ok(log_level)) => (Self { log_level }, None),
            Some(Err(e)) => (Self::default(), Some(e)),
        }
    }
}

pub fn parse_log_level(raw: &str) -> Result<Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Ok(Level::DEBUG));
        assert_eq!(parse_log_level(" WARN "), Ok(Level::WARN));
        assert_eq!(
            parse_log_level("verbose"),
            Err(ConfigError::InvalidLogLevel("verbose".to_string()))
        );
    }

    #[test]
    fn test_unset_uses_default() {
        assert_eq!(WebConfig::from_log_level(None), (WebConfig::default(), None));
        assert_eq!(WebConfig::default().log_level, Level::INFO);
    }

    #[test]
    fn test_invalid_falls_back_to_default() {
        let (config, error) = WebConfig::from_log_level(Some("loud"));
        assert_eq!(config, WebConfig::default());
        assert_eq!(
            error,
            Some(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_valid_level_is_used() {
        let (config, error) = WebConfig::from_log_level(Some("trace"));
        assert_eq!(config.log_level, Level::TRACE);
        assert_eq!(error, None);
    }
}
