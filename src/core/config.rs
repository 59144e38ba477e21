//! Engine configuration that hosts can embed in their own config files

use super::{
    engine::{Engine, EngineBuilder},
    error::Result,
    log_level::LogLevel,
    output_format::OutputFormat,
    timestamp::TimestampFormat,
};
use crate::sinks::Console;
use serde::{Deserialize, Serialize};

/// Serializable engine settings
///
/// Every key is optional. For example, in TOML:
///
/// ```toml
/// [logging]
/// level = "debug"
/// format = "json"
/// timestamp = "unix_millis"
/// target = "stdout"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub level: LogLevel,
    pub format: OutputFormat,
    pub timestamp: TimestampFormat,
    pub target: Console,
    pub colors: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: OutputFormat::Text,
            timestamp: TimestampFormat::Iso8601,
            target: Console::Stderr,
            colors: false,
        }
    }
}

impl EngineConfig {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.timestamp.validate()
    }

    /// Builder preloaded with these settings, for further customisation
    pub fn builder(&self) -> Result<EngineBuilder> {
        self.validate()?;
        Ok(Engine::builder()
            .level(self.level)
            .format(self.format)
            .timestamp_format(self.timestamp.clone())
            .colors(self.colors)
            .output(self.target))
    }
}

impl Engine {
    /// Build an engine from validated settings
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(config.builder()?.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"level":"debug"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.target, Console::Stderr);
    }

    #[test]
    fn test_full_config() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"level":"warning","format":"json","timestamp":"rfc3339","target":"stdout","colors":true}"#,
        )
        .unwrap();

        let engine = Engine::from_config(&config).unwrap();
        assert_eq!(engine.level(), LogLevel::Warn);
        assert_eq!(engine.format(), OutputFormat::Json);
        assert_eq!(engine.timestamp_format(), &TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let config = EngineConfig {
            timestamp: TimestampFormat::Custom("%Q".to_string()),
            ..EngineConfig::default()
        };

        let err = Engine::from_config(&config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let err = EngineConfig::from_json(r#"{"level":"verbose"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_from_json_validates() {
        let err = EngineConfig::from_json(r#"{"timestamp":{"custom":"%Q"}}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
