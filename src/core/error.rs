//! Error types for the logger system
//!
//! Logging calls themselves never fail; these errors come from setup paths
//! (parsing levels, building an engine from configuration, opening sinks,
//! installing the base logger).

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unknown level name or out-of-range numeric level
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// The process-wide base logger was already installed
    #[error("Base logger already initialized")]
    AlreadyInitialized,

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::InvalidLevel("7".to_string());
        assert_eq!(err.to_string(), "Invalid log level: '7'");

        let err = LoggerError::config("EngineConfig", "timestamp pattern is empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for EngineConfig: timestamp pattern is empty"
        );

        assert_eq!(
            LoggerError::AlreadyInitialized.to_string(),
            "Base logger already initialized"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open for append", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
