//! A single log record, as handed to the output format

use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub context: LogContext,
}

/// Escape newlines, carriage returns and tabs
///
/// Applied to messages and field values so one call always produces one
/// line and cannot forge another record.
pub(crate) fn escape_control(text: &str) -> String {
    if !text.contains(['\n', '\r', '\t']) {
        return text.to_string();
    }
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl LogRecord {
    pub fn new(level: LogLevel, message: &str, context: LogContext) -> Self {
        Self {
            level,
            message: escape_control(message),
            timestamp: Utc::now(),
            context,
        }
    }
}
