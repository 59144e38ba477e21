//! Timestamp formatting utilities
//!
//! Supports ISO 8601, RFC 3339, Unix timestamps, and custom strftime formats.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Timestamp format used when rendering a record
///
/// # Examples
///
/// ```
/// use sourced_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let timestamp = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format, e.g. `%d/%b/%Y:%H:%M:%S %z`
    ///
    /// [`EngineBuilder::build`](crate::core::EngineBuilder::build) replaces an
    /// invalid pattern with ISO 8601; formatting one directly also falls back
    /// to ISO 8601.
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        if let Some(number) = self.as_number(datetime) {
            return number.to_string();
        }
        match self {
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(pattern) if !pattern.is_empty() => {
                // Rendering reports a bad specifier as a formatting error
                let mut out = String::new();
                match write!(out, "{}", datetime.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => TimestampFormat::Iso8601.format(datetime),
                }
            }
            _ => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        }
    }

    /// The timestamp as a number for the Unix formats, `None` otherwise
    #[must_use]
    pub fn as_number(&self, datetime: &DateTime<Utc>) -> Option<i64> {
        match self {
            TimestampFormat::Unix => Some(datetime.timestamp()),
            TimestampFormat::UnixMillis => Some(datetime.timestamp_millis()),
            TimestampFormat::UnixMicros => Some(datetime.timestamp_micros()),
            _ => None,
        }
    }

    /// Reject custom patterns chrono cannot render
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(pattern) if !Self::is_valid_pattern(pattern) => Err(
                LoggerError::config("TimestampFormat", format!("invalid strftime pattern '{}'", pattern)),
            ),
            _ => Ok(()),
        }
    }

    fn is_valid_pattern(pattern: &str) -> bool {
        !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
    }
}
