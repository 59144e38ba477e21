//! Output format configuration for log records
//!
//! Provides different output formats for log records:
//! - Text: Human-readable format (default)
//! - Json: One JSON object per line
//! - Logfmt: Key-value format compatible with log aggregation tools

use super::log_context::FieldValue;
use super::log_record::{escape_control, LogRecord};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Keys the JSON and logfmt formats write for every record
const RESERVED_KEYS: [&str; 3] = ["timestamp", "level", "message"];

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] Request processed source=main.rs:12`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"INFO","message":"Request processed"}`
    Json,

    /// Logfmt format (key=value pairs)
    ///
    /// Example: `timestamp=2025-01-08T10:30:45.123Z level=INFO message="Request processed"`
    Logfmt,
}

impl OutputFormat {
    /// Format a record according to this output format, without a trailing newline
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        self.render(record, timestamp_format, false)
    }

    /// Like [`OutputFormat::format`], colouring the level of text output when `colors` is set
    pub fn render(&self, record: &LogRecord, timestamp_format: &TimestampFormat, colors: bool) -> String {
        match self {
            OutputFormat::Text => format_text(record, timestamp_format, colors),
            OutputFormat::Json => format_json(record, timestamp_format),
            OutputFormat::Logfmt => format_logfmt(record, timestamp_format),
        }
    }
}

/// Rename a field key that would shadow one of the fixed record keys
fn field_key(key: &str) -> String {
    if RESERVED_KEYS.contains(&key) {
        format!("fields.{}", key)
    } else {
        key.to_string()
    }
}

fn format_text(record: &LogRecord, timestamp_format: &TimestampFormat, colors: bool) -> String {
    let level = format!("{:5}", record.level.to_str());
    let level = if colors { colorize(&level, record) } else { level };

    let mut line = format!(
        "[{}] [{}] {}",
        timestamp_format.format(&record.timestamp),
        level,
        record.message
    );

    for (key, value) in record.context.fields() {
        line.push(' ');
        line.push_str(&escape_logfmt_key(key));
        line.push('=');
        line.push_str(&logfmt_value(value));
    }

    line
}

#[cfg(feature = "console")]
fn colorize(level: &str, record: &LogRecord) -> String {
    use colored::Colorize;
    level.color(record.level.color_code()).to_string()
}

#[cfg(not(feature = "console"))]
fn colorize(level: &str, _record: &LogRecord) -> String {
    level.to_string()
}

fn format_json(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut json_obj = serde_json::Map::new();

    let timestamp = match timestamp_format.as_number(&record.timestamp) {
        Some(number) => serde_json::Value::Number(number.into()),
        None => serde_json::Value::String(timestamp_format.format(&record.timestamp)),
    };
    json_obj.insert("timestamp".to_string(), timestamp);
    json_obj.insert(
        "level".to_string(),
        serde_json::Value::String(record.level.to_str().to_string()),
    );
    json_obj.insert(
        "message".to_string(),
        serde_json::Value::String(record.message.clone()),
    );

    for (key, value) in record.context.fields() {
        json_obj.insert(field_key(key), value.to_json_value());
    }

    // A map of strings and JSON values always serializes
    serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
}

fn format_logfmt(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut parts = vec![
        format!(
            "timestamp={}",
            escape_logfmt_value(&timestamp_format.format(&record.timestamp))
        ),
        format!("level={}", record.level.to_str()),
        // Message is always quoted
        format!("message={}", quote_logfmt_value(&record.message)),
    ];

    for (key, value) in record.context.fields() {
        parts.push(format!(
            "{}={}",
            escape_logfmt_key(&field_key(key)),
            logfmt_value(value)
        ));
    }

    parts.join(" ")
}

fn logfmt_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => escape_logfmt_value(s),
        FieldValue::Structured(v) => quote_logfmt_value(&v.to_string()),
        other => other.to_string(),
    }
}

fn escape_logfmt_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Quote a value only when it contains spaces, quotes, `=` or line breaks
fn escape_logfmt_value(value: &str) -> String {
    if value.is_empty() || value.contains([' ', '"', '=', '\n', '\r', '\t']) {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escape_control(&escaped))
}
