//! Log level definitions
//!
//! Levels are ordered from most to least urgent. The numeric value of each
//! variant is part of the public contract: the facade hands levels straight
//! to the engine, and hosts may persist them as integers.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    /// Logs, then panics with the message. Only reachable through the engine.
    Panic = 0,
    /// Logs, then terminates the process through the engine's exit handler.
    Fatal = 1,
    Error = 2,
    #[serde(alias = "warning")]
    Warn = 3,
    #[default]
    Info = 4,
    Debug = 5,
}

impl LogLevel {
    /// All levels, most urgent first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Panic,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Panic => "PANIC",
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Whether a record at `self` passes a `threshold`.
    #[inline]
    pub fn is_enabled_at(self, threshold: LogLevel) -> bool {
        self <= threshold
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Panic | LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PANIC" => Ok(LogLevel::Panic),
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        LogLevel::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| LoggerError::InvalidLevel(value.to_string()))
    }
}
