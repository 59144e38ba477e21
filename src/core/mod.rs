//! Logging engine and the types shared with the facade

pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod metrics;
pub mod output_format;
pub mod timestamp;

pub use config::EngineConfig;
pub use engine::{Engine, EngineBuilder, ExitHandler, Outcome, Sink, FATAL_EXIT_CODE};
pub use entry::{join_default, join_spaced, Entry, ERROR_KEY};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use timestamp::TimestampFormat;
