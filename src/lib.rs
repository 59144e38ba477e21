//! # Sourced Logger
//!
//! A structured logging facade that tags every record with the file, line
//! and function it was logged from.
//!
//! ## Features
//!
//! - **Call-site attribution**: `source` and `source_func` fields on every record
//! - **Immutable field chaining**: `with`/`with_error` derive new loggers
//! - **Shared engine**: level and output are set once for every derived logger
//! - **Base logger**: package-level functions and macros for the common case
//!
//! ## Example
//!
//! ```
//! use sourced_logger::prelude::*;
//! use sourced_logger::info;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new();
//! logger.set_out(sink.clone());
//! logger.set_level(LogLevel::Info);
//!
//! info!(logger.with("worker", 1); "starting");
//! logger.debug(&["not written".into()]);
//!
//! assert_eq!(sink.lines().len(), 1);
//! ```

pub mod callsite;
pub mod core;
pub mod global;
pub mod logger;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::callsite::CallSite;
    pub use crate::core::{
        Engine, EngineBuilder, EngineConfig, ExitHandler, FieldValue, LogContext, LogLevel,
        LoggerError, LoggerMetrics, Outcome, OutputFormat, Result, TimestampFormat,
    };
    pub use crate::logger::Logger;
    pub use crate::sinks::{Console, MemorySink};
}

pub use crate::callsite::CallSite;
pub use crate::core::{
    Engine, EngineBuilder, EngineConfig, ExitHandler, FieldValue, LogContext, LogLevel,
    LoggerError, LoggerMetrics, Outcome, OutputFormat, Result, TimestampFormat,
};
pub use crate::logger::Logger;
pub use crate::sinks::{Console, MemorySink};
