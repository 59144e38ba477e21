//! Process-wide base logger and package-level functions
//!
//! The base logger is assigned once. Call [`init`] during startup to install
//! a configured logger; otherwise the first use installs [`Logger::new`]'s
//! defaults. Every function here forwards to [`base`], and `with`/`with_error`
//! return detached loggers without changing the base.
//!
//! ```
//! use sourced_logger::{global, LogLevel, MemorySink};
//!
//! let sink = MemorySink::new();
//! global::set_out(sink.clone());
//! global::set_level(LogLevel::Debug);
//!
//! global::with("job", "reindex").debug(&["started".into()]);
//! assert!(sink.contents().contains("job=reindex"));
//! ```

use crate::core::{FieldValue, LogLevel, LoggerError, Outcome, Result};
use crate::logger::Logger;
use once_cell::sync::OnceCell;
use std::io::Write;
use std::sync::Arc;

static BASE: OnceCell<Logger> = OnceCell::new();

/// Install `logger` as the base logger
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a base logger was
/// already installed, explicitly or by an earlier logging call.
pub fn init(logger: Logger) -> Result<()> {
    BASE.set(logger).map_err(|_| LoggerError::AlreadyInitialized)
}

/// The base logger, installing the default one on first use
pub fn base() -> &'static Logger {
    BASE.get_or_init(Logger::new)
}

/// A logger with no fields on the base logger's engine
#[must_use]
pub fn new() -> Logger {
    Logger::from_engine(Arc::clone(base().engine()))
}

/// Set the minimum level on the base engine
pub fn set_level(level: LogLevel) {
    base().set_level(level);
}

/// Redirect the base engine's output
pub fn set_out<W: Write + Send + 'static>(out: W) {
    base().set_out(out);
}

/// Base logger plus `key` set to `value`
#[must_use]
pub fn with<K, V>(key: K, value: V) -> Logger
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    base().with(key, value)
}

/// Base logger plus `err`'s message in the `error` field
///
/// ```
/// use sourced_logger::global;
///
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// let failed = global::with_error(&err);
/// assert!(failed.fields().get("error").is_some());
/// assert!(global::base().fields().is_empty());
/// ```
#[must_use]
pub fn with_error<E>(err: &E) -> Logger
where
    E: std::error::Error + ?Sized,
{
    base().with_error(err)
}

/// Log at `Debug` on the base logger
#[track_caller]
pub fn debug(args: &[FieldValue]) -> Outcome {
    base().debug(args)
}

/// Log at `Debug` on the base logger with spaced arguments
#[track_caller]
pub fn debugln(args: &[FieldValue]) -> Outcome {
    base().debugln(args)
}

/// Log at `Info` on the base logger
#[track_caller]
pub fn info(args: &[FieldValue]) -> Outcome {
    base().info(args)
}

/// Log at `Info` on the base logger with spaced arguments
#[track_caller]
pub fn infoln(args: &[FieldValue]) -> Outcome {
    base().infoln(args)
}

/// Log at `Warn` on the base logger
#[track_caller]
pub fn warn(args: &[FieldValue]) -> Outcome {
    base().warn(args)
}

/// Log at `Warn` on the base logger with spaced arguments
#[track_caller]
pub fn warnln(args: &[FieldValue]) -> Outcome {
    base().warnln(args)
}

/// Log at `Error` on the base logger
#[track_caller]
pub fn error(args: &[FieldValue]) -> Outcome {
    base().error(args)
}

/// Log at `Error` on the base logger with spaced arguments
#[track_caller]
pub fn errorln(args: &[FieldValue]) -> Outcome {
    base().errorln(args)
}

/// Log at `Fatal` on the base logger, then run its exit handler
#[track_caller]
pub fn fatal(args: &[FieldValue]) -> Outcome {
    base().fatal(args)
}

/// Log at `Fatal` on the base logger with spaced arguments, then run its exit handler
#[track_caller]
pub fn fatalln(args: &[FieldValue]) -> Outcome {
    base().fatalln(args)
}
