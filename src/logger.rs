//! The logging facade
//!
//! [`Logger`] is an immutable handle: an engine plus a set of fields.
//! [`Logger::with`] and [`Logger::with_error`] return new handles and never
//! change the one they are called on. Level and output live on the engine,
//! so [`Logger::set_level`] and [`Logger::set_out`] affect every logger
//! derived from the same engine.
//!
//! Each leveled call captures its call site afresh and adds `source` and
//! `source_func` before handing the record to the engine. See
//! [`crate::callsite`] for what each capture path can resolve.
//!
//! # Concurrency
//!
//! Loggers are `Send + Sync` and hold no locks of their own. Concurrent
//! calls are as safe as the engine makes them: the engine serialises sink
//! writes, so each call produces one whole record.
//!
//! # Fatal calls
//!
//! `fatal` and `fatalln` write the record and then run the engine's exit
//! handler, which by default terminates the process with status 1. There is
//! no way to recover from that. Only use them where ending the process is
//! the intended result.

use crate::callsite::CallSite;
use crate::core::{
    Engine, EngineConfig, Entry, FieldValue, LogContext, LogLevel, Outcome, Result,
};
use std::io::Write;
use std::sync::Arc;

/// Structured logger that tags every record with its call site
///
/// # Example
///
/// ```
/// use sourced_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::new();
/// logger.set_out(sink.clone());
///
/// let request = logger.with("request_id", "abc-123");
/// request.info(&["accepted".into()]);
///
/// assert!(sink.contents().contains("request_id=abc-123"));
/// assert!(sink.contents().contains("source="));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    entry: Entry,
}

impl Logger {
    /// Logger on a fresh engine (text, `Info`, stderr) with no fields
    #[must_use]
    pub fn new() -> Self {
        Self::from_engine(Arc::new(Engine::new()))
    }

    /// Logger with no fields on an existing, possibly shared, engine
    #[must_use]
    pub fn from_engine(engine: Arc<Engine>) -> Self {
        Self {
            entry: Entry::new(engine),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(Self::from_engine(Arc::new(Engine::from_config(config)?)))
    }

    pub fn engine(&self) -> &Arc<Engine> {
        self.entry.engine()
    }

    /// Fields attached by `with`/`with_error` so far
    pub fn fields(&self) -> &LogContext {
        self.entry.context()
    }

    pub fn level(&self) -> LogLevel {
        self.engine().level()
    }

    /// Set the minimum level on the shared engine
    pub fn set_level(&self, level: LogLevel) {
        self.engine().set_level(level);
    }

    /// Redirect the shared engine's output
    pub fn set_out<W: Write + Send + 'static>(&self, out: W) {
        self.engine().set_out(out);
    }

    /// Flush the shared engine's sink
    pub fn flush(&self) -> Result<()> {
        self.engine().flush()?;
        Ok(())
    }

    /// New logger with `key` set to `value`, replacing any previous value
    #[must_use]
    pub fn with<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Logger {
            entry: self.entry.with_field(key, value),
        }
    }

    /// New logger carrying `err`'s message in the `error` field
    #[must_use]
    pub fn with_error<E>(&self, err: &E) -> Logger
    where
        E: std::error::Error + ?Sized,
    {
        Logger {
            entry: self.entry.with_error(err),
        }
    }

    #[track_caller]
    pub fn debug(&self, args: &[FieldValue]) -> Outcome {
        self.log_at(CallSite::caller(), LogLevel::Debug, args)
    }

    #[track_caller]
    pub fn debugln(&self, args: &[FieldValue]) -> Outcome {
        self.logln_at(CallSite::caller(), LogLevel::Debug, args)
    }

    #[track_caller]
    pub fn info(&self, args: &[FieldValue]) -> Outcome {
        self.log_at(CallSite::caller(), LogLevel::Info, args)
    }

    #[track_caller]
    pub fn infoln(&self, args: &[FieldValue]) -> Outcome {
        self.logln_at(CallSite::caller(), LogLevel::Info, args)
    }

    #[track_caller]
    pub fn warn(&self, args: &[FieldValue]) -> Outcome {
        self.log_at(CallSite::caller(), LogLevel::Warn, args)
    }

    #[track_caller]
    pub fn warnln(&self, args: &[FieldValue]) -> Outcome {
        self.logln_at(CallSite::caller(), LogLevel::Warn, args)
    }

    #[track_caller]
    pub fn error(&self, args: &[FieldValue]) -> Outcome {
        self.log_at(CallSite::caller(), LogLevel::Error, args)
    }

    #[track_caller]
    pub fn errorln(&self, args: &[FieldValue]) -> Outcome {
        self.logln_at(CallSite::caller(), LogLevel::Error, args)
    }

    /// Log at `Fatal`, then run the exit handler (process exit by default)
    #[track_caller]
    pub fn fatal(&self, args: &[FieldValue]) -> Outcome {
        self.log_at(CallSite::caller(), LogLevel::Fatal, args)
    }

    /// Log at `Fatal` with spaced arguments, then run the exit handler
    #[track_caller]
    pub fn fatalln(&self, args: &[FieldValue]) -> Outcome {
        self.logln_at(CallSite::caller(), LogLevel::Fatal, args)
    }

    /// Leveled write with an explicit call site; used by the logging macros
    #[doc(hidden)]
    pub fn log_at(&self, site: CallSite, level: LogLevel, args: &[FieldValue]) -> Outcome {
        self.sourced(site).log(level, args)
    }

    #[doc(hidden)]
    pub fn logln_at(&self, site: CallSite, level: LogLevel, args: &[FieldValue]) -> Outcome {
        self.sourced(site).logln(level, args)
    }

    fn sourced(&self, site: CallSite) -> Entry {
        site.attach(&self.entry)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
