//! Logging engine: level threshold, output sink and record formatting
//!
//! The engine owns everything that is shared between loggers: the minimum
//! level, the sink, the output format and the exit handler used by fatal
//! records. Field sets live on [`Entry`](super::Entry) values, so any number
//! of entries can share one engine.

use super::{
    log_context::LogContext, log_level::LogLevel, log_record::LogRecord,
    metrics::LoggerMetrics, output_format::OutputFormat, timestamp::TimestampFormat,
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Destination of rendered records
pub type Sink = Box<dyn Write + Send>;

/// Called with the exit code after a fatal record is written
///
/// The default handler calls [`std::process::exit`]. Tests install one that
/// records the code instead, in which case the fatal call returns
/// [`Outcome::Terminated`].
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Exit code passed to the exit handler by fatal records
pub const FATAL_EXIT_CODE: i32 = 1;

/// What happened to one leveled call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Below the threshold; nothing was written
    Suppressed,
    /// Handed to the sink. Sink failures are reported on stderr, not here
    Emitted,
    /// Fatal call; the exit handler ran and returned
    Terminated,
}

pub struct Engine {
    min_level: RwLock<LogLevel>,
    out: Mutex<Sink>,
    format: OutputFormat,
    timestamp_format: TimestampFormat,
    colors: bool,
    exit_handler: RwLock<ExitHandler>,
    metrics: LoggerMetrics,
}

fn default_exit_handler() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

impl Engine {
    /// Engine writing text records at `Info` and above to stderr
    #[must_use]
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Replace the sink. The previous sink is flushed and dropped.
    pub fn set_out<W: Write + Send + 'static>(&self, out: W) {
        let previous = std::mem::replace(&mut *self.out.lock(), Box::new(out));
        Self::retire(previous);
    }

    pub fn set_exit_handler(&self, handler: ExitHandler) {
        *self.exit_handler.write() = handler;
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_at(self.level())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> io::Result<()> {
        self.out.lock().flush()
    }

    /// Run one leveled write
    ///
    /// `message` is only evaluated when the record is written or when the
    /// level carries a side effect: fatal records run the exit handler and
    /// panic records panic, even when the threshold filters them out.
    pub(crate) fn emit<F>(&self, level: LogLevel, message: F, context: &LogContext) -> Outcome
    where
        F: FnOnce() -> String,
    {
        let enabled = self.is_enabled(level);
        if !enabled {
            self.metrics.record_suppressed();
            if level > LogLevel::Fatal {
                return Outcome::Suppressed;
            }
        }

        let message = message();
        if enabled {
            self.write_record(&LogRecord::new(level, &message, context.clone()));
        }

        match level {
            LogLevel::Panic => panic!("{}", message),
            LogLevel::Fatal => {
                self.exit(FATAL_EXIT_CODE);
                Outcome::Terminated
            }
            _ => Outcome::Emitted,
        }
    }

    fn write_record(&self, record: &LogRecord) {
        let mut line = self.format.render(record, &self.timestamp_format, self.colors);
        line.push('\n');

        let mut out = self.out.lock();
        match out.write_all(line.as_bytes()).and_then(|()| out.flush()) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_failed_write();
                eprintln!("[LOGGER ERROR] Failed to write log record: {}", e);
            }
        }
    }

    fn exit(&self, code: i32) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        // Clone out of the lock so a handler may replace itself
        let handler = Arc::clone(&*self.exit_handler.read());
        handler(code);
    }

    fn retire(mut sink: Sink) {
        if let Err(e) = sink.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush replaced sink: {}", e);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("min_level", &self.level())
            .field("format", &self.format)
            .field("timestamp_format", &self.timestamp_format)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Err(e) = self.out.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing an [`Engine`] with a fluent API
///
/// # Example
/// ```
/// use sourced_logger::prelude::*;
///
/// let engine = Engine::builder()
///     .level(LogLevel::Debug)
///     .format(OutputFormat::Json)
///     .output(std::io::sink())
///     .build();
/// assert_eq!(engine.level(), LogLevel::Debug);
/// ```
pub struct EngineBuilder {
    level: LogLevel,
    out: Option<Sink>,
    format: OutputFormat,
    timestamp_format: TimestampFormat,
    colors: bool,
    exit_handler: Option<ExitHandler>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            out: None,
            format: OutputFormat::Text,
            timestamp_format: TimestampFormat::default(),
            colors: false,
            exit_handler: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the sink. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, out: W) -> Self {
        self.out = Some(Box::new(out));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Colour the level of text records
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn exit_handler(mut self, handler: ExitHandler) -> Self {
        self.exit_handler = Some(handler);
        self
    }

    /// Build the engine
    ///
    /// A custom timestamp pattern is checked here, once; an invalid one is
    /// reported on stderr and replaced with ISO 8601.
    pub fn build(self) -> Engine {
        let timestamp_format = match self.timestamp_format.validate() {
            Ok(()) => self.timestamp_format,
            Err(e) => {
                eprintln!("[LOGGER ERROR] {}; using ISO 8601 timestamps", e);
                TimestampFormat::Iso8601
            }
        };

        Engine {
            min_level: RwLock::new(self.level),
            out: Mutex::new(self.out.unwrap_or_else(|| Box::new(io::stderr()))),
            format: self.format,
            timestamp_format,
            colors: self.colors,
            exit_handler: RwLock::new(self.exit_handler.unwrap_or_else(default_exit_handler)),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
