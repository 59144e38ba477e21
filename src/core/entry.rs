//! Engine-bound field sets

use super::{
    engine::{Engine, Outcome},
    log_context::{FieldValue, LogContext},
    log_level::LogLevel,
};
use std::fmt::Write as _;
use std::sync::Arc;

/// Field name used by [`Entry::with_error`]
pub const ERROR_KEY: &str = "error";

/// A handle on an engine plus an accumulated set of fields
///
/// Deriving an entry copies the field set; the parent is never changed and
/// keeps no reference to its children. Level and sink live on the shared
/// engine.
#[derive(Debug, Clone)]
pub struct Entry {
    engine: Arc<Engine>,
    context: LogContext,
}

impl Entry {
    /// Entry with no fields
    pub fn new(engine: Arc<Engine>) -> Self {
        Self {
            engine,
            context: LogContext::new(),
        }
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Entry {
            engine: Arc::clone(&self.engine),
            context: self.context.clone().with_field(key, value),
        }
    }

    /// Attach `err`'s message under [`ERROR_KEY`]
    #[must_use]
    pub fn with_error<E>(&self, err: &E) -> Entry
    where
        E: std::error::Error + ?Sized,
    {
        self.with_field(ERROR_KEY, err.to_string())
    }

    /// Write one record, joining `args` with [`join_default`]
    pub fn log(&self, level: LogLevel, args: &[FieldValue]) -> Outcome {
        self.engine.emit(level, || join_default(args), &self.context)
    }

    /// Write one record, joining `args` with [`join_spaced`]
    pub fn logln(&self, level: LogLevel, args: &[FieldValue]) -> Outcome {
        self.engine.emit(level, || join_spaced(args), &self.context)
    }
}

/// Concatenate operands, adding a space only between two adjacent operands
/// that are both non-strings
///
/// ```
/// use sourced_logger::core::{join_default, FieldValue};
///
/// let args: [FieldValue; 3] = ["starting".into(), "worker".into(), 1.into()];
/// assert_eq!(join_default(&args), "startingworker1");
///
/// let args: [FieldValue; 3] = [1.into(), 2.into(), "x".into()];
/// assert_eq!(join_default(&args), "1 2x");
/// ```
pub fn join_default(args: &[FieldValue]) -> String {
    let mut message = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 && !arg.is_string() && !args[i - 1].is_string() {
            message.push(' ');
        }
        let _ = write!(message, "{}", arg);
    }
    message
}

/// Separate every operand with one space
///
/// This is the "print line" convention minus its trailing newline, which the
/// record terminator already supplies.
pub fn join_spaced(args: &[FieldValue]) -> String {
    let mut message = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        let _ = write!(message, "{}", arg);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    fn entry_with_sink() -> (Entry, MemorySink) {
        let sink = MemorySink::new();
        let engine = Engine::builder().output(sink.clone()).build();
        (Entry::new(Arc::new(engine)), sink)
    }

    #[test]
    fn test_join_default() {
        let args: Vec<FieldValue> = vec!["a".into(), "b".into()];
        assert_eq!(join_default(&args), "ab");

        let args: Vec<FieldValue> = vec![1.into(), true.into(), 2.5.into()];
        assert_eq!(join_default(&args), "1 true 2.5");

        let args: Vec<FieldValue> = vec!["count:".into(), 3.into(), 4.into()];
        assert_eq!(join_default(&args), "count:3 4");

        assert_eq!(join_default(&[]), "");
    }

    #[test]
    fn test_join_spaced() {
        let args: Vec<FieldValue> = vec!["starting".into(), "worker".into(), 1.into()];
        assert_eq!(join_spaced(&args), "starting worker 1");
        assert_eq!(join_spaced(&[]), "");
    }

    #[test]
    fn test_with_field_does_not_touch_parent() {
        let (parent, _sink) = entry_with_sink();
        let parent = parent.with_field("service", "api");
        let child = parent.with_field("request_id", "r-1");

        assert_eq!(parent.context().len(), 1);
        assert_eq!(child.context().len(), 2);
        assert!(Arc::ptr_eq(parent.engine(), child.engine()));
    }

    #[test]
    fn test_with_error() {
        let (entry, _sink) = entry_with_sink();
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
        let entry = entry.with_field("stage", "boot").with_error(&err);

        assert_eq!(
            entry.context().get(ERROR_KEY),
            Some(&FieldValue::String("config.toml missing".into()))
        );
        assert_eq!(
            entry.context().get("stage"),
            Some(&FieldValue::String("boot".into()))
        );
    }

    #[test]
    fn test_log_writes_fields() {
        let (entry, sink) = entry_with_sink();
        let entry = entry.with_field("worker", 3);

        let outcome = entry.logln(LogLevel::Info, &["job".into(), "done".into()]);

        assert_eq!(outcome, Outcome::Emitted);
        let contents = sink.contents();
        assert!(contents.contains("[INFO ] job done worker=3"));
        assert!(contents.ends_with('\n'));
    }
}
