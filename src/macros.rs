//! Variadic logging macros.
//!
//! Each macro takes any number of arguments convertible into
//! [`FieldValue`](crate::FieldValue) and records the full call site,
//! including the enclosing function. Put a logger and `;` first to log
//! through it, or leave it out to log through the base logger.
//!
//! # Examples
//!
//! ```
//! use sourced_logger::prelude::*;
//! use sourced_logger::{info, infoln};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new();
//! logger.set_out(sink.clone());
//!
//! info!(logger; "starting", "worker", 1);
//! infoln!(logger.with("port", 8080); "listening on", 8080);
//!
//! let lines = sink.lines();
//! assert!(lines[0].contains("startingworker1"));
//! assert!(lines[1].contains("listening on 8080"));
//! assert!(lines[1].contains("source_func="));
//! assert!(lines[1].contains("::main"));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __sourced_log {
    ($method:ident, $level:ident, $logger:expr, $($arg:expr),*) => {
        $logger.$method(
            $crate::callsite!(),
            $crate::LogLevel::$level,
            &[$($crate::FieldValue::from($arg)),*],
        )
    };
}

/// Log at `Debug`, joining arguments with the default convention.
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Debug, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Debug, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Debug`, separating arguments with spaces.
#[macro_export]
macro_rules! debugln {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Debug, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Debug, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Info`, joining arguments with the default convention.
#[macro_export]
macro_rules! info {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Info, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Info, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Info`, separating arguments with spaces.
#[macro_export]
macro_rules! infoln {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Info, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Info, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Warn`, joining arguments with the default convention.
#[macro_export]
macro_rules! warn {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Warn, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Warn, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Warn`, separating arguments with spaces.
#[macro_export]
macro_rules! warnln {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Warn, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Warn, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Error`, joining arguments with the default convention.
#[macro_export]
macro_rules! error {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Error, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Error, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Error`, separating arguments with spaces.
#[macro_export]
macro_rules! errorln {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Error, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Error, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Fatal`, then run the engine's exit handler.
///
/// With the default handler this terminates the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Fatal, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(log_at, Fatal, $crate::global::base(), $($arg),*)
    };
}

/// Log at `Fatal` with spaced arguments, then run the engine's exit handler.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr; $($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Fatal, $logger, $($arg),*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__sourced_log!(logln_at, Fatal, $crate::global::base(), $($arg),*)
    };
}
