//! Tests for the base logger and the package-level functions
//!
//! All tests in this file share one process-wide base logger, so each one
//! takes `BASE_LOCK` and installs a fresh sink before logging.

use parking_lot::{const_mutex, Mutex, MutexGuard};
use sourced_logger::core::ExitHandler;
use sourced_logger::prelude::*;
use sourced_logger::{global, info, warnln};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static BASE_LOCK: Mutex<()> = const_mutex(());

fn fresh_base(level: LogLevel) -> (MutexGuard<'static, ()>, MemorySink) {
    let guard = BASE_LOCK.lock();
    let sink = MemorySink::new();
    global::set_out(sink.clone());
    global::set_level(level);
    (guard, sink)
}

#[test]
fn test_package_functions_attribute_caller() {
    let (_guard, sink) = fresh_base(LogLevel::Info);

    let line = line!() + 1;
    let outcome = global::info(&["ready".into()]);

    assert_eq!(outcome, Outcome::Emitted);
    let contents = sink.contents();
    assert!(contents.contains("[INFO ] ready"));
    assert!(contents.contains(&format!("source=global_tests.rs:{}", line)));
    assert!(contents.contains(
        "source_func=global_tests::test_package_functions_attribute_caller"
    ));
}

#[test]
fn test_base_macros() {
    let (_guard, sink) = fresh_base(LogLevel::Debug);

    let line = line!() + 1;
    info!("cache", "warm");
    warnln!("queue depth", 42);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("cachewarm"));
    assert!(lines[0].contains(&format!("source=global_tests.rs:{}", line)));
    assert!(lines[0].contains("source_func=global_tests::test_base_macros"));
    assert!(lines[1].contains("queue depth 42"));
}

#[test]
fn test_level_applies_to_package_functions() {
    let (_guard, sink) = fresh_base(LogLevel::Warn);

    assert_eq!(global::debug(&["hidden".into()]), Outcome::Suppressed);
    assert_eq!(global::infoln(&["hidden".into()]), Outcome::Suppressed);
    assert_eq!(global::errorln(&["shown".into()]), Outcome::Emitted);

    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn test_with_does_not_change_base() {
    let (_guard, sink) = fresh_base(LogLevel::Info);

    let job = global::with("job", "reindex");
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "index missing");
    let failed = global::with_error(&err);

    job.info(&["started".into()]);
    failed.error(&["aborted".into()]);
    global::info(&["idle".into()]);

    assert!(global::base().fields().is_empty());
    let lines = sink.lines();
    assert!(lines[0].contains("job=reindex"));
    assert!(lines[1].contains("error=\"index missing\""));
    assert!(!lines[2].contains("job="));
    assert!(!lines[2].contains("error="));
}

#[test]
fn test_new_shares_base_engine() {
    let (_guard, sink) = fresh_base(LogLevel::Info);

    let logger = global::new();
    assert!(Arc::ptr_eq(logger.engine(), global::base().engine()));
    assert!(logger.fields().is_empty());

    logger.set_level(LogLevel::Error);
    assert_eq!(global::base().level(), LogLevel::Error);
    assert_eq!(global::warn(&["hidden".into()]), Outcome::Suppressed);
    assert!(sink.is_empty());
}

#[test]
fn test_package_fatal_runs_exit_handler() {
    let (_guard, sink) = fresh_base(LogLevel::Info);
    let exits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&exits);
    let handler: ExitHandler = Arc::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    global::base().engine().set_exit_handler(handler);

    assert_eq!(global::fatal(&["disk".into(), "full".into()]), Outcome::Terminated);
    assert_eq!(global::fatalln(&["disk".into(), "full".into()]), Outcome::Terminated);

    assert_eq!(exits.load(Ordering::SeqCst), 2);
    let lines = sink.lines();
    assert!(lines[0].contains("[FATAL] diskfull"));
    assert!(lines[1].contains("[FATAL] disk full"));
}
