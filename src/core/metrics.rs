//! Engine metrics for observability
//!
//! Counters for written, suppressed and failed records. Write failures are
//! never returned to callers, so these counters are the only place they show
//! up apart from stderr.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for engine observability
///
/// # Example
///
/// ```
/// use sourced_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_failed_write();
///
/// assert_eq!(metrics.total_logged(), 2);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records handed to the sink, whether or not the write succeeded
    total_logged: AtomicU64,

    /// Records filtered out by the level threshold
    suppressed_count: AtomicU64,

    /// Records the sink failed to accept
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            suppressed_count: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Record a successfully written record; returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write; it still counts towards `total_logged`
    #[inline]
    pub fn record_failed_write(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed);
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
