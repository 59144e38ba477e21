//! Append-only file sink

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

/// Open `path` for appending, creating it if needed
///
/// The engine flushes after every record, so the buffer only batches the
/// pieces of one record.
///
/// ```no_run
/// use sourced_logger::{sinks, Logger};
///
/// let logger = Logger::new();
/// logger.set_out(sinks::open_append("/var/log/app.log")?);
/// # Ok::<(), sourced_logger::LoggerError>(())
/// ```
pub fn open_append(path: impl AsRef<Path>) -> Result<BufWriter<File>> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("cannot open '{}' for appending", path.display()),
                e,
            )
        })?;
    Ok(BufWriter::new(file))
}
