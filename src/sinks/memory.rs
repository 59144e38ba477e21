//! Shared in-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A clonable in-memory buffer
///
/// All clones share one buffer: hand one clone to the engine and keep
/// another to read back what was written.
///
/// ```
/// use sourced_logger::{Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new();
/// logger.set_out(sink.clone());
/// logger.info(&["ready".into()]);
/// assert_eq!(sink.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_all(b"first\nsecond\n").unwrap();

        assert_eq!(sink.len(), 13);
        assert_eq!(sink.lines(), vec!["first", "second"]);

        sink.clear();
        assert!(writer.is_empty());
    }
}
