//! Standard stream sink

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Standard output or standard error
///
/// Each write locks the stream once, so a record is never interleaved with
/// other output from the same process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Console {
    Stdout,
    #[default]
    Stderr,
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Console::Stdout => io::stdout().lock().write(buf),
            Console::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Console::Stdout => io::stdout().lock().write_all(buf),
            Console::Stderr => io::stderr().lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Console::Stdout => io::stdout().flush(),
            Console::Stderr => io::stderr().flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_write() {
        let mut out = Console::Stdout;
        out.write_all(b"").unwrap();
        out.flush().unwrap();
        assert_eq!(Console::default(), Console::Stderr);
    }

    #[test]
    fn test_console_serde() {
        let target: Console = serde_json::from_str("\"stdout\"").unwrap();
        assert_eq!(target, Console::Stdout);
    }
}
