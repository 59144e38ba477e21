//! Ready-made sinks
//!
//! An engine writes to exactly one sink. Anything implementing
//! `std::io::Write + Send` works; these cover the common cases.

pub mod console;
pub mod file;
pub mod memory;

pub use console::Console;
pub use file::open_append;
pub use memory::MemorySink;
