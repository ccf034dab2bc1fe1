//! Destinations for formatted bytes. The logger never talks to stdout
//! directly; it goes through a [`Sink`] so that the last byte written is always
//! known and so tests can capture output in memory.

mod file;
mod memory;
mod terminal;

pub use file::{FILE_TIME_FORMAT, FileMirror, FileTarget};
pub use memory::MemorySink;
pub use terminal::{ConsoleSink, StderrSink};

use std::io;

/// Byte destination with a memory of the most recent byte it accepted.
///
/// `Send` is required because a sink lives inside a [`Logger`](crate::Logger)
/// shared across threads.
pub trait Sink: Send {
    /// Forwards `bytes` to the destination and records the last one.
    ///
    /// # Errors
    /// I/O errors from the underlying handle.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// `None` until something has been written.
    fn last_byte(&self) -> Option<u8>;

    /// # Errors
    /// I/O errors from the underlying handle.
    fn flush(&mut self) -> io::Result<()>;

    /// Columns of the attached terminal. 0 disables line clearing.
    fn terminal_width(&self) -> usize {
        0
    }

    /// Starts copying every byte to `mirror`. Sinks without mirror support
    /// drop it and return `false`.
    fn attach_mirror(&mut self, mirror: FileMirror) -> bool {
        drop(mirror);
        false
    }

    fn has_mirror(&self) -> bool {
        false
    }
}
