//! Standard stream sinks.

use super::{FileMirror, Sink};
use crate::platform;
use std::io::{self, Write};

/// stdout, optionally mirrored to a file. This is what [`global`](crate::global) logs to.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    last: Option<u8>,
    mirror: Option<FileMirror>,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            mirror: None,
        }
    }

    /// Path of the open mirror, if any.
    #[must_use]
    pub fn mirror_path(&self) -> Option<&std::path::Path> {
        self.mirror.as_ref().map(FileMirror::path)
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        let Some(&last) = bytes.last() else {
            return Ok(());
        };
        self.last = Some(last);
        if let Some(mirror) = self.mirror.as_mut() {
            let _ = mirror.write(bytes);
        }
        io::stdout().lock().write_all(bytes)
    }

    fn last_byte(&self) -> Option<u8> {
        self.last
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(mirror) = self.mirror.as_mut() {
            let _ = mirror.flush();
        }
        io::stdout().flush()
    }

    fn terminal_width(&self) -> usize {
        platform::terminal_width()
    }

    fn attach_mirror(&mut self, mirror: FileMirror) -> bool {
        if self.mirror.is_none() {
            self.mirror = Some(mirror);
        }
        true
    }

    fn has_mirror(&self) -> bool {
        self.mirror.is_some()
    }
}

impl Drop for ConsoleSink {
    fn drop(&mut self) {
        let _ = Sink::flush(self);
    }
}

/// stderr without mirroring. Used by the library's own diagnostics so they
/// never disturb the fresh-line tracking of stdout.
#[derive(Debug, Default)]
pub struct StderrSink {
    last: Option<u8>,
}

impl StderrSink {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }
}

impl Sink for StderrSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        if let Some(&last) = bytes.last() {
            self.last = Some(last);
        }
        io::stderr().lock().write_all(bytes)
    }

    fn last_byte(&self) -> Option<u8> {
        self.last
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
