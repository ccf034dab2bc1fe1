//! In-memory capture.

use super::{FileMirror, Sink};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Collects every byte in a shared buffer. Clones share the buffer, so a test
/// can hand one clone to a [`Logger`](crate::Logger) and read through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
    width: usize,
    mirror: Option<Arc<Mutex<FileMirror>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretends to be a terminal of `width` columns so line clearing runs.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Captured output, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer().clone()
    }

    /// Empties the buffer. `last_byte` goes back to `None`.
    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buffer().extend_from_slice(bytes);
        if let Some(mirror) = &self.mirror {
            mirror
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write(bytes)?;
        }
        Ok(())
    }

    fn last_byte(&self) -> Option<u8> {
        self.buffer().last().copied()
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(mirror) = &self.mirror {
            mirror.lock().unwrap_or_else(PoisonError::into_inner).flush()?;
        }
        Ok(())
    }

    fn terminal_width(&self) -> usize {
        self.width
    }

    fn attach_mirror(&mut self, mirror: FileMirror) -> bool {
        if self.mirror.is_none() {
            self.mirror = Some(Arc::new(Mutex::new(mirror)));
        }
        true
    }

    fn has_mirror(&self) -> bool {
        self.mirror.is_some()
    }
}
