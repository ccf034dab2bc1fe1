use super::Inner;
use std::io;
use std::sync::MutexGuard;

/// Raw writer onto a logger's sink, for output that is not a log statement
/// (progress bars, child process output, `write!` from other libraries).
///
/// No prefix is added. The bytes still update the sink's last byte, so a
/// following statement knows whether it starts on a fresh line.
pub struct Passthrough<'a> {
    inner: MutexGuard<'a, Inner>,
}

impl<'a> Passthrough<'a> {
    pub(super) const fn new(inner: MutexGuard<'a, Inner>) -> Self {
        Self { inner }
    }
}

impl io::Write for Passthrough<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.sink.write(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.sink.flush()
    }
}
