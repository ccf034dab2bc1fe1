use super::Logger;

/// Scoped indentation. Adds one indent unit after every prefix until dropped.
///
/// Guards must be dropped in reverse order of creation, which plain scoping
/// gives for free.
#[must_use = "the indentation is removed as soon as the guard is dropped"]
pub struct IndentGuard<'a> {
    logger: &'a Logger,
    restore_len: usize,
}

impl Logger {
    /// Indents every following line by one more unit.
    pub fn indent_scope(&self) -> IndentGuard<'_> {
        let mut inner = self.lock();
        let restore_len = inner.settings.indent.len();
        let unit = inner.settings.indent_unit.clone();
        inner.settings.indent.push_str(&unit);
        IndentGuard {
            logger: self,
            restore_len,
        }
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.logger.lock();
        if inner.settings.indent.is_char_boundary(self.restore_len) {
            inner.settings.indent.truncate(self.restore_len);
        }
    }
}
