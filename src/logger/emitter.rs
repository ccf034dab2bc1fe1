//! Line-structure aware writer: decides where prefixes go.
//!
//! A payload is split on `\n` first, then on `\r`. Each resulting segment is
//! prefixed when it starts a fresh line. The separators are re-emitted between
//! segments but never after the last one, so the caller owns the terminating
//! newline. A payload ending in a separator leaves the emitter on a fresh line
//! without writing anything extra.

use super::Inner;
use crate::fmt::{AnsiColor, PrefixContext, RESET, render_prefix, text};
use crate::level::Level;
use std::collections::HashSet;

/// Where an event was opened and at which severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub level: Level,
    pub file: &'static str,
    pub line: u32,
}

/// Mutable state shared by every event of one logger.
#[derive(Debug)]
pub(crate) struct EmitterState {
    pub(crate) current_level: Level,
    /// The next non-empty segment gets a prefix.
    pub(crate) fresh_line: bool,
    pub(crate) color_override: Option<AnsiColor>,
    /// Call sites of `log_once` events that already fired.
    pub(crate) fired: HashSet<(&'static str, u32)>,
}

impl Default for EmitterState {
    fn default() -> Self {
        Self {
            current_level: Level::Invalid,
            fresh_line: true,
            color_override: None,
            fired: HashSet::new(),
        }
    }
}

impl Inner {
    pub(crate) fn emit(&mut self, site: &Site, payload: &str) {
        if payload.is_empty() {
            return;
        }
        if payload.contains('\n') {
            self.emit_split(site, payload, "\n");
        } else if payload.contains('\r') {
            self.emit_split(site, payload, "\r");
        } else {
            self.emit_segment(site, payload);
        }
    }

    fn emit_split(&mut self, site: &Site, payload: &str, delimiter: &str) {
        let segments = text::split(payload, delimiter);
        let last = segments.len().saturating_sub(1);

        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                self.state.fresh_line = true;
            }
            if i == last && segment.is_empty() {
                break;
            }
            self.emit(site, segment);
            if i < last {
                self.write_raw(delimiter.as_bytes());
            }
        }
    }

    fn emit_segment(&mut self, site: &Site, body: &str) {
        let last = self.sink.last_byte();
        if matches!(last, Some(b'\n' | b'\r')) {
            self.state.fresh_line = true;
        }

        if self.state.fresh_line {
            if self.settings.clean_line_before_print && last == Some(b'\r') {
                self.clear_terminal_line();
            }
            let ctx = PrefixContext {
                level: site.level,
                file: site.file,
                line: site.line,
                color_override: self.state.color_override,
            };
            let prefix = render_prefix(&self.settings, &ctx);
            self.write_raw(prefix.as_bytes());
            if !self.settings.indent.is_empty() {
                let _ = self.sink.write(self.settings.indent.as_bytes());
            }
            self.state.fresh_line = false;
        }

        if site.level == Level::Fatal && self.settings.colors {
            self.write_raw(AnsiColor::RedBg.code().as_bytes());
            self.write_raw(body.as_bytes());
            self.write_raw(RESET.as_bytes());
        } else {
            self.write_raw(body.as_bytes());
        }
    }

    /// Overwrites the current terminal line with blanks. Needs a known width.
    pub(crate) fn clear_terminal_line(&mut self) {
        let width = self.sink.terminal_width();
        if width == 0 {
            return;
        }
        let mut blank = String::with_capacity(width + 1);
        blank.push('\r');
        blank.push_str(&" ".repeat(width - 1));
        blank.push('\r');
        self.write_raw(blank.as_bytes());
    }

    /// Console failures never reach the call site.
    pub(crate) fn write_raw(&mut self, bytes: &[u8]) {
        if !bytes.is_empty() {
            let _ = self.sink.write(bytes);
        }
    }

    pub(crate) fn flush(&mut self) {
        let _ = self.sink.flush();
    }
}
