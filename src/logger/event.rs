//! One log statement.

use super::Inner;
use super::emitter::Site;
use crate::error::Error;
use crate::fmt::{AnsiColor, Arg, RESET, sprintf};
use crate::level::Level;
use std::fmt;
use std::sync::MutexGuard;

/// An open log statement. Holds its logger's lock from creation until drop,
/// so everything written through one event lands contiguously in the output.
///
/// Opening a second event on the same logger while this one is alive on the
/// same thread deadlocks. Finish the statement first:
///
/// ```
/// # let logger = linelog::Logger::builder().sink(linelog::MemorySink::new()).build();
/// logger.info().write("loaded ").write(3).write(" files").endl();
/// logger.debug().write("next statement").endl();
/// ```
pub struct LogEvent<'a> {
    inner: MutexGuard<'a, Inner>,
    site: Site,
    /// False when filtered by threshold, mute, guard, or once-only.
    active: bool,
    colored: bool,
}

#[allow(clippy::return_self_not_must_use)]
impl<'a> LogEvent<'a> {
    /// A severity change starts a fresh line. Filtered events leave the line
    /// state untouched.
    pub(crate) fn open(mut inner: MutexGuard<'a, Inner>, site: Site, active: bool) -> Self {
        if active {
            if inner.state.current_level != site.level {
                inner.state.fresh_line = true;
            }
            inner.state.current_level = site.level;
        }
        Self {
            inner,
            site,
            active,
            colored: false,
        }
    }

    /// Severity the event was opened with.
    pub const fn level(&self) -> Level {
        self.site.level
    }

    /// Whether anything written to this event reaches the sink.
    pub const fn is_enabled(&self) -> bool {
        self.active
    }

    /// Source file of the call that opened the event.
    pub const fn file(&self) -> &'static str {
        self.site.file
    }

    /// Source line of the call that opened the event.
    pub const fn line(&self) -> u32 {
        self.site.line
    }

    /// Appends the `Display` rendering of `value`.
    pub fn write(mut self, value: impl fmt::Display) -> Self {
        if self.active {
            let text = value.to_string();
            self.inner.emit(&self.site, &text);
        }
        self
    }

    /// Ends the line and flushes.
    pub fn endl(mut self) -> Self {
        if self.active {
            self.inner.write_raw(b"\n");
            self.inner.state.fresh_line = true;
            self.inner.flush();
        }
        self
    }

    /// C-style formatting. Without arguments the template is printed as is,
    /// `%` signs included. A newline is appended unless the text already
    /// ends with one or the logger has printf line jumps disabled.
    ///
    /// # Errors
    /// [`Error::Format`] when the template and arguments do not match.
    pub fn printf(mut self, template: &str, args: &[Arg]) -> Result<(), Error> {
        if !self.active {
            return Ok(());
        }
        let text = if args.is_empty() {
            template.to_string()
        } else {
            sprintf(template, args)?
        };
        self.inner.emit(&self.site, &text);
        if !self.inner.settings.disable_printf_line_jump && !text.ends_with('\n') {
            self.inner.write_raw(b"\n");
            self.inner.state.fresh_line = true;
        }
        Ok(())
    }

    /// Colors the body of this statement, including continuation lines. The
    /// color is reset when the event drops. [`AnsiColor::Reset`] cancels it.
    pub fn color(mut self, color: AnsiColor) -> Self {
        if !self.active {
            return self;
        }
        let colors = self.inner.settings.colors;
        if color == AnsiColor::Reset {
            let was_set = self.inner.state.color_override.take().is_some();
            if colors && was_set && !self.inner.state.fresh_line {
                self.inner.write_raw(RESET.as_bytes());
            }
            self.colored = false;
            return self;
        }
        self.inner.state.color_override = Some(color);
        self.colored = true;
        if colors && !self.inner.state.fresh_line {
            self.inner.write_raw(color.code().as_bytes());
        }
        self
    }

    /// Makes this event's severity the logger's threshold.
    pub fn apply_as_threshold(mut self) {
        self.inner.settings.max_level = self.site.level;
    }
}

impl fmt::Write for LogEvent<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.active {
            self.inner.emit(&self.site, s);
        }
        Ok(())
    }
}

impl Drop for LogEvent<'_> {
    fn drop(&mut self) {
        if self.colored
            && self.inner.state.color_override.take().is_some()
            && self.inner.settings.colors
        {
            self.inner.write_raw(RESET.as_bytes());
        }
        if self.active {
            self.inner.flush();
        }
    }
}
