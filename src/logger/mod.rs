//! The logger: settings, emitter state and a sink behind one lock.
//!
//! Every statement opens a [`LogEvent`] that keeps the lock until it drops,
//! which is what keeps the prefix and body of concurrent statements from
//! interleaving. [`global`] hands out the process-wide instance.

mod assert;
mod builder;
mod cursor;
mod emitter;
mod event;
mod from_config;
mod indent;
mod passthrough;
mod settings;

pub use builder::LoggerBuilder;
pub use emitter::Site;
pub use event::LogEvent;
pub use indent::IndentGuard;
pub use passthrough::Passthrough;
pub use settings::Settings;

use crate::config::Config;
use crate::fmt::{PrefixContext, render_prefix};
use crate::internal;
use crate::level::{Level, PrefixLevel};
use crate::output::{ConsoleSink, FileMirror, FileTarget, Sink};
use emitter::EmitterState;
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

pub(crate) struct Inner {
    pub(crate) settings: Settings,
    pub(crate) state: EmitterState,
    pub(crate) sink: Box<dyn Sink>,
}

/// Leveled line logger writing to one [`Sink`].
pub struct Logger {
    inner: Mutex<Inner>,
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger. Created on first use from the `LINELOG_*`
/// environment variables unless [`set_global`] installed one before.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::from_config(&Config::from_env()))
}

/// Installs `logger` as the process-wide instance.
///
/// # Errors
/// Hands the logger back when a global logger already exists.
pub fn set_global(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(ConsoleSink::new())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.lock().settings)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Default settings on the given sink.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::with_settings(Settings::default(), sink)
    }

    /// Explicit settings on the given sink.
    pub fn with_settings(settings: Settings, sink: impl Sink + 'static) -> Self {
        Self::from_boxed(settings, Box::new(sink))
    }

    pub(crate) fn from_boxed(settings: Settings, sink: Box<dyn Sink>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                settings,
                state: EmitterState::default(),
                sink,
            }),
        }
    }

    /// Starts a [`LoggerBuilder`].
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// A panic inside a statement poisons the lock; the state it left behind
    /// is still consistent enough to keep logging.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[track_caller]
    fn open(&self, level: Level, once: bool, condition: bool) -> LogEvent<'_> {
        let location = Location::caller();
        let site = Site {
            level,
            file: location.file(),
            line: location.line(),
        };
        let mut inner = self.lock();
        let mut active = condition && !inner.settings.muted && inner.settings.admits(level);
        if active && once {
            active = inner.state.fired.insert((site.file, site.line));
        }
        LogEvent::open(inner, site, active)
    }

    /// Opens an event at `level` for the calling line.
    #[track_caller]
    pub fn log(&self, level: Level) -> LogEvent<'_> {
        self.open(level, false, true)
    }

    /// Like [`log`](Self::log), printing nothing when `condition` is false.
    #[track_caller]
    pub fn log_if(&self, level: Level, condition: bool) -> LogEvent<'_> {
        self.open(level, false, condition)
    }

    /// Prints only the first time this call site is admitted.
    #[track_caller]
    pub fn log_once(&self, level: Level) -> LogEvent<'_> {
        self.open(level, true, true)
    }

    /// Opens a FATAL event.
    #[track_caller]
    pub fn fatal(&self) -> LogEvent<'_> {
        self.open(Level::Fatal, false, true)
    }

    /// Opens an ERROR event.
    #[track_caller]
    pub fn error(&self) -> LogEvent<'_> {
        self.open(Level::Error, false, true)
    }

    /// Opens an ALERT event.
    #[track_caller]
    pub fn alert(&self) -> LogEvent<'_> {
        self.open(Level::Alert, false, true)
    }

    /// Opens a WARNING event.
    #[track_caller]
    pub fn warning(&self) -> LogEvent<'_> {
        self.open(Level::Warning, false, true)
    }

    /// Opens an INFO event.
    #[track_caller]
    pub fn info(&self) -> LogEvent<'_> {
        self.open(Level::Info, false, true)
    }

    /// Opens a DEBUG event.
    #[track_caller]
    pub fn debug(&self) -> LogEvent<'_> {
        self.open(Level::Debug, false, true)
    }

    /// Opens a TRACE event.
    #[track_caller]
    pub fn trace(&self) -> LogEvent<'_> {
        self.open(Level::Trace, false, true)
    }

    /// The prefix a statement at the current severity would get on this line.
    #[track_caller]
    #[must_use]
    pub fn prefix_string(&self) -> String {
        let location = Location::caller();
        let inner = self.lock();
        let ctx = PrefixContext {
            level: inner.state.current_level,
            file: location.file(),
            line: location.line(),
            color_override: inner.state.color_override,
        };
        render_prefix(&inner.settings, &ctx)
    }

    /// Writer for code that prints to the console on its own. Bytes go
    /// through the logger's sink so line tracking stays correct.
    pub fn passthrough(&self) -> Passthrough<'_> {
        Passthrough::new(self.lock())
    }

    /// Mirrors all further output to a file. A second call while a mirror is
    /// open does nothing. Open failures are reported on the internal logger
    /// and leave logging on the console only. Returns whether a mirror is active.
    pub fn set_output_file(&self, target: &FileTarget) -> bool {
        let mut inner = self.lock();
        if inner.sink.has_mirror() {
            return true;
        }
        match FileMirror::open(target) {
            Ok(mirror) => {
                let path = mirror.path().display().to_string();
                let attached = inner.sink.attach_mirror(mirror);
                if attached {
                    internal::debug("FILE", &format!("Mirroring output to {path}"));
                } else {
                    internal::warn("FILE", "Sink does not support file mirroring");
                }
                attached
            }
            Err(e) => {
                internal::warn("FILE", &format!("Cannot open output file: {e}"));
                false
            }
        }
    }

    /// Flushes the sink and any file mirror.
    pub fn flush(&self) {
        self.lock().flush();
    }

    /// Snapshot of the current settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.lock().settings.clone()
    }

    /// Edits several settings under one lock.
    pub fn update_settings(&self, edit: impl FnOnce(&mut Settings)) {
        edit(&mut self.lock().settings);
    }

    /// Most verbose severity that still prints.
    #[must_use]
    pub fn max_level(&self) -> Level {
        self.lock().settings.max_level
    }

    /// Events above `level` print nothing from now on.
    pub fn set_max_level(&self, level: Level) {
        self.lock().settings.max_level = level;
    }

    /// Threshold by numeric index, clamped to `0..=6`.
    pub fn set_max_level_index(&self, index: u8) {
        self.set_max_level(Level::from_index(index));
    }

    /// How much the line prefix shows.
    #[must_use]
    pub fn prefix_level(&self) -> PrefixLevel {
        self.lock().settings.prefix_level
    }

    /// Changes how much the line prefix shows.
    pub fn set_prefix_level(&self, level: PrefixLevel) {
        self.lock().settings.prefix_level = level;
    }

    /// Whether ANSI colors are written.
    #[must_use]
    pub fn colors(&self) -> bool {
        self.lock().settings.colors
    }

    /// Turns ANSI colors on or off.
    pub fn set_colors(&self, enabled: bool) {
        self.lock().settings.colors = enabled;
    }

    /// Whether the user header takes the severity color.
    #[must_use]
    pub fn propagate_color_on_user_header(&self) -> bool {
        self.lock().settings.propagate_color_on_user_header
    }

    /// Paints the user header in the severity color.
    pub fn set_propagate_color_on_user_header(&self, enabled: bool) {
        self.lock().settings.propagate_color_on_user_header = enabled;
    }

    /// Whether a row left by `\r` is wiped before it is reused.
    #[must_use]
    pub fn clean_line_before_print(&self) -> bool {
        self.lock().settings.clean_line_before_print
    }

    /// Wipes a row left by `\r` before printing a new prefix on it.
    pub fn set_clean_line_before_print(&self, enabled: bool) {
        self.lock().settings.clean_line_before_print = enabled;
    }

    /// Text inserted into every prefix.
    #[must_use]
    pub fn user_header(&self) -> String {
        self.lock().settings.user_header.clone()
    }

    /// Sets the text inserted into every prefix.
    pub fn set_user_header(&self, header: impl Into<String>) {
        self.lock().settings.user_header = header.into();
    }

    /// The prefix template in use.
    #[must_use]
    pub fn prefix_format(&self) -> String {
        self.lock().settings.effective_prefix_format().to_string()
    }

    /// An empty template restores the default one.
    pub fn set_prefix_format(&self, template: impl Into<String>) {
        self.lock().settings.prefix_format = template.into();
    }

    /// strftime pattern for `{TIME}`.
    #[must_use]
    pub fn time_format(&self) -> String {
        self.lock().settings.time_format.clone()
    }

    /// Sets the strftime pattern for `{TIME}`.
    pub fn set_time_format(&self, format: impl Into<String>) {
        self.lock().settings.time_format = format.into();
    }

    /// Indentation written after each prefix.
    #[must_use]
    pub fn indent(&self) -> String {
        self.lock().settings.indent.clone()
    }

    /// Replaces the indentation written after each prefix.
    pub fn set_indent(&self, indent: impl Into<String>) {
        self.lock().settings.indent = indent.into();
    }

    /// What one indent scope adds.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        self.lock().settings.indent_unit.clone()
    }

    /// Sets what one indent scope adds.
    pub fn set_indent_unit(&self, unit: impl Into<String>) {
        self.lock().settings.indent_unit = unit.into();
    }

    /// Whether every event is silenced.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.lock().settings.muted
    }

    /// Silences every event until unmuted.
    pub fn set_muted(&self, muted: bool) {
        self.lock().settings.muted = muted;
    }

    /// Whether `printf` leaves the line open.
    #[must_use]
    pub fn printf_line_jump_disabled(&self) -> bool {
        self.lock().settings.disable_printf_line_jump
    }

    /// Stops `printf` from appending a newline.
    pub fn set_disable_printf_line_jump(&self, disabled: bool) {
        self.lock().settings.disable_printf_line_jump = disabled;
    }
}
