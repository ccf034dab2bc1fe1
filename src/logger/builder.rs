//! Stepwise construction of a [`Logger`].

use super::{Logger, Settings};
use crate::level::{Level, PrefixLevel};
use crate::output::{ConsoleSink, FileTarget, Sink};

/// Collects settings, a sink and an optional file mirror. Without an
/// explicit sink the logger writes to stdout.
#[derive(Default)]
pub struct LoggerBuilder {
    settings: Settings,
    sink: Option<Box<dyn Sink>>,
    output_file: Option<FileTarget>,
}

impl LoggerBuilder {
    /// A builder with default settings writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing settings value.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Threshold: events less urgent than `level` print nothing.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.settings.max_level = level;
        self
    }

    /// How much the line prefix shows.
    #[must_use]
    pub const fn prefix_level(mut self, level: PrefixLevel) -> Self {
        self.settings.prefix_level = level;
        self
    }

    /// ANSI colors on or off.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.settings.colors = enabled;
        self
    }

    /// Paint the user header in the severity color.
    #[must_use]
    pub const fn propagate_color_on_user_header(mut self, enabled: bool) -> Self {
        self.settings.propagate_color_on_user_header = enabled;
        self
    }

    /// Wipe a row left by `\r` before reusing it.
    #[must_use]
    pub const fn clean_line_before_print(mut self, enabled: bool) -> Self {
        self.settings.clean_line_before_print = enabled;
        self
    }

    /// Text inserted into every prefix.
    #[must_use]
    pub fn user_header(mut self, header: impl Into<String>) -> Self {
        self.settings.user_header = header.into();
        self
    }

    /// Template with `{TIME}`, `{USER_HEADER}`, `{SEVERITY}`, `{FILELINE}`,
    /// `{FILENAME}` and `{THREAD}` tokens.
    #[must_use]
    pub fn prefix_format(mut self, template: impl Into<String>) -> Self {
        self.settings.prefix_format = template.into();
        self
    }

    /// strftime pattern for `{TIME}`.
    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.settings.time_format = format.into();
        self
    }

    /// What one indent scope adds.
    #[must_use]
    pub fn indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.settings.indent_unit = unit.into();
        self
    }

    /// Start with every event silenced.
    #[must_use]
    pub const fn muted(mut self, muted: bool) -> Self {
        self.settings.muted = muted;
        self
    }

    /// Keep `printf` from appending a newline.
    #[must_use]
    pub const fn disable_printf_line_jump(mut self, disabled: bool) -> Self {
        self.settings.disable_printf_line_jump = disabled;
        self
    }

    /// Replaces the default stdout sink.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Mirrors output to a file, opened when the logger is built.
    #[must_use]
    pub fn output_file(mut self, target: FileTarget) -> Self {
        self.output_file = Some(target);
        self
    }

    /// Creates the logger and opens the file mirror, if any.
    #[must_use]
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::new()) as Box<dyn Sink>);
        let logger = Logger::from_boxed(self.settings, sink);
        if let Some(target) = self.output_file {
            logger.set_output_file(&target);
        }
        logger
    }
}
