//! Runtime configuration read by every log statement.

use crate::fmt::DEFAULT_PREFIX_FORMAT;
use crate::level::{Level, PrefixLevel};

/// Everything the prefix builder and the emitter consult. One instance lives
/// inside each [`Logger`](super::Logger) behind its lock; setters on the
/// logger mutate it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Events with `level > max_level` print nothing.
    pub max_level: Level,
    pub prefix_level: PrefixLevel,
    pub colors: bool,
    /// User header takes the severity color.
    pub propagate_color_on_user_header: bool,
    /// Wipe a line left behind by `\r` before reprinting a prefix on it.
    pub clean_line_before_print: bool,
    pub user_header: String,
    /// Empty means [`DEFAULT_PREFIX_FORMAT`].
    pub prefix_format: String,
    /// Written after each prefix.
    pub indent: String,
    /// Added by every [`IndentGuard`](super::IndentGuard).
    pub indent_unit: String,
    /// chrono strftime pattern for `{TIME}`.
    pub time_format: String,
    /// Every event opens inactive while set.
    pub muted: bool,
    /// `printf` leaves the line open instead of appending `\n`.
    pub disable_printf_line_jump: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_level: Level::Trace,
            prefix_level: PrefixLevel::Minimal,
            colors: true,
            propagate_color_on_user_header: false,
            clean_line_before_print: true,
            user_header: String::new(),
            prefix_format: DEFAULT_PREFIX_FORMAT.to_string(),
            indent: String::new(),
            indent_unit: "  ".to_string(),
            time_format: "%H:%M:%S".to_string(),
            muted: false,
            disable_printf_line_jump: false,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The template actually used for rendering.
    #[must_use]
    pub fn effective_prefix_format(&self) -> &str {
        if self.prefix_format.is_empty() {
            DEFAULT_PREFIX_FORMAT
        } else {
            &self.prefix_format
        }
    }

    #[must_use]
    pub fn admits(&self, level: Level) -> bool {
        level != Level::Invalid && level <= self.max_level
    }
}
