//! Basic SGR color codes. Console logs go to arbitrary terminals, so only the
//! 16-color palette is used, never 24-bit escapes.

use crate::level::Level;
use std::fmt;

/// Terminates any active SGR styling.
pub const RESET: &str = "\x1b[0m";

/// Named SGR foreground/background codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
    LightGrey,
    RedBg,
    GreenBg,
    YellowBg,
    BlueBg,
    MagentaBg,
    CyanBg,
    GreyBg,
}

impl AnsiColor {
    /// The raw escape sequence.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Reset => RESET,
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::LightRed => "\x1b[91m",
            Self::LightGreen => "\x1b[92m",
            Self::LightYellow => "\x1b[93m",
            Self::LightBlue => "\x1b[94m",
            Self::LightMagenta => "\x1b[95m",
            Self::LightCyan => "\x1b[96m",
            Self::LightWhite => "\x1b[97m",
            Self::LightGrey => "\x1b[90m",
            Self::RedBg => "\x1b[41m",
            Self::GreenBg => "\x1b[42m",
            Self::YellowBg => "\x1b[43m",
            Self::BlueBg => "\x1b[44m",
            Self::MagentaBg => "\x1b[45m",
            Self::CyanBg => "\x1b[46m",
            Self::GreyBg => "\x1b[47m",
        }
    }

    /// Color used for a severity's tag (and for the FATAL body).
    #[must_use]
    pub const fn for_level(level: Level) -> Option<Self> {
        match level {
            Level::Fatal => Some(Self::RedBg),
            Level::Error => Some(Self::Red),
            Level::Alert => Some(Self::Magenta),
            Level::Warning => Some(Self::Yellow),
            Level::Info => Some(Self::Green),
            Level::Debug => Some(Self::LightBlue),
            Level::Trace => Some(Self::Cyan),
            Level::Invalid => None,
        }
    }

    /// File:line and thread fields are printed dimmed.
    pub const DIM: Self = Self::LightGrey;
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wraps `text` in `color` and a trailing reset.
#[must_use]
pub fn colorize(text: &str, color: AnsiColor) -> String {
    let code = color.code();
    format!("{code}{text}{RESET}")
}

/// Like [`colorize`] but leaves the text untouched when colors are off.
#[must_use]
pub fn paint(text: &str, color: Option<AnsiColor>, enabled: bool) -> String {
    match color {
        Some(color) if enabled => colorize(text, color),
        _ => text.to_string(),
    }
}
