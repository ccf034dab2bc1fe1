//! Severity levels and prefix verbosity levels.
//!
//! Both are totally ordered. For `Level` a lower value is more urgent, so the
//! threshold check is `level > max_level`. For `PrefixLevel` a higher value
//! renders more fields.

use std::fmt;
use std::str::FromStr;

/// Urgency of a log event, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// The program cannot continue. The only level whose body is colored.
    Fatal = 0,
    /// An operation failed.
    Error = 1,
    /// Something needs attention right now, short of an error.
    Alert = 2,
    /// Non-fatal anomaly.
    Warning = 3,
    /// Normal operational milestones.
    Info = 4,
    /// Diagnostics for developers.
    Debug = 5,
    /// High-volume instrumentation.
    #[default]
    Trace = 6,
    /// Suppressed event: once-only already fired, guard false, or logger muted.
    /// Sorts after every real level so no threshold ever admits it.
    Invalid = 7,
}

impl Level {
    /// Upper-case tag printed in the prefix. At most five characters.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Alert => "ALERT",
            Self::Warning => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
            Self::Invalid => "",
        }
    }

    /// Lowercase name used by config files, env vars and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Alert => "alert",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Invalid => "invalid",
        }
    }

    /// Numeric form, `0` = fatal through `6` = trace. Anything above 6
    /// saturates to `Trace`.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Fatal,
            1 => Self::Error,
            2 => Self::Alert,
            3 => Self::Warning,
            4 => Self::Info,
            5 => Self::Debug,
            _ => Self::Trace,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Real levels only, most urgent first.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Fatal,
            Self::Error,
            Self::Alert,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many structural fields the prefix carries. Each level is a superset
/// of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum PrefixLevel {
    /// Only the user header, if any.
    None = 0,
    /// Severity tag.
    #[default]
    Minimal = 1,
    /// Adds the clock.
    Production = 2,
    /// Adds file and line.
    Debug = 3,
    /// Adds the thread id.
    Full = 4,
}

impl PrefixLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minimal => "minimal",
            Self::Production => "production",
            Self::Debug => "debug",
            Self::Full => "full",
        }
    }

    /// Anything above 4 saturates to `Full`.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::None,
            1 => Self::Minimal,
            2 => Self::Production,
            3 => Self::Debug,
            _ => Self::Full,
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::None,
            Self::Minimal,
            Self::Production,
            Self::Debug,
            Self::Full,
        ]
    }
}

impl fmt::Display for PrefixLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl ParseLevelError {
    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts names, common aliases and the numeric form (`"4"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(index) = lower.parse::<u8>() {
            return Ok(Self::from_index(index));
        }
        match lower.as_str() {
            "fatal" => Ok(Self::Fatal),
            "error" | "err" => Ok(Self::Error),
            "alert" => Ok(Self::Alert),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl FromStr for PrefixLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(index) = lower.parse::<u8>() {
            return Ok(Self::from_index(index));
        }
        match lower.as_str() {
            "none" => Ok(Self::None),
            "minimal" | "min" => Ok(Self::Minimal),
            "production" | "prod" => Ok(Self::Production),
            "debug" => Ok(Self::Debug),
            "full" => Ok(Self::Full),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
