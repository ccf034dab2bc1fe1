//! Unified error type for all linelog operations.
//!
//! Only two kinds ever reach a logging call site: printf substitution
//! failures and failed assertions. Sink problems are recovered inside the
//! logger and never show up here.

use crate::fmt::FormatError;
use crate::level::ParseLevelError;

/// Error type for linelog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while loading configuration.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Unknown level name in configuration or environment.
    InvalidLevel(String),
    /// printf-style substitution failed.
    Format(FormatError),
    /// `Logger::ensure` saw a false condition.
    Assertion {
        expression: String,
        explanation: String,
        file: &'static str,
        line: u32,
    },
    /// `Logger::fail` was asked to abort the current operation.
    Aborted(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::Format(e) => write!(f, "format error: {e}"),
            Self::Assertion {
                expression,
                explanation,
                file,
                line,
            } => {
                write!(f, "assertion failed at {file}:{line}: {expression}")?;
                if !explanation.is_empty() {
                    write!(f, " ({explanation})")?;
                }
                Ok(())
            }
            Self::Aborted(message) => write!(f, "aborted: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}
