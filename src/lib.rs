#![deny(unsafe_code)]

//! `linelog` - leveled console logging that keeps track of the cursor.
//!
//! - Severity threshold (`FATAL` .. `TRACE`) and prefix verbosity levels
//! - Prefix templates: `{TIME} {USER_HEADER} {SEVERITY} {FILELINE} {THREAD}`
//! - ANSI colors, multi-line and `\r` progress output with per-line prefixes
//! - Once-only and conditional statements, cursor control, scoped indentation
//! - Optional mirroring of everything to a file
//!
//! # Example
//!
//! ```
//! use linelog::{Level, Logger, MemorySink, PrefixLevel};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .prefix_level(PrefixLevel::Minimal)
//!     .colors(false)
//!     .sink(sink.clone())
//!     .build();
//!
//! logger.info().write("Hello").endl();
//! logger.trace().write("filtered").endl();
//!
//! assert_eq!(sink.contents(), "INFO: Hello\n");
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `linelog` demo binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod platform;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{AnsiColor, Arg, FormatError};
pub use level::{Level, PrefixLevel};
pub use logger::{
    IndentGuard, LogEvent, Logger, LoggerBuilder, Passthrough, Settings, global, set_global,
};
pub use output::{ConsoleSink, FileTarget, MemorySink, Sink};

/// Checks a condition on a logger, logging the failed expression as an
/// ERROR and evaluating to `Err(Error::Assertion)`.
///
/// ```
/// # use linelog::{Logger, MemorySink, log_assert};
/// # fn run() -> Result<(), linelog::Error> {
/// let logger = Logger::builder().sink(MemorySink::new()).build();
/// let retries = 3;
/// log_assert!(logger, retries < 5)?;
/// log_assert!(logger, retries > 0, "at least one attempt")?;
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[macro_export]
macro_rules! log_assert {
    ($logger:expr, $cond:expr $(,)?) => {
        $logger.ensure($cond, stringify!($cond), "")
    };
    ($logger:expr, $cond:expr, $explanation:expr $(,)?) => {
        $logger.ensure($cond, stringify!($cond), $explanation)
    };
}
