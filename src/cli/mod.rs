//! Command-line interface of the `linelog` binary, built on Clap.

pub mod demo;

use crate::config::Config;
use crate::level::{Level, PrefixLevel};
use crate::logger::{Logger, LoggerBuilder};
use crate::output::FileTarget;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Fatal,
    Error,
    Alert,
    Warning,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Fatal => Self::Fatal,
            LogLevel::Error => Self::Error,
            LogLevel::Alert => Self::Alert,
            LogLevel::Warning => Self::Warning,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Prefix verbosity for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PrefixArg {
    None,
    Minimal,
    Production,
    Debug,
    Full,
}

impl From<PrefixArg> for PrefixLevel {
    fn from(level: PrefixArg) -> Self {
        match level {
            PrefixArg::None => Self::None,
            PrefixArg::Minimal => Self::Minimal,
            PrefixArg::Production => Self::Production,
            PrefixArg::Debug => Self::Debug,
            PrefixArg::Full => Self::Full,
        }
    }
}

/// linelog - leveled console logging with line tracking.
#[derive(Parser)]
#[command(name = "linelog", version, about = "Leveled console logging with line tracking")]
pub struct Cli {
    /// Threshold; less urgent messages are dropped
    #[arg(short, long, value_enum, global = true)]
    pub level: Option<LogLevel>,
    /// Prefix verbosity
    #[arg(short, long, value_enum, global = true)]
    pub prefix: Option<PrefixArg>,
    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_colors: bool,
    /// Text shown in every prefix
    #[arg(long, global = true)]
    pub header: Option<String>,
    /// Mirror all output to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub output_file: Option<PathBuf>,
    /// Config file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Walk through every feature (default).
    Demo,
    /// Print one message.
    Log {
        /// Severity of the message
        #[arg(value_enum)]
        level: LogLevel,
        /// Message words, joined by spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Show a `\r` driven progress line.
    Progress {
        /// Number of steps
        #[arg(long, default_value_t = 20)]
        steps: u32,
        /// Delay between steps in milliseconds
        #[arg(long, default_value_t = 50)]
        delay_ms: u64,
    },
    /// List severity and prefix levels.
    Levels,
}

impl Cli {
    /// Config file (or defaults) with the environment applied.
    ///
    /// # Errors
    /// Unreadable or invalid config file.
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        let mut config = match &self.config {
            Some(path) => {
                let config = Config::load_from(path)?;
                config.validate()?;
                config
            }
            None => Config::load().unwrap_or_default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Logger from `config` with command-line flags taking precedence.
    #[must_use]
    pub fn build_logger(&self, config: &Config) -> Logger {
        let mut builder: LoggerBuilder = Logger::builder_from_config(config);
        if let Some(level) = self.level {
            builder = builder.level(level.into());
        }
        if let Some(prefix) = self.prefix {
            builder = builder.prefix_level(prefix.into());
        }
        if self.no_colors {
            builder = builder.colors(false);
        }
        if let Some(header) = &self.header {
            builder = builder.user_header(header.clone());
        }
        if let Some(path) = &self.output_file {
            builder = builder.output_file(FileTarget::from_path(path));
        }
        builder.build()
    }
}
