//! The library's own diagnostics: config problems, file mirror failures.
//!
//! A separate [`Logger`] writing to stderr, so these messages never touch
//! the line state of the logger being diagnosed. Nothing is printed until one
//! of the `init` functions runs; calls made before that are dropped.

use crate::config::Config;
use crate::level::{Level, PrefixLevel};
use crate::logger::Logger;
use crate::output::StderrSink;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Warnings and errors only, colors per `LINELOG_COLORS`.
///
/// Only the first `init*` call takes effect.
pub fn init() {
    let config = Config::from_env();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(Level::Warning, config.terminal.colors));
}

/// Uses the threshold and color choice of an already loaded config.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER
        .get_or_init(|| build_internal_logger(config.parse_level(), config.terminal.colors));
    if !was_init {
        debug("INTERNAL", &format!("Internal logger ready, level={}", config.general.level));
    }
}

/// Explicit threshold, no colors. Handy in tests.
pub fn init_with_level(level: Level) {
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(level, false));
}

fn build_internal_logger(level: Level, colors: bool) -> Logger {
    Logger::builder()
        .sink(StderrSink::new())
        .level(level)
        .colors(colors)
        .prefix_level(PrefixLevel::Minimal)
        .prefix_format("{USER_HEADER} {SEVERITY}")
        .user_header("linelog")
        .build()
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level).write(format_args!("[{scope}] {msg}")).endl();
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
