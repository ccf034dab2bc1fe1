//! What the subcommands print.

use crate::error::Error;
use crate::fmt::{AnsiColor, Arg};
use crate::level::{Level, PrefixLevel};
use crate::logger::Logger;
use std::thread;
use std::time::Duration;

const RULE: &str = "-----------------------------------------";

fn section(logger: &Logger, title: &str) {
    logger.info().write(RULE).endl();
    logger.info().write(title).endl();
    logger.info().write(RULE).endl();
}

/// The feature tour.
///
/// # Errors
/// Only if one of the printf templates below is broken.
pub fn run_demo(logger: &Logger) -> Result<(), Error> {
    section(logger, "Welcome to the linelog demo.");
    logger.quiet_line_jump();

    section(logger, "Here are all the different log levels:");
    for level in Level::all() {
        logger
            .log(level)
            .write(format_args!(
                "This is a {} ({}) message.",
                level.tag(),
                level.index()
            ))
            .endl();
    }
    logger.quiet_line_jump();

    section(logger, "Specifying the prefix level:");
    let previous = logger.prefix_level();
    for (prefix, what) in PrefixLevel::all().into_iter().zip([
        "no prefix at all (or only the user header)",
        "only the severity",
        "adds the clock",
        "adds file name and line number",
        "adds the thread id",
    ]) {
        logger.set_prefix_level(prefix);
        logger
            .debug()
            .write(format_args!(
                "{} ({}) -> {what}.",
                prefix.as_str().to_uppercase(),
                prefix as u8
            ))
            .endl();
    }
    logger.set_prefix_level(previous);
    logger.quiet_line_jump();

    section(logger, "printf style calls:");
    let value = 99;
    logger.info().printf(
        "Here is a pointer \"%p\", followed by its int value: %i",
        &[Arg::ptr(&value), Arg::from(value)],
    )?;
    logger.info().printf("%-8s|%8.3f|%#x", &["left".into(), 2.5.into(), 255.into()])?;
    logger.quiet_line_jump();

    section(logger, "A user header:");
    let header = logger.user_header();
    logger.set_user_header("[demo]");
    logger.info().write("There you go :)").endl();
    logger.set_propagate_color_on_user_header(true);
    logger.info().write("Same header, severity colored.").endl();
    logger.set_propagate_color_on_user_header(false);
    logger.set_user_header(header);
    logger.quiet_line_jump();

    section(logger, "Thresholds:");
    let max = logger.max_level();
    logger.set_max_level(Level::Info);
    logger
        .warning()
        .write("-> You can see me (but not the next DEBUG message)")
        .endl();
    logger.debug().write("-> You cannot see me").endl();
    logger.set_max_level(max);
    logger.quiet_line_jump();

    section(logger, "Multi-line payloads:");
    logger.trace().write("You can also print\nmultiple lines").endl();
    logger.trace().write("from a string containing \"\\n\"\n");
    logger.trace().write("-> every line gets its own prefix").endl();
    logger.quiet_line_jump();

    section(logger, "Once-only and conditional statements:");
    for i in 0..3 {
        logger
            .log_once(Level::Info)
            .write(format_args!("printed once (i = {i})"))
            .endl();
        logger
            .log_if(Level::Info, i % 2 == 0)
            .write(format_args!("printed when i is even (i = {i})"))
            .endl();
    }
    logger.quiet_line_jump();

    section(logger, "Indentation and body colors:");
    logger.info().write("outer").endl();
    {
        let _indent = logger.indent_scope();
        logger.info().write("inner").endl();
        logger.info().color(AnsiColor::LightMagenta).write("inner, colored").endl();
    }
    logger.info().write("outer again").endl();
    logger.quiet_line_jump();

    logger.alert().write(RULE).endl();
    logger.alert().write("Have fun!").endl();
    logger.alert().write(RULE).endl();
    Ok(())
}

/// Single message from the command line.
pub fn log_message(logger: &Logger, level: Level, message: &str) {
    logger.log(level).write(message).endl();
}

/// Overwrites one line with `\r` until the task is done.
pub fn run_progress(logger: &Logger, steps: u32, delay: Duration) {
    let steps = steps.max(1);
    for step in 0..=steps {
        let percent = percent_done(step, steps);
        let filled = usize::try_from(percent / 5).unwrap_or(0);
        logger
            .info()
            .write(format_args!("[{:<20}] {percent:>3}%\r", "#".repeat(filled)));
        thread::sleep(delay);
    }
    logger.info().write("done.").endl();
}

fn percent_done(step: u32, steps: u32) -> u64 {
    u64::from(step) * 100 / u64::from(steps.max(1))
}

/// Severity and prefix levels with their numeric values.
pub fn print_levels(logger: &Logger) {
    for level in Level::all() {
        logger
            .log(level)
            .write(format_args!("{} = {}", level.as_str(), level.index()))
            .endl();
    }
    for prefix in PrefixLevel::all() {
        logger
            .info()
            .write(format_args!("prefix {} = {}", prefix.as_str(), prefix as u8))
            .endl();
    }
}
