//! `linelog` binary: a guided tour of the library plus a couple of one-shot
//! commands for scripts.
//!
//! Usage:
//!   linelog                          Run the feature tour
//!   linelog log <level> <msg>...     Print one message
//!   linelog progress [--steps N]     Show a carriage-return progress line
//!   linelog levels                   List severity and prefix levels

use clap::Parser;
use linelog::cli::demo::{log_message, print_levels, run_demo, run_progress};
use linelog::cli::{Cli, Command};
use linelog::internal;
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init();
    let logger = cli.build_logger(&config);

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            if let Err(e) = run_demo(&logger) {
                internal::error("CLI", &format!("Demo failed: {e}"));
                return ExitCode::FAILURE;
            }
        }
        Command::Log { level, message } => log_message(&logger, level.into(), &message.join(" ")),
        Command::Progress { steps, delay_ms } => {
            run_progress(&logger, steps, Duration::from_millis(delay_ms));
        }
        Command::Levels => print_levels(&logger),
    }

    logger.flush();
    ExitCode::SUCCESS
}
