//! Tests for prefix rendering.

use linelog::fmt::{AnsiColor, PrefixContext, render_prefix};
use linelog::{Level, Logger, MemorySink, PrefixLevel, Settings};
use regex::Regex;

fn settings(prefix_level: PrefixLevel) -> Settings {
    Settings {
        prefix_level,
        colors: false,
        ..Settings::default()
    }
}

fn ctx(level: Level) -> PrefixContext<'static> {
    PrefixContext::new(level, "src/net/socket.rs", 42)
}

#[test]
fn minimal_prefix_without_colors() {
    let prefix = render_prefix(&settings(PrefixLevel::Minimal), &ctx(Level::Info));
    assert_eq!(prefix, "INFO: ");
}

#[test]
fn minimal_prefix_with_colors() {
    let s = Settings {
        colors: true,
        ..settings(PrefixLevel::Minimal)
    };
    let prefix = render_prefix(&s, &ctx(Level::Info));
    assert_eq!(prefix, "\x1b[32m INFO\x1b[0m: ");
}

#[test]
fn none_prefix_is_empty() {
    let prefix = render_prefix(&settings(PrefixLevel::None), &ctx(Level::Error));
    assert_eq!(prefix, "");
}

#[test]
fn none_prefix_keeps_user_header() {
    let s = Settings {
        user_header: "[app]".to_string(),
        ..settings(PrefixLevel::None)
    };
    assert_eq!(render_prefix(&s, &ctx(Level::Error)), "[app] ");
}

#[test]
fn production_adds_time() {
    let prefix = render_prefix(&settings(PrefixLevel::Production), &ctx(Level::Warning));
    let re = Regex::new(r"^\d{2}:\d{2}:\d{2} WARN: $").unwrap();
    assert!(re.is_match(&prefix), "{prefix:?}");
}

#[test]
fn debug_adds_file_and_line() {
    let prefix = render_prefix(&settings(PrefixLevel::Debug), &ctx(Level::Debug));
    let re = Regex::new(r"^\d{2}:\d{2}:\d{2} DEBUG socket\.rs:42: $").unwrap();
    assert!(re.is_match(&prefix), "{prefix:?}");
}

#[test]
fn full_adds_thread() {
    let prefix = render_prefix(&settings(PrefixLevel::Full), &ctx(Level::Trace));
    let re = Regex::new(r"^\d{2}:\d{2}:\d{2} TRACE socket\.rs:42 \(thread: \d+\): $").unwrap();
    assert!(re.is_match(&prefix), "{prefix:?}");
}

#[test]
fn user_header_sits_before_severity() {
    let s = Settings {
        user_header: "[worker  1]".to_string(),
        ..settings(PrefixLevel::Minimal)
    };
    // Spaces inside the header survive the collapse pass.
    assert_eq!(render_prefix(&s, &ctx(Level::Alert)), "[worker  1] ALERT: ");
}

#[test]
fn user_header_takes_severity_color_when_propagated() {
    let mut s = Settings {
        colors: true,
        user_header: "[app]".to_string(),
        ..settings(PrefixLevel::Minimal)
    };
    let plain = render_prefix(&s, &ctx(Level::Error));
    assert!(plain.starts_with("[app] "), "{plain:?}");

    s.propagate_color_on_user_header = true;
    let colored = render_prefix(&s, &ctx(Level::Error));
    assert!(colored.starts_with("\x1b[31m[app]\x1b[0m "), "{colored:?}");
}

#[test]
fn custom_template_order() {
    let s = Settings {
        prefix_format: "{SEVERITY} {FILENAME}".to_string(),
        ..settings(PrefixLevel::Debug)
    };
    assert_eq!(render_prefix(&s, &ctx(Level::Error)), "ERROR socket: ");
}

#[test]
fn unknown_tokens_stay_verbatim() {
    let s = Settings {
        prefix_format: "<{HOST}> {SEVERITY}".to_string(),
        ..settings(PrefixLevel::Minimal)
    };
    assert_eq!(render_prefix(&s, &ctx(Level::Info)), "<{HOST}> INFO: ");
}

#[test]
fn escapes_in_template_are_ignored() {
    let s = Settings {
        prefix_format: "\x1b[90m{SEVERITY}\x1b[0m".to_string(),
        ..settings(PrefixLevel::Minimal)
    };
    assert_eq!(render_prefix(&s, &ctx(Level::Info)), "INFO: ");
}

#[test]
fn empty_template_means_default() {
    let s = Settings {
        prefix_format: String::new(),
        ..settings(PrefixLevel::Minimal)
    };
    assert_eq!(render_prefix(&s, &ctx(Level::Fatal)), "FATAL: ");
}

#[test]
fn invalid_level_has_no_severity() {
    assert_eq!(
        render_prefix(&settings(PrefixLevel::Minimal), &ctx(Level::Invalid)),
        ""
    );
}

#[test]
fn malformed_time_format_falls_back() {
    let s = Settings {
        time_format: "%Q".to_string(),
        prefix_format: "{TIME}".to_string(),
        ..settings(PrefixLevel::Production)
    };
    let prefix = render_prefix(&s, &ctx(Level::Info));
    assert!(Regex::new(r"^\d{2}:\d{2}:\d{2}: $").unwrap().is_match(&prefix), "{prefix:?}");
}

#[test]
fn color_override_follows_prefix() {
    let s = Settings {
        colors: true,
        ..settings(PrefixLevel::Minimal)
    };
    let mut c = ctx(Level::Info);
    c.color_override = Some(AnsiColor::Blue);
    assert!(render_prefix(&s, &c).ends_with(": \x1b[34m"));
}

#[test]
fn logger_prefix_string_uses_current_level() {
    let logger = Logger::builder()
        .colors(false)
        .sink(MemorySink::new())
        .build();
    logger.warning().write("x").endl();
    assert_eq!(logger.prefix_string(), "WARN: ");
}

#[test]
fn file_line_reports_call_site() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .colors(false)
        .prefix_level(PrefixLevel::Debug)
        .prefix_format("{FILELINE} {SEVERITY}")
        .sink(sink.clone())
        .build();
    let line = line!() + 1;
    logger.info().write("here").endl();
    assert_eq!(sink.contents(), format!("prefix.rs:{line} INFO: here\n"));
}
