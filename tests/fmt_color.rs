//! Tests for the ANSI color palette and helpers.

use linelog::fmt::{AnsiColor, RESET, colorize, paint};
use linelog::Level;

#[test]
fn codes_are_sgr_sequences() {
    assert_eq!(AnsiColor::Red.code(), "\x1b[31m");
    assert_eq!(AnsiColor::LightGrey.code(), "\x1b[90m");
    assert_eq!(AnsiColor::RedBg.code(), "\x1b[41m");
    assert_eq!(AnsiColor::Reset.code(), RESET);
    assert_eq!(AnsiColor::Cyan.to_string(), "\x1b[36m");
}

#[test]
fn every_severity_has_a_color() {
    for level in Level::all() {
        assert!(AnsiColor::for_level(level).is_some(), "{level}");
    }
    assert_eq!(AnsiColor::for_level(Level::Invalid), None);
    assert_eq!(AnsiColor::for_level(Level::Info), Some(AnsiColor::Green));
    assert_eq!(AnsiColor::for_level(Level::Fatal), Some(AnsiColor::RedBg));
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("hi", AnsiColor::Green), "\x1b[32mhi\x1b[0m");
}

#[test]
fn paint_respects_switch() {
    assert_eq!(paint("hi", Some(AnsiColor::Blue), false), "hi");
    assert_eq!(paint("hi", None, true), "hi");
    assert_eq!(paint("hi", Some(AnsiColor::Blue), true), "\x1b[34mhi\x1b[0m");
}
