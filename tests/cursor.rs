//! Tests for cursor control and explicit line handling.

use linelog::{Logger, MemorySink};

fn logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder().colors(false).sink(sink.clone()).build();
    (logger, sink)
}

#[test]
fn move_up_without_clearing() {
    let (logger, sink) = logger();
    logger.move_cursor_up(2, false);
    assert_eq!(sink.contents(), "\x1b[1A\x1b[1A\r");
}

#[test]
fn move_up_and_clear() {
    let (logger, sink) = logger();
    logger.move_cursor_up(2, true);
    assert_eq!(sink.contents(), "\x1b[1A\x1b[2K\x1b[1A\x1b[2K\r");
}

#[test]
fn move_down() {
    let (logger, sink) = logger();
    logger.move_cursor_down(3);
    assert_eq!(sink.contents(), "\x1b[3B\r");
    sink.clear();
    logger.move_cursor_down(0);
    assert_eq!(sink.contents(), "\r");
}

#[test]
fn clear_line_erases_and_returns() {
    let (logger, sink) = logger();
    logger.clear_line();
    assert_eq!(sink.contents(), "\x1b[2K\r");
}

#[test]
fn cursor_moves_reprint_the_prefix() {
    let (logger, sink) = logger();
    logger.info().write("first").endl();
    logger.info().write("second").endl();
    logger.move_cursor_up(2, true);
    logger.info().write("redrawn").endl();
    assert!(sink.contents().ends_with("\x1b[1A\x1b[2K\x1b[1A\x1b[2K\rINFO: redrawn\n"));
}

#[test]
fn trigger_new_line_forces_a_prefix() {
    let (logger, sink) = logger();
    logger.info().write("a");
    logger.trigger_new_line();
    logger.info().write("b").endl();
    assert_eq!(sink.contents(), "INFO: aINFO: b\n");
}

#[test]
fn quiet_line_jump_ends_the_line() {
    let (logger, sink) = logger();
    logger.info().write("a");
    logger.quiet_line_jump();
    logger.info().write("b").endl();
    assert_eq!(sink.contents(), "INFO: a\nINFO: b\n");
}

#[test]
fn indent_guard_restores_on_drop() {
    let (logger, _sink) = logger();
    assert_eq!(logger.indent(), "");
    let outer = logger.indent_scope();
    assert_eq!(logger.indent(), "  ");
    let inner = logger.indent_scope();
    assert_eq!(logger.indent(), "    ");
    drop(inner);
    assert_eq!(logger.indent(), "  ");
    drop(outer);
    assert_eq!(logger.indent(), "");
}
