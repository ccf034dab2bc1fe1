//! Tests for mirroring output to a file.

use linelog::output::{FILE_TIME_FORMAT, FileMirror};
use linelog::{FileTarget, Logger, MemorySink, platform};
use regex::Regex;
use std::fs;
use tempfile::TempDir;

fn folder(tmp_dir: &TempDir) -> String {
    tmp_dir.path().to_string_lossy().into_owned()
}

#[test]
fn mirror_receives_console_bytes() {
    let tmp_dir = TempDir::new().unwrap();
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .colors(false)
        .sink(sink.clone())
        .output_file(FileTarget::new(folder(&tmp_dir), "run.log"))
        .build();

    logger.info().write("one\ntwo").endl();
    logger.warning().write("three").endl();
    logger.flush();

    let content = fs::read_to_string(tmp_dir.path().join("run.log")).unwrap();
    assert_eq!(content, "INFO: one\nINFO: two\nWARN: three\n");
    assert_eq!(content, sink.contents());
}

#[test]
fn folder_is_created() {
    let tmp_dir = TempDir::new().unwrap();
    let nested = tmp_dir.path().join("a").join("b");
    let target = FileTarget::new(nested.to_string_lossy(), "x.log");
    let mirror = FileMirror::open(&target).unwrap();
    assert_eq!(mirror.path(), nested.join("x.log"));
    assert!(nested.is_dir());
}

#[test]
fn overwrite_is_the_default() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("over.log");
    fs::write(&path, "stale\n").unwrap();

    let logger = Logger::builder()
        .colors(false)
        .sink(MemorySink::new())
        .output_file(FileTarget::new(folder(&tmp_dir), "over.log"))
        .build();
    logger.info().write("fresh").endl();
    drop(logger);

    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO: fresh\n");
}

#[test]
fn append_keeps_existing_content() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    fs::write(&path, "earlier\n").unwrap();

    let logger = Logger::builder()
        .colors(false)
        .sink(MemorySink::new())
        .output_file(FileTarget::new(folder(&tmp_dir), "app.log").append(true))
        .build();
    logger.info().write("later").endl();
    drop(logger);

    assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\nINFO: later\n");
}

#[test]
fn name_tokens_are_filled() {
    let tmp_dir = TempDir::new().unwrap();
    let resolved = FileTarget::new(folder(&tmp_dir), "{EXE}_{TIME}.log").resolve();
    let name = resolved.file_name().unwrap().to_string_lossy().into_owned();

    let exe = platform::executable_name();
    assert!(name.starts_with(&format!("{exe}_")), "{name}");
    let stamp = name
        .trim_start_matches(&format!("{exe}_"))
        .trim_end_matches(".log");
    assert!(Regex::new(r"^\d{8}_\d{6}$").unwrap().is_match(stamp), "{stamp}");
    assert_eq!(FILE_TIME_FORMAT, "%Y%m%d_%H%M%S");
}

#[test]
fn tilde_is_expanded() {
    let resolved = FileTarget::new("~/logs", "x.log").resolve();
    assert!(resolved.ends_with("logs/x.log"));
    if std::env::var_os("HOME").is_some() {
        assert!(!resolved.to_string_lossy().starts_with('~'));
    }
}

#[test]
fn second_output_file_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = Logger::builder()
        .colors(false)
        .sink(MemorySink::new())
        .build();
    assert!(logger.set_output_file(&FileTarget::new(folder(&tmp_dir), "first.log")));
    assert!(logger.set_output_file(&FileTarget::new(folder(&tmp_dir), "second.log")));
    logger.info().write("x").endl();
    drop(logger);

    assert_eq!(
        fs::read_to_string(tmp_dir.path().join("first.log")).unwrap(),
        "INFO: x\n"
    );
    assert!(!tmp_dir.path().join("second.log").exists());
}

#[test]
fn unopenable_file_keeps_console_logging() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let sink = MemorySink::new();
    let logger = Logger::builder()
        .colors(false)
        .sink(sink.clone())
        .build();
    // A regular file where a directory is expected.
    let target = FileTarget::new(blocker.join("sub").to_string_lossy(), "x.log");
    assert!(!logger.set_output_file(&target));
    logger.info().write("still here").endl();
    assert_eq!(sink.contents(), "INFO: still here\n");
}
