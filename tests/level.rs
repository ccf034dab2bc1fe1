//! Tests for severity and prefix levels.

use linelog::{Level, PrefixLevel};

#[test]
fn level_ordering() {
    assert!(Level::Fatal < Level::Error);
    assert!(Level::Error < Level::Alert);
    assert!(Level::Alert < Level::Warning);
    assert!(Level::Warning < Level::Info);
    assert!(Level::Info < Level::Debug);
    assert!(Level::Debug < Level::Trace);
    assert!(Level::Trace < Level::Invalid);
}

#[test]
fn level_numeric_values() {
    for (i, level) in Level::all().into_iter().enumerate() {
        assert_eq!(usize::from(level.index()), i);
        assert_eq!(Level::from_index(level.index()), level);
    }
    assert_eq!(Level::Invalid.index(), 7);
}

#[test]
fn level_from_index_saturates() {
    assert_eq!(Level::from_index(42), Level::Trace);
    assert_eq!(PrefixLevel::from_index(42), PrefixLevel::Full);
}

#[test]
fn level_tags_fit_five_columns() {
    assert_eq!(Level::Warning.tag(), "WARN");
    for level in Level::all() {
        assert!(level.tag().len() <= 5);
        assert!(!level.tag().is_empty());
    }
    assert_eq!(Level::Invalid.tag(), "");
}

#[test]
fn level_display() {
    assert_eq!(Level::Fatal.to_string(), "fatal");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(PrefixLevel::Production.to_string(), "production");
}

#[test]
fn level_from_str() {
    assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
    assert_eq!("ERR".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("Alert".parse::<Level>().unwrap(), Level::Alert);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!(" info ".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("4".parse::<Level>().unwrap(), Level::Info);
}

#[test]
fn prefix_level_from_str() {
    assert_eq!("none".parse::<PrefixLevel>().unwrap(), PrefixLevel::None);
    assert_eq!("min".parse::<PrefixLevel>().unwrap(), PrefixLevel::Minimal);
    assert_eq!("prod".parse::<PrefixLevel>().unwrap(), PrefixLevel::Production);
    assert_eq!("3".parse::<PrefixLevel>().unwrap(), PrefixLevel::Debug);
    assert_eq!("FULL".parse::<PrefixLevel>().unwrap(), PrefixLevel::Full);
}

#[test]
fn level_from_str_invalid() {
    assert!("verbose".parse::<Level>().is_err());
    assert!("chatty".parse::<PrefixLevel>().is_err());
}

#[test]
fn defaults() {
    assert_eq!(Level::default(), Level::Trace);
    assert_eq!(PrefixLevel::default(), PrefixLevel::Minimal);
}
