//! Tests for runtime printf substitution.

use linelog::fmt::{Arg, FormatError, MAX_FIELD, sprintf};

fn fmt(template: &str, args: &[Arg]) -> String {
    sprintf(template, args).unwrap()
}

#[test]
fn integers() {
    assert_eq!(fmt("%d|%i", &[42.into(), (-7).into()]), "42|-7");
    assert_eq!(fmt("%5d|%-5d|%05d", &[42.into(), 42.into(), (-42).into()]), "   42|42   |-0042");
    assert_eq!(fmt("%+d % d", &[3.into(), 3.into()]), "+3  3");
    assert_eq!(fmt("%.3d", &[7.into()]), "007");
}

#[test]
fn unsigned_radixes() {
    assert_eq!(fmt("%u", &[42u32.into()]), "42");
    assert_eq!(fmt("%x %X %o", &[255.into(), 255.into(), 8.into()]), "ff FF 10");
    assert_eq!(fmt("%#x %#o", &[255.into(), 8.into()]), "0xff 010");
    assert_eq!(fmt("%u", &[(-1i64).into()]), "18446744073709551615");
}

#[test]
fn length_modifiers_are_ignored() {
    assert_eq!(fmt("%ld %lld %zu %hhx", &[1.into(), 2.into(), 3usize.into(), 15.into()]), "1 2 3 f");
}

#[test]
fn floats() {
    assert_eq!(fmt("%f", &[1.5.into()]), "1.500000");
    assert_eq!(fmt("%.2f", &[1.23456.into()]), "1.23");
    assert_eq!(fmt("%8.3f|", &[2.5.into()]), "   2.500|");
    assert_eq!(fmt("%e", &[1234.5.into()]), "1.234500e+03");
    assert_eq!(fmt("%.1E", &[0.000_12.into()]), "1.2E-04");
    assert_eq!(fmt("%g %g", &[0.5.into(), 1_000_000.0.into()]), "0.5 1e+06");
    assert_eq!(fmt("%f", &[2.into()]), "2.000000");
}

#[test]
fn strings_and_chars() {
    assert_eq!(fmt("%s!", &["hi".into()]), "hi!");
    assert_eq!(fmt("[%6s][%-6s]", &["ab".into(), "cd".into()]), "[    ab][cd    ]");
    assert_eq!(fmt("%.3s", &["truncate".into()]), "tru");
    assert_eq!(fmt("%c%c", &['o'.into(), 'k'.into()]), "ok");
    assert_eq!(fmt("%s", &[String::from("owned").into()]), "owned");
}

#[test]
fn star_width_and_precision() {
    assert_eq!(fmt("%*d", &[4.into(), 7.into()]), "   7");
    assert_eq!(fmt("%-*d|", &[3.into(), 7.into()]), "7  |");
    assert_eq!(fmt("%.*f", &[1.into(), 2.26.into()]), "2.3");
}

#[test]
fn pointers() {
    let value = 5u8;
    let text = fmt("%p", &[Arg::ptr(&value)]);
    assert!(text.starts_with("0x"));
    assert_eq!(fmt("%p", &[Arg::Ptr(0)]), "(nil)");
}

#[test]
fn percent_escape() {
    assert_eq!(fmt("100%%", &[]), "100%");
    assert_eq!(fmt("%d%%", &[50.into()]), "50%");
}

#[test]
fn missing_argument_is_an_error() {
    let err = sprintf("%d and %d", &[1.into()]).unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingArgument {
            index: 1,
            conversion: 'd'
        }
    );
}

#[test]
fn extra_arguments_are_an_error() {
    let err = sprintf("%d", &[1.into(), 2.into()]).unwrap_err();
    assert_eq!(err, FormatError::ExtraArguments { used: 1, given: 2 });
}

#[test]
fn unknown_conversion_is_an_error() {
    let err = sprintf("%y", &[1.into()]).unwrap_err();
    assert!(matches!(
        err,
        FormatError::UnknownConversion { conversion: 'y', .. }
    ));
}

#[test]
fn incomplete_conversion_is_an_error() {
    assert!(matches!(
        sprintf("tail %", &[]).unwrap_err(),
        FormatError::Incomplete { position: 5 }
    ));
}

#[test]
fn type_mismatch_is_an_error() {
    let err = sprintf("%d", &["text".into()]).unwrap_err();
    assert!(matches!(
        err,
        FormatError::TypeMismatch {
            index: 0,
            conversion: 'd',
            ..
        }
    ));
    assert!(sprintf("%s", &[1.5.into()]).is_err());
}

#[test]
fn error_messages_are_readable() {
    let err = sprintf("%d", &[]).unwrap_err();
    assert_eq!(err.to_string(), "missing argument #0 for '%d'");
}

#[test]
fn oversized_precision_is_an_error() {
    assert_eq!(
        sprintf("%.70000f", &[1.5.into()]).unwrap_err(),
        FormatError::OutOfRange { position: 0 }
    );
}

#[test]
fn oversized_width_is_an_error() {
    assert_eq!(
        sprintf("x %99999999999999999999d", &[1.into()]).unwrap_err(),
        FormatError::OutOfRange { position: 2 }
    );
    assert!(matches!(
        sprintf("%*d", &[100_000.into(), 1.into()]).unwrap_err(),
        FormatError::OutOfRange { .. }
    ));
}

#[test]
fn largest_precision_is_expanded() {
    let text = fmt(&format!("%.{MAX_FIELD}f"), &[1.5.into()]);
    assert_eq!(text.len(), 2 + MAX_FIELD);
    assert!(text.starts_with("1.5000"));
    assert!(text.bytes().skip(3).all(|b| b == b'0'));

    let text = fmt("%.2000e", &[1.5.into()]);
    assert!(text.starts_with("1.5000"));
    assert!(text.ends_with("0e+00"));
    assert_eq!(text.len(), 2 + 2000 + 4);

    let text = fmt(&format!("%#.{MAX_FIELD}g"), &[0.000_1.into()]);
    assert!(text.starts_with("0.0001000"));
}

#[test]
fn largest_width_is_padded() {
    let text = fmt(&format!("%{MAX_FIELD}d"), &[7.into()]);
    assert_eq!(text.len(), MAX_FIELD);
    assert!(text.ends_with(" 7"));
}
