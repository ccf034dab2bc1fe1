//! String helpers shared by the prefix builder and the emitter.

use regex::Regex;
use std::sync::LazyLock;

/// `ESC ... m` color sequences. An unterminated escape swallows the rest of the input.
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b[^m]*(?:m|$)").expect("Invalid ANSI regex"));

/// Splits on every occurrence of `delimiter`. The delimiter never appears in
/// the output, an input without it yields one element, and a trailing
/// delimiter yields a trailing empty element.
#[must_use]
pub fn split(input: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![input.to_string()];
    }
    input.split(delimiter).map(ToString::to_string).collect()
}

/// Replaces every non-overlapping `needle`, scanning left to right past each
/// inserted replacement.
#[must_use]
pub fn replace_all(input: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return input.to_string();
    }
    input.replace(needle, replacement)
}

/// Collapses every run of `ch` down to a single `ch`, repeating until nothing changes.
#[must_use]
pub fn collapse_repeated(input: &str, ch: char) -> String {
    let doubled: String = [ch, ch].iter().collect();
    let single = ch.to_string();
    let mut current = input.to_string();
    loop {
        let next = current.replace(&doubled, &single);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Removes ANSI color sequences, then every remaining control character.
#[must_use]
pub fn strip_ansi(input: &str) -> String {
    ANSI_REGEX
        .replace_all(input, "")
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// Fixed-width field: left-pads with `pad` up to `width` characters, or
/// truncates to exactly `width` characters when the input is longer.
#[must_use]
pub fn pad_left(input: &str, width: usize, pad: char) -> String {
    let len = input.chars().count();
    if len >= width {
        return input.chars().take(width).collect();
    }
    let mut out: String = std::iter::repeat_n(pad, width - len).collect();
    out.push_str(input);
    out
}

/// Empty for a zero or negative count.
#[must_use]
pub fn repeat(input: &str, count: i64) -> String {
    usize::try_from(count).map_or_else(|_| String::new(), |n| input.repeat(n))
}

#[must_use]
pub fn to_lower_case(input: &str) -> String {
    input.to_lowercase()
}

#[must_use]
pub fn contains(haystack: &str, needle: &str, ignore_case: bool) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    if ignore_case {
        to_lower_case(haystack).contains(&to_lower_case(needle))
    } else {
        haystack.contains(needle)
    }
}

/// Strips the directory part of a source path (`src/net/io.rs` -> `io.rs`).
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// File name without its extension (`src/net/io.rs` -> `io`).
#[must_use]
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..dot],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_reaches_fixed_point() {
        assert_eq!(collapse_repeated("a     b", ' '), "a b");
        assert_eq!(collapse_repeated("--x---", '-'), "-x-");
    }

    #[test]
    fn unterminated_escape_is_dropped() {
        assert_eq!(strip_ansi("ok\x1b[31"), "ok");
    }

    #[test]
    fn file_stem_handles_dotfiles() {
        assert_eq!(file_stem(".hidden"), ".hidden");
        assert_eq!(file_stem("a/b/c.tar.gz"), "c.tar");
    }
}
