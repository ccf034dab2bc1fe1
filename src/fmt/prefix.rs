//! Renders the string printed in front of every fresh line.
//!
//! Placeholders that are gated off by the prefix level resolve to an empty
//! string and leave stray spaces behind, which a collapse pass removes. The
//! user header is inserted only after that pass because it may legitimately
//! contain runs of spaces.

use super::color::{AnsiColor, paint};
use super::format::{FormatTemplate, Placeholder};
use super::text;
use crate::level::{Level, PrefixLevel};
use crate::logger::Settings;
use chrono::Local;
use std::fmt::Write;

/// Used when no template is configured.
pub const DEFAULT_PREFIX_FORMAT: &str = "{TIME} {USER_HEADER} {SEVERITY} {FILELINE} {THREAD}";

/// Width of the `{SEVERITY}` field.
pub const SEVERITY_WIDTH: usize = 5;

/// Per-event inputs of the prefix.
#[derive(Debug, Clone, Copy)]
pub struct PrefixContext<'a> {
    pub level: Level,
    pub file: &'a str,
    pub line: u32,
    /// Body color requested with [`LogEvent::color`](crate::LogEvent::color).
    pub color_override: Option<AnsiColor>,
}

impl<'a> PrefixContext<'a> {
    #[must_use]
    pub const fn new(level: Level, file: &'a str, line: u32) -> Self {
        Self {
            level,
            file,
            line,
            color_override: None,
        }
    }
}

/// Builds the prefix for `ctx` under `settings`. Returns an empty string when
/// nothing is to be printed; otherwise the result ends with `": "` (plus the
/// override color escape when one is active).
#[must_use]
pub fn render(settings: &Settings, ctx: &PrefixContext<'_>) -> String {
    let level_color = AnsiColor::for_level(ctx.level);
    let header = if settings.user_header.is_empty() {
        String::new()
    } else {
        paint(
            &settings.user_header,
            level_color,
            settings.colors && settings.propagate_color_on_user_header,
        )
    };

    if settings.prefix_level == PrefixLevel::None {
        if header.is_empty() {
            return header;
        }
        return format!("{header} ");
    }

    let level = settings.prefix_level;
    let dim = |s: String| paint(&s, Some(AnsiColor::DIM), settings.colors);
    let template = FormatTemplate::parse(&text::strip_ansi(settings.effective_prefix_format()));

    let rendered = template.render_with(|ph| match ph {
        Placeholder::Time => Some(if level >= PrefixLevel::Production {
            current_time(&settings.time_format)
        } else {
            String::new()
        }),
        Placeholder::FileLine => Some(if level >= PrefixLevel::Debug {
            dim(format!("{}:{}", text::file_name(ctx.file), ctx.line))
        } else {
            String::new()
        }),
        Placeholder::FileName => Some(if level >= PrefixLevel::Debug {
            dim(text::file_stem(ctx.file).to_string())
        } else {
            String::new()
        }),
        Placeholder::Thread => Some(if level >= PrefixLevel::Full {
            dim(format!("(thread: {})", thread_id()))
        } else {
            String::new()
        }),
        Placeholder::Severity => Some(severity_tag(ctx.level, settings.colors)),
        Placeholder::UserHeader | Placeholder::Exe => None,
    });

    let mut prefix = collapse_and_trim_start(&rendered);
    let token = Placeholder::UserHeader.token();
    if header.is_empty() {
        prefix = collapse_and_trim_start(&text::replace_all(&prefix, token, ""));
    } else {
        prefix = text::replace_all(&prefix, token, &header);
    }
    prefix.truncate(prefix.trim_end_matches(' ').len());

    if !prefix.is_empty() {
        prefix.push_str(": ");
    }
    if settings.colors
        && let Some(color) = ctx.color_override
        && color != AnsiColor::Reset
    {
        prefix.push_str(color.code());
    }
    prefix
}

/// Five-character tag, colored with the level color. Empty for `Invalid`.
#[must_use]
pub fn severity_tag(level: Level, colors: bool) -> String {
    if level == Level::Invalid {
        return String::new();
    }
    let padded = text::pad_left(level.tag(), SEVERITY_WIDTH, ' ');
    paint(&padded, AnsiColor::for_level(level), colors)
}

fn collapse_and_trim_start(input: &str) -> String {
    text::collapse_repeated(input, ' ')
        .trim_start_matches(' ')
        .to_string()
}

/// A malformed strftime pattern falls back to `HH:MM:SS` instead of panicking.
fn current_time(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
        out.push_str(&now.format("%H:%M:%S").to_string());
    }
    out
}

fn thread_id() -> String {
    let raw = format!("{:?}", std::thread::current().id());
    raw.trim_start_matches("ThreadId(")
        .trim_end_matches(')')
        .to_string()
}
