//! Everything that turns values into bytes before they reach a sink: colors,
//! templates, printf-style substitution, the line prefix, and small string helpers.

mod color;
mod format;
pub mod prefix;
pub mod printf;
pub mod text;

pub use color::{AnsiColor, RESET, colorize, paint};
pub use format::{FormatSegment, FormatTemplate, Placeholder};
pub use prefix::{DEFAULT_PREFIX_FORMAT, PrefixContext, render as render_prefix};
pub use printf::{Arg, FormatError, MAX_FIELD, sprintf};
