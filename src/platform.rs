//! Queries about the running process and its terminal.

use std::path::Path;

/// Returned by [`executable_name`] when the path of the binary is unknown.
pub const UNDEFINED_EXE: &str = "UNDEFINED";

/// Column count of the terminal attached to stdout, or 0 when stdout is not
/// a terminal or the platform offers no way to ask.
#[cfg(unix)]
#[allow(unsafe_code)]
#[must_use]
pub fn terminal_width() -> usize {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ only writes into the winsize struct we own.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &raw mut size) };
    if rc == 0 { usize::from(size.ws_col) } else { 0 }
}

#[cfg(not(unix))]
#[must_use]
pub const fn terminal_width() -> usize {
    0
}

/// File stem of the running binary (`/usr/bin/tool` -> `tool`).
#[must_use]
pub fn executable_name() -> String {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::file_stem)
        .map_or_else(
            || UNDEFINED_EXE.to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        )
}
