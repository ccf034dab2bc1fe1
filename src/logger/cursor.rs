//! Terminal cursor control. Each call leaves the logger on a fresh line so
//! the next statement reprints its prefix at the cursor's new position.

use super::Logger;

const UP_ONE: &str = "\x1b[1A";
const ERASE_LINE: &str = "\x1b[2K";

impl Logger {
    /// Moves the cursor `lines` rows up, erasing each row on the way when
    /// `clear` is set, and returns to column 0.
    pub fn move_cursor_up(&self, lines: usize, clear: bool) {
        let mut seq = String::new();
        for _ in 0..lines {
            seq.push_str(UP_ONE);
            if clear {
                seq.push_str(ERASE_LINE);
            }
        }
        seq.push('\r');
        let mut inner = self.lock();
        inner.write_raw(seq.as_bytes());
        inner.state.fresh_line = true;
        inner.flush();
    }

    /// Moves the cursor `lines` rows down and returns to column 0.
    pub fn move_cursor_down(&self, lines: usize) {
        let mut inner = self.lock();
        if lines > 0 {
            inner.write_raw(format!("\x1b[{lines}B").as_bytes());
        }
        inner.write_raw(b"\r");
        inner.state.fresh_line = true;
        inner.flush();
    }

    /// Erases the line under the cursor.
    pub fn clear_line(&self) {
        let mut inner = self.lock();
        inner.write_raw(ERASE_LINE.as_bytes());
        inner.write_raw(b"\r");
        inner.state.fresh_line = true;
        inner.flush();
    }

    /// The next statement starts with a prefix even if the line is not finished.
    pub fn trigger_new_line(&self) {
        self.lock().state.fresh_line = true;
    }

    /// Ends the current line without printing anything else.
    pub fn quiet_line_jump(&self) {
        let mut inner = self.lock();
        inner.write_raw(b"\n");
        inner.state.fresh_line = true;
        inner.flush();
    }
}
