//! ANSI escape codes for terminal flow control
//!
//! Refer to <https://en.wikipedia.org/wiki/ANSI_escape_code>

pub const CURSOR_UP: &str = "\x1b[A";
pub const CURSOR_DOWN: &str = "\x1b[B";
pub const CURSOR_RIGHT: &str = "\x1b[C";
pub const CURSOR_LEFT: &str = "\x1b[D";

pub const ERASE_LINE: &str = "\x1b[2K";
pub const ERASE_LINE_END: &str = "\x1b[K";

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
