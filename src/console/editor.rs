//! Line editor state machine
//!
//! Consumes one input byte at a time, orchestrating the line buffer, the
//! escape decoder and the history ring. Emits a completed line on Enter.
//! All terminal output goes through the caller-supplied writer.

use core::fmt::Write;

use super::ansi;
use super::escape::{Decoded, EscapeDecoder};
use super::history::HistoryRing;
use super::line_buffer::{LineBuffer, LINE_SIZE};

/// Default prompt text.
pub const DEFAULT_PROMPT: &str = "> ";

/// No-data sentinel from the byte source, treated like NUL.
const NO_DATA: u8 = 0xFF;

/// A completed input line, terminator stripped.
pub type Line = heapless::String<LINE_SIZE>;

/// Outcome of feeding one byte to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Byte handled, nothing for the caller to do.
    None,
    /// Tab pressed; completion is the integration layer's concern.
    Tab,
    /// Enter pressed, line is complete. Editor state is already reset.
    Submitted(Line),
}

/// Byte-by-byte line editor with history recall.
///
/// Owns all of its state; independent instances never interfere.
pub struct LineEditor {
    line: LineBuffer,
    history: HistoryRing,
    decoder: EscapeDecoder,
    /// History recall depth. 0 = editing the live buffer, 1 = newest entry.
    pull_depth: usize,
    prompt: &'static str,
}

impl LineEditor {
    /// Create an editor with the default prompt.
    pub const fn new() -> Self {
        Self::with_prompt(DEFAULT_PROMPT)
    }

    /// Create an editor with a custom prompt.
    pub const fn with_prompt(prompt: &'static str) -> Self {
        Self {
            line: LineBuffer::new(),
            history: HistoryRing::new(),
            decoder: EscapeDecoder::new(),
            pull_depth: 0,
            prompt,
        }
    }

    /// Process a single input byte.
    pub fn feed(&mut self, byte: u8, out: &mut dyn Write) -> EditorEvent {
        match byte {
            // NUL and the no-data sentinel: no visible effect.
            0x00 | NO_DATA => EditorEvent::None,

            // Backspace / Delete
            0x08 | 0x7F => {
                if self.line.backspace() {
                    self.pull_depth = 0;
                    self.redraw(out);
                }
                EditorEvent::None
            }

            // End of line
            b'\r' | b'\n' => self.submit(out),

            // Everything else runs through the escape decoder first.
            _ => match self.decoder.feed(byte) {
                Decoded::Literal(c) => self.literal(c, out),
                Decoded::ArrowUp => {
                    self.recall_older(out);
                    EditorEvent::None
                }
                Decoded::ArrowDown => {
                    self.recall_newer(out);
                    EditorEvent::None
                }
                Decoded::ArrowLeft => {
                    if self.line.move_left() {
                        let _ = write!(out, "{}", ansi::CURSOR_LEFT);
                    }
                    EditorEvent::None
                }
                Decoded::ArrowRight => {
                    if self.line.move_right() {
                        let _ = write!(out, "{}", ansi::CURSOR_RIGHT);
                    }
                    EditorEvent::None
                }
                Decoded::Pending | Decoded::Abandoned => EditorEvent::None,
            },
        }
    }

    /// Print the prompt.
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let _ = write!(out, "{}", self.prompt);
    }

    /// Prompt text.
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Current line buffer (read-only).
    pub fn buffer(&self) -> &LineBuffer {
        &self.line
    }

    /// History ring (read-only).
    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    /// History ring, e.g. for seeding or clearing.
    pub fn history_mut(&mut self) -> &mut HistoryRing {
        &mut self.history
    }

    /// Replace the last `prefix_len` bytes of the line and redraw.
    ///
    /// Used by tab completion: the current word prefix is swapped for the
    /// completed candidate.
    pub fn replace_tail(&mut self, prefix_len: usize, replacement: &str, out: &mut dyn Write) {
        for _ in 0..prefix_len {
            self.line.backspace();
        }
        for &b in replacement.as_bytes() {
            self.line.insert_at_cursor(b);
        }
        self.redraw(out);
    }

    fn literal(&mut self, c: u8, out: &mut dyn Write) -> EditorEvent {
        match c {
            b'\t' => EditorEvent::Tab,

            // Ctrl+C: drop the current line
            0x03 => {
                let _ = writeln!(out, "^C");
                self.line.clear();
                self.pull_depth = 0;
                self.print_prompt(out);
                EditorEvent::None
            }

            // Ctrl+U: erase the line in place
            0x15 => {
                self.line.clear();
                self.pull_depth = 0;
                let _ = write!(out, "{}\r{}", ansi::ERASE_LINE, self.prompt);
                EditorEvent::None
            }

            // Printable character: insert at cursor
            0x20..=0x7E => {
                if self.line.insert_at_cursor(c) {
                    self.pull_depth = 0;
                    if self.line.cursor_at_end() {
                        // Appending at the end: echo just the new byte.
                        let _ = write!(out, "{}", c as char);
                    } else {
                        self.redraw(out);
                    }
                }
                // Overflow: keystroke silently dropped.
                EditorEvent::None
            }

            _ => EditorEvent::None,
        }
    }

    fn submit(&mut self, out: &mut dyn Write) -> EditorEvent {
        let _ = writeln!(out);

        let mut submitted: Line = heapless::String::new();
        let _ = submitted.push_str(self.line.as_str());

        if !submitted.is_empty() {
            self.history.push(&submitted);
        }

        self.line.clear();
        self.pull_depth = 0;
        self.decoder.reset();

        EditorEvent::Submitted(submitted)
    }

    fn recall_older(&mut self, out: &mut dyn Write) {
        if self.pull_depth < self.history.depth() {
            self.pull_depth += 1;
        }
        if let Some(recalled) = self.history.pull(self.pull_depth) {
            self.line.set(recalled);
            self.redraw(out);
        }
    }

    fn recall_newer(&mut self, out: &mut dyn Write) {
        if self.pull_depth == 0 {
            return;
        }
        self.pull_depth -= 1;
        if self.pull_depth == 0 {
            self.line.clear();
            self.redraw(out);
        } else if let Some(recalled) = self.history.pull(self.pull_depth) {
            self.line.set(recalled);
            self.redraw(out);
        }
    }

    /// Erase the terminal line, reprint prompt and buffer, reposition the
    /// cursor to its column.
    fn redraw(&self, out: &mut dyn Write) {
        let _ = write!(
            out,
            "{}\r{}{}",
            ansi::ERASE_LINE,
            self.prompt,
            self.line.as_str()
        );
        let _ = write!(out, "\x1b[{}G", self.line.echo_column(self.prompt.len()));
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
