//! Main console struct integrating all components
//!
//! Routes editor events into tokenize → dispatch, handles the reserved
//! `help` and `history` names, and drives tab completion over the
//! registered command set.

use core::fmt::Write;

use super::completion::Completer;
use super::editor::{EditorEvent, LineEditor};
use super::{ansi, ConsoleError};
use crate::cli::{builtins, tokenizer::tokenize, CommandRegistry};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Interactive console: line editor plus command table.
pub struct Console {
    editor: LineEditor,
    registry: CommandRegistry,
    completer: Completer,
}

impl Console {
    /// Create a console with the built-in commands registered.
    pub fn new() -> Self {
        let mut registry = CommandRegistry::new();
        let _ = registry.register("echo", "Echo arguments back", builtins::cmd_echo);
        let _ = registry.register("version", "Show version", builtins::cmd_version);

        Self {
            editor: LineEditor::new(),
            registry,
            completer: Completer::new(),
        }
    }

    /// Create a console with an empty command table.
    pub fn bare() -> Self {
        Self {
            editor: LineEditor::new(),
            registry: CommandRegistry::new(),
            completer: Completer::new(),
        }
    }

    /// Command table, for registering caller command sets.
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Command table (read-only).
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Line editor (read-only).
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Process a single input byte.
    ///
    /// Returns `Some(result)` once a line completed and was executed,
    /// `None` while more input is needed.
    pub fn feed(&mut self, byte: u8, out: &mut dyn Write) -> Option<Result<(), ConsoleError>> {
        match self.editor.feed(byte, out) {
            EditorEvent::None => None,
            EditorEvent::Tab => {
                self.handle_tab(out);
                None
            }
            EditorEvent::Submitted(line) => {
                let result = self.run_line(line.as_str(), out);
                self.editor.print_prompt(out);
                Some(result)
            }
        }
    }

    /// Tokenize and execute a full line, including `;` separated groups.
    ///
    /// Every group runs; each failure is echoed as a diagnostic and the
    /// first one becomes the returned result.
    pub fn run_line(&mut self, line: &str, out: &mut dyn Write) -> Result<(), ConsoleError> {
        let mut result = Ok(());
        let mut rest = Some(line);

        while let Some(segment) = rest {
            let group = tokenize(segment);
            rest = group.rest;
            if group.is_empty() {
                continue;
            }
            if let Err(e) = self.run_args(&group.args, out) {
                if e == ConsoleError::UnknownCommand {
                    let _ = writeln!(
                        out,
                        "{}{} [{}], try [help]{}",
                        ansi::RED,
                        e,
                        group.args[0],
                        ansi::RESET
                    );
                } else {
                    let _ = writeln!(out, "{}{}{}", ansi::RED, e, ansi::RESET);
                }
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }

        result
    }

    fn run_args(&mut self, args: &[&str], out: &mut dyn Write) -> Result<(), ConsoleError> {
        match args[0] {
            "help" => {
                self.print_help(out);
                Ok(())
            }
            "history" => {
                self.print_history(out);
                Ok(())
            }
            _ => self.registry.dispatch(args, out),
        }
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "  {:<14} {}", "help", "List commands");
        let _ = writeln!(out, "  {:<14} {}", "history", "Show command history");
        for slot in self.registry.iter() {
            let _ = writeln!(out, "  {:<14} {}", slot.name, slot.brief);
        }
    }

    fn print_history(&self, out: &mut dyn Write) {
        for (i, entry) in self.editor.history().iter().enumerate() {
            let _ = writeln!(out, "{:>4}  {}", i, entry);
        }
    }

    fn handle_tab(&mut self, out: &mut dyn Write) {
        let buffer = self.editor.buffer();

        // Complete the command word only: cursor at the end, single word.
        if !buffer.cursor_at_end() || buffer.as_str().contains(' ') {
            self.completer.reset();
            return;
        }

        let prefix = buffer.as_str();
        let prefix_len = prefix.len();
        let completed = self.completer.complete(prefix, self.registry.names());

        if let Some(candidate) = completed {
            self.editor.replace_tail(prefix_len, candidate, out);
        }
    }

    /// Print the prompt.
    pub fn print_prompt(&self, out: &mut dyn Write) {
        self.editor.print_prompt(out);
    }

    /// Print welcome banner.
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "\r\n{}", VERSION);
        let _ = writeln!(out, "Type 'help' for commands.\r");
        self.editor.print_prompt(out);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
