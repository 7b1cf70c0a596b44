//! Command registration and dispatch
//!
//! Fixed-size slot table owned by the registry value; no global state.

use core::fmt::Write;

use crate::console::ConsoleError;

/// Number of command slots.
pub const COMMAND_SLOTS: usize = 16;

/// Command handler: full argv (name included) plus the output writer.
pub type CommandFn = fn(&[&str], &mut dyn Write) -> Result<(), ConsoleError>;

/// One registered command.
#[derive(Clone, Copy)]
pub struct CommandSlot {
    pub name: &'static str,
    pub brief: &'static str,
    pub handler: CommandFn,
}

/// Capacity-bounded command table.
///
/// Registration takes the first free slot; dispatch matches `argv[0]`
/// exactly, in slot order, first match wins.
pub struct CommandRegistry {
    slots: [Option<CommandSlot>; COMMAND_SLOTS],
}

impl CommandRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            slots: [None; COMMAND_SLOTS],
        }
    }

    /// Register a command into the first free slot.
    ///
    /// Returns the slot index, or an error when the table is full or the
    /// name is empty.
    pub fn register(
        &mut self,
        name: &'static str,
        brief: &'static str,
        handler: CommandFn,
    ) -> Result<usize, ConsoleError> {
        if name.is_empty() {
            return Err(ConsoleError::MissingArg);
        }
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(CommandSlot {
                    name,
                    brief,
                    handler,
                });
                log::debug!("command registered: {}", name);
                return Ok(i);
            }
        }
        Err(ConsoleError::TableFull)
    }

    /// Free the slot holding `name`, making it reusable.
    pub fn unregister(&mut self, name: &str) -> Result<usize, ConsoleError> {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.as_ref().is_some_and(|s| s.name == name) {
                *slot = None;
                log::debug!("command unregistered: {}", name);
                return Ok(i);
            }
        }
        Err(ConsoleError::UnknownCommand)
    }

    /// Invoke the handler registered for `argv[0]`.
    ///
    /// An empty argv is a no-op; an unmatched name is an error.
    pub fn dispatch(&self, args: &[&str], out: &mut dyn Write) -> Result<(), ConsoleError> {
        let Some(&name) = args.first() else {
            return Ok(());
        };
        if name.is_empty() {
            return Ok(());
        }
        match self.lookup(name) {
            Some(slot) => (slot.handler)(args, out),
            None => Err(ConsoleError::UnknownCommand),
        }
    }

    /// First occupied slot with a matching name.
    pub fn lookup(&self, name: &str) -> Option<&CommandSlot> {
        self.slots.iter().flatten().find(|s| s.name == name)
    }

    /// Registered command names, in slot order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().flatten().map(|s| s.name)
    }

    /// Occupied slots, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSlot> {
        self.slots.iter().flatten()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
