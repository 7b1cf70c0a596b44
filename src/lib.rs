//! # mcu-console
//!
//! Interactive serial console for MCU-class firmware.
//!
//! ## Architecture
//!
//! One byte flows all the way through before the next is read:
//!
//! ```text
//! byte source → LineEditor → Tokenizer → CommandRegistry / OptionSpec → handler
//! ```
//!
//! The byte source and all terminal output stay on the caller's side of the
//! fence: input arrives through [`Console::feed`] (0xFF = no data), output
//! leaves through a caller-supplied `core::fmt::Write`. No global state;
//! every console instance owns its buffers.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod cli;
pub mod console;

pub use cli::{parse_args, tokenize, CommandRegistry, OptionKind, OptionSpec};
pub use console::{Console, ConsoleError, EditorEvent, LineEditor};
