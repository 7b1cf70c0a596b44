//! Command line processing: tokenizing, option schema, dispatch

pub mod builtins;
pub mod options;
pub mod registry;
pub mod tokenizer;

pub use options::{
    parse_args, print_help, OptionError, OptionKind, OptionSpec, Positionals, OPT_VALUES_MAX,
};
pub use registry::{CommandFn, CommandRegistry, CommandSlot, COMMAND_SLOTS};
pub use tokenizer::{tokenize, TokenizedLine, MAX_TOKENS};
