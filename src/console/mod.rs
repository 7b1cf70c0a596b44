//! Interactive console over a raw byte source
//!
//! Byte-at-a-time processing, single threaded.
//! Zero heap allocation - all buffers bounded.

pub mod ansi;
pub mod completion;
pub mod console;
pub mod editor;
pub mod error;
pub mod escape;
pub mod history;
pub mod line_buffer;

pub use completion::Completer;
pub use console::{Console, VERSION};
pub use editor::{EditorEvent, Line, LineEditor, DEFAULT_PROMPT};
pub use error::ConsoleError;
pub use escape::{Decoded, EscapeDecoder};
pub use history::{HistoryRing, HISTORY_BYTES, HISTORY_DEPTH};
pub use line_buffer::{LineBuffer, LINE_SIZE};
