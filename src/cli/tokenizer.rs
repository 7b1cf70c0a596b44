//! Command line tokenizer
//!
//! Splits a finished line into argument slices. Whitespace separates,
//! double quotes span separators, `;` ends a command group, a leading `#`
//! comments out the line. No copies: tokens borrow from the input.

/// Maximum tokens per command group; extras are silently dropped.
pub const MAX_TOKENS: usize = 16;

/// One tokenized command group.
#[derive(Debug, Clone)]
pub struct TokenizedLine<'a> {
    /// Argument slices in input order, quotes stripped.
    pub args: heapless::Vec<&'a str, MAX_TOKENS>,
    /// Unprocessed text after a `;` separator, for the caller to re-tokenize.
    pub rest: Option<&'a str>,
}

impl<'a> TokenizedLine<'a> {
    /// True when the group holds no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Argument count.
    pub fn argc(&self) -> usize {
        self.args.len()
    }
}

fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Split one command group off the input line.
///
/// Consecutive separators collapse; an unterminated quote closes at the end
/// of the string; a quote also ends any token in progress. A quoted empty
/// string is a deliberate empty argument and is kept.
pub fn tokenize(line: &str) -> TokenizedLine<'_> {
    let bytes = line.as_bytes();
    let mut args: heapless::Vec<&str, MAX_TOKENS> = heapless::Vec::new();
    let mut rest = None;

    // Comment line: first non-separator byte is '#'
    let mut lead = 0;
    while lead < bytes.len() && is_separator(bytes[lead]) {
        lead += 1;
    }
    if lead < bytes.len() && bytes[lead] == b'#' {
        return TokenizedLine { args, rest };
    }

    let mut i = lead;
    while i < bytes.len() {
        match bytes[i] {
            b if is_separator(b) => i += 1,

            b';' => {
                rest = Some(&line[i + 1..]);
                break;
            }

            b'"' => {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end] != b'"' {
                    end += 1;
                }
                push_token(&mut args, &line[start..end]);
                i = if end < bytes.len() { end + 1 } else { end };
            }

            _ => {
                let start = i;
                while i < bytes.len()
                    && !is_separator(bytes[i])
                    && bytes[i] != b'"'
                    && bytes[i] != b';'
                {
                    i += 1;
                }
                push_token(&mut args, &line[start..i]);
            }
        }
    }

    TokenizedLine { args, rest }
}

fn push_token<'a>(args: &mut heapless::Vec<&'a str, MAX_TOKENS>, token: &'a str) {
    if args.push(token).is_err() {
        log::trace!("token dropped, group full");
    }
}
