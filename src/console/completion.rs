//! Tab completion with cycling

/// Longest prefix remembered for cycle detection.
const PREFIX_SIZE: usize = 32;

/// Matches considered per completion pass.
const MAX_MATCHES: usize = 16;

/// Tab completion state
pub struct Completer {
    /// Prefix being completed (stored for cycle detection)
    prefix: heapless::String<PREFIX_SIZE>,
    /// Current match index for cycling
    match_idx: usize,
    /// Whether we're actively cycling
    cycling: bool,
}

impl Completer {
    /// Create new completer
    pub const fn new() -> Self {
        Self {
            prefix: heapless::String::new(),
            match_idx: 0,
            cycling: false,
        }
    }

    /// Complete prefix, cycling through matches on repeated calls
    ///
    /// Returns the completed candidate, or None if no match.
    pub fn complete<'a, I>(&mut self, prefix: &str, candidates: I) -> Option<&'a str>
    where
        I: Iterator<Item = &'a str>,
    {
        let same_prefix = self.prefix.as_str() == prefix;

        if !same_prefix {
            // New prefix, start fresh
            self.prefix.clear();
            let keep = prefix.len().min(PREFIX_SIZE);
            let _ = self.prefix.push_str(&prefix[..keep]);
            self.match_idx = 0;
            self.cycling = false;
        } else if self.cycling {
            // Same prefix, advance to next match
            self.match_idx += 1;
        }

        let mut matches: heapless::Vec<&'a str, MAX_MATCHES> = heapless::Vec::new();
        for c in candidates {
            if c.starts_with(prefix) {
                if matches.push(c).is_err() {
                    break;
                }
            }
        }

        if matches.is_empty() {
            self.cycling = false;
            return None;
        }

        // Wrap around
        if self.match_idx >= matches.len() {
            self.match_idx = 0;
        }

        self.cycling = true;
        Some(matches[self.match_idx])
    }

    /// Reset completion state
    pub fn reset(&mut self) {
        self.cycling = false;
        self.match_idx = 0;
    }
}

impl Default for Completer {
    fn default() -> Self {
        Self::new()
    }
}
