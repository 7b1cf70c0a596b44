//! Command history with ring buffer
//!
//! FIFO ring of submitted lines, bounded both by entry count and by an
//! aggregate byte budget. Oldest entries are evicted first, whole entries
//! only.

use super::line_buffer::LINE_SIZE;

/// Number of history entries retained.
pub const HISTORY_DEPTH: usize = 8;

/// Default aggregate byte budget across all retained entries.
pub const HISTORY_BYTES: usize = 512;

/// Command history ring buffer.
///
/// `used_bytes` always equals the sum of the stored entries' lengths.
pub struct HistoryRing {
    /// Ring of command lines, oldest at the front.
    entries: heapless::Deque<heapless::String<LINE_SIZE>, HISTORY_DEPTH>,
    /// Aggregate byte limit.
    byte_budget: usize,
    /// Bytes currently stored.
    used_bytes: usize,
}

impl HistoryRing {
    /// Create an empty history with the default byte budget.
    pub const fn new() -> Self {
        Self::with_byte_budget(HISTORY_BYTES)
    }

    /// Create an empty history with a caller-chosen byte budget.
    pub const fn with_byte_budget(byte_budget: usize) -> Self {
        Self {
            entries: heapless::Deque::new(),
            byte_budget,
            used_bytes: 0,
        }
    }

    /// Store a copy of a submitted line at the head of the ring.
    ///
    /// Empty lines are ignored; over-long lines are truncated to the entry
    /// size. After storing, oldest entries are evicted one at a time until
    /// both the count and byte bounds hold again. A line larger than the
    /// whole budget therefore evicts itself, leaving the ring empty.
    pub fn push(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        let mut entry: heapless::String<LINE_SIZE> = heapless::String::new();
        let copy_len = line.len().min(LINE_SIZE);
        let _ = entry.push_str(&line[..copy_len]);

        // Count bound: make room before storing.
        if self.entries.is_full() {
            self.evict_oldest();
        }

        self.used_bytes += entry.len();
        let _ = self.entries.push_back(entry);

        // Byte bound: re-checked after every single eviction.
        while self.used_bytes > self.byte_budget && !self.entries.is_empty() {
            self.evict_oldest();
        }
    }

    /// Recall the entry `depth` steps back, without mutating the ring.
    ///
    /// Depth 0 means "not recalling" and yields `None`; depth 1 is the most
    /// recent entry; depths beyond the current count clamp to the oldest.
    pub fn pull(&self, depth: usize) -> Option<&str> {
        if depth == 0 || self.entries.is_empty() {
            return None;
        }
        let clamped = depth.min(self.entries.len());
        self.entries
            .iter()
            .nth(self.entries.len() - clamped)
            .map(|s| s.as_str())
    }

    /// Number of retained entries.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Bytes currently stored across all entries.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Aggregate byte limit.
    pub fn byte_budget(&self) -> usize {
        self.byte_budget
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.used_bytes = 0;
    }

    /// Iterate retained entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    fn evict_oldest(&mut self) {
        if let Some(old) = self.entries.pop_front() {
            self.used_bytes -= old.len();
            log::trace!("history evicted {} bytes", old.len());
        }
    }
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new()
    }
}
