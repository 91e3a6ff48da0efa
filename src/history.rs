//! Command history with up/down recall
//!
//! History is append-only for the life of a session. A cursor tracks
//! chronological browsing: `None` means the user is not browsing, `Some(i)`
//! points at entry `i`.

/// Submitted lines plus a browsing cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted line exactly as typed and stop browsing
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    /// Step toward older entries
    ///
    /// The first call lands on the newest entry; later calls move back one
    /// step and stay on the oldest entry once there. `None` when empty.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let position = match self.cursor {
            None => self.entries.len() - 1,
            Some(pos) => pos.saturating_sub(1),
        };
        self.cursor = Some(position);
        self.entries.get(position).map(String::as_str)
    }

    /// Step toward newer entries
    ///
    /// From the newest entry this stops browsing and returns `""` so the
    /// input field can be cleared. When not browsing, the next entry is the
    /// oldest one. `None` when empty.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let position = self.cursor.map_or(0, |pos| pos + 1);
        if position < self.entries.len() {
            self.cursor = Some(position);
            self.entries.get(position).map(String::as_str)
        } else {
            self.cursor = None;
            Some("")
        }
    }

    /// Stop browsing without recording anything
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}
