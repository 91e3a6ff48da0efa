//! Scrollback transcript
//!
//! The transcript is what the user sees: a fixed banner followed by each
//! submitted line's echo and its result. It is separate from the history
//! buffer, and clearing it leaves history alone.

use crate::commands::Outcome;

/// What a transcript entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Banner,
    /// The submitted line, prefixed
    Echo,
    /// A command's display text
    Output(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
}

/// Banner plus ordered entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    banner: String,
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new(banner: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
            entries: Vec::new(),
        }
    }

    pub fn push_echo(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            kind: EntryKind::Echo,
            text: text.into(),
        });
    }

    pub fn push_output(&mut self, outcome: Outcome, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            kind: EntryKind::Output(outcome),
            text: text.into(),
        });
    }

    /// Drop everything after the banner
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Entries after the banner, oldest first
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full transcript text, one newline after every entry
    pub fn render(&self) -> String {
        let mut out = self.banner.clone();
        for entry in &self.entries {
            out.push_str(&entry.text);
            out.push('\n');
        }
        out
    }
}
