//! Input line editing
//!
//! A toolkit-agnostic model of the single-line command field. Front ends
//! translate their key events into [`Key`] and hand them to the session.

/// Keys the input line understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    /// Recall an older command
    Up,
    /// Recall a newer command
    Down,
    /// Submit the current text
    Enter,
    /// End-of-session keybinding
    CtrlD,
}

/// Current text of the command field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Replace the text, e.g. with a recalled history entry
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the text for submission, leaving the field empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
