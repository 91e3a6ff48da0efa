//! Terminal styling for transcript entries
//!
//! Front ends that print to an ANSI terminal use this to colour the banner,
//! the command echo and command results, mirroring the pane colours of the
//! desktop terminal (orange banner, bold white echo, green output).

use serde::{Deserialize, Serialize};

use crate::commands::Outcome;
use crate::terminal::EntryKind;

const RESET: &str = "\x1b[0m";

/// Named colors understood by the style layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsiColor {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Orange,
}

impl AnsiColor {
    /// SGR parameter selecting this foreground color
    fn sgr(self) -> &'static str {
        match self {
            AnsiColor::Default => "39",
            AnsiColor::Black => "30",
            AnsiColor::Red => "31",
            AnsiColor::Green => "32",
            AnsiColor::Yellow => "33",
            AnsiColor::Blue => "34",
            AnsiColor::Magenta => "35",
            AnsiColor::Cyan => "36",
            AnsiColor::White => "97",
            // 256-color orange
            AnsiColor::Orange => "38;5;214",
        }
    }
}

/// Foreground color plus weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub color: AnsiColor,
    #[serde(default)]
    pub bold: bool,
}

impl Style {
    pub const fn new(color: AnsiColor, bold: bool) -> Self {
        Self { color, bold }
    }

    /// Wrap `text` in the escape sequences for this style
    pub fn paint(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let bold = if self.bold { "1;" } else { "" };
        format!("\x1b[{}{}m{}{}", bold, self.color.sgr(), text, RESET)
    }
}

/// Styles for each kind of transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptStyle {
    pub banner: Style,
    pub echo: Style,
    pub ok: Style,
    pub error: Style,
}

impl Default for TranscriptStyle {
    fn default() -> Self {
        Self {
            banner: Style::new(AnsiColor::Orange, true),
            echo: Style::new(AnsiColor::White, true),
            ok: Style::new(AnsiColor::Green, false),
            error: Style::new(AnsiColor::Red, false),
        }
    }
}

impl TranscriptStyle {
    /// Style used for an entry kind
    pub fn for_kind(&self, kind: EntryKind) -> Style {
        match kind {
            EntryKind::Banner => self.banner,
            EntryKind::Echo => self.echo,
            EntryKind::Output(Outcome::Error) => self.error,
            EntryKind::Output(_) => self.ok,
        }
    }

    /// Render `text`, colored only when `color` is set
    pub fn render(&self, kind: EntryKind, text: &str, color: bool) -> String {
        if color {
            self.for_kind(kind).paint(text)
        } else {
            text.to_string()
        }
    }
}
