//! Command results

use serde::{Deserialize, Serialize};

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Command ran (or its external operation was handed off)
    Ok,
    /// Unknown command, missing argument, or failed external operation
    Error,
    /// The session should end
    Exit,
}

/// State change a command asks the owning session to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionEffect {
    #[default]
    None,
    /// Drop every transcript entry after the banner
    ClearTranscript,
}

/// Text and outcome produced for one submitted line
///
/// `display_text` is always present, error results included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub display_text: String,
    pub outcome: Outcome,
    #[serde(default)]
    pub effect: SessionEffect,
}

impl CommandResult {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            display_text: text.into(),
            outcome: Outcome::Ok,
            effect: SessionEffect::None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            display_text: text.into(),
            outcome: Outcome::Error,
            effect: SessionEffect::None,
        }
    }

    pub fn exit(text: impl Into<String>) -> Self {
        Self {
            display_text: text.into(),
            outcome: Outcome::Exit,
            effect: SessionEffect::None,
        }
    }

    /// Attach a session effect
    pub fn with_effect(mut self, effect: SessionEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Ok
    }

    pub fn is_error(&self) -> bool {
        self.outcome == Outcome::Error
    }

    pub fn is_exit(&self) -> bool {
        self.outcome == Outcome::Exit
    }
}
