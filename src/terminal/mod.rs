//! Terminal session state
//!
//! This module holds the pieces a front end drives directly: the session,
//! its transcript, and the input line model.

pub mod input;
pub mod session;
pub mod transcript;

pub use input::{InputLine, Key};
pub use session::{KeyResponse, TerminalSession};
pub use transcript::{EntryKind, Transcript, TranscriptEntry};
