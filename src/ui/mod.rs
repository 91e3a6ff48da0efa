//! Presentation helpers for terminal front ends
//!
//! The interpreter core produces plain text; this module only decides how
//! that text looks when printed.

pub mod style;

pub use style::{AnsiColor, Style, TranscriptStyle};
