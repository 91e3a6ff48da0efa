//! LaunchTerm - a keyword-driven command terminal
//!
//! This library turns free-text command lines into desktop actions (open a
//! website, start the calculator, shut the machine down) and a transcript
//! of what happened.
//!
//! ## Module Organization
//!
//! - [`commands`] - Parsing, the action registry, handlers and the interpreter
//! - [`history`] - Append-only command history with up/down recall
//! - [`terminal`] - Session state: transcript, input line, key handling
//! - [`platform`] - The [`Launcher`] boundary to the operating system
//! - [`config`] - Configuration structures and file loading
//! - [`ui`] - ANSI styling for terminal front ends
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use launchterm::{Config, TerminalSession};
//!
//! let mut session = TerminalSession::new(Config::default());
//! let result = session.submit("open example.com");
//! println!("{}", result.display_text);
//! ```
//!
//! ## Threading Model
//!
//! Everything here is synchronous and single-threaded. Launched programs are
//! detached: the only other thread is a reaper per launch that collects the
//! exit status, and nothing reports it.

#[macro_use]
extern crate tracing;

pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod platform;
pub mod terminal;
pub mod ui;

pub use commands::{CommandResult, Interpreter, Outcome};
pub use config::loader::ConfigLoader;
pub use config::Config;
pub use error::{Error, Result};
pub use history::HistoryBuffer;
pub use platform::{Launcher, Platform};
pub use terminal::TerminalSession;

/// The current version of LaunchTerm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
