//! Action registry
//!
//! Maps canonical (lowercase) command names to their handlers. The registry
//! is assembled once and never changes afterwards.

use std::collections::HashMap;

use super::handlers;
use super::result::CommandResult;
use crate::config::Config;
use crate::platform::Launcher;

/// Command reference printed by `help`
pub const HELP_TEXT: &str = "Available commands(Commands are case insensitive):\n\
date - Display current date and time.\n\
open [website] - Open a website in the default web browser.\n\
calc - Open the calculator.\n\
notes - Open Notepad.\n\
files - Open File Explorer.\n\
cls - Clear the commands.\n\
moodle - Open the WCE Moodle website.\n\
erp - Open the WCE ERP website.\n\
slogin - Open the WCE Student Login website.\n\
word - Open Microsoft Word.\n\
ppt - Open Microsoft PowerPoint.\n\
shutdown - Shutdown the pc\n\
restart - Restart the pc\n\
exit - Close the terminal.\n";

/// What a handler gets to work with besides its argument
pub struct HandlerContext<'a> {
    pub launcher: &'a dyn Launcher,
    pub config: &'a Config,
}

/// Handler signature shared by every command
pub type HandlerFn = fn(&HandlerContext<'_>, Option<&str>) -> CommandResult;

/// One registry entry
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// Canonical lowercase name
    pub name: &'static str,
    /// Whether the handler reads its argument
    pub takes_argument: bool,
    pub handler: HandlerFn,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("takes_argument", &self.takes_argument)
            .finish()
    }
}

impl CommandSpec {
    pub const fn new(name: &'static str, handler: HandlerFn) -> Self {
        Self {
            name,
            takes_argument: false,
            handler,
        }
    }

    pub const fn with_argument(name: &'static str, handler: HandlerFn) -> Self {
        Self {
            name,
            takes_argument: true,
            handler,
        }
    }
}

/// The standard command table
static DEFAULT_COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("date", handlers::date),
    CommandSpec::with_argument("open", handlers::open),
    CommandSpec::new("calc", handlers::calc),
    CommandSpec::new("notes", handlers::notes),
    CommandSpec::new("files", handlers::files),
    CommandSpec::new("cls", handlers::cls),
    CommandSpec::new("moodle", handlers::moodle),
    CommandSpec::new("erp", handlers::erp),
    CommandSpec::new("slogin", handlers::slogin),
    CommandSpec::new("word", handlers::word),
    CommandSpec::new("ppt", handlers::ppt),
    CommandSpec::new("shutdown", handlers::shutdown),
    CommandSpec::new("restart", handlers::restart),
    CommandSpec::new("help", handlers::help),
    CommandSpec::new("exit", handlers::exit),
];

/// Keyword → handler table
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    commands: HashMap<&'static str, CommandSpec>,
}

impl ActionRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard command table
    pub fn with_defaults() -> Self {
        DEFAULT_COMMANDS
            .iter()
            .fold(Self::new(), |registry, spec| registry.with(*spec))
    }

    /// Add (or replace) an entry while building the registry
    pub fn with(mut self, spec: CommandSpec) -> Self {
        debug_assert_eq!(spec.name, spec.name.to_lowercase());
        self.commands.insert(spec.name, spec);
        self
    }

    /// Look up an already-normalized keyword
    pub fn lookup(&self, keyword: &str) -> Option<&CommandSpec> {
        self.commands.get(keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.commands.contains_key(keyword)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
