//! The command interpreter
//!
//! Turns one submitted line into a [`CommandResult`]. The interpreter holds
//! no mutable state: history and transcript belong to the session that
//! calls it.

use std::rc::Rc;

use super::parser::parse_line;
use super::registry::{ActionRegistry, HandlerContext};
use super::result::CommandResult;
use crate::config::Config;
use crate::platform::{Launcher, Platform};

/// Text-in, text-out command dispatcher
pub struct Interpreter {
    registry: ActionRegistry,
    launcher: Rc<dyn Launcher>,
    config: Config,
}

impl Interpreter {
    /// Standard commands, host launcher
    pub fn new(config: Config) -> Self {
        Self::with_launcher(config, Platform::launcher())
    }

    /// Standard commands, custom launcher
    pub fn with_launcher(config: Config, launcher: Rc<dyn Launcher>) -> Self {
        Self::with_registry(config, launcher, ActionRegistry::with_defaults())
    }

    pub fn with_registry(
        config: Config,
        launcher: Rc<dyn Launcher>,
        registry: ActionRegistry,
    ) -> Self {
        Self {
            registry,
            launcher,
            config,
        }
    }

    /// Interpret one line
    ///
    /// Never fails. Unknown keywords (blank input included) echo the line
    /// back exactly as typed.
    pub fn interpret(&self, line: &str) -> CommandResult {
        let parsed = parse_line(line);

        let Some(spec) = self.registry.lookup(&parsed.keyword) else {
            debug!("Unknown command: {:?}", line);
            return CommandResult::error(format!("Unknown command: {}", line));
        };

        if !spec.takes_argument && parsed.argument.is_some() {
            debug!("'{}' ignores its argument {:?}", spec.name, parsed.argument());
        }
        debug!("Dispatching '{}'", spec.name);

        let ctx = HandlerContext {
            launcher: self.launcher.as_ref(),
            config: &self.config,
        };
        (spec.handler)(&ctx, parsed.argument())
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
