//! Command parsing, dispatch and handlers
//!
//! - [`parser`] splits a line into keyword and argument
//! - [`registry`] maps keywords to handlers
//! - [`handlers`] implements each command
//! - [`interpreter`] ties them together behind [`Interpreter::interpret`]

pub mod handlers;
pub mod interpreter;
pub mod parser;
pub mod registry;
pub mod result;

pub use interpreter::Interpreter;
pub use parser::{parse_line, ParsedCommand};
pub use registry::{ActionRegistry, CommandSpec, HandlerContext, HandlerFn, HELP_TEXT};
pub use result::{CommandResult, Outcome, SessionEffect};
