//! Command line parsing
//!
//! A line is split into a lowercase keyword and an optional trailing
//! argument. The argument is the untouched remainder after the first run of
//! whitespace, so `open my site.com` yields the argument `my site.com`.

/// A submitted line split into keyword and argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercased first token; empty only for blank input
    pub keyword: String,
    /// Remainder of the line, `None` when nothing follows the keyword
    pub argument: Option<String>,
}

impl ParsedCommand {
    /// Argument as a string slice
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

/// Split `line` into a [`ParsedCommand`]
///
/// Never fails: blank input produces an empty keyword, which no registry
/// entry matches.
pub fn parse_line(line: &str) -> ParsedCommand {
    let trimmed = line.trim();

    let (keyword, rest) = match trimmed.find(char::is_whitespace) {
        Some(split) => (&trimmed[..split], trimmed[split..].trim_start()),
        None => (trimmed, ""),
    };

    ParsedCommand {
        keyword: keyword.to_lowercase(),
        argument: if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        },
    }
}
