//! Terminal session
//!
//! Owns everything that changes while the terminal is open: the history
//! buffer, the transcript and the input line. All calls come from one
//! event-handling thread.

use std::rc::Rc;

use super::input::{InputLine, Key};
use super::transcript::Transcript;
use crate::commands::{CommandResult, Interpreter, SessionEffect};
use crate::config::Config;
use crate::history::HistoryBuffer;
use crate::platform::{Launcher, Platform};

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// The input line changed (or nothing happened)
    Edited,
    /// A line was submitted
    Submitted(CommandResult),
    /// The end-of-session keybinding closed the session
    Closed,
}

/// One open terminal
pub struct TerminalSession {
    interpreter: Interpreter,
    history: HistoryBuffer,
    transcript: Transcript,
    input: InputLine,
    closed: bool,
}

impl TerminalSession {
    /// Session using the host launcher
    pub fn new(config: Config) -> Self {
        Self::with_launcher(config, Platform::launcher())
    }

    pub fn with_launcher(config: Config, launcher: Rc<dyn Launcher>) -> Self {
        let transcript = Transcript::new(config.terminal.welcome_message.clone());
        Self::with_interpreter(Interpreter::with_launcher(config, launcher), transcript)
    }

    pub fn with_interpreter(interpreter: Interpreter, transcript: Transcript) -> Self {
        Self {
            interpreter,
            history: HistoryBuffer::new(),
            transcript,
            input: InputLine::new(),
            closed: false,
        }
    }

    /// Submit a line as if typed and entered
    ///
    /// The line is always recorded in history and echoed. `cls` clears the
    /// transcript (its own echo included) before the result is appended;
    /// history is untouched.
    pub fn submit(&mut self, line: &str) -> CommandResult {
        self.history.record(line);
        let echo = format!("{}{}", self.interpreter.config().terminal.echo_prefix, line);
        self.transcript.push_echo(echo);

        let result = self.interpreter.interpret(line);

        if result.effect == SessionEffect::ClearTranscript {
            self.transcript.clear();
        }
        self.transcript
            .push_output(result.outcome, result.display_text.clone());

        if result.is_exit() {
            info!("Session closed by exit command");
            self.closed = true;
        }
        result
    }

    /// Feed one key press from the front end
    pub fn handle_key(&mut self, key: Key) -> KeyResponse {
        match key {
            Key::Char(c) => self.input.insert(c),
            Key::Backspace => self.input.backspace(),
            Key::Up => {
                if let Some(text) = self.history.recall_previous() {
                    self.input.set_text(text);
                }
            }
            Key::Down => {
                if let Some(text) = self.history.recall_next() {
                    self.input.set_text(text);
                }
            }
            Key::Enter => {
                let line = self.input.take();
                return KeyResponse::Submitted(self.submit(&line));
            }
            Key::CtrlD => {
                info!("Session closed by Ctrl+D");
                self.closed = true;
                return KeyResponse::Closed;
            }
        }
        KeyResponse::Edited
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}
