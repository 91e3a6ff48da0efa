//! Configuration management for LaunchTerm
//!
//! Everything the command handlers need to know about the host machine
//! (program names, fixed websites, Office install paths) lives here, along
//! with the presentation settings used by terminal front ends.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::style::TranscriptStyle;

/// Banner printed at the top of every transcript
pub const WELCOME_MESSAGE: &str = "Welcome to the Terminal!\n\nTo know the commands type HELP!\n\n";

/// Main configuration structure for LaunchTerm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal session configuration
    pub terminal: TerminalConfig,

    /// `open` command configuration
    pub open: OpenConfig,

    /// External programs launched by commands
    pub programs: ProgramsConfig,

    /// Fixed websites
    pub sites: SitesConfig,

    /// Office application paths
    pub office: OfficeConfig,

    /// Presentation settings (never read by the interpreter)
    pub ui: UiConfig,
}

/// Terminal session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Banner kept at the top of the transcript, survives `cls`
    pub welcome_message: String,

    /// Prefix written before each submitted line in the transcript
    pub echo_prefix: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            welcome_message: WELCOME_MESSAGE.to_string(),
            echo_prefix: "> ".to_string(),
        }
    }
}

/// `open` command configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenConfig {
    /// Scheme prepended to arguments that have none
    pub default_scheme: String,
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            default_scheme: "https://".to_string(),
        }
    }
}

/// A program plus the fixed arguments it is started with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSpec {
    /// Program name (resolved through PATH) or absolute path
    pub program: String,

    /// Arguments passed verbatim
    #[serde(default)]
    pub args: Vec<String>,
}

impl ProgramSpec {
    /// Create a spec from a program and its arguments
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Render as a single shell-like string for logs
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// External programs launched by commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramsConfig {
    pub calculator: ProgramSpec,
    pub text_editor: ProgramSpec,
    pub file_browser: ProgramSpec,
    pub shutdown: ProgramSpec,
    pub restart: ProgramSpec,
}

impl Default for ProgramsConfig {
    #[cfg(windows)]
    fn default() -> Self {
        Self {
            calculator: ProgramSpec::new("calc", &[]),
            text_editor: ProgramSpec::new("notepad", &[]),
            file_browser: ProgramSpec::new("explorer", &[]),
            shutdown: ProgramSpec::new("shutdown", &["/s", "/t", "0"]),
            restart: ProgramSpec::new("shutdown", &["/r", "/t", "0"]),
        }
    }

    #[cfg(target_os = "macos")]
    fn default() -> Self {
        Self {
            calculator: ProgramSpec::new("open", &["-a", "Calculator"]),
            text_editor: ProgramSpec::new("open", &["-a", "TextEdit"]),
            file_browser: ProgramSpec::new("open", &["."]),
            shutdown: ProgramSpec::new("shutdown", &["-h", "now"]),
            restart: ProgramSpec::new("shutdown", &["-r", "now"]),
        }
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    fn default() -> Self {
        Self {
            calculator: ProgramSpec::new("gnome-calculator", &[]),
            text_editor: ProgramSpec::new("gedit", &[]),
            file_browser: ProgramSpec::new("xdg-open", &["."]),
            shutdown: ProgramSpec::new("shutdown", &["-h", "now"]),
            restart: ProgramSpec::new("shutdown", &["-r", "now"]),
        }
    }
}

/// Fixed websites opened by the `moodle`, `erp` and `slogin` commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitesConfig {
    pub moodle: String,
    pub erp: String,
    pub slogin: String,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            moodle: "http://115.247.30.149/".to_string(),
            erp: "http://wic.walchandsangli.ac.in/".to_string(),
            slogin: "https://uni.wcoeapps.in/landing".to_string(),
        }
    }
}

/// Office application paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeConfig {
    pub word: PathBuf,
    pub ppt: PathBuf,
}

impl Default for OfficeConfig {
    #[cfg(target_os = "macos")]
    fn default() -> Self {
        Self {
            word: PathBuf::from("/Applications/Microsoft Word.app"),
            ppt: PathBuf::from("/Applications/Microsoft PowerPoint.app"),
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn default() -> Self {
        Self {
            word: PathBuf::from(r"C:\Program Files\Microsoft Office\root\Office16\WINWORD.EXE"),
            ppt: PathBuf::from(r"C:\Program Files\Microsoft Office\root\Office16\POWERPNT.EXE"),
        }
    }
}

/// Presentation settings for terminal front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Emit ANSI colors
    pub color: bool,

    /// Per-entry styling
    pub style: TranscriptStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            style: TranscriptStyle::default(),
        }
    }
}
