//! Launcher backed by the host operating system

use crate::config::ProgramSpec;
use crate::error::{Error, Result};
use crate::platform::traits::Launcher;
use std::io;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// Launches through `std::process` and the platform opener
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn spawn_child(spec: &ProgramSpec) -> Result<Child> {
        Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::SpawnFailed {
                program: spec.display(),
                reason: e.to_string(),
            })
    }

    /// Collect the child's exit status off-thread so it never lingers as a
    /// zombie. Nothing waits on the returned handle in normal operation.
    fn reap(name: String, mut child: Child) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
        thread::Builder::new()
            .name("launchterm-reaper".to_string())
            .spawn(move || {
                let status = child.wait();
                match &status {
                    Ok(status) => trace!("'{}' exited with {}", name, status),
                    Err(e) => debug!("Failed to reap '{}': {}", name, e),
                }
                status
            })
    }

    /// Command that hands `target` to the desktop's default handler
    fn opener(target: &str) -> Result<ProgramSpec> {
        #[cfg(windows)]
        {
            // `start` treats the first quoted argument as a window title
            Ok(ProgramSpec::new("cmd", &["/C", "start", "", target]))
        }

        #[cfg(target_os = "macos")]
        {
            Ok(ProgramSpec::new("open", &[target]))
        }

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            Ok(ProgramSpec::new("xdg-open", &[target]))
        }

        #[cfg(not(any(windows, unix)))]
        {
            let _ = target;
            Err(Error::UnsupportedPlatform {
                platform: std::env::consts::OS.to_string(),
            })
        }
    }
}

impl Launcher for SystemLauncher {
    fn spawn_detached(&self, spec: &ProgramSpec) -> Result<()> {
        let child = Self::spawn_child(spec)?;
        debug!("Spawned '{}' (pid {})", spec.display(), child.id());

        if let Err(e) = Self::reap(spec.display(), child) {
            // The program is running either way
            warn!(error = %e, "Could not start reaper for '{}'", spec.display());
        }
        Ok(())
    }

    fn open_uri(&self, uri: &str) -> Result<()> {
        validate_uri(uri)?;
        let opener = Self::opener(uri)?;
        self.spawn_detached(&opener).map_err(|e| Error::OpenFailed {
            target: uri.to_string(),
            reason: e.to_string(),
        })
    }

    fn open_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        let target = path.to_string_lossy();
        let opener = Self::opener(&target)?;
        self.spawn_detached(&opener).map_err(|e| Error::OpenFailed {
            target: target.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Reject URIs no opener could make sense of
///
/// Only syntax is checked here; whether the host exists is for the browser
/// to decide.
pub fn validate_uri(uri: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidUri {
        uri: uri.to_string(),
        reason: reason.to_string(),
    };

    if uri.is_empty() {
        return Err(invalid("empty URI"));
    }
    if let Some(c) = uri.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid(&format!("illegal character {:?}", c)));
    }

    let (scheme, rest) = uri.split_once("://").ok_or_else(|| invalid("missing scheme"))?;
    let scheme_ok = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_ok {
        return Err(invalid("malformed scheme"));
    }
    if rest.is_empty() {
        return Err(invalid("nothing after scheme"));
    }

    Ok(())
}
