//! Launcher that records requests instead of performing them
//!
//! Backs `--dry-run` and the test suites.

use crate::config::ProgramSpec;
use crate::error::{Error, Result};
use crate::platform::traits::Launcher;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// One launch the interpreter asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRequest {
    Spawn(ProgramSpec),
    OpenUri(String),
    OpenPath(PathBuf),
}

/// Records every request; optionally fails all of them
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    requests: RefCell<Vec<LaunchRequest>>,
    failing: Cell<bool>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every operation reports failure
    pub fn failing() -> Self {
        let launcher = Self::new();
        launcher.set_failing(true);
        launcher
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<LaunchRequest> {
        self.requests.borrow().clone()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<LaunchRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.requests.borrow_mut().clear();
    }

    fn record(&self, request: LaunchRequest) -> Result<()> {
        info!("dry-run: {:?}", request);
        let target = match &request {
            LaunchRequest::Spawn(spec) => spec.display(),
            LaunchRequest::OpenUri(uri) => uri.clone(),
            LaunchRequest::OpenPath(path) => path.display().to_string(),
        };
        let spawn = matches!(request, LaunchRequest::Spawn(_));
        self.requests.borrow_mut().push(request);

        if !self.failing.get() {
            return Ok(());
        }
        if spawn {
            Err(Error::SpawnFailed {
                program: target,
                reason: "launcher configured to fail".to_string(),
            })
        } else {
            Err(Error::OpenFailed {
                target,
                reason: "launcher configured to fail".to_string(),
            })
        }
    }
}

impl Launcher for RecordingLauncher {
    fn spawn_detached(&self, spec: &ProgramSpec) -> Result<()> {
        self.record(LaunchRequest::Spawn(spec.clone()))
    }

    fn open_uri(&self, uri: &str) -> Result<()> {
        self.record(LaunchRequest::OpenUri(uri.to_string()))
    }

    fn open_path(&self, path: &Path) -> Result<()> {
        self.record(LaunchRequest::OpenPath(path.to_path_buf()))
    }
}
