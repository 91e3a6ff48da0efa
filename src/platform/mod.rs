//! Platform abstraction layer
//!
//! This module provides a unified interface for the desktop operations
//! commands perform, hiding how each OS starts programs and opens URIs.

mod recording;
mod system;
mod traits;

pub use recording::{LaunchRequest, RecordingLauncher};
pub use system::{validate_uri, SystemLauncher};
pub use traits::*;

use std::rc::Rc;

/// Platform implementation factory
pub struct Platform;

impl Platform {
    /// Get the launcher for the host operating system
    pub fn launcher() -> Rc<dyn Launcher> {
        Rc::new(SystemLauncher::new())
    }

    /// Get a launcher that only records what it would have done
    pub fn dry_run_launcher() -> Rc<dyn Launcher> {
        Rc::new(RecordingLauncher::new())
    }
}
