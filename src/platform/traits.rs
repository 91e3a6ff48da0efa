//! Platform-specific operation traits
//!
//! Every side effect a command can have goes through [`Launcher`], so
//! handlers can be exercised without touching the desktop.

use crate::config::ProgramSpec;
use crate::error::Result;
use std::path::Path;

/// Starts external programs and hands URIs/paths to the desktop
///
/// All operations are fire-and-forget: success means the launch was handed
/// off, not that the launched program did anything.
pub trait Launcher {
    /// Start a program without keeping a handle to it
    fn spawn_detached(&self, spec: &ProgramSpec) -> Result<()>;

    /// Open a URI in the default handler (normally the browser)
    fn open_uri(&self, uri: &str) -> Result<()>;

    /// Open a file or executable with the default handler
    fn open_path(&self, path: &Path) -> Result<()>;
}
