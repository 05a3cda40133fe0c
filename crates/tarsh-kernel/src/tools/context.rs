//! Execution context for tools.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::log::ActionLog;
use crate::vfs::ArchiveFs;
use crate::vfs::path::ROOT;

/// Execution context passed to tools.
///
/// Owns all mutable session state: the filesystem, the current directory
/// cursor and the action log.
pub struct ExecContext {
    /// Archive-backed filesystem.
    pub fs: ArchiveFs,
    /// Current working directory: `/` or a directory entry's path.
    pub cwd: String,
    /// Actions recorded so far.
    pub log: ActionLog,
    /// Date source for `cal`.
    pub clock: Arc<dyn Clock>,
}

impl ExecContext {
    /// Create a context at the root, using the system clock.
    pub fn new(fs: ArchiveFs) -> Self {
        Self::with_clock(fs, Arc::new(SystemClock))
    }

    /// Create a context with a specific clock.
    pub fn with_clock(fs: ArchiveFs, clock: Arc<dyn Clock>) -> Self {
        Self {
            fs,
            cwd: ROOT.to_string(),
            log: ActionLog::new(),
            clock,
        }
    }

    /// Change the current working directory.
    pub fn set_cwd(&mut self, path: String) {
        self.cwd = path;
    }
}

impl std::fmt::Debug for ExecContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecContext")
            .field("cwd", &self.cwd)
            .field("entries", &self.fs.len())
            .field("log", &self.log.len())
            .finish()
    }
}
