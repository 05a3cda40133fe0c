//! Virtual filesystem for tarsh.
//!
//! The VFS is a flat, ordered map of archive members:
//!
//! ```text
//! a            -> Directory
//! a/b.txt      -> File
//! docs         -> Directory
//! ```
//!
//! Keys are archive-relative; the root `/` is implicit and never stored.
//! Nothing here touches the real filesystem after the archive is loaded.

mod archive_fs;
mod entry;
pub mod path;

pub use archive_fs::ArchiveFs;
pub use entry::{Entry, EntryKind};

use thiserror::Error;

/// Result type for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("no such file or directory: {0}")]
    NotFound(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
}
