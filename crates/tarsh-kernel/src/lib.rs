//! tarsh-kernel: the core of tarsh.
//!
//! This crate provides:
//!
//! - **Archive loader**: reads tar / tar.gz members into path + kind pairs
//! - **VFS**: an ordered, in-memory map of those members with a cd/ls/mv model
//! - **Builtins**: `ls`, `cd`, `mv`, `cal` behind a tool registry
//! - **Session**: the per-line state machine and its action log
//!
//! Input/output is left to the caller; see `tarsh-repl` for the shell.

pub mod archive;
pub mod clock;
pub mod log;
pub mod result;
pub mod session;
pub mod tools;
pub mod vfs;

pub use archive::ArchiveError;
pub use log::{ActionLog, LogError};
pub use result::ExecResult;
pub use session::{Session, Step};
pub use vfs::{ArchiveFs, Entry, EntryKind, VfsError};
