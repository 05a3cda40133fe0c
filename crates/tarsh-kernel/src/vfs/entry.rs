//! Archive member metadata.

/// Kind of archive member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One archive member, as seen by the shell.
///
/// Only the name and kind are modelled. The kind comes from the archive
/// header and is trusted as-is: a member that prefixes other members is not
/// promoted to a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Normalized archive-relative path (the key it is stored under).
    pub path: String,
    /// Kind of entry, fixed when the archive is loaded.
    pub kind: EntryKind,
}

impl Entry {
    /// Create a file entry.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
