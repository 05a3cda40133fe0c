//! Archive-backed filesystem.
//!
//! Populated once from the members of an archive. The set of paths only
//! changes through [`ArchiveFs::rename`].

use indexmap::IndexMap;
use std::path::Path;

use super::entry::Entry;
use super::path::{self, ROOT};
use super::{VfsError, VfsResult};
use crate::archive::{self, ArchiveError};

/// In-memory filesystem materialized from an archive.
///
/// Entries keep archive order, which is also listing order.
#[derive(Debug, Clone, Default)]
pub struct ArchiveFs {
    entries: IndexMap<String, Entry>,
}

impl ArchiveFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filesystem from loader output.
    ///
    /// Paths are normalized. A member that names the root is skipped; a
    /// repeated path keeps its first position and takes the later kind.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut map = IndexMap::new();
        for entry in entries {
            let key = path::normalize(&entry.path);
            if path::is_root(&key) {
                tracing::warn!(member = %entry.path, "skipping archive member that names the root");
                continue;
            }
            map.insert(
                key.clone(),
                Entry {
                    path: key,
                    kind: entry.kind,
                },
            );
        }
        Self { entries: map }
    }

    /// Load a filesystem from raw archive bytes (tar or gzip-compressed tar).
    pub fn from_archive_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        let entries = archive::read_entries(bytes)?;
        Ok(Self::from_entries(entries))
    }

    /// Load a filesystem from an archive on disk.
    ///
    /// The file is read completely and closed before parsing starts.
    pub fn from_archive_file(path: &Path) -> Result<Self, ArchiveError> {
        let bytes = archive::read_file(path)?;
        let fs = Self::from_archive_bytes(&bytes)?;
        tracing::info!(archive = %path.display(), entries = fs.len(), "archive loaded");
        Ok(fs)
    }

    /// Look up an entry by path (normalized before lookup).
    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.entries.get(&path::normalize(path))
    }

    /// True if `path` names an entry.
    pub fn exists(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// True if `path` is the root or a directory entry.
    pub fn is_dir(&self, path: &str) -> bool {
        let normalized = path::normalize(path);
        path::is_root(&normalized) || self.entries.get(&normalized).is_some_and(Entry::is_dir)
    }

    /// Entries visible from `cwd`.
    ///
    /// This is every directory in the archive, plus every entry whose path
    /// starts with `cwd` as a plain string prefix. It is not a one-level
    /// listing: descendants and unrelated names sharing the prefix are
    /// included too.
    pub fn list(&self, cwd: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|(key, entry)| entry.is_dir() || key.starts_with(cwd))
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Resolve `target` against `cwd` and return the new directory.
    ///
    /// Fails with [`VfsError::NotFound`] unless the result is the root or
    /// a directory entry.
    pub fn change_directory(&self, cwd: &str, target: &str) -> VfsResult<String> {
        let resolved = path::resolve(cwd, target);
        if self.is_dir(&resolved) {
            Ok(resolved)
        } else {
            Err(VfsError::NotFound(target.to_string()))
        }
    }

    /// Move the entry at `source` to `destination`.
    ///
    /// Both paths are taken relative to the archive root. The source key is
    /// removed and the entry reinserted under the destination, overwriting
    /// whatever was there. Only the named entry moves; entries below a moved
    /// directory keep their keys.
    pub fn rename(&mut self, source: &str, destination: &str) -> VfsResult<()> {
        let from = path::normalize(source);
        let to = path::normalize(destination);

        if path::is_root(&to) {
            return Err(VfsError::InvalidPath(format!(
                "cannot replace {ROOT} with {source}"
            )));
        }

        let mut entry = self
            .entries
            .shift_remove(&from)
            .ok_or_else(|| VfsError::NotFound(source.to_string()))?;
        entry.path = to.clone();

        if let Some(existing) = self.entries.get_mut(&to) {
            tracing::debug!(destination = %to, "rename overwrites existing entry");
            *existing = entry;
        } else {
            self.entries.insert(to, entry);
        }
        Ok(())
    }

    /// Iterate entries in archive order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
