//! Archive loader.
//!
//! Turns archive bytes into a flat list of [`Entry`] values: a path and
//! whether the member is a directory. Plain tar and gzip-compressed tar are
//! recognised; the compression is detected from the leading bytes, not the
//! file name.

use flate2::read::GzDecoder;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::vfs::Entry;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Errors raised while loading an archive. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("cannot read archive {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed archive: {0}")]
    Malformed(#[source] io::Error),
}

/// Container format of an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Tar,
    TarGz,
}

impl ArchiveFormat {
    /// Detect the format from the first bytes of the archive.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(&GZIP_MAGIC) {
            ArchiveFormat::TarGz
        } else {
            ArchiveFormat::Tar
        }
    }
}

/// Read an archive file completely into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ArchiveError> {
    std::fs::read(path).map_err(|source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// List the members of an in-memory archive, in archive order.
pub fn read_entries(bytes: &[u8]) -> Result<Vec<Entry>, ArchiveError> {
    let format = ArchiveFormat::detect(bytes);
    tracing::debug!(?format, size = bytes.len(), "reading archive");
    match format {
        ArchiveFormat::Tar => read_tar(bytes),
        ArchiveFormat::TarGz => read_tar(GzDecoder::new(bytes)),
    }
}

fn read_tar<R: Read>(reader: R) -> Result<Vec<Entry>, ArchiveError> {
    let mut archive = tar::Archive::new(reader);
    let mut entries = Vec::new();

    for member in archive.entries().map_err(ArchiveError::Malformed)? {
        let member = member.map_err(ArchiveError::Malformed)?;
        let name = member
            .path()
            .map_err(ArchiveError::Malformed)?
            .to_string_lossy()
            .into_owned();

        if member.header().entry_type().is_dir() {
            entries.push(Entry::directory(name));
        } else {
            entries.push(Entry::file(name));
        }
    }

    Ok(entries)
}
