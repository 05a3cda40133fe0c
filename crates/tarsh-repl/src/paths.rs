//! XDG Base Directory paths for tarsh state.
//!
//! | Purpose | XDG Variable | Default | tarsh Path |
//! |---------|--------------|---------|------------|
//! | History | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/tarsh/history.txt` |

use std::path::PathBuf;

use directories::BaseDirs;

/// Get the data directory for persistent state.
///
/// Uses `$XDG_DATA_HOME/tarsh` or falls back to `~/.local/share/tarsh`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| dirs_fallback().join(".local").join("share"))
        .join("tarsh")
}

/// Line-editing history file.
pub fn history_path() -> PathBuf {
    data_dir().join("history.txt")
}

/// Fallback home directory when BaseDirs fails.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
