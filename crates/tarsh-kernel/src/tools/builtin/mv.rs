//! mv — Rename an entry.

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool};
use crate::vfs::VfsError;

/// Mv tool: move an entry to a new path.
///
/// Paths are relative to the archive root, not the current directory.
pub struct Mv;

impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn usage(&self) -> &str {
        "mv <source> <destination>"
    }

    fn execute(&self, args: &[&str], ctx: &mut ExecContext) -> ExecResult {
        let &[src, dest] = args else {
            return self.usage_error();
        };

        match ctx.fs.rename(src, dest) {
            Ok(()) => {
                ctx.log.append(format!("Moved {src} to {dest}"));
                ExecResult::success("")
            }
            Err(VfsError::NotFound(_)) => ExecResult::failure(
                EXIT_FAILURE,
                format!("mv: cannot stat '{src}': No such file or directory"),
            ),
            Err(e) => ExecResult::failure(EXIT_FAILURE, format!("mv: {e}")),
        }
    }
}
