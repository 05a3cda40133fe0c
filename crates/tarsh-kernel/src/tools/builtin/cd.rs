//! cd — Change working directory.

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool};

/// Cd tool: change current working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn usage(&self) -> &str {
        "cd <path>"
    }

    fn execute(&self, args: &[&str], ctx: &mut ExecContext) -> ExecResult {
        let &[path] = args else {
            return self.usage_error();
        };

        // Failed navigation is reported but not recorded.
        match ctx.fs.change_directory(&ctx.cwd, path) {
            Ok(new_dir) => {
                ctx.log.append(format!("Changed directory to {new_dir}"));
                ctx.set_cwd(new_dir);
                ExecResult::success("")
            }
            Err(_) => ExecResult::failure(
                EXIT_FAILURE,
                format!("cd: no such file or directory: {path}"),
            ),
        }
    }
}
