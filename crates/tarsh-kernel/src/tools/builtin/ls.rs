//! ls — List visible entries.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool};

/// Ls tool: print every entry visible from the current directory.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn usage(&self) -> &str {
        "ls"
    }

    fn execute(&self, args: &[&str], ctx: &mut ExecContext) -> ExecResult {
        if !args.is_empty() {
            return self.usage_error();
        }

        let names: Vec<&str> = ctx
            .fs
            .list(&ctx.cwd)
            .into_iter()
            .map(|entry| entry.path.as_str())
            .collect();
        let out = format!("{}\n", names.join(" "));

        ctx.log.append(format!("Executed ls in {}", ctx.cwd));
        ExecResult::success(out)
    }
}
