//! cal — Show the current month.

use crate::clock::month_year;
use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool};

/// Cal tool: print the current month and year, e.g. "March 2024".
pub struct Cal;

impl Tool for Cal {
    fn name(&self) -> &str {
        "cal"
    }

    fn usage(&self) -> &str {
        "cal"
    }

    fn execute(&self, args: &[&str], ctx: &mut ExecContext) -> ExecResult {
        if !args.is_empty() {
            return self.usage_error();
        }

        let out = format!("{}\n", month_year(ctx.clock.today()));
        ctx.log.append("Executed cal");
        ExecResult::success(out)
    }
}
