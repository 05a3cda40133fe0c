//! Tool trait and dispatch errors.

use thiserror::Error;

use super::ExecContext;
use crate::result::{EXIT_NOT_FOUND, EXIT_USAGE, ExecResult};

/// Errors raised before a command gets to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}: command not found")]
    NotFound(String),
    #[error("{name}: usage: {usage}")]
    InvalidArguments { name: String, usage: String },
}

impl CommandError {
    /// Exit code reported for this error.
    pub fn code(&self) -> i64 {
        match self {
            CommandError::NotFound(_) => EXIT_NOT_FOUND,
            CommandError::InvalidArguments { .. } => EXIT_USAGE,
        }
    }
}

impl From<CommandError> for ExecResult {
    fn from(err: CommandError) -> Self {
        ExecResult::failure(err.code(), err.to_string())
    }
}

/// A builtin command.
///
/// Tools validate their own arguments. A tool that rejects its arguments
/// must leave the context untouched.
pub trait Tool: Send + Sync {
    /// Command name, as typed by the user.
    fn name(&self) -> &str;

    /// Synopsis shown when the arguments are wrong, e.g. `cd <path>`.
    fn usage(&self) -> &str;

    /// Run the command. `args` excludes the command name.
    fn execute(&self, args: &[&str], ctx: &mut ExecContext) -> ExecResult;

    /// Result for a call with the wrong arguments.
    fn usage_error(&self) -> ExecResult {
        CommandError::InvalidArguments {
            name: self.name().to_string(),
            usage: self.usage().to_string(),
        }
        .into()
    }
}
