//! ExecResult — the outcome of one command.

/// Exit code for a command that ran but failed.
pub const EXIT_FAILURE: i64 = 1;
/// Exit code for a command invoked with the wrong arguments.
pub const EXIT_USAGE: i64 = 2;
/// Exit code for a command name that is not recognized.
pub const EXIT_NOT_FOUND: i64 = 127;

/// The result of executing a command.
///
/// `out` is the text a command prints on success, newline-terminated when
/// the command prints a line (so `"\n"` is an empty line and `""` is no
/// output at all). `err` is the message it prints on failure. Both go to
/// the shell's stdout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Output text.
    pub out: String,
    /// Error message.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// The line to show the user: `out` on success (without its final
    /// newline), `err` otherwise. `None` when there is nothing to print.
    pub fn display(&self) -> Option<&str> {
        let text = if self.ok() { self.out.as_str() } else { self.err.as_str() };
        if text.is_empty() {
            None
        } else {
            Some(text.strip_suffix('\n').unwrap_or(text))
        }
    }
}
