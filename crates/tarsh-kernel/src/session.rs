//! Session — one shell run over one archive.
//!
//! The session is a single-state machine: it waits for a line, runs it, and
//! waits again, until `exit`. [`Session::step`] does the work for one line
//! without touching stdin or stdout, so the loop itself lives in the caller.

use std::path::Path;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::log::{ActionLog, LogError};
use crate::result::ExecResult;
use crate::tools::{CommandError, ExecContext, ToolRegistry};
use crate::vfs::ArchiveFs;

/// What happened after a line was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The command ran (or failed); keep reading.
    Continue(ExecResult),
    /// The user asked to leave. Call [`Session::finish`] next.
    Exit,
}

/// Interactive session state.
pub struct Session {
    hostname: String,
    ctx: ExecContext,
    tools: ToolRegistry,
}

impl Session {
    /// Create a session at `/`, using the system clock.
    pub fn new(hostname: impl Into<String>, fs: ArchiveFs) -> Self {
        Self::with_clock(hostname, fs, Arc::new(SystemClock))
    }

    /// Create a session with a specific clock.
    pub fn with_clock(hostname: impl Into<String>, fs: ArchiveFs, clock: Arc<dyn Clock>) -> Self {
        Self {
            hostname: hostname.into(),
            ctx: ExecContext::with_clock(fs, clock),
            tools: ToolRegistry::with_builtins(),
        }
    }

    /// Prompt shown before each read: `{hostname}:{cwd} $ `.
    pub fn prompt(&self) -> String {
        format!("{}:{} $ ", self.hostname, self.ctx.cwd)
    }

    /// Process one input line.
    pub fn step(&mut self, line: &str) -> Step {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Step::Continue(ExecResult::default());
        };
        let args: Vec<&str> = words.collect();

        if name == "exit" {
            if args.is_empty() {
                return Step::Exit;
            }
            return Step::Continue(
                CommandError::InvalidArguments {
                    name: "exit".into(),
                    usage: "exit".into(),
                }
                .into(),
            );
        }

        let Some(tool) = self.tools.get(name) else {
            tracing::debug!(command = name, "unrecognized command");
            return Step::Continue(CommandError::NotFound(line.trim().to_string()).into());
        };

        let result = tool.execute(&args, &mut self.ctx);
        tracing::debug!(command = name, code = result.code, cwd = %self.ctx.cwd, "command finished");
        Step::Continue(result)
    }

    /// End the session, writing the action log to `log_path`.
    ///
    /// Consumes the session, so the log is written at most once.
    pub fn finish(self, log_path: &Path) -> Result<ActionLog, LogError> {
        self.ctx.log.save(log_path)?;
        Ok(self.ctx.log)
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Current directory cursor.
    pub fn cwd(&self) -> &str {
        &self.ctx.cwd
    }

    pub fn fs(&self) -> &ArchiveFs {
        &self.ctx.fs
    }

    pub fn log(&self) -> &ActionLog {
        &self.ctx.log
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("hostname", &self.hostname)
            .field("ctx", &self.ctx)
            .field("tools", &self.tools)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::vfs::Entry;
    use chrono::NaiveDate;

    fn make_session() -> Session {
        let fs = ArchiveFs::from_entries([Entry::directory("a"), Entry::file("a/b.txt")]);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Session::with_clock("box", fs, Arc::new(FixedClock(date)))
    }

    fn run(session: &mut Session, line: &str) -> ExecResult {
        match session.step(line) {
            Step::Continue(result) => result,
            Step::Exit => panic!("unexpected exit on {line:?}"),
        }
    }

    #[test]
    fn test_prompt_follows_cwd() {
        let mut session = make_session();
        assert_eq!(session.prompt(), "box:/ $ ");
        run(&mut session, "cd a");
        assert_eq!(session.prompt(), "box:a $ ");
    }

    #[test]
    fn test_exit() {
        let mut session = make_session();
        assert_eq!(session.step("exit"), Step::Exit);
        assert_eq!(session.step("  exit  "), Step::Exit);
    }

    #[test]
    fn test_exit_with_arguments_is_usage_error() {
        let mut session = make_session();
        let result = run(&mut session, "exit now");
        assert_eq!(result.err, "exit: usage: exit");
    }

    #[test]
    fn test_unknown_command() {
        let mut session = make_session();
        let result = run(&mut session, "rm -rf a");
        assert_eq!(result.code, 127);
        assert_eq!(result.err, "rm -rf a: command not found");
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_unknown_command_echoes_trimmed_line() {
        let mut session = make_session();
        let result = run(&mut session, "  frob   a b \n");
        assert_eq!(result.err, "frob   a b: command not found");
        assert_eq!(session.cwd(), "/");
    }

    #[test]
    fn test_empty_line_is_ignored() {
        let mut session = make_session();
        assert_eq!(run(&mut session, "   "), ExecResult::default());
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_cal_uses_injected_clock() {
        let mut session = make_session();
        assert_eq!(run(&mut session, "cal").out, "March 2024\n");
        assert_eq!(session.log().entries(), ["Executed cal"]);
    }

    #[test]
    fn test_finish_writes_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.xml");
        let mut session = make_session();
        run(&mut session, "ls");
        let log = session.finish(&path).unwrap();

        assert_eq!(log.entries(), ["Executed ls in /"]);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<entry>Executed ls in /</entry>"));
    }
}
