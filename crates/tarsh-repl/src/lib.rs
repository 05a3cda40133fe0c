//! tarsh REPL — interactive shell over a tar archive.
//!
//! Commands: `ls`, `cd <path>`, `mv <src> <dest>`, `cal`, `exit`.
//! Every successful command is recorded; the record is written as XML to
//! the log path when the session ends (`exit` or end of input).

pub mod paths;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use tarsh_kernel::{ArchiveFs, Session, Step};

/// Startup configuration, parsed from the command line.
#[derive(Debug, Clone, Parser)]
#[command(name = "tarsh", version, about = "A shell over the contents of a tar archive")]
pub struct Config {
    /// Name shown in the prompt.
    pub hostname: String,
    /// Tar or tar.gz archive to explore.
    pub archive: PathBuf,
    /// Where to write the action log on exit.
    pub log: PathBuf,
    /// Do not read or write line-editing history.
    #[arg(long)]
    pub no_history: bool,
}

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text.
    Print(String),
    /// Nothing to print.
    Quiet,
    /// End the session.
    Exit,
}

/// REPL state: a session plus the glue to a terminal or a stream.
pub struct Repl {
    session: Session,
}

impl Repl {
    /// Wrap an existing session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Load the archive named in `config` and start a session at `/`.
    pub fn open(config: &Config) -> Result<Self> {
        let fs = ArchiveFs::from_archive_file(&config.archive)
            .with_context(|| format!("Failed to load archive {}", config.archive.display()))?;
        Ok(Self::new(Session::new(config.hostname.clone(), fs)))
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Outcome {
        match self.session.step(line) {
            Step::Exit => Outcome::Exit,
            Step::Continue(result) => match result.display() {
                Some(text) => Outcome::Print(text.to_string()),
                None => Outcome::Quiet,
            },
        }
    }

    /// Run the loop over a reader/writer pair until `exit` or end of input.
    ///
    /// The prompt is written before every read. A line that is not valid
    /// UTF-8 is reported and skipped. I/O errors end the loop; the session
    /// keeps what ran before them, so pass the result to [`Repl::close`].
    pub fn run_lines<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(writer, "{}", self.prompt()).context("Failed to write prompt")?;
            writer.flush().context("Failed to write prompt")?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).context("Failed to read input")? == 0 {
                tracing::debug!("end of input");
                break;
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::warn!(bytes = buf.len(), "skipping line that is not valid UTF-8");
                writeln!(writer, "tarsh: input is not valid UTF-8")
                    .context("Failed to write output")?;
                continue;
            };

            match self.process_line(line) {
                Outcome::Print(text) => {
                    writeln!(writer, "{text}").context("Failed to write output")?;
                }
                Outcome::Quiet => {}
                Outcome::Exit => break,
            }
        }
        Ok(())
    }

    /// Run the loop on the terminal with line editing.
    pub fn run_interactive(&mut self, history: Option<&Path>) -> Result<()> {
        let mut rl = DefaultEditor::new().context("Failed to create editor")?;

        if let Some(path) = history {
            // A missing history file is normal on first run.
            let _ = rl.load_history(path);
        }

        loop {
            match rl.readline(&self.prompt()) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    match self.process_line(&line) {
                        Outcome::Print(text) => println!("{text}"),
                        Outcome::Quiet => {}
                        Outcome::Exit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!(error = %err, "readline failed, ending session");
                    break;
                }
            }
        }

        if let Some(path) = history {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(err) = rl.save_history(path) {
                tracing::warn!(path = %path.display(), error = %err, "failed to save history");
            }
        }

        Ok(())
    }

    /// End the session and write the action log.
    pub fn finish(self, log_path: &Path) -> Result<()> {
        self.session
            .finish(log_path)
            .with_context(|| format!("Failed to save action log to {}", log_path.display()))?;
        Ok(())
    }

    /// End the session after a loop that returned `looped`.
    ///
    /// The log is written even when the loop failed; the loop's error is
    /// returned once the log is safe.
    pub fn close(self, looped: Result<()>, log_path: &Path) -> Result<()> {
        if let Err(err) = &looped {
            tracing::error!(error = %format!("{err:#}"), "input loop failed, saving log");
        }
        self.finish(log_path)?;
        looped
    }
}

/// Run tarsh with the given configuration.
///
/// Uses line editing when stdin is a terminal, plain line reads otherwise.
pub fn run(config: &Config) -> Result<()> {
    let mut repl = Repl::open(config)?;
    tracing::info!(
        hostname = %config.hostname,
        entries = repl.session().fs().len(),
        "session started"
    );

    let looped = if std::io::stdin().is_terminal() {
        let history = (!config.no_history).then(paths::history_path);
        repl.run_interactive(history.as_deref())
    } else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        repl.run_lines(stdin.lock(), stdout.lock())
    };

    repl.close(looped, &config.log)
}
