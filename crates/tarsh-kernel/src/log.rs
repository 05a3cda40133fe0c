//! Action log.
//!
//! An append-only record of what the user did during a session, written out
//! once as XML when the session ends:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <log>
//!   <entry>Executed ls in /</entry>
//!   <entry>Changed directory to a</entry>
//! </log>
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to persist the action log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot write log {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ordered sequence of recorded actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    actions: Vec<String>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action at the end of the log.
    pub fn append(&mut self, action: impl Into<String>) {
        let action = action.into();
        tracing::debug!(%action, "action recorded");
        self.actions.push(action);
    }

    /// Recorded actions, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Serialize the log as XML.
    pub fn write_xml<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        if self.actions.is_empty() {
            writeln!(writer, "<log />")?;
        } else {
            writeln!(writer, "<log>")?;
            for action in &self.actions {
                writeln!(writer, "  <entry>{}</entry>", xml_escape(action))?;
            }
            writeln!(writer, "</log>")?;
        }
        writer.flush()
    }

    /// Serialize the log into a string.
    pub fn to_xml(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_xml(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the log to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), LogError> {
        let wrap = |source| LogError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(wrap)?;
        self.write_xml(BufWriter::new(file)).map_err(wrap)?;
        tracing::info!(log = %path.display(), entries = self.len(), "action log saved");
        Ok(())
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut log = ActionLog::new();
        log.append("first");
        log.append("second");
        log.append("first");
        assert_eq!(log.entries(), ["first", "second", "first"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_xml_layout() {
        let mut log = ActionLog::new();
        log.append("Executed ls in /");
        log.append("Changed directory to a");
        assert_eq!(
            log.to_xml(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <log>\n  \
             <entry>Executed ls in /</entry>\n  \
             <entry>Changed directory to a</entry>\n\
             </log>\n"
        );
    }

    #[test]
    fn test_xml_empty_log() {
        let log = ActionLog::new();
        assert!(log.to_xml().ends_with("<log />\n"));
    }

    #[test]
    fn test_xml_escapes_text() {
        let mut log = ActionLog::new();
        log.append("Moved <a> & 'b' to \"c\"");
        assert!(
            log.to_xml()
                .contains("<entry>Moved &lt;a&gt; &amp; &apos;b&apos; to &quot;c&quot;</entry>")
        );
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.xml");
        let mut log = ActionLog::new();
        log.append("Executed cal");
        log.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, log.to_xml());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("log.xml");
        let err = ActionLog::new().save(&path).unwrap_err();
        assert!(err.to_string().contains("log.xml"));
    }
}
