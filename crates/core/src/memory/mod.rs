//! Read-only view of the project memory store.
//!
//! The memory directory (`memory/` by default) is written by the assistant or
//! the user; hooks only read it. Every accessor swallows I/O errors and
//! reports the piece as unavailable.

mod handoff;
mod sections;

pub use handoff::Handoff;
pub use sections::{bullet_lines, extract_section, strip_comments, tidy_lines};

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::config::SectionRule;

#[derive(Debug, Clone)]
pub struct MemoryStore {
    dir: PathBuf,
}

impl MemoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Contents of a memory file, or `None` if it is missing or unreadable.
    pub fn read(&self, file: &str) -> Option<String> {
        let path = self.dir.join(file);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!("Memory file {} unavailable: {}", path.display(), e);
                None
            }
        }
    }

    /// `<label>:\n<body>` for one configured section, or `None` when the file,
    /// the heading or the body is missing.
    pub fn section(&self, rule: &SectionRule) -> Option<String> {
        let content = strip_comments(&self.read(&rule.file)?);
        let body = extract_section(&content, &rule.heading)?;
        let lines = if rule.bullets_only {
            bullet_lines(&body)
        } else {
            tidy_lines(&body)
        };
        if lines.is_empty() {
            return None;
        }
        Some(format!("{}:\n{}", rule.label, lines.join("\n")))
    }

    pub fn handoff(&self, cache_file: &str) -> Option<Handoff> {
        let parsed = Handoff::parse(&self.read(cache_file)?);
        if parsed.is_none() {
            debug!("No usable lastSession in {}", cache_file);
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rule(file: &str, heading: &str, label: &str, bullets_only: bool) -> SectionRule {
        SectionRule {
            file: file.to_string(),
            heading: heading.to_string(),
            label: label.to_string(),
            bullets_only,
        }
    }

    #[test]
    fn test_section_from_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("MEMORY.md"),
            "## Session Notes\n<!-- newest first -->\n- one\n- two\n- three\n## Other\n- four\n",
        )
        .unwrap();

        let store = MemoryStore::new(temp.path());
        let text = store
            .section(&rule("MEMORY.md", "Session Notes", "Recent session notes", true))
            .unwrap();
        assert_eq!(text, "Recent session notes:\n- one\n- two\n- three");
    }

    #[test]
    fn test_prose_section() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("POLARIS.md"),
            "# Polaris\n\n## North Star\n\nA fast, boring hook runner.\n\n<!-- edit quarterly -->\n",
        )
        .unwrap();

        let store = MemoryStore::new(temp.path());
        let text = store
            .section(&rule("POLARIS.md", "North Star", "Polaris", false))
            .unwrap();
        assert_eq!(text, "Polaris:\nA fast, boring hook runner.");
    }

    #[test]
    fn test_missing_pieces_are_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("MEMORY.md"), "## Session Notes\nno bullets here\n").unwrap();
        let store = MemoryStore::new(temp.path());

        assert!(store.section(&rule("NOPE.md", "X", "X", false)).is_none());
        assert!(store.section(&rule("MEMORY.md", "Missing", "X", false)).is_none());
        assert!(store.section(&rule("MEMORY.md", "Session Notes", "X", true)).is_none());
        assert!(store.handoff("session-cache.json").is_none());
    }

    #[test]
    fn test_handoff_from_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("session-cache.json"),
            r#"{"lastSession":{"done":"shipped v0.3"}}"#,
        )
        .unwrap();
        let store = MemoryStore::new(temp.path());
        let handoff = store.handoff("session-cache.json").unwrap();
        assert_eq!(handoff.done.as_deref(), Some("shipped v0.3"));
    }
}
