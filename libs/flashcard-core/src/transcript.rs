//! Record of everything shown to and typed by the user.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Prefix marking lines the user typed.
pub const INPUT_PREFIX: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Message(String),
    Input(String),
}

impl Entry {
    /// The line as it appears in a saved log.
    pub fn render(&self) -> String {
        match self {
            Self::Message(text) => text.clone(),
            Self::Input(text) => format!("{INPUT_PREFIX}{text}"),
        }
    }
}

/// Append-only transcript of a session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_message(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Message(text.into()));
    }

    pub fn record_input(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Input(text.into()));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full text of the transcript, one line per entry.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.render());
            out.push('\n');
        }
        out
    }

    /// Write the transcript to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_marks_input() {
        let mut transcript = Transcript::new();
        transcript.record_message("The card");
        transcript.record_input("cat");
        transcript.record_message("The pair (\"cat\":\"animal\") has been added.");

        assert_eq!(
            transcript.render(),
            "The card\n> cat\nThe pair (\"cat\":\"animal\") has been added.\n"
        );
        assert_eq!(
            transcript.entries(),
            &[
                Entry::Message("The card".to_string()),
                Entry::Input("cat".to_string()),
                Entry::Message("The pair (\"cat\":\"animal\") has been added.".to_string()),
            ]
        );
    }

    #[test]
    fn empty_transcript_renders_nothing() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.render(), "");
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "old content that is longer").unwrap();

        let mut transcript = Transcript::new();
        transcript.record_input("exit");
        transcript.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "> exit\n");
    }
}
