//! Saved statement files

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rhetor_domain::value_objects::{GenerationResult, LengthCategory};

/// Width of the header separator line
const SEPARATOR_WIDTH: usize = 60;

/// Characters of the topic kept in the default filename
const FILENAME_TOPIC_CHARS: usize = 30;

/// A generated statement rendered for disk
#[derive(Debug, Clone, PartialEq)]
pub struct StatementFile<'a> {
    topic: &'a str,
    length: LengthCategory,
    model: &'a str,
    text: &'a str,
}

impl<'a> StatementFile<'a> {
    /// Wrap a generation result
    pub fn new(result: &'a GenerationResult) -> Self {
        Self {
            topic: &result.topic,
            length: result.length,
            model: &result.model,
            text: &result.text,
        }
    }

    /// Header followed by the statement
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 160);
        let _ = writeln!(out, "Topic: {}", self.topic);
        let _ = writeln!(out, "Length: {}", self.length);
        let _ = writeln!(out, "Model: {}", self.model);
        let _ = writeln!(out, "{}\n", "=".repeat(SEPARATOR_WIDTH));
        out.push_str(self.text);
        out
    }

    /// `generated_<topic>.txt` in the working directory
    pub fn default_filename(&self) -> PathBuf {
        PathBuf::from(default_filename(self.topic))
    }

    /// Write to `path`, or to the default filename when `None`
    pub fn save(&self, path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let path = path.map_or_else(|| self.default_filename(), Path::to_path_buf);
        std::fs::write(&path, self.render())
            .with_context(|| format!("Failed to save statement to {}", path.display()))?;
        Ok(path)
    }
}

/// Filename derived from a topic
///
/// Spaces and path separators become underscores; at most 30 characters
/// of the topic are kept.
pub fn default_filename(topic: &str) -> String {
    let stem: String = topic
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .take(FILENAME_TOPIC_CHARS)
        .collect();
    format!("generated_{stem}.txt")
}
