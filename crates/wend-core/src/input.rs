//! Puzzle input loading: the raw text plus a trimmed line view.

use std::fs;
use std::io;
use std::path::Path;

/// Contents of a puzzle input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInput {
    /// The file exactly as read.
    pub raw: String,
    /// One entry per line, with surrounding whitespace trimmed.
    pub lines: Vec<String>,
}

impl PuzzleInput {
    /// Build from in-memory text.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lines = raw.lines().map(|l| l.trim().to_string()).collect();
        Self { raw, lines }
    }

    /// Read a file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let input = Self::new(raw);
        log::debug!(
            "loaded {} lines ({} bytes) from {}",
            input.lines.len(),
            input.raw.len(),
            path.display()
        );
        Ok(input)
    }
}

impl From<&str> for PuzzleInput {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
