//! Type definitions for text statistics

use std::fmt;

use serde::Serialize;

/// Counts over a body of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    /// Number of characters (Unicode scalar values)
    pub characters: usize,
    /// Number of characters that are not whitespace
    pub characters_no_spaces: usize,
    /// Whitespace-delimited tokens
    pub words: usize,
    /// Segments produced by splitting on `\n`
    pub lines: usize,
    /// Non-blank blocks separated by one or more blank lines
    pub paragraphs: usize,
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} chars ({} without spaces), {} words, {} lines, {} paragraphs",
            self.characters, self.characters_no_spaces, self.words, self.lines, self.paragraphs
        )
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
