use crate::search::Match;

use super::escape::escape_html;

/// CSS class used by `build_highlighted`
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";

const SPAN_CLOSE: &str = "</span>";

/// Wraps matches in `<span class="...">` markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    class: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_CLASS)
    }
}

impl Highlighter {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Build the annotated markup for `text`.
    ///
    /// `matches` must come from the matcher for this same text: ascending,
    /// non-overlapping and on char boundaries.
    ///
    /// # Panics
    /// Panics if a match span lies outside `text` or splits a character.
    pub fn build(&self, text: &str, matches: &[Match]) -> String {
        let open = format!(r#"<span class="{}">"#, escape_html(&self.class));
        let mut result =
            String::with_capacity(text.len() + matches.len() * (open.len() + SPAN_CLOSE.len()));
        let mut last = 0;

        for m in matches {
            result.push_str(&escape_html(&text[last..m.index]));
            result.push_str(&open);
            result.push_str(&escape_html(&m.text));
            result.push_str(SPAN_CLOSE);
            last = m.end();
        }

        result.push_str(&escape_html(&text[last..]));
        result
    }
}

/// Build highlighted markup using the default `highlight` class
pub fn build_highlighted(text: &str, matches: &[Match]) -> String {
    Highlighter::default().build(text, matches)
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod builder_tests;
