//! Replace module
//!
//! Rebuilds the text with every match substituted by a replacement string.

use crate::search::Match;

/// Substitute every match in `text` with `replacement`.
///
/// Returns `text` unchanged when there are no matches or no replacement was
/// provided. The replacement is inserted verbatim and never re-scanned.
/// The result is built by concatenating the gaps between matches, so stored
/// offsets are never invalidated by earlier substitutions.
///
/// # Panics
/// Panics if a match span lies outside `text` or splits a character.
pub fn build_replaced(text: &str, matches: &[Match], replacement: Option<&str>) -> String {
    let Some(replacement) = replacement else {
        return text.to_string();
    };
    if matches.is_empty() {
        return text.to_string();
    }

    let replaced_len: usize = matches.iter().map(|m| m.length).sum();
    let mut result = String::with_capacity(
        text.len() - replaced_len.min(text.len()) + matches.len() * replacement.len(),
    );
    let mut last = 0;

    for m in matches {
        result.push_str(&text[last..m.index]);
        result.push_str(replacement);
        last = m.end();
    }

    result.push_str(&text[last..]);
    result
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod replace_tests;
