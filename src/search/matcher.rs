use log::debug;
use regex::{Regex, RegexBuilder};

use super::options::SearchOptions;
use super::types::Match;

/// Terms longer than this skip regex compilation; case-insensitive Unicode
/// patterns grow past the compiled size limit and compile very slowly.
const MAX_PATTERN_LEN: usize = 1024;

#[derive(Debug, Clone)]
enum Engine {
    Regex(Regex),
    /// Char-by-char literal scan, used when the term is too large to compile
    Scan { term: String, case_sensitive: bool },
}

/// Literal term matcher compiled once and reusable across texts
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    engine: Engine,
    whole_word: bool,
}

impl SearchMatcher {
    /// Compile a matcher for `term`. Returns `None` only for an empty term.
    pub fn new(term: &str, options: SearchOptions) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        if term.len() > MAX_PATTERN_LEN {
            return Some(Self::scanning(term, options));
        }

        // The term is escaped so every character matches itself
        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(!options.case_sensitive)
            .build();

        match regex {
            Ok(regex) => Some(Self {
                engine: Engine::Regex(regex),
                whole_word: options.whole_word,
            }),
            Err(e) => {
                debug!("Regex build failed for {}-byte term, scanning instead: {}", term.len(), e);
                Some(Self::scanning(term, options))
            }
        }
    }

    fn scanning(term: &str, options: SearchOptions) -> Self {
        Self {
            engine: Engine::Scan {
                term: term.to_string(),
                case_sensitive: options.case_sensitive,
            },
            whole_word: options.whole_word,
        }
    }

    /// Find all non-overlapping matches, left to right
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some((start, end)) = self.find_at(text, pos) else {
                break;
            };

            if self.whole_word && !is_word_bounded(text, start, end) {
                pos = next_char_boundary(text, start);
                continue;
            }

            matches.push(Match {
                text: text[start..end].to_string(),
                index: start,
                length: end - start,
            });

            // Zero-length matches must still advance
            pos = if end > start {
                end
            } else {
                next_char_boundary(text, start)
            };
        }

        matches
    }

    /// Leftmost candidate starting at or after `pos`, as a byte range
    fn find_at(&self, text: &str, pos: usize) -> Option<(usize, usize)> {
        match &self.engine {
            Engine::Regex(regex) => regex.find_at(text, pos).map(|m| (m.start(), m.end())),
            Engine::Scan {
                term,
                case_sensitive: true,
            } => text[pos..]
                .find(term.as_str())
                .map(|i| (pos + i, pos + i + term.len())),
            Engine::Scan {
                term,
                case_sensitive: false,
            } => find_folded(text, pos, term),
        }
    }
}

/// Find every match of `term` in `text`.
///
/// An empty text or term yields no matches.
pub fn find_matches(text: &str, term: &str, options: SearchOptions) -> Vec<Match> {
    if text.is_empty() {
        return Vec::new();
    }

    SearchMatcher::new(term, options)
        .map(|matcher| matcher.find_all(text))
        .unwrap_or_default()
}

/// Letters, digits and underscore
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

fn find_folded(text: &str, pos: usize, term: &str) -> Option<(usize, usize)> {
    let first = term.chars().next()?;

    text[pos..].char_indices().find_map(|(offset, c)| {
        if !chars_eq_folded(c, first) {
            return None;
        }
        let start = pos + offset;
        folded_prefix_len(&text[start..], term).map(|len| (start, start + len))
    })
}

/// Byte length of the prefix of `haystack` equal to `term` ignoring case
fn folded_prefix_len(haystack: &str, term: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for t in term.chars() {
        let (_, h) = hay.next()?;
        if !chars_eq_folded(h, t) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(i, _)| i))
}

fn chars_eq_folded(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
