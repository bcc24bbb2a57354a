//! Small text helpers: language guess, number formatting, title case

use std::fmt;

use serde::Serialize;

use crate::search::is_word_char;

const SPANISH_WORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "de", "en", "que", "y", "es", "con", "para", "por",
    "como", "su", "del", "se", "le", "da", "me", "te", "lo", "yo", "tu", "él", "ella", "nosotros",
    "ustedes", "ellos", "ellas",
];

const ENGLISH_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "over", "after", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "will", "would", "could", "should", "may",
    "might", "must", "can", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "my", "your", "his", "its", "our", "their",
];

/// Predominant language of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Spanish,
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Guess the language by counting common function words.
///
/// Spanish wins only with strictly more hits; ties go to English.
pub fn detect_language(text: &str) -> Language {
    let mut spanish = 0usize;
    let mut english = 0usize;

    for word in text.split(|c: char| !is_word_char(c)).filter(|w| !w.is_empty()) {
        let word = word.to_lowercase();
        if SPANISH_WORDS.contains(&word.as_str()) {
            spanish += 1;
        }
        if ENGLISH_WORDS.contains(&word.as_str()) {
            english += 1;
        }
    }

    if spanish > english {
        Language::Spanish
    } else {
        Language::English
    }
}

/// Format with Spanish thousands separators.
///
/// Grouping only kicks in from five digits on, so `1234` stays as is.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() < 5 {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Capitalise the first letter of each word and lower-case the rest.
///
/// A word starts at a word character and runs to the next whitespace.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if in_word {
            if c.is_whitespace() {
                in_word = false;
                out.push(c);
            } else {
                out.extend(c.to_lowercase());
            }
        } else if is_word_char(c) {
            in_word = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
#[path = "text_utils_tests.rs"]
mod text_utils_tests;
