use serde::Serialize;

/// Modifiers applied to a single search invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchOptions {
    /// Compare text exactly instead of ignoring case
    pub case_sensitive: bool,
    /// Only accept matches flanked by non-word characters or text boundaries
    pub whole_word: bool,
}

impl SearchOptions {
    pub fn new(case_sensitive: bool, whole_word: bool) -> Self {
        Self {
            case_sensitive,
            whole_word,
        }
    }

    /// Build options from loosely typed flag values (form fields, env vars).
    ///
    /// Missing or unrecognised values are treated as `false`.
    pub fn from_flags(case_sensitive: Option<&str>, whole_word: Option<&str>) -> Self {
        Self {
            case_sensitive: case_sensitive.is_some_and(parse_flag),
            whole_word: whole_word.is_some_and(parse_flag),
        }
    }
}

/// Returns true only for recognised truthy spellings
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
