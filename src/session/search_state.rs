use log::debug;

use crate::error::TextSwapError;
use crate::highlight::{Highlighter, escape_html};
use crate::replace::build_replaced;
use crate::search::{Match, SearchOptions, find_matches};
use crate::stats::{TextStats, compute_stats};

/// Outputs of the latest search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary<'a> {
    pub match_count: usize,
    pub highlighted: &'a str,
    pub modified: &'a str,
}

/// Inputs and derived outputs of one find/replace session
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    original_text: String,
    search_term: String,
    /// `None` means no replacement was provided, which is different from
    /// an empty replacement (deletion)
    replace_term: Option<String>,
    options: SearchOptions,
    highlighter: Highlighter,
    matches: Vec<Match>,
    highlighted_text: String,
    modified_text: String,
}

impl SearchState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state that renders with a custom highlighter
    pub fn with_highlighter(highlighter: Highlighter) -> Self {
        Self {
            highlighter,
            ..Self::default()
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.original_text = text.into();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_replace_term(&mut self, term: Option<String>) {
        self.replace_term = term;
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    /// Run the matcher and rebuild both derived texts.
    ///
    /// With an empty text or term the previous results are cleared instead.
    pub fn search(&mut self) -> SearchSummary<'_> {
        if self.original_text.is_empty() || self.search_term.is_empty() {
            self.clear_results();
            return self.summary();
        }

        self.matches = find_matches(&self.original_text, &self.search_term, self.options);
        self.highlighted_text = self.highlighter.build(&self.original_text, &self.matches);
        self.regenerate_modified();

        debug!(
            "Search for {:?} ({:?}) found {} matches",
            self.search_term,
            self.options,
            self.matches.len()
        );

        self.summary()
    }

    /// Rebuild only the modified text, e.g. after the replace term changed
    pub fn regenerate_modified(&mut self) {
        self.modified_text = build_replaced(
            &self.original_text,
            &self.matches,
            self.replace_term.as_deref(),
        );
    }

    /// Make the modified text the new original and clear the results.
    ///
    /// Returns the number of matches that were replaced.
    pub fn commit_replace(&mut self) -> Result<usize, TextSwapError> {
        if self.matches.is_empty() {
            return Err(TextSwapError::NothingToReplace);
        }
        if self.replace_term.is_none() {
            return Err(TextSwapError::MissingReplacement);
        }

        self.regenerate_modified();
        let replaced = self.matches.len();
        self.original_text = std::mem::take(&mut self.modified_text);
        self.clear_results();

        debug!("Replaced {} matches", replaced);
        Ok(replaced)
    }

    /// Drop matches and reset both outputs to the original text
    pub fn clear_results(&mut self) {
        self.matches.clear();
        self.highlighted_text = escape_html(&self.original_text).into_owned();
        self.modified_text = self.original_text.clone();
    }

    /// Reset every input and output, keeping the highlighter
    pub fn clear_all(&mut self) {
        let highlighter = std::mem::take(&mut self.highlighter);
        *self = Self::with_highlighter(highlighter);
    }

    pub fn summary(&self) -> SearchSummary<'_> {
        SearchSummary {
            match_count: self.matches.len(),
            highlighted: &self.highlighted_text,
            modified: &self.modified_text,
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn replace_term(&self) -> Option<&str> {
        self.replace_term.as_deref()
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn highlighted_text(&self) -> &str {
        &self.highlighted_text
    }

    pub fn modified_text(&self) -> &str {
        &self.modified_text
    }

    /// Whether the modified text differs from the original (worth exporting)
    pub fn has_changes(&self) -> bool {
        !self.modified_text.is_empty() && self.modified_text != self.original_text
    }

    /// Statistics over the original text
    pub fn stats(&self) -> TextStats {
        compute_stats(&self.original_text)
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
