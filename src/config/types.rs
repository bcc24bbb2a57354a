// Configuration type definitions

use serde::Deserialize;

use crate::highlight::DEFAULT_HIGHLIGHT_CLASS;
use crate::search::SearchOptions;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Default search modifiers, overridable per invocation
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub whole_word: bool,
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions::new(self.case_sensitive, self.whole_word)
    }
}

/// Highlight markup section
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_highlight_class")]
    pub class: String,
}

fn default_highlight_class() -> String {
    DEFAULT_HIGHLIGHT_CLASS.to_string()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            class: default_highlight_class(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}
