//! Highlight module
//!
//! Builds a markup view of the text with every match wrapped in a
//! highlight marker. All user text is escaped; only the wrapper is markup.

mod builder;
mod escape;

pub use builder::{DEFAULT_HIGHLIGHT_CLASS, Highlighter, build_highlighted};
pub use escape::escape_html;
