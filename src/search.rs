//! Search module
//!
//! Locates every literal occurrence of a term in a body of text.
//! Matches come back in ascending order and never overlap, which the
//! highlight and replace builders rely on.

mod matcher;
mod options;
mod types;

pub use matcher::{SearchMatcher, find_matches, is_word_char};
pub use options::{SearchOptions, parse_flag};
pub use types::Match;
