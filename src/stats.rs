//! Stats module for computing text statistics
//!
//! Character, word, line and paragraph counts over a body of text.

mod counter;
mod types;

pub use counter::compute_stats;
pub use types::TextStats;
