//! Literal find and replace over plain text.
//!
//! The core is a set of pure functions: [`search::find_matches`] locates
//! matches, and its output feeds [`highlight::build_highlighted`] and
//! [`replace::build_replaced`] independently. [`session::SearchState`] is a
//! caller-owned record for interactive use.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod highlight;
pub mod input;
pub mod replace;
pub mod search;
pub mod session;
pub mod stats;
pub mod text_utils;

pub use error::TextSwapError;
pub use highlight::build_highlighted;
pub use replace::build_replaced;
pub use search::{Match, SearchOptions, find_matches};
pub use stats::{TextStats, compute_stats};
