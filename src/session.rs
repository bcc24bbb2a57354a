//! Session module
//!
//! Caller-owned state for an interactive find/replace flow. The core
//! functions stay pure; this record keeps their inputs and outputs between
//! interactions.

mod search_state;

pub use search_state::{SearchState, SearchSummary};
