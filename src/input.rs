//! Input module
//!
//! Reads the text to search from a file or stdin.

mod reader;

pub use reader::InputReader;
