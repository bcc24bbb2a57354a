//! Clipboard export
//!
//! Copies the modified text out of the process, either through the OS
//! clipboard or through an OSC 52 escape sequence written to the terminal
//! stream the caller hands in. Stdout carries results, so callers pass
//! stderr (or a tty) here.

mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
pub use osc52::encode_osc52;
