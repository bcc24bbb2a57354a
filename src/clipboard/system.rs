//! OS clipboard through arboard
//!
//! Headless sessions (no display server) report `SystemUnavailable`, which
//! lets the `Auto` backend fall back to OSC 52.

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    Clipboard::new()
        .map_err(|_| ClipboardError::SystemUnavailable)?
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod system_tests;
