use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::Write;

use super::backend::{ClipboardError, ClipboardResult};

/// Ask the terminal on the other end of `terminal` to set its clipboard
pub fn copy(text: &str, terminal: &mut impl Write) -> ClipboardResult {
    terminal
        .write_all(encode_osc52(text).as_bytes())
        .and_then(|()| terminal.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// Wrap base64 text in the OSC 52 "set clipboard" sequence
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
#[path = "osc52_tests.rs"]
mod osc52_tests;
