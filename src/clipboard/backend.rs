//! Backend dispatch and error types

use std::io::Write;

use log::debug;
use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard is not available")]
    SystemUnavailable,

    #[error("could not write to clipboard")]
    WriteError,
}

/// Export `text` through `backend`.
///
/// OSC 52 sequences go to `terminal`, never to the result stream.
/// `Auto` tries the system clipboard first and falls back to OSC 52.
pub fn copy_to_clipboard(
    text: &str,
    backend: ClipboardBackend,
    terminal: &mut impl Write,
) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text, terminal),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            debug!("System clipboard failed ({}), falling back to OSC 52", e);
            osc52::copy(text, terminal)
        }),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
