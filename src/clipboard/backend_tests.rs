//! Tests for clipboard/backend

use super::*;
use crate::clipboard::encode_osc52;

#[test]
fn test_osc52_backend_writes_sequence_to_terminal() {
    let mut terminal = Vec::new();
    copy_to_clipboard("replaced text", ClipboardBackend::Osc52, &mut terminal).unwrap();
    assert_eq!(terminal, encode_osc52("replaced text").into_bytes());
}

#[test]
fn test_system_backend_never_touches_terminal() {
    let mut terminal = Vec::new();
    let result = copy_to_clipboard("replaced text", ClipboardBackend::System, &mut terminal);
    assert!(
        result.is_ok()
            || matches!(
                result,
                Err(ClipboardError::SystemUnavailable | ClipboardError::WriteError)
            )
    );
    assert!(terminal.is_empty());
}

#[test]
fn test_auto_backend_always_succeeds() {
    let mut terminal = Vec::new();
    let result = copy_to_clipboard("replaced text", ClipboardBackend::Auto, &mut terminal);
    assert!(result.is_ok());
    // Either the system clipboard took it or the fallback sequence was written
    assert!(terminal.is_empty() || terminal == encode_osc52("replaced text").into_bytes());
}

#[test]
fn test_osc52_unicode() {
    let mut terminal = Vec::new();
    copy_to_clipboard("año 日本語 🎉", ClipboardBackend::Osc52, &mut terminal).unwrap();
    assert!(terminal.starts_with(b"\x1b]52;c;"));
    assert!(terminal.ends_with(b"\x07"));
}

#[test]
fn test_osc52_write_failure_is_write_error() {
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let result = copy_to_clipboard("text", ClipboardBackend::Osc52, &mut Closed);
    assert!(matches!(result, Err(ClipboardError::WriteError)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ClipboardError::SystemUnavailable.to_string(),
        "system clipboard is not available"
    );
    assert_eq!(
        ClipboardError::WriteError.to_string(),
        "could not write to clipboard"
    );
}
