//! Tests for clipboard/osc52

use super::*;

#[test]
fn test_encode_osc52_format() {
    assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
}

#[test]
fn test_encode_osc52_empty() {
    assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
}

#[test]
fn test_encode_osc52_unicode_round_trips() {
    let text = "año 🎉";
    let sequence = encode_osc52(text);
    let payload = sequence
        .strip_prefix("\x1b]52;c;")
        .and_then(|s| s.strip_suffix('\x07'))
        .unwrap();
    let decoded = STANDARD.decode(payload).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), text);
}

#[test]
fn test_copy_writes_only_the_sequence() {
    let mut terminal = Vec::new();
    copy("bbb", &mut terminal).unwrap();
    assert_eq!(terminal, b"\x1b]52;c;YmJi\x07");
}
