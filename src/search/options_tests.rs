//! Tests for search/options

use super::*;

#[test]
fn test_default_options_are_off() {
    let options = SearchOptions::default();
    assert!(!options.case_sensitive);
    assert!(!options.whole_word);
}

#[test]
fn test_parse_flag_truthy_values() {
    for value in ["true", "TRUE", "1", "yes", "On", " true "] {
        assert!(parse_flag(value), "{value:?} should be truthy");
    }
}

#[test]
fn test_parse_flag_malformed_values_are_false() {
    for value in ["false", "0", "", "maybe", "tru", "null"] {
        assert!(!parse_flag(value), "{value:?} should be false");
    }
}

#[test]
fn test_from_flags_missing_values() {
    assert_eq!(SearchOptions::from_flags(None, None), SearchOptions::default());
}

#[test]
fn test_from_flags_mixed_values() {
    let options = SearchOptions::from_flags(Some("yes"), Some("banana"));
    assert_eq!(options, SearchOptions::new(true, false));
}
