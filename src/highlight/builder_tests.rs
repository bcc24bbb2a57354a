//! Tests for highlight/builder

use super::*;
use crate::search::{SearchOptions, find_matches};
use insta::assert_snapshot;

fn highlight(text: &str, term: &str) -> String {
    build_highlighted(text, &find_matches(text, term, SearchOptions::default()))
}

#[test]
fn test_no_matches_returns_escaped_text() {
    assert_eq!(build_highlighted("a < b & c", &[]), "a &lt; b &amp; c");
}

#[test]
fn test_empty_text() {
    assert_eq!(build_highlighted("", &[]), "");
}

#[test]
fn snapshot_single_match() {
    assert_snapshot!(highlight("Hello world", "world"), @r#"Hello <span class="highlight">world</span>"#);
}

#[test]
fn snapshot_multiple_matches_keep_original_case() {
    assert_snapshot!(
        highlight("Hello hello HELLO", "hello"),
        @r#"<span class="highlight">Hello</span> <span class="highlight">hello</span> <span class="highlight">HELLO</span>"#
    );
}

#[test]
fn snapshot_escapes_text_around_and_inside_matches() {
    assert_snapshot!(
        highlight("1 < 2 & <b>bold</b>", "<b>"),
        @r#"1 &lt; 2 &amp; <span class="highlight">&lt;b&gt;</span>bold&lt;/b&gt;"#
    );
}

#[test]
fn test_remainder_after_last_match_is_appended() {
    let output = highlight("x tail & end", "x");
    assert!(output.ends_with(" tail &amp; end"));
}

#[test]
fn test_escaping_prevents_injection() {
    let output = highlight("<script>alert('x')</script>", "alert");
    assert!(!output.contains("<script>"));
    assert!(output.contains("&lt;script&gt;"));
    assert!(output.contains(r#"<span class="highlight">alert</span>"#));
    assert!(output.contains("(&#39;x&#39;)"));
}

#[test]
fn test_custom_class_is_escaped() {
    let highlighter = Highlighter::new(r#"hit" onclick="x"#);
    let text = "a hit";
    let matches = find_matches(text, "hit", SearchOptions::default());
    let output = highlighter.build(text, &matches);
    assert_eq!(
        output,
        r#"a <span class="hit&quot; onclick=&quot;x">hit</span>"#
    );
}

#[test]
fn test_default_class() {
    assert_eq!(Highlighter::default().class(), DEFAULT_HIGHLIGHT_CLASS);
}
