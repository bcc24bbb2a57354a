//! Tests for session/search_state

use super::*;

fn state_with(text: &str, term: &str, replace: Option<&str>) -> SearchState {
    let mut state = SearchState::new();
    state.set_text(text);
    state.set_search_term(term);
    state.set_replace_term(replace.map(str::to_string));
    state
}

#[test]
fn test_new_state_is_empty() {
    let state = SearchState::new();
    assert!(state.original_text().is_empty());
    assert!(state.matches().is_empty());
    assert_eq!(state.replace_term(), None);
    assert!(!state.has_changes());
}

#[test]
fn test_search_builds_both_outputs() {
    let mut state = state_with("a < b, b > a", "b", Some("c"));
    let summary = state.search();

    assert_eq!(summary.match_count, 2);
    assert_eq!(
        summary.highlighted,
        r#"a &lt; <span class="highlight">b</span>, <span class="highlight">b</span> &gt; a"#
    );
    assert_eq!(summary.modified, "a < c, c > a");
    assert!(state.has_changes());
}

#[test]
fn test_search_with_empty_term_clears_results() {
    let mut state = state_with("x & y", "x", Some("z"));
    state.search();
    assert_eq!(state.matches().len(), 1);

    state.set_search_term("");
    let summary = state.search();
    assert_eq!(summary.match_count, 0);
    assert_eq!(summary.highlighted, "x &amp; y");
    assert_eq!(summary.modified, "x & y");
}

#[test]
fn test_new_search_replaces_previous_matches() {
    let mut state = state_with("one two one", "one", None);
    state.search();
    assert_eq!(state.matches().len(), 2);

    state.set_search_term("two");
    state.search();
    assert_eq!(state.matches().len(), 1);
    assert_eq!(state.matches()[0].index, 4);
}

#[test]
fn test_options_change_result() {
    let mut state = state_with("Hello hello", "hello", None);
    assert_eq!(state.search().match_count, 2);

    state.set_options(SearchOptions::new(true, false));
    assert_eq!(state.search().match_count, 1);
}

#[test]
fn test_without_replacement_modified_equals_original() {
    let mut state = state_with("aXbXc", "X", None);
    let summary = state.search();
    assert_eq!(summary.modified, "aXbXc");
}

#[test]
fn test_regenerate_after_replace_term_change() {
    let mut state = state_with("aXbXc", "X", None);
    state.search();

    state.set_replace_term(Some("YY".to_string()));
    state.regenerate_modified();
    assert_eq!(state.modified_text(), "aYYbYYc");
}

#[test]
fn test_commit_replace_updates_original() {
    let mut state = state_with("aXbXc", "X", Some("-"));
    state.search();

    assert_eq!(state.commit_replace().unwrap(), 2);
    assert_eq!(state.original_text(), "a-b-c");
    assert!(state.matches().is_empty());
    assert_eq!(state.modified_text(), "a-b-c");
    assert!(!state.has_changes());
}

#[test]
fn test_commit_replace_with_empty_replacement_deletes() {
    let mut state = state_with("aXbXc", "X", Some(""));
    state.search();

    assert_eq!(state.commit_replace().unwrap(), 2);
    assert_eq!(state.original_text(), "abc");
}

#[test]
fn test_commit_replace_without_matches_fails() {
    let mut state = state_with("abc", "z", Some("y"));
    state.search();
    assert!(matches!(
        state.commit_replace(),
        Err(TextSwapError::NothingToReplace)
    ));
    assert_eq!(state.original_text(), "abc");
}

#[test]
fn test_commit_replace_without_replacement_fails() {
    let mut state = state_with("abc", "b", None);
    state.search();
    assert!(matches!(
        state.commit_replace(),
        Err(TextSwapError::MissingReplacement)
    ));
}

#[test]
fn test_clear_all_keeps_highlighter() {
    let mut state = SearchState::with_highlighter(Highlighter::new("hit"));
    state.set_text("abc");
    state.set_search_term("b");
    state.set_options(SearchOptions::new(true, true));
    state.clear_all();

    assert!(state.original_text().is_empty());
    assert!(state.search_term().is_empty());
    assert_eq!(state.options(), SearchOptions::default());

    state.set_text("abc");
    state.set_search_term("b");
    assert_eq!(
        state.search().highlighted,
        r#"a<span class="hit">b</span>c"#
    );
}

#[test]
fn test_stats_over_original_text() {
    let state = state_with("two words", "w", None);
    let stats = state.stats();
    assert_eq!(stats.words, 2);
    assert_eq!(stats.characters, 9);
}
