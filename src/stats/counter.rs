use super::types::TextStats;

/// Compute character, word, line and paragraph counts for `text`
pub fn compute_stats(text: &str) -> TextStats {
    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words: text.split_whitespace().count(),
        lines: memchr::memchr_iter(b'\n', text.as_bytes()).count() + 1,
        paragraphs: count_paragraphs(text),
    }
}

/// Count runs of non-blank lines separated by at least one blank line
fn count_paragraphs(text: &str) -> usize {
    let mut paragraphs = 0;
    let mut in_paragraph = false;

    for line in text.split('\n') {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            paragraphs += 1;
        }
        in_paragraph = !blank;
    }

    paragraphs
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod counter_tests;
