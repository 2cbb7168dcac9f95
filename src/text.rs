//! Plain-text utilities: whitespace normalization, word counting and the
//! truncated body sample.
//!
//! All lengths here are measured in characters, never bytes.

use crate::patterns::WHITESPACE_NORMALIZE;

/// Sentence-terminal punctuation considered when truncating the sample.
const SENTENCE_TERMINALS: [char; 3] = ['.', '!', '?'];

/// Suffix appended when the sample is cut mid-sentence.
const ELLIPSIS: &str = "...";

/// Collapse every whitespace run to a single space and trim both ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Number of whitespace-delimited tokens.
#[inline]
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `n` characters of `text`.
#[must_use]
pub fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Build the truncated body sample.
///
/// Text of at most `max_len` characters is returned unchanged. Longer text is
/// cut at the last `.`, `!` or `?` inside the window when that break lies
/// beyond `break_threshold` characters; otherwise at the last space with
/// `"..."` appended, or hard-cut at `max_len` with `"..."` if the window has
/// no space at all.
#[must_use]
pub fn clean_body_sample(text: &str, max_len: usize, break_threshold: f64) -> String {
    let text = normalize_whitespace(text);
    if text.chars().count() <= max_len {
        return text;
    }

    let truncated = prefix_chars(&text, max_len);

    if let Some(byte_idx) = truncated.rfind(SENTENCE_TERMINALS) {
        let char_idx = truncated[..byte_idx].chars().count();
        if char_idx as f64 > break_threshold {
            // Terminals are single-byte, so the break is inclusive at +1.
            return truncated[..=byte_idx].trim().to_string();
        }
    }

    match truncated.rfind(' ') {
        Some(space_idx) if space_idx > 0 => format!("{}{ELLIPSIS}", truncated[..space_idx].trim()),
        _ => format!("{truncated}{ELLIPSIS}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_newlines_and_tabs() {
        assert_eq!(normalize_whitespace("  a\n\n b\t\tc  "), "a b c");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn count_words_ignores_extra_whitespace() {
        assert_eq!(count_words("one  two\nthree"), 3);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn prefix_chars_respects_char_boundaries() {
        assert_eq!(prefix_chars("héllo", 2), "hé");
        assert_eq!(prefix_chars("abc", 10), "abc");
    }

    #[test]
    fn short_text_is_returned_as_is() {
        assert_eq!(clean_body_sample("Short text.", 500, 350.0), "Short text.");
    }

    #[test]
    fn exact_length_is_not_truncated() {
        let text = "a".repeat(500);
        assert_eq!(clean_body_sample(&text, 500, 350.0), text);
    }

    #[test]
    fn late_sentence_break_is_kept_without_ellipsis() {
        // Period at character index 400, nothing after it but words.
        let text = format!("{}.{}", "a".repeat(400), " word".repeat(40));
        let sample = clean_body_sample(&text, 500, 350.0);

        assert_eq!(sample.chars().count(), 401);
        assert!(sample.ends_with('.'));
        assert!(!sample.ends_with("..."));
    }

    #[test]
    fn early_sentence_break_falls_back_to_space() {
        let text = format!("Intro sentence. {}", "word ".repeat(200));
        let sample = clean_body_sample(&text, 500, 350.0);

        assert!(sample.ends_with("..."));
        assert!(sample.chars().count() <= 503);
        assert!(sample.trim_end_matches("...").ends_with("word"));
    }

    #[test]
    fn rightmost_terminal_wins_across_punctuation() {
        let text = format!("{}? {}! {}", "a".repeat(360), "b".repeat(50), "c ".repeat(100));
        let sample = clean_body_sample(&text, 500, 350.0);

        assert_eq!(sample.chars().count(), 413);
        assert!(sample.ends_with("b!"));
    }

    #[test]
    fn question_mark_breaks_sentence() {
        let text = format!("{}? {}", "a".repeat(400), "word ".repeat(40));
        let sample = clean_body_sample(&text, 500, 350.0);

        assert_eq!(sample.chars().count(), 401);
        assert!(sample.ends_with('?'));
    }

    #[test]
    fn no_space_hard_cuts_with_ellipsis() {
        let text = "x".repeat(600);
        let sample = clean_body_sample(&text, 500, 350.0);

        assert_eq!(sample.chars().count(), 503);
        assert!(sample.ends_with("..."));
    }

    #[test]
    fn multibyte_text_is_truncated_by_characters() {
        let text = "é".repeat(600);
        let sample = clean_body_sample(&text, 500, 350.0);
        assert_eq!(sample.chars().count(), 503);
    }
}
