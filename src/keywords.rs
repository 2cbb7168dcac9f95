//! Keyword frequency and placement.
//!
//! Single-word keywords are counted as whole words (regex word boundaries);
//! multi-word keywords are counted as plain non-overlapping substrings.
//! Both are case-insensitive.

use regex::Regex;

use crate::error::Result;
use crate::result::{KeywordFrequencies, KeywordPlacement};
use crate::text::prefix_chars;

/// Count occurrences of `keyword` in `text`, case-insensitively.
///
/// The keyword is trimmed before matching. An empty keyword counts zero.
///
/// # Example
///
/// ```rust
/// use rs_seo_analyzer::keywords::count_keyword_frequency;
///
/// assert_eq!(count_keyword_frequency("Cats and cat food", "cat")?, 1);
/// assert_eq!(count_keyword_frequency("Cat food, cat foodie", "cat food")?, 2);
/// # Ok::<(), rs_seo_analyzer::Error>(())
/// ```
pub fn count_keyword_frequency(text: &str, keyword: &str) -> Result<usize> {
    if keyword.is_empty() {
        return Ok(0);
    }

    let keyword = keyword.trim().to_lowercase();
    let text = text.to_lowercase();

    if keyword.contains(' ') {
        return Ok(text.matches(keyword.as_str()).count());
    }

    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&keyword)))?;
    Ok(pattern.find_iter(&text).count())
}

/// Count every non-empty related keyword, preserving input order.
pub fn count_related_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> Result<KeywordFrequencies> {
    let mut frequencies = KeywordFrequencies::new();

    for keyword in keywords.iter().map(AsRef::as_ref) {
        if keyword.is_empty() {
            continue;
        }
        frequencies.insert(keyword, count_keyword_frequency(text, keyword)?);
    }

    Ok(frequencies)
}

/// Locate the primary keyword in the title, headings, intro window and body.
///
/// Checks are plain case-insensitive substring tests. `intro_length` is the
/// number of leading characters of `text` forming the intro.
#[must_use]
pub fn analyze_keyword_placement(
    keyword: &str,
    title: &str,
    headings: &[String],
    text: &str,
    intro_length: usize,
) -> KeywordPlacement {
    if keyword.is_empty() {
        return KeywordPlacement::default();
    }

    let keyword = keyword.to_lowercase();
    let keyword = keyword.as_str();

    let in_title = title.to_lowercase().contains(keyword);
    let in_headings = headings.iter().any(|h| h.to_lowercase().contains(keyword));
    let in_intro = prefix_chars(text, intro_length).to_lowercase().contains(keyword);
    let in_body = text.to_lowercase().contains(keyword);

    let placement = [
        (in_title, "title"),
        (in_headings, "headings"),
        (in_intro, "intro"),
        (in_body && !in_intro, "body"),
    ]
    .into_iter()
    .filter_map(|(hit, label)| hit.then(|| label.to_string()))
    .collect();

    KeywordPlacement {
        in_title,
        in_headings,
        in_intro,
        in_body,
        placement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keyword_counts_zero() {
        assert_eq!(count_keyword_frequency("anything", "").expect("count"), 0);
    }

    #[test]
    fn single_word_uses_word_boundaries() {
        let text = "Shoes, shoes everywhere. Shoelaces are not shoes-related? shoes";
        assert_eq!(count_keyword_frequency(text, "shoes").expect("count"), 4);
        assert_eq!(count_keyword_frequency("cats category", "cat").expect("count"), 0);
    }

    #[test]
    fn single_word_is_case_insensitive_and_trimmed() {
        assert_eq!(count_keyword_frequency("SEO seo SeO", "  Seo ").expect("count"), 3);
    }

    #[test]
    fn keyword_with_regex_metacharacters_is_escaped() {
        assert_eq!(count_keyword_frequency("c++ and c", "c++").expect("count"), 0);
        assert_eq!(count_keyword_frequency("price $5 today", "$5").expect("count"), 0);
        assert_eq!(count_keyword_frequency("node.js rocks", "node.js").expect("count"), 1);
    }

    #[test]
    fn multi_word_uses_substring_count() {
        let text = "Free trial. The free trial offer. freetrial";
        assert_eq!(count_keyword_frequency(text, "free trial").expect("count"), 2);
        assert_eq!(count_keyword_frequency("cat foodie", "cat food").expect("count"), 1);
    }

    #[test]
    fn related_keywords_skip_empty_and_keep_order() {
        let freqs = count_related_keywords("red blue red", &["red", "", "green", "blue"]).expect("count");

        assert_eq!(freqs.keywords().collect::<Vec<_>>(), vec!["red", "green", "blue"]);
        assert_eq!(freqs.get("red"), Some(2));
        assert_eq!(freqs.get("green"), Some(0));
        assert_eq!(freqs.get("blue"), Some(1));
    }

    #[test]
    fn related_keywords_keep_original_spelling() {
        let freqs = count_related_keywords("Rust rust", &["RUST"]).expect("count");
        assert_eq!(freqs.get("RUST"), Some(2));
    }

    #[test]
    fn placement_without_keyword_is_all_false() {
        let placement = analyze_keyword_placement("", "Title", &["H".to_string()], "text", 200);
        assert_eq!(placement, KeywordPlacement::default());
    }

    #[test]
    fn intro_hit_suppresses_body_label() {
        let placement = analyze_keyword_placement("shoes", "Shoes", &[], "Shoes for sale", 200);

        assert!(placement.in_intro);
        assert!(placement.in_body);
        assert_eq!(placement.placement, vec!["title", "intro"]);
    }

    #[test]
    fn body_label_when_only_past_intro() {
        let text = format!("{} shoes", "filler ".repeat(40));
        let placement = analyze_keyword_placement("shoes", "Home", &["Shoe Guide".to_string()], &text, 200);

        assert!(!placement.in_title);
        assert!(!placement.in_headings);
        assert!(!placement.in_intro);
        assert!(placement.in_body);
        assert_eq!(placement.placement, vec!["body"]);
    }

    #[test]
    fn headings_are_matched_case_insensitively() {
        let headings = vec!["Intro".to_string(), "Best RUNNING Shoes".to_string()];
        let placement = analyze_keyword_placement("running shoes", "x", &headings, "", 200);

        assert!(placement.in_headings);
        assert!(!placement.in_body);
        assert_eq!(placement.placement, vec!["headings"]);
    }
}
