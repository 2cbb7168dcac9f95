//! Body text cleaning.
//!
//! Cleaning mutates the parsed tree: scripts, styles, noscript blocks,
//! comments and inline-hidden elements are removed from the body for good,
//! so every later step sees the cleaned tree.

use crate::dom::{self, Document};
use crate::patterns::{HIDDEN_STYLE, NON_CONTENT_TAGS};
use crate::text::normalize_whitespace;

/// Strip non-content nodes from the body (or the whole document when there
/// is no body) and return its text as a single normalized line.
pub fn extract_clean_text(doc: &Document) -> String {
    let body = dom::content_root(doc);

    dom::remove_tags(&body, &NON_CONTENT_TAGS);
    dom::remove_comments(&body);
    dom::remove_by_attr_regex(&body, "style", &HIDDEN_STYLE);

    normalize_whitespace(&dom::text_with_separator(&body, " "))
}
