//! Heading outline.

use dom_query::Selection;

use crate::dom::{self, Document};
use crate::patterns::HEADING_TAGS;

/// Non-empty heading texts grouped by level: every `<h1>` in document order,
/// then every `<h2>`, down to `<h6>`.
#[must_use]
pub fn extract_headings(doc: &Document) -> Vec<String> {
    let root = dom::document_root(doc);
    let mut headings = Vec::new();

    for tag in HEADING_TAGS {
        for node in root.select(tag).nodes() {
            let text = dom::text_content(&Selection::from(*node)).trim().to_string();
            if !text.is_empty() {
                headings.push(text);
            }
        }
    }

    headings
}
