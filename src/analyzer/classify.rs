//! Title extraction and content-type classification.
//!
//! Both run on the untouched document, before text cleaning removes
//! anything from the tree.

use crate::dom::{self, Document};
use crate::patterns::{
    BLOG_CLASS, LANDING_TITLE_TERMS, NO_TITLE, PRODUCT_TITLE_TERMS, SERVICE_TITLE_TERMS,
};
use crate::result::ContentType;

/// Trimmed text of the first `<title>`, else of the first `<h1>`, else
/// `"No title found"`.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    let root = dom::document_root(doc);

    dom::first_text(&root, "title")
        .or_else(|| dom::first_text(&root, "h1"))
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// Classify the page. Rules are evaluated in order and the first match wins.
///
/// Title checks are plain substring tests on the lower-cased title, so
/// "Shopping" counts as containing "shop".
#[must_use]
pub fn determine_content_type(doc: &Document, title: &str) -> ContentType {
    let root = dom::document_root(doc);
    let title_lower = title.to_lowercase();
    let title_mentions = |terms: &[&str]| terms.iter().any(|term| title_lower.contains(*term));

    if dom::has_element(&root, "article")
        || dom::has_element(&root, "time")
        || dom::any_attr_matches(&root, "class", &BLOG_CLASS)
    {
        return ContentType::Blog;
    }

    if title_mentions(&PRODUCT_TITLE_TERMS[..]) {
        return ContentType::Product;
    }

    if title_mentions(&SERVICE_TITLE_TERMS[..]) {
        return ContentType::Service;
    }

    if dom::has_element(&root, "form") && title_mentions(&LANDING_TITLE_TERMS[..]) {
        return ContentType::Landing;
    }

    ContentType::Informational
}
