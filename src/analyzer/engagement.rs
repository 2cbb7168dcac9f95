//! Media and call-to-action detection.

use dom_query::Selection;

use crate::dom::{self, Document};
use crate::patterns::{contains_cta_phrase, BUTTON_INPUT_TYPES, MEDIA_CLASS, MEDIA_TAGS};

/// True if the page embeds media or has a media-like class name.
#[must_use]
pub fn detect_media(doc: &Document) -> bool {
    let root = dom::document_root(doc);

    MEDIA_TAGS.iter().any(|tag| dom::has_element(&root, tag))
        || dom::any_attr_matches(&root, "class", &MEDIA_CLASS)
}

/// True if the page asks the reader to act.
///
/// Checked in order, stopping at the first hit: any form; any button or
/// submit/button input; any `mailto:` link or link whose text is a CTA
/// phrase; finally a CTA phrase anywhere in the cleaned `text`.
#[must_use]
pub fn detect_cta(doc: &Document, text: &str) -> bool {
    let root = dom::document_root(doc);

    if dom::has_element(&root, "form") || dom::has_element(&root, "button") {
        return true;
    }

    let has_button_input = root.select("input[type]").nodes().iter().any(|node| {
        dom::get_attribute(&Selection::from(*node), "type")
            .is_some_and(|kind| BUTTON_INPUT_TYPES.contains(&kind.as_str()))
    });
    if has_button_input {
        return true;
    }

    for node in root.select("a").nodes() {
        let link = Selection::from(*node);

        if dom::get_attribute(&link, "href").is_some_and(|href| href.starts_with("mailto:")) {
            return true;
        }

        let link_text = dom::text_content(&link).trim().to_lowercase();
        if contains_cta_phrase(&link_text) {
            return true;
        }
    }

    contains_cta_phrase(text)
}
