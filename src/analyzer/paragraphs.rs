//! Paragraph length and list structure.

use dom_query::Selection;

use crate::dom::{self, Document};
use crate::result::ParagraphStyle;
use crate::text::count_words;
use crate::Options;

/// Summarize paragraph lengths and list usage in the body.
///
/// Only paragraphs with non-empty text are counted. Lists are counted
/// anywhere in the body, nested ones included.
#[must_use]
pub fn analyze_paragraph_style(doc: &Document, options: &Options) -> ParagraphStyle {
    let body = dom::content_root(doc);

    let lengths: Vec<usize> = body
        .select("p")
        .nodes()
        .iter()
        .map(|node| dom::text_content(&Selection::from(*node)))
        .filter(|text| !text.trim().is_empty())
        .map(|text| count_words(&text))
        .collect();

    let avg_paragraph_length = if lengths.is_empty() {
        0.0
    } else {
        round_to_tenth(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
    };

    let short = options.short_paragraph_words;
    let long = options.long_paragraph_words;
    let short_paragraphs = lengths.iter().filter(|&&n| n < short).count();
    let medium_paragraphs = lengths.iter().filter(|&&n| n >= short && n < long).count();
    let long_paragraphs = lengths.iter().filter(|&&n| n >= long).count();

    let list_types = body.select("ul, ol").length();

    ParagraphStyle {
        avg_paragraph_length,
        total_paragraphs: lengths.len(),
        short_paragraphs,
        medium_paragraphs,
        long_paragraphs,
        has_bullets: list_types > 0,
        bullet_count: body.select("li").length(),
        list_types,
    }
}

/// One decimal place, ties to even.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
