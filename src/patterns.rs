//! Lexicons, tag lists and compiled regex patterns for signal extraction.
//!
//! Every heuristic word list lives here so the rules stay editable in one
//! place. Patterns are compiled once at first use with `LazyLock` and shared
//! read-only across threads.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Tag Lists
// =============================================================================

/// Elements removed from the body before text extraction.
pub const NON_CONTENT_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Elements that count as embedded media.
pub const MEDIA_TAGS: [&str; 6] = ["img", "video", "audio", "iframe", "embed", "object"];

/// Heading levels in the order they are collected.
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// `<input type=...>` values that make an input a button.
pub const BUTTON_INPUT_TYPES: [&str; 2] = ["submit", "button"];

/// Title returned when neither `<title>` nor `<h1>` has text.
pub const NO_TITLE: &str = "No title found";

// =============================================================================
// Content-Type Lexicons
// =============================================================================

/// Lower-cased title fragments indicating a product page.
pub const PRODUCT_TITLE_TERMS: [&str; 5] = ["buy", "price", "product", "shop", "store"];

/// Lower-cased title fragments indicating a service page.
pub const SERVICE_TITLE_TERMS: [&str; 4] = ["service", "consulting", "hire", "expert"];

/// Lower-cased title fragments indicating a landing page (needs a form too).
pub const LANDING_TITLE_TERMS: [&str; 3] = ["signup", "register", "get started"];

// =============================================================================
// Attribute Patterns
// =============================================================================

/// Class names marking blog/article markup.
pub static BLOG_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)blog|post|article").expect("BLOG_CLASS regex")
});

/// Class names marking media containers.
pub static MEDIA_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)media|image|video|audio|gallery").expect("MEDIA_CLASS regex")
});

/// Inline styles that hide an element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)display\s*:\s*none").expect("HIDDEN_STYLE regex")
});

// =============================================================================
// Call-to-Action Phrases
// =============================================================================

/// Conversion verb phrases ("buy now", "sign up", "free trial", ...).
pub static CTA_ACTION_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(buy\s+now|purchase|order\s+now|get\s+started|sign\s+up|subscribe|download|learn\s+more|contact\s+us|call\s+now|book\s+now|try\s+free|free\s+trial|get\s+quote)\b",
    )
    .expect("CTA_ACTION_PHRASES regex")
});

/// Navigation and commerce phrases ("click here", "add to cart", ...).
pub static CTA_NAVIGATION_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(click\s+here|read\s+more|view\s+more|see\s+more|shop\s+now|add\s+to\s+cart|checkout|register|join\s+now|apply\s+now)\b",
    )
    .expect("CTA_NAVIGATION_PHRASES regex")
});

/// True if either CTA alternation occurs in `text`.
#[must_use]
pub fn contains_cta_phrase(text: &str) -> bool {
    CTA_ACTION_PHRASES.is_match(text) || CTA_NAVIGATION_PHRASES.is_match(text)
}

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches whitespace runs for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});
