//! Result types for analysis output.
//!
//! `AnalysisResult` is built once per call and never mutated afterwards.
//! Serialization uses the field names downstream consumers expect
//! (`wordCount`, `primaryKWfreq`, `hasCTA`, ...).

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Heuristic page classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Product,
    Service,
    Landing,
    Informational,
}

impl ContentType {
    /// Lower-case name as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Product => "product",
            Self::Service => "service",
            Self::Landing => "landing",
            Self::Informational => "informational",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword -> occurrence count, kept in insertion order.
///
/// Serializes as a JSON object whose keys appear in the order the keywords
/// were supplied. Inserting an existing keyword again updates its count in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFrequencies {
    entries: Vec<(String, usize)>,
}

impl KeywordFrequencies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for `keyword`, keeping the position of an earlier entry.
    pub fn insert(&mut self, keyword: impl Into<String>, count: usize) {
        let keyword = keyword.into();
        match self.entries.iter_mut().find(|(k, _)| *k == keyword) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((keyword, count)),
        }
    }

    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.entries.iter().find(|(k, _)| k == keyword).map(|(_, c)| *c)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

impl Serialize for KeywordFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (keyword, count) in &self.entries {
            map.serialize_entry(keyword, count)?;
        }
        map.end()
    }
}

/// Where the primary keyword appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordPlacement {
    pub in_title: bool,
    pub in_headings: bool,
    pub in_intro: bool,
    /// True whenever the keyword occurs anywhere in the cleaned text,
    /// including inside the intro window.
    pub in_body: bool,
    /// Section labels in fixed order: `title`, `headings`, `intro`, `body`.
    /// `body` is only listed when the keyword is not already in the intro.
    pub placement: Vec<String>,
}

/// Paragraph and list structure of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    /// Mean words per non-empty paragraph, rounded to one decimal place.
    pub avg_paragraph_length: f64,
    pub total_paragraphs: usize,
    pub short_paragraphs: usize,
    pub medium_paragraphs: usize,
    pub long_paragraphs: usize,
    /// Any `<ul>` or `<ol>` present.
    pub has_bullets: bool,
    /// Number of `<li>` elements.
    pub bullet_count: usize,
    /// Number of `<ul>` plus `<ol>` containers.
    pub list_types: usize,
}

/// Result of analyzing one HTML document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Caller-supplied URL, echoed unchanged.
    pub url: String,

    pub title: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Whitespace tokens in the cleaned body text.
    pub word_count: usize,

    /// Non-empty heading texts, all h1s first, then h2s, and so on.
    pub headings: Vec<String>,

    #[serde(rename = "primaryKWfreq")]
    pub primary_kw_freq: usize,

    #[serde(rename = "relatedKWfreq")]
    pub related_kw_freq: KeywordFrequencies,

    pub has_media: bool,

    #[serde(rename = "hasCTA")]
    pub has_cta: bool,

    /// Cleaned text truncated to a readable sample.
    pub clean_body: String,

    pub keyword_placement: KeywordPlacement,

    pub paragraph_style: ParagraphStyle,
}
