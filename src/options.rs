//! Configuration options for SEO analysis.
//!
//! The `Options` struct holds the numeric windows and thresholds used by the
//! extraction rules. The defaults reproduce the reference heuristics exactly;
//! changing them is only useful for experimentation.

use serde::Deserialize;

/// Configuration options for analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_seo_analyzer::Options;
///
/// let options = Options {
///     max_html_len: Some(2_000_000),
///     ..Options::default()
/// };
/// assert_eq!(options.sample_length, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Number of leading characters of cleaned text treated as the intro.
    ///
    /// Default: `200`
    pub intro_length: usize,

    /// Maximum number of characters in the clean body sample, before any
    /// `"..."` suffix.
    ///
    /// Default: `500`
    pub sample_length: usize,

    /// A sentence break is used for the sample only when it lies beyond this
    /// fraction of `sample_length`.
    ///
    /// Default: `0.7`
    pub sentence_break_ratio: f64,

    /// Paragraphs with fewer words than this are counted as short.
    ///
    /// Default: `20`
    pub short_paragraph_words: usize,

    /// Paragraphs with at least this many words are counted as long.
    /// Everything in between is medium.
    ///
    /// Default: `50`
    pub long_paragraph_words: usize,

    /// Reject markup longer than this many bytes with `Error::InvalidInput`.
    ///
    /// Default: `None` (no limit)
    pub max_html_len: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            intro_length: 200,
            sample_length: 500,
            sentence_break_ratio: 0.7,
            short_paragraph_words: 20,
            long_paragraph_words: 50,
            max_html_len: None,
        }
    }
}

impl Options {
    /// Character index a sentence break must exceed to be used for the sample.
    #[must_use]
    pub(crate) fn sentence_break_threshold(&self) -> f64 {
        self.sample_length as f64 * self.sentence_break_ratio
    }
}
