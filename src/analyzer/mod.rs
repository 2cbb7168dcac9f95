//! The analyzer: parses one document and builds an `AnalysisResult`.
//!
//! Extraction runs in a fixed sequence over a single parsed tree. Title and
//! content type are read first; text cleaning then removes non-content nodes
//! from the body, and every later step sees the cleaned tree.

pub mod classify;
pub mod clean;
pub mod engagement;
pub mod headings;
pub mod paragraphs;

use tracing::{debug, error, warn};

use crate::dom;
use crate::error::{Error, Result};
use crate::input::AnalysisInput;
use crate::keywords::{analyze_keyword_placement, count_keyword_frequency, count_related_keywords};
use crate::options::Options;
use crate::result::AnalysisResult;
use crate::text::{clean_body_sample, count_words};

/// SEO and content-marketing signal analyzer.
///
/// Holds only immutable configuration; compiled patterns are process-wide
/// statics. One analyzer can serve any number of calls, from any thread.
///
/// # Example
///
/// ```rust
/// use rs_seo_analyzer::{AnalysisInput, ContentType, SeoAnalyzer};
///
/// let analyzer = SeoAnalyzer::new();
/// let input = AnalysisInput::new("<title>Shoe Store</title><h1>Shoes</h1><p>Great shoes.</p>")
///     .with_primary_keyword("shoes");
///
/// let result = analyzer.analyze(&input)?;
/// assert_eq!(result.content_type, ContentType::Product);
/// assert_eq!(result.primary_kw_freq, 2);
/// # Ok::<(), rs_seo_analyzer::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeoAnalyzer {
    options: Options,
}

impl SeoAnalyzer {
    /// Analyzer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with custom windows and thresholds.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// The configuration this analyzer runs with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Analyze one document.
    ///
    /// Fails with `Error::InvalidInput` for empty markup (or markup over
    /// `Options::max_html_len`). Any later failure fails the whole call.
    pub fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult> {
        if let Err(err) = self.validate(&input.html_content) {
            warn!(error = %err, "rejecting analysis input");
            return Err(err);
        }

        match self.run(input) {
            Ok(result) => {
                debug!(
                    url = %result.url,
                    content_type = %result.content_type,
                    word_count = result.word_count,
                    headings = result.headings.len(),
                    "analysis complete"
                );
                Ok(result)
            }
            Err(err) => {
                error!(error = %err, "error analyzing HTML");
                Err(err)
            }
        }
    }

    fn validate(&self, html: &str) -> Result<()> {
        if html.trim().is_empty() {
            return Err(Error::InvalidInput("HTML content is required".to_string()));
        }

        if let Some(limit) = self.options.max_html_len {
            if html.len() > limit {
                return Err(Error::InvalidInput(format!(
                    "HTML content is {} bytes, limit is {limit}",
                    html.len()
                )));
            }
        }

        Ok(())
    }

    fn run(&self, input: &AnalysisInput) -> Result<AnalysisResult> {
        let doc = dom::parse(&input.html_content);
        if !doc.select("html").exists() {
            return Err(Error::ParseError("parser produced no document element".to_string()));
        }

        // Read before cleaning mutates the tree.
        let title = classify::extract_title(&doc);
        let content_type = classify::determine_content_type(&doc, &title);

        let clean_text = clean::extract_clean_text(&doc);
        let word_count = count_words(&clean_text);

        let headings = headings::extract_headings(&doc);

        let primary_kw_freq = count_keyword_frequency(&clean_text, &input.primary_keyword)?;
        let related_kw_freq = count_related_keywords(&clean_text, &input.related_keywords)?;

        let has_media = engagement::detect_media(&doc);
        let has_cta = engagement::detect_cta(&doc, &clean_text);

        let clean_body = clean_body_sample(
            &clean_text,
            self.options.sample_length,
            self.options.sentence_break_threshold(),
        );

        let keyword_placement = analyze_keyword_placement(
            &input.primary_keyword,
            &title,
            &headings,
            &clean_text,
            self.options.intro_length,
        );

        let paragraph_style = paragraphs::analyze_paragraph_style(&doc, &self.options);

        Ok(AnalysisResult {
            url: input.url.clone(),
            title,
            content_type,
            word_count,
            headings,
            primary_kw_freq,
            related_kw_freq,
            has_media,
            has_cta,
            clean_body,
            keyword_placement,
            paragraph_style,
        })
    }
}
