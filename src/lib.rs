//! # rs-seo-analyzer
//!
//! On-page SEO and content-marketing signal extraction from a single HTML
//! document.
//!
//! Given raw markup and optional keywords, the analyzer reports the page
//! title, a heuristic content type, cleaned body text statistics, the heading
//! outline, keyword frequency and placement, media and call-to-action
//! presence, paragraph style, and a truncated body sample.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_seo_analyzer::{analyze, AnalysisInput};
//!
//! let html = r#"<html><head><title>Buy Now Shoes</title></head>
//! <body><h1>Shoes</h1><p>Buy shoes now and get started.</p>
//! <a href="/cart">Add to Cart</a></body></html>"#;
//!
//! let input = AnalysisInput::new(html).with_primary_keyword("shoes");
//! let result = analyze(&input)?;
//!
//! assert_eq!(result.content_type.as_str(), "product");
//! assert!(result.has_cta);
//! assert_eq!(result.headings, vec!["Shoes"]);
//! # Ok::<(), rs_seo_analyzer::Error>(())
//! ```
//!
//! ## Signals
//!
//! - **Title & type**: `<title>` (or first `<h1>`), classified as blog,
//!   product, service, landing or informational
//! - **Text**: word count over the body with scripts, styles, comments and
//!   hidden elements removed
//! - **Keywords**: whole-word / substring frequency and placement in title,
//!   headings, intro and body
//! - **Engagement**: media elements and calls to action
//! - **Structure**: heading outline, paragraph length buckets, lists
//!
//! Analysis is synchronous and self-contained: no network, filesystem or
//! environment access happens inside the library.

mod error;
mod input;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Lexicons, tag lists and compiled patterns used by the extraction rules.
pub mod patterns;

/// Whitespace normalization, word counting and body sample truncation.
pub mod text;

/// Keyword frequency counting and placement analysis.
pub mod keywords;

/// Character encoding detection for byte input.
pub mod encoding;

/// The analyzer and its per-signal extraction steps.
pub mod analyzer;

// Public API - re-exports
pub use analyzer::SeoAnalyzer;
pub use error::{Error, Result};
pub use input::AnalysisInput;
pub use options::Options;
pub use result::{AnalysisResult, ContentType, KeywordFrequencies, KeywordPlacement, ParagraphStyle};

/// Analyzes an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_seo_analyzer::{analyze, AnalysisInput};
///
/// let result = analyze(&AnalysisInput::new("<p>Hello world</p>"))?;
/// assert_eq!(result.word_count, 2);
/// assert_eq!(result.title, "No title found");
/// # Ok::<(), rs_seo_analyzer::Error>(())
/// ```
pub fn analyze(input: &AnalysisInput) -> Result<AnalysisResult> {
    analyze_with_options(input, &Options::default())
}

/// Analyzes an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_seo_analyzer::{analyze_with_options, AnalysisInput, Options};
///
/// let options = Options {
///     sample_length: 20,
///     ..Options::default()
/// };
/// let input = AnalysisInput::new("<p>A rather long paragraph that needs cutting.</p>");
/// let result = analyze_with_options(&input, &options)?;
/// assert!(result.clean_body.ends_with("..."));
/// # Ok::<(), rs_seo_analyzer::Error>(())
/// ```
pub fn analyze_with_options(input: &AnalysisInput, options: &Options) -> Result<AnalysisResult> {
    SeoAnalyzer::with_options(options.clone()).analyze(input)
}

/// Analyzes markup with a primary keyword and nothing else.
///
/// # Example
///
/// ```rust
/// use rs_seo_analyzer::analyze_html;
///
/// let result = analyze_html("<h1>Rust</h1><p>Rust is fast.</p>", "rust")?;
/// assert_eq!(result.primary_kw_freq, 2);
/// assert!(result.keyword_placement.in_headings);
/// # Ok::<(), rs_seo_analyzer::Error>(())
/// ```
pub fn analyze_html(html: &str, primary_keyword: &str) -> Result<AnalysisResult> {
    analyze(&AnalysisInput::new(html).with_primary_keyword(primary_keyword))
}

/// Analyzes HTML bytes, detecting the character encoding from the markup.
///
/// # Example
///
/// ```rust
/// use rs_seo_analyzer::analyze_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 menu</p></body></html>";
/// let result = analyze_bytes(html)?;
/// assert_eq!(result.clean_body, "Café menu");
/// # Ok::<(), rs_seo_analyzer::Error>(())
/// ```
pub fn analyze_bytes(html: &[u8]) -> Result<AnalysisResult> {
    analyze(&AnalysisInput::from_html_bytes(html))
}
