//! Error types for rs-seo-analyzer.
//!
//! This module defines the error types returned by analysis operations.
//! Analysis either produces a complete result or fails; there are no
//! partial results.

/// Error type for analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Markup was missing, empty, or rejected by a configured limit.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTML parsing failed catastrophically.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// Any other failure while extracting signals from the parsed tree.
    #[error("Analysis failed: {0}")]
    AnalysisError(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::AnalysisError(format!("keyword pattern: {err}"))
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
