//! Analysis input record.

use serde::Deserialize;

use crate::encoding::decode_html;

/// Caller-provided input for one analysis.
///
/// Deserializes from the wrapper wire format:
///
/// ```json
/// {"html": "...", "url": "...", "primaryKeyword": "...", "relatedKeywords": ["..."]}
/// ```
///
/// Every field except `html` is optional. A JSON `null` is treated like an
/// absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    /// Raw markup. Must be non-empty.
    #[serde(rename = "html", default, deserialize_with = "null_as_default")]
    pub html_content: String,

    /// Echoed into the result; never parsed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Empty disables all primary-keyword signals.
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_keyword: String,

    /// Counted in order; empty entries are skipped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_keywords: Vec<String>,
}

impl AnalysisInput {
    /// Input with markup only.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html_content: html.into(),
            ..Self::default()
        }
    }

    /// Input from raw bytes, decoded using the declared charset.
    #[must_use]
    pub fn from_html_bytes(html: &[u8]) -> Self {
        Self::new(decode_html(html))
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_primary_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.primary_keyword = keyword.into();
        self
    }

    #[must_use]
    pub fn with_related_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
