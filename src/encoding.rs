//! Character encoding detection for raw markup.
//!
//! Pages fetched as bytes are decoded to UTF-8 before parsing. The charset
//! comes from a byte-order mark or from the first `<meta>` declaration in the
//! document head; UTF-8 is assumed otherwise.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes scanned for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Matches both `<meta charset="x">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=x">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("META_CHARSET regex")
});

/// Detect the encoding of `html`.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode `html` to a UTF-8 string, replacing invalid sequences with U+FFFD.
///
/// # Examples
///
/// ```
/// use rs_seo_analyzer::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let (text, _encoding, _had_errors) = detect_encoding(html).decode(html);
    text.into_owned()
}
