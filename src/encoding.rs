//! Charset sniffing for HTML given as raw bytes.
//!
//! Only the byte-oriented library entry point uses this. The file pipeline
//! decodes strictly as UTF-8 and reports anything else as an error.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How far into the document a charset declaration is searched for.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("valid regex")
});

/// Detect the declared encoding of an HTML document.
///
/// A byte order mark wins. After that the first [`SNIFF_LIMIT`] bytes are
/// searched for a `<meta charset>` declaration, then for the
/// `http-equiv="Content-Type"` form. Unknown labels are ignored and the
/// default is UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    [&*META_CHARSET_RE, &*HTTP_EQUIV_CHARSET_RE]
        .into_iter()
        .filter_map(|re| re.captures(&head)?.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes into a UTF-8 string using the detected encoding.
///
/// Malformed sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use kh_html_parser::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    // decode() strips a matching BOM and falls back to lossy replacement
    let (decoded, _used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
