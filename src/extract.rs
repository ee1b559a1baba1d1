//! HTML to plain text extraction.
//!
//! The whole transform: parse, gather text nodes in document order, join
//! them with the separator, then collapse whitespace.

use log::debug;

use crate::dom::{self, StrTendril};
use crate::options::Options;

/// Extract text using the given options. See [`crate::extract`].
pub(crate) fn extract_text(html: &str, options: &Options) -> String {
    let doc = dom::parse(html);
    let texts = dom::text_nodes(&doc);
    let joined = join_text_nodes(&texts, &options.separator);

    let text = if options.collapse_whitespace {
        collapse_whitespace(&joined)
    } else {
        joined
    };

    debug!(
        "extracted {} chars from {} text nodes ({} bytes of HTML)",
        text.chars().count(),
        texts.len(),
        html.len()
    );

    text
}

/// Join text node contents, putting `separator` between adjacent nodes.
fn join_text_nodes(texts: &[StrTendril], separator: &str) -> String {
    let capacity = texts.iter().map(|t| t.len()).sum::<usize>()
        + separator.len() * texts.len().saturating_sub(1);
    let mut joined = String::with_capacity(capacity);
    for (i, text) in texts.iter().enumerate() {
        if i > 0 {
            joined.push_str(separator);
        }
        joined.push_str(text);
    }
    joined
}

/// Whether `c` separates words when collapsing.
///
/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (U+001C to U+001F), which `char::is_whitespace` does not include.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Tabs, newlines, no-break spaces and the ASCII separator controls
/// U+001C to U+001F all count as whitespace. Zero-width characters are left
/// untouched.
///
/// # Example
///
/// ```rust
/// use kh_html_parser::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Foo \n\t Bar  "), "Foo Bar");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(is_separator).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
