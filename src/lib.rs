//! # kh-html-parser
//!
//! Extracts the visible text of an HTML document as a single line of plain
//! text, and writes it next to the input file.
//!
//! Text is treated as opaque Unicode, so Khmer (or any other script) passes
//! through unchanged apart from whitespace collapsing.
//!
//! ## Quick Start
//!
//! ```rust
//! use kh_html_parser::extract;
//!
//! let html = "<html><body><p>Hello</p>\n<p>World</p></body></html>";
//! assert_eq!(extract(html), "Hello World");
//! ```
//!
//! ## How text is produced
//!
//! 1. The HTML is parsed leniently; broken markup never fails.
//! 2. Every text node is collected in document order. No element is
//!    filtered, so `<script>` and `<style>` contents are included.
//! 3. Node contents are joined with a single space.
//! 4. Each whitespace run becomes one space and the ends are trimmed.

mod error;
mod extract;
mod options;

/// DOM parsing and text node traversal on top of `dom_query`.
pub mod dom;

/// Character encoding detection for byte input.
pub mod encoding;

/// Read, extract and write a single HTML file.
pub mod pipeline;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::collapse_whitespace;
pub use options::Options;
pub use pipeline::{generate_output_path, PipelineReport};

/// Extracts the text of an HTML document using default options.
///
/// The result has no leading or trailing whitespace and never contains two
/// whitespace characters in a row. Input without text yields `""`.
///
/// # Example
///
/// ```rust
/// use kh_html_parser::extract;
///
/// assert_eq!(extract("<div>  Foo   <span>Bar</span>  </div>"), "Foo Bar");
/// assert_eq!(extract(""), "");
/// ```
#[must_use]
pub fn extract(html: &str) -> String {
    extract_with_options(html, &Options::default())
}

/// Extracts the text of an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use kh_html_parser::{extract_with_options, Options};
///
/// let options = Options {
///     separator: "|".to_string(),
///     collapse_whitespace: false,
/// };
/// assert_eq!(extract_with_options("<p>a</p><p>b</p>", &options), "a|b");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> String {
    extract::extract_text(html, options)
}

/// Extracts the text of HTML given as raw bytes.
///
/// The encoding is taken from a byte order mark or a `<meta>` charset
/// declaration and defaults to UTF-8. Invalid sequences are replaced with
/// U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use kh_html_parser::extract_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert_eq!(extract_bytes(html), "Café");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> String {
    extract(&encoding::decode_html(html))
}
