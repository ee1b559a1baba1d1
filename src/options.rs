//! Configuration options for text extraction.
//!
//! The `Options` struct controls how text node contents are merged into the
//! final string.

/// Configuration options for text extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use kh_html_parser::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Keep the raw joined text
/// let options = Options {
///     collapse_whitespace: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// String inserted between the contents of adjacent text nodes.
    ///
    /// Default: `" "`
    pub separator: String,

    /// Collapse every whitespace run to a single space and trim the ends.
    ///
    /// When disabled, the separator-joined text is returned verbatim.
    ///
    /// Default: `true`
    pub collapse_whitespace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            collapse_whitespace: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_single_space_and_collapse() {
        let options = Options::default();
        assert_eq!(options.separator, " ");
        assert!(options.collapse_whitespace);
    }
}
