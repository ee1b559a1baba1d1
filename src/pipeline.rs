//! File pipeline: read an HTML file, extract its text, write `<stem>.txt`.
//!
//! ```text
//! START -> READ -> EXTRACT -> WRITE -> DONE
//!            \        \         \
//!             +--------+---------+--> FAILED
//! ```
//!
//! Every failure is returned to the caller as an [`Error`]; the binary decides
//! how to print it and which exit code to use.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::extract::extract_text;
use crate::options::Options;

/// Extension given to every output file.
pub const OUTPUT_EXTENSION: &str = "txt";

/// A completed pipeline step, reported as it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// The input file was read and decoded.
    Read(&'a Path),
    /// Text extraction finished.
    Extracted,
    /// The output file was written.
    Written(&'a Path),
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path) => write!(f, "Successfully read HTML file: {}", path.display()),
            Self::Extracted => f.write_str("Successfully extracted text from HTML."),
            Self::Written(path) => write!(f, "Extracted text saved to: {}", path.display()),
        }
    }
}

/// Receives progress notifications from [`run_with`].
pub trait Reporter {
    fn step(&mut self, step: Step<'_>);
}

/// Prints each step to stdout as an `[INFO]` line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn step(&mut self, step: Step<'_>) {
        println!("[INFO] {step}");
    }
}

/// Discards progress notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn step(&mut self, _step: Step<'_>) {}
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Path the HTML was read from.
    pub input: PathBuf,
    /// Path the text was written to.
    pub output: PathBuf,
    /// Size of the input file in bytes.
    pub bytes_read: usize,
    /// Length of the extracted text in characters.
    pub chars_written: usize,
}

/// Derive the output path by replacing the final extension with `.txt`.
///
/// Only the last extension is replaced, and a path without one gets `.txt`
/// appended. A leading dot does not start an extension, so `.page` becomes
/// `.page.txt`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use kh_html_parser::pipeline::generate_output_path;
///
/// assert_eq!(generate_output_path("a/b.html"), Path::new("a/b.txt"));
/// assert_eq!(generate_output_path("a/b.tar.html"), Path::new("a/b.tar.txt"));
/// assert_eq!(generate_output_path("noext"), Path::new("noext.txt"));
/// ```
#[must_use]
pub fn generate_output_path(input: impl AsRef<Path>) -> PathBuf {
    input.as_ref().with_extension(OUTPUT_EXTENSION)
}

/// Read a file as strict UTF-8.
///
/// Fails with [`Error::NotFound`] unless `path` is an existing regular file
/// (symlinks are followed).
///
/// # Errors
///
/// [`Error::NotFound`], [`Error::Read`] or [`Error::Decode`].
pub fn read_html_file(path: &Path) -> Result<String> {
    let is_file = fs::metadata(path).is_ok_and(|m| m.is_file());
    if !is_file {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` verbatim, replacing any existing file.
///
/// # Errors
///
/// [`Error::Write`] if the file cannot be created or written.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the pipeline on `input` with default options and no progress output.
#[allow(clippy::missing_errors_doc)]
pub fn run(input: &Path) -> Result<PipelineReport> {
    run_with(input, &Options::default(), &mut SilentReporter)
}

/// Run the pipeline on `input`, reporting each completed step.
///
/// The output goes next to the input, see [`generate_output_path`].
///
/// # Errors
///
/// - [`Error::NotFound`] if `input` is not an existing regular file
/// - [`Error::Read`] or [`Error::Decode`] if it cannot be read as UTF-8
/// - [`Error::Write`] if the output file cannot be written
///
/// Nothing is cleaned up on failure.
pub fn run_with(
    input: &Path,
    options: &Options,
    reporter: &mut dyn Reporter,
) -> Result<PipelineReport> {
    let html = read_html_file(input)?;
    debug!("read {} bytes from {}", html.len(), input.display());
    reporter.step(Step::Read(input));

    let output = generate_output_path(input);
    if output.as_path() == input {
        warn!("output path {} is the input file, it will be overwritten", output.display());
    }

    let text = extract_text(&html, options);
    reporter.step(Step::Extracted);

    write_text_file(&output, &text)?;
    debug!("wrote {} bytes to {}", text.len(), output.display());
    reporter.step(Step::Written(&output));

    Ok(PipelineReport {
        input: input.to_path_buf(),
        output,
        bytes_read: html.len(),
        chars_written: text.chars().count(),
    })
}
