//! Error types for kh-html-parser.
//!
//! Extraction itself never fails; every variant here comes from the file
//! pipeline around it.

use std::path::PathBuf;

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not exist or is not a regular file.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading the input file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid UTF-8.
    #[error("failed to decode {} as UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this is the "input not found" case, which is reported verbatim
    /// rather than as an unexpected failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
