//! Error types for docverify library.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for docverify operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, validating or reporting.
///
/// Comparison outcomes are never errors: a heading with the wrong font is a
/// FAIL record in the report. Only inputs the engine cannot substitute
/// (unreadable containers, unreachable oracles) surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as DOCX.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// Error reading the ZIP container.
    #[error("DOCX container error: {0}")]
    Zip(String),

    /// Error parsing one of the XML parts.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// A required package part is missing.
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// The document structure is malformed.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The pagination oracle did not answer in time.
    #[error("Pagination oracle timed out after {0:?}")]
    PaginationTimeout(Duration),

    /// The pagination oracle cannot be started with the given setup.
    #[error("Pagination oracle misconfigured: {0}")]
    PaginationMisconfigured(String),

    /// The pagination oracle ran but produced no usable mapping.
    #[error("Pagination oracle failed: {0}")]
    PaginationFailed(String),

    /// The dictionary oracle cannot be reached or loaded.
    #[error("Dictionary unavailable: {0}")]
    DictionaryUnavailable(String),

    /// Error while serializing the report.
    #[error("Report error: {0}")]
    Report(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the error comes from one of the external oracles.
    pub fn is_oracle_error(&self) -> bool {
        matches!(
            self,
            Error::PaginationTimeout(_)
                | Error::PaginationMisconfigured(_)
                | Error::PaginationFailed(_)
                | Error::DictionaryUnavailable(_)
        )
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::InvalidArchive(_) => Error::UnknownFormat,
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Report(err.to_string())
    }
}
