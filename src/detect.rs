//! DOCX format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// DOCX container information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxFormat {
    /// Whether the archive begins with a local file header (a regular ZIP)
    pub local_header: bool,
    /// Whether the archive is empty (end-of-central-directory only)
    pub empty_archive: bool,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.empty_archive {
            write!(f, "DOCX (empty archive)")
        } else {
            write!(f, "DOCX")
        }
    }
}

/// ZIP local file header: PK\x03\x04
const ZIP_LOCAL_MAGIC: &[u8] = b"PK\x03\x04";
/// ZIP end of central directory: PK\x05\x06
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";
const MAGIC_LEN: usize = 4;

/// Detect the DOCX container from a file path.
///
/// Only the container signature is checked here; whether the package
/// actually holds `word/document.xml` is verified when it is loaded.
///
/// # Example
/// ```no_run
/// use docverify::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.docx").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; MAGIC_LEN];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    detect_format_from_bytes(&header)
}

/// Detect the DOCX container from bytes.
///
/// # Returns
/// * `Ok(DocxFormat)` if the data starts with a ZIP signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    if data.len() < MAGIC_LEN {
        return Err(Error::UnknownFormat);
    }

    if data.starts_with(ZIP_LOCAL_MAGIC) {
        return Ok(DocxFormat {
            local_header: true,
            empty_archive: false,
        });
    }

    if data.starts_with(ZIP_EMPTY_MAGIC) {
        return Ok(DocxFormat {
            local_header: false,
            empty_archive: true,
        });
    }

    Err(Error::UnknownFormat)
}

/// Check if a file looks like a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
