//! Error types for the docxstrip library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docxstrip operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while extracting text from a document.
///
/// Every failure in the pipeline is an extraction error; the variants
/// only record where it came from.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The input file could not be opened or read.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not a ZIP archive at all.
    #[error("File is not a zip file")]
    NotAnArchive,

    /// Error reading a ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// The requested member is not in the archive.
    #[error("There is no item named '{0}' in the archive")]
    MissingMember(String),

    /// The member bytes are not valid UTF-8.
    #[error("{member} is not valid UTF-8: {source}")]
    Encoding {
        member: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error while reading archive contents.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => ExtractionError::Io(e),
            other => ExtractionError::ZipArchive(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractionError::NotAnArchive;
        assert_eq!(err.to_string(), "File is not a zip file");

        let err = ExtractionError::MissingMember("word/document.xml".to_string());
        assert_eq!(
            err.to_string(),
            "There is no item named 'word/document.xml' in the archive"
        );
    }

    #[test]
    fn test_open_error_names_path() {
        let err = ExtractionError::Open {
            path: PathBuf::from("missing/report.docx"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing/report.docx"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        let err: ExtractionError = io_err.into();
        assert!(matches!(err, ExtractionError::Io(_)));
    }

    #[test]
    fn test_error_from_zip() {
        let err: ExtractionError = zip::result::ZipError::InvalidArchive("bad header".into()).into();
        assert!(matches!(err, ExtractionError::ZipArchive(_)));
    }

    #[test]
    fn test_error_from_zip_file_not_found() {
        let err: ExtractionError = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, ExtractionError::ZipArchive(_)));
        assert!(!err.to_string().contains("<unknown>"));
    }
}
