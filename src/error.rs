//! Error types for the ndagen library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ndagen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during NDA generation.
///
/// The taxonomy is flat and nothing is retried: each variant maps to one
/// stage of the pipeline and is surfaced to the caller as a single
/// human-readable message.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The template document is missing at the expected path.
    #[error("template not found at {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// The template could not be loaded, edited, or saved.
    #[error("document edit failure: {0}")]
    Edit(String),

    /// The external PDF converter is unavailable, errored, or exited
    /// non-zero. Carries converter output where available.
    #[error("PDF conversion failure: {0}")]
    Conversion(String),
}

impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::Edit(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TemplateNotFound(PathBuf::from("/tmp/nda.docx"));
        assert_eq!(err.to_string(), "template not found at /tmp/nda.docx");

        let err = Error::Conversion("libreoffice exited with status 1".into());
        assert_eq!(
            err.to_string(),
            "PDF conversion failure: libreoffice exited with status 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_edit_error_message() {
        let err = Error::Edit("unexpected end of zip archive".into());
        assert_eq!(
            err.to_string(),
            "document edit failure: unexpected end of zip archive"
        );
    }
}
