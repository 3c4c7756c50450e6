//! PDF conversion behind one narrow trait.
//!
//! The converter is an opaque external collaborator: it takes a source
//! document path and a target PDF path and either produces the PDF or
//! fails. Two interchangeable implementations exist, selected by runtime
//! platform detection at the pipeline boundary.

mod libreoffice;
mod word;

pub use libreoffice::LibreOfficeConverter;
pub use word::WordComConverter;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Trait for external document-to-PDF converters.
///
/// Implementations spawn whatever tool the host provides; the contract is
/// binary success/failure plus the produced path.
pub trait PdfConverter: Send + Sync {
    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert `doc_path` to a PDF at `pdf_path`.
    ///
    /// Fails with [`crate::Error::Conversion`] if the source document is
    /// missing, the tool is unavailable, or it exits non-zero.
    fn convert(&self, doc_path: &Path, pdf_path: &Path) -> Result<PathBuf>;
}

/// Pick the converter appropriate to the host platform: Word COM
/// automation on Windows, headless LibreOffice elsewhere.
pub fn for_host_platform() -> Box<dyn PdfConverter> {
    if cfg!(target_os = "windows") {
        Box::new(WordComConverter::new())
    } else {
        Box::new(LibreOfficeConverter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct MockConverter;

    impl PdfConverter for MockConverter {
        fn name(&self) -> &str {
            "mock"
        }

        fn convert(&self, _doc_path: &Path, pdf_path: &Path) -> Result<PathBuf> {
            Ok(pdf_path.to_path_buf())
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let converter: Box<dyn PdfConverter> = Box::new(MockConverter);
        assert_eq!(converter.name(), "mock");

        let pdf = converter
            .convert(Path::new("in.docx"), Path::new("out.pdf"))
            .unwrap();
        assert_eq!(pdf, PathBuf::from("out.pdf"));
    }

    #[test]
    fn test_host_platform_selection() {
        let converter = for_host_platform();
        if cfg!(target_os = "windows") {
            assert_eq!(converter.name(), "word-com");
        } else {
            assert_eq!(converter.name(), "libreoffice");
        }
    }

    #[test]
    fn test_libreoffice_missing_source() {
        let converter = LibreOfficeConverter::new();
        let err = converter
            .convert(Path::new("/nonexistent/in.docx"), Path::new("/tmp/out.pdf"))
            .unwrap_err();
        assert!(matches!(err, Error::Conversion(_)));
    }
}
