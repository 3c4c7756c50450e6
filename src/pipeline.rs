//! The generation pipeline: load template, substitute, save, convert.
//!
//! Strictly linear with no retries. `generate` must fully complete (file
//! durably on disk) before conversion is attempted, and a conversion
//! failure leaves the Word artifact in place so the caller can still offer
//! it for retrieval.

use std::fs;
use std::path::{Path, PathBuf};

use docx_rs::read_docx;
use serde::{Deserialize, Serialize};

use crate::convert::{self, PdfConverter};
use crate::error::{Error, Result};
use crate::fields::{NdaFields, PlaceholderMap};
use crate::substitute::replace_placeholders;

/// Paths of the two generated files.
///
/// Held as path references only; regenerating with identical inputs derives
/// the same paths and overwrites in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    /// Generated Word document
    pub document: PathBuf,

    /// Converted PDF
    pub pdf: PathBuf,
}

/// Fill the template and save the result.
///
/// Loads the template at `template_path`, applies the placeholder map, and
/// writes the filled document to `output_path`, overwriting if present.
/// The template itself is never modified.
///
/// # Errors
///
/// [`Error::TemplateNotFound`] if the template file is absent;
/// [`Error::Edit`] if the document cannot be loaded or written.
pub fn generate(
    template_path: &Path,
    output_path: &Path,
    placeholders: &PlaceholderMap,
) -> Result<PathBuf> {
    if !template_path.exists() {
        return Err(Error::TemplateNotFound(template_path.to_path_buf()));
    }

    log::info!(
        "generating {} from template {}",
        output_path.display(),
        template_path.display()
    );

    let bytes = fs::read(template_path)
        .map_err(|e| Error::Edit(format!("failed to read template: {}", e)))?;
    let mut docx = read_docx(&bytes)?;

    replace_placeholders(&mut docx, placeholders);

    let mut file = fs::File::create(output_path)
        .map_err(|e| Error::Edit(format!("failed to create {}: {}", output_path.display(), e)))?;
    docx.build()
        .pack(&mut file)
        .map_err(|e| Error::Edit(format!("failed to write document: {}", e)))?;
    // The document must be durable before conversion reads it back.
    file.sync_all()
        .map_err(|e| Error::Edit(format!("failed to flush {}: {}", output_path.display(), e)))?;

    Ok(output_path.to_path_buf())
}

/// End-to-end NDA pipeline bound to a template, an output directory, and a
/// PDF converter.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use ndagen::{NdaFields, NdaPipeline};
///
/// fn main() -> ndagen::Result<()> {
///     let fields = NdaFields::new(
///         "Jane Doe",
///         "Acme Corp",
///         "1 Main St",
///         "Director",
///         NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///     );
///     let pipeline = NdaPipeline::new("Non Disclosure Agreement.docx", "out");
///     let artifacts = pipeline.run(&fields)?;
///     println!("{}", artifacts.pdf.display());
///     Ok(())
/// }
/// ```
pub struct NdaPipeline {
    template_path: PathBuf,
    output_dir: PathBuf,
    converter: Box<dyn PdfConverter>,
}

impl NdaPipeline {
    /// Create a pipeline using the converter for the host platform.
    pub fn new(template_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_dir: output_dir.into(),
            converter: convert::for_host_platform(),
        }
    }

    /// Replace the converter, e.g. with a specific LibreOffice binary.
    pub fn with_converter(mut self, converter: Box<dyn PdfConverter>) -> Self {
        self.converter = converter;
        self
    }

    /// Derived path of the Word artifact for these fields.
    pub fn document_path(&self, fields: &NdaFields) -> PathBuf {
        self.output_dir.join(fields.document_file_name())
    }

    /// Derived path of the PDF artifact for these fields.
    pub fn pdf_path(&self, fields: &NdaFields) -> PathBuf {
        self.output_dir.join(fields.pdf_file_name())
    }

    /// Generate the Word document only, skipping conversion.
    pub fn generate_document(&self, fields: &NdaFields) -> Result<PathBuf> {
        generate(
            &self.template_path,
            &self.document_path(fields),
            &fields.placeholders(),
        )
    }

    /// Convert the already-generated Word document for these fields.
    pub fn convert_document(&self, fields: &NdaFields) -> Result<PathBuf> {
        self.converter
            .convert(&self.document_path(fields), &self.pdf_path(fields))
    }

    /// Run the full pipeline: generate the document, then convert it.
    ///
    /// Conversion is never attempted if generation failed. If conversion
    /// alone fails, the Word document remains on disk at
    /// [`document_path`](Self::document_path).
    pub fn run(&self, fields: &NdaFields) -> Result<Artifacts> {
        let document = self.generate_document(fields)?;
        let pdf = self.convert_document(fields)?;
        Ok(Artifacts { document, pdf })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct TrackingConverter {
        invoked: Arc<AtomicBool>,
    }

    impl PdfConverter for TrackingConverter {
        fn name(&self) -> &str {
            "tracking"
        }

        fn convert(&self, _doc_path: &Path, pdf_path: &Path) -> Result<PathBuf> {
            self.invoked.store(true, Ordering::SeqCst);
            Ok(pdf_path.to_path_buf())
        }
    }

    #[test]
    fn test_missing_template_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let invoked = Arc::new(AtomicBool::new(false));
        let pipeline = NdaPipeline::new(dir.path().join("missing.docx"), dir.path())
            .with_converter(Box::new(TrackingConverter {
                invoked: invoked.clone(),
            }));

        let fields = NdaFields::new(
            "Jane Doe",
            "Acme Corp",
            "1 Main St",
            "Director",
            chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );
        let err = pipeline.run(&fields).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound(_)));
        // Convert is never invoked when generation fails.
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[test]
    fn test_derived_paths() {
        let pipeline = NdaPipeline::new("template.docx", "/out");
        let fields = NdaFields::new(
            "Jane Doe",
            "Acme Corp",
            "1 Main St",
            "Director",
            chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );
        assert_eq!(
            pipeline.document_path(&fields),
            PathBuf::from("/out/NDA Agreement - Jane Doe 05 Mar 2024.docx")
        );
        assert_eq!(
            pipeline.pdf_path(&fields),
            PathBuf::from("/out/NDA Agreement - Jane Doe 05 Mar 2024.pdf")
        );
    }
}
