//! # ndagen
//!
//! NDA document generation from a Word template.
//!
//! Fills placeholder tokens (`<<Client Name>>`, `<<Company Name>>`,
//! `<<Address>>`, `<<Designation>>`, `<<Date>>`) in a `.docx` template with
//! user-supplied values, preserving formatting, then converts the result to
//! PDF through an external converter (headless LibreOffice, or Word COM
//! automation on Windows).
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use ndagen::{generate_nda, NdaFields};
//!
//! fn main() -> ndagen::Result<()> {
//!     let fields = NdaFields::new(
//!         "Jane Doe",
//!         "Acme Corp",
//!         "1 Main St",
//!         "Director",
//!         NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
//!     );
//!
//!     let artifacts = generate_nda("Non Disclosure Agreement.docx", "out", &fields)?;
//!     println!("Word: {}", artifacts.document.display());
//!     println!("PDF:  {}", artifacts.pdf.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior notes
//!
//! - A token split across formatting runs by prior authoring edits is never
//!   matched and remains literally in the output. This is accepted
//!   behavior, not an error.
//! - Output file names are derived from the client name and date
//!   (`NDA Agreement - {client} {DD Mon YYYY}`), so regenerating with the
//!   same inputs overwrites the same two files.
//! - If PDF conversion fails, the generated Word document stays on disk and
//!   remains retrievable.

pub mod convert;
pub mod error;
pub mod fields;
pub mod pipeline;
pub mod session;
pub mod substitute;

// Re-export commonly used types
pub use convert::{for_host_platform, LibreOfficeConverter, PdfConverter, WordComConverter};
pub use error::{Error, Result};
pub use fields::{
    NdaFields, PlaceholderMap, ADDRESS_TOKEN, CLIENT_NAME_TOKEN, COMPANY_NAME_TOKEN, DATE_TOKEN,
    DESIGNATION_TOKEN,
};
pub use pipeline::{generate, Artifacts, NdaPipeline};
pub use session::Session;
pub use substitute::{document_text, replace_placeholders};

use std::path::Path;

/// Generate both NDA artifacts with the host platform's converter.
///
/// Convenience wrapper over [`NdaPipeline`]: derives both output paths from
/// the fields, fills the template, and converts the result.
pub fn generate_nda<P: AsRef<Path>, Q: AsRef<Path>>(
    template_path: P,
    out_dir: Q,
    fields: &NdaFields,
) -> Result<Artifacts> {
    NdaPipeline::new(template_path.as_ref(), out_dir.as_ref()).run(fields)
}

/// Generate only the Word document, skipping PDF conversion.
pub fn generate_nda_document<P: AsRef<Path>, Q: AsRef<Path>>(
    template_path: P,
    out_dir: Q,
    fields: &NdaFields,
) -> Result<std::path::PathBuf> {
    NdaPipeline::new(template_path.as_ref(), out_dir.as_ref()).generate_document(fields)
}
