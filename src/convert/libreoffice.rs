//! PDF conversion through headless LibreOffice.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::PdfConverter;
use crate::error::{Error, Result};

/// Converts documents with `libreoffice --headless --convert-to pdf`.
///
/// LibreOffice names its output after the input stem inside `--outdir`; if
/// the requested PDF path differs, the produced file is renamed into place.
pub struct LibreOfficeConverter {
    binary: PathBuf,
}

impl LibreOfficeConverter {
    /// Create a converter using the `libreoffice` binary from `PATH`.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("libreoffice"),
        }
    }

    /// Use a specific binary, e.g. `soffice` or an absolute path.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for LibreOfficeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfConverter for LibreOfficeConverter {
    fn name(&self) -> &str {
        "libreoffice"
    }

    fn convert(&self, doc_path: &Path, pdf_path: &Path) -> Result<PathBuf> {
        if !doc_path.exists() {
            return Err(Error::Conversion(format!(
                "source document not found at {}",
                doc_path.display()
            )));
        }

        let out_dir = pdf_path.parent().unwrap_or_else(|| Path::new("."));
        log::info!(
            "converting {} to PDF via {}",
            doc_path.display(),
            self.binary.display()
        );

        let output = Command::new(&self.binary)
            .args(["--headless", "--convert-to", "pdf", "--outdir"])
            .arg(out_dir)
            .arg(doc_path)
            .output()
            .map_err(|e| {
                Error::Conversion(format!("failed to launch {}: {}", self.binary.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Conversion(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            )));
        }

        // LibreOffice writes <stem>.pdf into the out dir regardless of the
        // requested file name.
        let produced = out_dir
            .join(doc_path.file_stem().unwrap_or_default())
            .with_extension("pdf");
        move_into_place(&produced, pdf_path)
    }
}

/// Rename the file LibreOffice produced onto the requested path. All
/// failures here are part of the converter's contract, so they surface as
/// `Conversion` rather than `Io`.
fn move_into_place(produced: &Path, pdf_path: &Path) -> Result<PathBuf> {
    if produced != pdf_path && produced.exists() {
        std::fs::rename(produced, pdf_path).map_err(|e| {
            Error::Conversion(format!(
                "failed to move {} to {}: {}",
                produced.display(),
                pdf_path.display(),
                e
            ))
        })?;
    }

    if !pdf_path.exists() {
        return Err(Error::Conversion(format!(
            "converter reported success but {} was not produced",
            pdf_path.display()
        )));
    }

    Ok(pdf_path.to_path_buf())
}
