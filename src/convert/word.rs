//! PDF conversion through Word COM automation on Windows.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::PdfConverter;
use crate::error::{Error, Result};

/// wdFormatPDF in the Word object model.
const WD_FORMAT_PDF: u8 = 17;

/// Converts documents by driving Word COM automation through PowerShell.
///
/// Only meaningful on Windows hosts with Microsoft Word installed; on other
/// platforms the launch fails and surfaces as a conversion error.
pub struct WordComConverter;

impl WordComConverter {
    /// Create a Word COM converter.
    pub fn new() -> Self {
        Self
    }

    fn script(doc_path: &Path, pdf_path: &Path) -> String {
        // PowerShell single-quoted strings escape quotes by doubling.
        let doc = doc_path.display().to_string().replace('\'', "''");
        let pdf = pdf_path.display().to_string().replace('\'', "''");
        format!(
            "$word = New-Object -ComObject Word.Application; \
             $word.Visible = $false; \
             try {{ \
               $doc = $word.Documents.Open('{doc}'); \
               $doc.SaveAs('{pdf}', {WD_FORMAT_PDF}); \
               $doc.Close(); \
             }} finally {{ $word.Quit() }}"
        )
    }
}

impl Default for WordComConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfConverter for WordComConverter {
    fn name(&self) -> &str {
        "word-com"
    }

    fn convert(&self, doc_path: &Path, pdf_path: &Path) -> Result<PathBuf> {
        if !doc_path.exists() {
            return Err(Error::Conversion(format!(
                "source document not found at {}",
                doc_path.display()
            )));
        }

        log::info!("converting {} to PDF via Word COM", doc_path.display());

        let output = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command"])
            .arg(Self::script(doc_path, pdf_path))
            .output()
            .map_err(|e| Error::Conversion(format!("failed to launch powershell: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Conversion(format!(
                "Word COM automation exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        if !pdf_path.exists() {
            return Err(Error::Conversion(format!(
                "Word reported success but {} was not produced",
                pdf_path.display()
            )));
        }

        Ok(pdf_path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_embeds_paths_and_format() {
        let script = WordComConverter::script(
            Path::new("C:\\out\\NDA Agreement - Jane Doe 05 Mar 2024.docx"),
            Path::new("C:\\out\\NDA Agreement - Jane Doe 05 Mar 2024.pdf"),
        );
        assert!(script.contains("Word.Application"));
        assert!(script.contains(", 17)"));
        assert!(script.contains("NDA Agreement - Jane Doe 05 Mar 2024.docx"));
    }

    #[test]
    fn test_script_escapes_quotes() {
        let script =
            WordComConverter::script(Path::new("o'brien.docx"), Path::new("o'brien.pdf"));
        assert!(script.contains("o''brien.docx"));
    }
}
