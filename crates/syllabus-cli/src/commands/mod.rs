pub mod clean;
pub mod extract;
pub mod sections;

use std::path::Path;

use syllabus_core::error::SyllabusError;
use syllabus_core::extraction::pdftotext::PdftotextExtractor;
use syllabus_core::extraction::PdfExtractor;

pub(crate) fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Read input as page-concatenated text. PDFs go through pdftotext, any
/// other file is treated as UTF-8 text.
pub(crate) fn read_input(path: &Path) -> Result<String, SyllabusError> {
    if is_pdf(path) {
        let bytes = std::fs::read(path)?;
        let pages = PdftotextExtractor::new().extract_pages(&bytes)?;
        Ok(pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// File name without directory.
pub(crate) fn source_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// File name without directory and extension.
pub(crate) fn course_name_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
