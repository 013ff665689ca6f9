pub mod assemble;
pub mod cleaning;
pub mod document;
pub mod error;
pub mod extraction;
pub mod model;
pub mod sections;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use error::SyllabusError;
use extraction::PdfExtractor;
use model::{CanonicalSection, CourseDocument, RawSectionKind};

/// Tuning knobs for the extraction pipeline.
///
/// The stop-scan offsets keep a stop pattern from re-matching a section's
/// own header line; they are measured in characters from the section start.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Offset before spec stop patterns are searched.
    pub stop_scan_chars: usize,
    /// Offset before generic structural boundaries are searched.
    pub generic_scan_chars: usize,
    /// Raw sections at or below this length count as not-found.
    pub min_raw_section_chars: usize,
    /// Canonical slots below this length trigger the fallback tiers.
    pub min_slot_chars: usize,
    /// Content slot below this length retries via module anchors.
    pub min_content_chars: usize,
    /// Window captured from a weak module anchor.
    pub content_window_chars: usize,
    /// Documents below this length skip structured extraction entirely.
    pub min_document_chars: usize,
    /// Pages at or below this length are skipped by the per-page fallback.
    pub min_page_chars: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            stop_scan_chars: 50,
            generic_scan_chars: 100,
            min_raw_section_chars: 30,
            min_slot_chars: 50,
            min_content_chars: 100,
            content_window_chars: 1000,
            min_document_chars: 100,
            min_page_chars: 50,
        }
    }
}

/// Extract the three canonical sections from raw brochure text.
///
/// `None` means the input was empty or below the document threshold; any
/// other input yields exactly three non-empty sections.
pub fn extract_course_sections(
    full_text: &str,
    opts: &ExtractOptions,
) -> Option<[CanonicalSection; 3]> {
    assemble::assemble(full_text, opts)
}

/// Clean the input and run the raw-section sweep, keyed by section kind.
pub fn extract_raw_sections(
    full_text: &str,
    opts: &ExtractOptions,
) -> BTreeMap<RawSectionKind, String> {
    let cleaned = cleaning::clean_text(full_text);
    sections::extract_raw_sections(&cleaned, opts)
}

/// Process one document's text into course documents.
///
/// Returns an empty vec for empty or sub-threshold input (no-input is not
/// an error); otherwise exactly three records.
pub fn process_text(
    full_text: &str,
    source: &str,
    course_name: &str,
    opts: &ExtractOptions,
) -> Vec<CourseDocument> {
    match assemble::assemble(full_text, opts) {
        Some(sections) => {
            let docs = document::build_documents(&sections, source, course_name);
            info!(
                source,
                course_name,
                documents = docs.len(),
                "created course documents"
            );
            docs
        }
        None => Vec::new(),
    }
}

/// Main API entry point: load a PDF and produce its course documents.
///
/// Pages are concatenated in reading order and pushed through the full
/// pipeline; the course name is the file name without extension. When the
/// document gate rejects the text, one cleaned record per readable page is
/// emitted instead so non-trivial input never produces zero records.
pub fn process_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    file_name: &str,
    opts: &ExtractOptions,
) -> Result<Vec<CourseDocument>, SyllabusError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    info!(
        pages = pages.len(),
        backend = extractor.backend_name(),
        file_name,
        "extracted PDF text"
    );

    let full_text = pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let source = base_name(file_name);
    let course_name = course_name_of(file_name);

    let documents = process_text(&full_text, &source, &course_name, opts);
    if !documents.is_empty() {
        return Ok(documents);
    }

    warn!(
        file_name,
        "structured extraction yielded nothing, emitting per-page documents"
    );
    Ok(document::page_fallback_documents(
        &pages,
        &source,
        &course_name,
        opts,
    ))
}

/// File name without its directory part.
fn base_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// Course name: file name without directory and extension.
fn course_name_of(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name)
        .to_string()
}
