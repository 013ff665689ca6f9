//! Integration tests for the end-to-end extraction pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use syllabus_core::error::SyllabusError;
use syllabus_core::extraction::{PageContent, PdfExtractor};
use syllabus_core::model::ExtractionTier;
use syllabus_core::{
    extract_course_sections, extract_raw_sections, process_pdf, ExtractOptions,
};

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SyllabusError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(number: usize, text: &str) -> PageContent {
    PageContent {
        page_number: number,
        text: text.to_string(),
    }
}

const BROCHURE: &str = "I. Giới thiệu: Khóa học ABC giúp học viên nắm vững Cloud.\n\nII. Thời lượng: 40 giờ.\n\nIII. Mục tiêu khóa học: Sau khóa học học viên có thể triển khai Cloud.\n\nIV. Đối tượng tham gia: Developer, System Admin.\n\nV. Nội dung khóa học: Module 1: Overview. Module 2: Networking.";

// ---------------------------------------------------------------------------
// Test 1: Structured brochure resolves into the three expected slots
// ---------------------------------------------------------------------------
#[test]
fn structured_brochure_fills_all_slots() {
    let sections = extract_course_sections(BROCHURE, &ExtractOptions::default()).unwrap();

    let intro_duration = &sections[0];
    assert!(intro_duration.text.contains("Khóa học ABC"));
    assert!(intro_duration.text.contains("40 giờ"));

    let objectives_audience = &sections[1];
    assert!(objectives_audience.text.contains("triển khai Cloud"));
    assert!(objectives_audience.text.contains("Developer"));

    let content = &sections[2];
    let module_1_line = content.text.lines().find(|l| l.contains("Module 1"));
    let module_2_line = content.text.lines().find(|l| l.contains("Module 2"));
    assert!(module_1_line.is_some());
    assert!(module_2_line.is_some());
    assert_ne!(module_1_line, module_2_line);
}

// ---------------------------------------------------------------------------
// Test 2: Training-format body is excluded from intro/duration
// ---------------------------------------------------------------------------
#[test]
fn training_format_body_excluded() {
    let text = "I. Giới thiệu: Khóa học XYZ giúp học viên làm chủ nền tảng Cloud hiện đại.\n\nII. Thời lượng: 40 giờ.\n\nHình thức đào tạo: Đào tạo trực tuyến qua nền tảng Zoom với giảng viên.";
    let sections = extract_course_sections(text, &ExtractOptions::default()).unwrap();

    let intro_duration = &sections[0];
    assert!(intro_duration.text.contains("40 giờ"));
    assert!(!intro_duration.text.contains("trực tuyến"));
    assert!(!intro_duration.text.contains("Zoom"));
}

// ---------------------------------------------------------------------------
// Test 3: Unstructured prose falls back to equal thirds
// ---------------------------------------------------------------------------
#[test]
fn unstructured_prose_splits_into_thirds() {
    let prose = "The quick brown fox jumps over the lazy dog near the river bank every single morning without fail. ".repeat(9);
    let sections = extract_course_sections(&prose, &ExtractOptions::default()).unwrap();

    for section in &sections {
        assert_eq!(section.tier, ExtractionTier::EqualSplit);
        assert!(!section.text.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Test 4: Sub-threshold input yields no sections
// ---------------------------------------------------------------------------
#[test]
fn sub_threshold_input_yields_none() {
    assert!(extract_course_sections("quá ngắn", &ExtractOptions::default()).is_none());
}

// ---------------------------------------------------------------------------
// Test 5: PDF pipeline emits three labeled documents
// ---------------------------------------------------------------------------
#[test]
fn pdf_pipeline_emits_three_documents() {
    let extractor = MockExtractor {
        pages: vec![page(1, BROCHURE)],
    };
    let docs = process_pdf(
        &[],
        &extractor,
        "data/pdfs/cloud-fundamentals.pdf",
        &ExtractOptions::default(),
    )
    .unwrap();

    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0].metadata.section, "section1_intro_duration");
    assert_eq!(docs[1].metadata.section, "section2_objectives_audience");
    assert_eq!(docs[2].metadata.section, "section3_content");
    for doc in &docs {
        assert_eq!(doc.metadata.source, "cloud-fundamentals.pdf");
        assert_eq!(doc.metadata.course_name, "cloud-fundamentals");
        assert!(!doc.content.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Test 6: Multi-page PDFs are concatenated before extraction
// ---------------------------------------------------------------------------
#[test]
fn multi_page_pdf_concatenated() {
    let split = BROCHURE.find("III.").unwrap();
    let extractor = MockExtractor {
        pages: vec![page(1, &BROCHURE[..split]), page(2, &BROCHURE[split..])],
    };
    let docs = process_pdf(&[], &extractor, "two-pages.pdf", &ExtractOptions::default()).unwrap();

    assert_eq!(docs.len(), 3);
    assert!(docs[1].content.contains("triển khai Cloud"));
    assert!(docs[2].content.contains("Module 2"));
}

// ---------------------------------------------------------------------------
// Test 7: Short documents fall back to per-page records
// ---------------------------------------------------------------------------
#[test]
fn short_document_falls_back_to_pages() {
    let extractor = MockExtractor {
        pages: vec![page(
            1,
            "Trung tâm đào tạo cung cấp các chương trình thực hành cho kỹ sư.",
        )],
    };
    let docs = process_pdf(&[], &extractor, "flyer.pdf", &ExtractOptions::default()).unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].metadata.section_type, "raw_page");
    assert_eq!(docs[0].metadata.section, "raw_content");
}

// ---------------------------------------------------------------------------
// Test 8: Empty PDF produces no records
// ---------------------------------------------------------------------------
#[test]
fn empty_pdf_produces_no_records() {
    let extractor = MockExtractor {
        pages: vec![page(1, "")],
    };
    let docs = process_pdf(&[], &extractor, "empty.pdf", &ExtractOptions::default()).unwrap();
    assert!(docs.is_empty());
}

// ---------------------------------------------------------------------------
// Test 9: Raw-section sweep feeds the course summary
// ---------------------------------------------------------------------------
#[test]
fn raw_sections_feed_summary() {
    let raw = extract_raw_sections(BROCHURE, &ExtractOptions::default());
    assert!(!raw.is_empty());

    let summary = syllabus_core::document::build_course_summary("cloud-abc", &raw);
    assert!(summary.starts_with("Khóa học: cloud-abc"));
    assert!(summary.contains("Thời lượng"));
}
