//! Consumer-facing document records.
//!
//! Wraps canonical sections into labeled `CourseDocument`s for the
//! embedding/indexing collaborator, and builds the compact course summary
//! used for course-level matching.

use std::collections::BTreeMap;

use crate::cleaning;
use crate::extraction::PageContent;
use crate::model::{
    CanonicalSection, CourseDocument, DocumentMetadata, RawSectionKind,
};
use crate::ExtractOptions;

/// Summary sections in priority order.
const SUMMARY_PRIORITY: [RawSectionKind; 5] = [
    RawSectionKind::Overview,
    RawSectionKind::Objectives,
    RawSectionKind::Duration,
    RawSectionKind::Audience,
    RawSectionKind::Content,
];

/// Emit exactly three records, in slot order.
pub fn build_documents(
    sections: &[CanonicalSection; 3],
    source: &str,
    course_name: &str,
) -> Vec<CourseDocument> {
    sections
        .iter()
        .map(|section| CourseDocument {
            content: section.text.clone(),
            metadata: DocumentMetadata {
                source: source.to_string(),
                course_name: course_name.to_string(),
                section: section.slot.key().to_string(),
                section_title: section.slot.title().to_string(),
                section_type: section.slot.section_type().to_string(),
            },
        })
        .collect()
}

/// One cleaned record per page, used when the document gate rejects
/// structured extraction. Pages whose cleaned text is too short are
/// skipped.
pub(crate) fn page_fallback_documents(
    pages: &[PageContent],
    source: &str,
    course_name: &str,
    opts: &ExtractOptions,
) -> Vec<CourseDocument> {
    pages
        .iter()
        .filter_map(|page| {
            let cleaned = cleaning::clean_text(&page.text);
            if cleaned.chars().count() > opts.min_page_chars {
                Some(CourseDocument {
                    content: cleaned,
                    metadata: DocumentMetadata {
                        source: source.to_string(),
                        course_name: course_name.to_string(),
                        section: "raw_content".to_string(),
                        section_title: "Nội dung thô".to_string(),
                        section_type: "raw_page".to_string(),
                    },
                })
            } else {
                None
            }
        })
        .collect()
}

/// Build a compact course summary from the found raw sections, truncating
/// each at a sentence boundary within 200 characters.
pub fn build_course_summary(
    course_name: &str,
    raw_sections: &BTreeMap<RawSectionKind, String>,
) -> String {
    let mut lines = vec![format!("Khóa học: {course_name}\n")];

    for kind in SUMMARY_PRIORITY {
        if let Some(content) = raw_sections.get(&kind) {
            let summary = truncate_at_sentence(content, 200, 100);
            lines.push(format!("{}: {summary}\n", kind.title()));
        }
    }

    lines.join("\n").trim().to_string()
}

/// Take at most `max_chars`, preferring to cut at the last sentence end
/// when that leaves at least `min_chars` of content.
fn truncate_at_sentence(content: &str, max_chars: usize, min_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }

    let prefix: String = content.chars().take(max_chars).collect();
    let mut sentence_end: Option<(usize, usize)> = None;
    for (char_pos, (byte_pos, c)) in prefix.char_indices().enumerate() {
        if matches!(c, '.' | '!' | '?') {
            sentence_end = Some((char_pos, byte_pos));
        }
    }

    match sentence_end {
        Some((char_pos, byte_pos)) if char_pos > min_chars => {
            prefix[..byte_pos + 1].to_string()
        }
        _ => format!("{prefix}..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CanonicalSlot, ExtractionTier};

    fn section(slot: CanonicalSlot, text: &str) -> CanonicalSection {
        CanonicalSection {
            slot,
            text: text.to_string(),
            sources: Vec::new(),
            tier: ExtractionTier::Structured,
        }
    }

    #[test]
    fn test_three_documents_in_slot_order() {
        let sections = [
            section(CanonicalSlot::IntroDuration, "phần một"),
            section(CanonicalSlot::ObjectivesAudience, "phần hai"),
            section(CanonicalSlot::Content, "phần ba"),
        ];
        let docs = build_documents(&sections, "vmware-vsphere.pdf", "vmware-vsphere");

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].metadata.section, "section1_intro_duration");
        assert_eq!(docs[0].metadata.section_title, "Giới thiệu và Thời lượng");
        assert_eq!(docs[0].metadata.section_type, "intro_duration");
        assert_eq!(docs[1].metadata.section, "section2_objectives_audience");
        assert_eq!(docs[2].metadata.section, "section3_content");
        assert_eq!(docs[2].metadata.section_type, "course_content");
        for doc in &docs {
            assert_eq!(doc.metadata.source, "vmware-vsphere.pdf");
            assert_eq!(doc.metadata.course_name, "vmware-vsphere");
        }
    }

    #[test]
    fn test_summary_orders_and_labels_sections() {
        let mut raw = BTreeMap::new();
        raw.insert(RawSectionKind::Duration, "40 giờ trong 5 ngày.".to_string());
        raw.insert(
            RawSectionKind::Overview,
            "Khóa học đào tạo quản trị viên ảo hóa.".to_string(),
        );
        let summary = build_course_summary("vsphere", &raw);

        assert!(summary.starts_with("Khóa học: vsphere"));
        let overview_pos = summary.find("Giới thiệu/Tổng quan khóa học:").unwrap();
        let duration_pos = summary.find("Thời lượng & Hình thức đào tạo:").unwrap();
        assert!(overview_pos < duration_pos);
    }

    #[test]
    fn test_summary_truncates_at_sentence() {
        let long = "Câu mở đầu nói về mục tiêu tổng thể của chương trình đào tạo chuyên sâu dành cho kỹ sư hệ thống doanh nghiệp lớn. Câu thứ hai bổ sung chi tiết về phương pháp giảng dạy thực hành tại phòng lab hiện đại. Câu thứ ba sẽ bị cắt bỏ hoàn toàn khỏi phần tóm tắt.";
        let summary = truncate_at_sentence(long, 200, 100);
        assert!(summary.chars().count() <= 200);
        assert!(summary.ends_with('.'));
        assert!(!summary.contains("Câu thứ ba"));
    }

    #[test]
    fn test_summary_ellipsis_when_no_sentence_boundary() {
        let long = "x".repeat(300);
        let summary = truncate_at_sentence(&long, 200, 100);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), 203);
    }
}
