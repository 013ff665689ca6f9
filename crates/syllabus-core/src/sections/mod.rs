//! Raw-section detection: the spec catalogue, the boundary locator and the
//! content extractor.

pub mod extract;
pub mod locate;
pub mod spec;

pub use locate::SectionSpan;
pub use spec::{section_specs, spec_for, DetectionMethod, SectionSpec};

use std::collections::BTreeMap;
use tracing::debug;

use crate::model::RawSectionKind;
use crate::ExtractOptions;

/// Byte offset of the `chars`-th character of `text` (the text length when
/// `text` is shorter). Scan offsets are specified in characters while spans
/// are byte-indexed.
pub(crate) fn char_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Run the locator and extractor over the whole catalogue. Sections whose
/// post-processed content is at or below the minimum length count as
/// not-found.
pub fn extract_raw_sections(
    cleaned: &str,
    opts: &ExtractOptions,
) -> BTreeMap<RawSectionKind, String> {
    let mut found = BTreeMap::new();

    for spec in section_specs() {
        let Some(span) = locate::locate(cleaned, spec, opts) else {
            continue;
        };
        let content = extract::extract(cleaned, span, spec);
        if content.chars().count() > opts.min_raw_section_chars {
            found.insert(spec.kind, content);
        } else {
            debug!(section = %spec.kind, "discarding under-length section content");
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_offset_multibyte() {
        let s = "Thời lượng";
        assert_eq!(&s[char_offset(s, 4)..], " lượng");
        assert_eq!(char_offset(s, 100), s.len());
    }

    #[test]
    fn test_under_length_sections_discarded() {
        // The duration header matches but carries almost no content.
        let text = "II. Thời lượng: 40 giờ.";
        let found = extract_raw_sections(text, &ExtractOptions::default());
        assert!(!found.contains_key(&RawSectionKind::Duration));
    }

    #[test]
    fn test_full_brochure_yields_all_kinds() {
        let text = "I. Giới thiệu: Khóa học trang bị cho học viên kiến thức nền tảng về ảo hóa và điện toán đám mây hiện đại.\nII. Thời lượng: Chương trình kéo dài 40 giờ trong 5 ngày học tập trung tại phòng lab thực hành.\nIII. Mục tiêu khóa học: Sau khóa học học viên có thể tự triển khai và vận hành hạ tầng ảo hóa doanh nghiệp.\nIV. Đối tượng tham gia: Quản trị viên hệ thống, kỹ sư vận hành và chuyên viên trung tâm dữ liệu.\nV. Nội dung khóa học: Module 1 trình bày kiến trúc tổng thể. Module 2 hướng dẫn cài đặt và cấu hình chi tiết.";
        let found = extract_raw_sections(text, &ExtractOptions::default());
        assert!(found.contains_key(&RawSectionKind::Overview));
        assert!(found.contains_key(&RawSectionKind::Duration));
        assert!(found.contains_key(&RawSectionKind::Objectives));
        assert!(found.contains_key(&RawSectionKind::Audience));
        assert!(found.contains_key(&RawSectionKind::Content));
    }
}
