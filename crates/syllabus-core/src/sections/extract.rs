//! Section content extraction and type-specific post-processing.

use regex::Regex;
use std::sync::LazyLock;

use super::locate::SectionSpan;
use super::spec::SectionSpec;
use crate::cleaning;
use crate::model::RawSectionKind;

static HEADER_ROMAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ivx]+\.\s*").expect("valid regex"));

static HEADER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.\s*").expect("valid regex"));

static DURATION_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(giờ|ngày|tuần|tháng)").expect("valid regex"));

static MODULE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Module\s*(\d+)").expect("valid regex"));

static CHAPTER_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Chương\s*(\d+)").expect("valid regex"));

static TRAINING_FORMAT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)III\.\s*Hình thức.*").expect("valid regex"));

static TRAINING_FORMAT_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Hình thức đào tạo.*").expect("valid regex"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("valid regex"));

/// Extract a located span: slice, re-clean defensively, strip leftover
/// header fragments, then apply section-type post-processing.
pub fn extract(text: &str, span: SectionSpan, spec: &SectionSpec) -> String {
    let slice = &text[span.start..span.end];

    let mut content = cleaning::clean_text(slice);
    content = spec.title_strip.replace_all(&content, "").to_string();
    content = HEADER_ROMAN.replace_all(&content, "").to_string();
    content = HEADER_NUMBER.replace_all(&content, "").to_string();

    post_process(&content, spec.kind)
}

/// Section-type-specific post-processing. Shared with the canonical-slot
/// extractors for the duration and content shapes.
pub(crate) fn post_process(content: &str, kind: RawSectionKind) -> String {
    if content.is_empty() {
        return String::new();
    }

    let content = match kind {
        RawSectionKind::Duration => {
            let spaced = DURATION_UNIT.replace_all(content, "$1 $2").to_string();
            truncate_training_format(&spaced)
        }
        RawSectionKind::Content => {
            let content = MODULE_HEADING.replace_all(content, "\nModule $1").to_string();
            CHAPTER_HEADING.replace_all(&content, "\nChương $1").to_string()
        }
        RawSectionKind::Objectives => bullet_lines(content),
        _ => content.to_string(),
    };

    EXCESS_NEWLINES.replace_all(&content, "\n\n").trim().to_string()
}

/// Cut everything from the first training-format heading onward. Duration
/// content deliberately excludes the training-format body even when it sits
/// inside the located span.
pub(crate) fn truncate_training_format(text: &str) -> String {
    let text = TRAINING_FORMAT_HEADING.replace(text, "");
    TRAINING_FORMAT_PLAIN.replace(&text, "").to_string()
}

/// Prefix every non-bulleted, non-empty line with a bullet marker.
fn bullet_lines(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('•') {
                line.to_string()
            } else {
                format!("• {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::locate::locate;
    use crate::sections::spec::spec_for;
    use crate::ExtractOptions;

    fn run(kind: RawSectionKind, text: &str) -> String {
        let spec = spec_for(kind);
        let span = locate(text, spec, &ExtractOptions::default()).expect("section found");
        extract(text, span, spec)
    }

    #[test]
    fn test_header_fragment_stripped() {
        let out = run(
            RawSectionKind::Overview,
            "I. Giới thiệu: Khóa học trang bị nền tảng ảo hóa cho quản trị viên hệ thống doanh nghiệp.",
        );
        assert!(!out.starts_with("I."));
        assert!(out.contains("trang bị nền tảng ảo hóa"));
    }

    #[test]
    fn test_duration_unit_spacing() {
        let out = run(
            RawSectionKind::Duration,
            "II. Thời lượng: khóa học kéo dài 40giờ trong 5ngày liên tục tại phòng lab.",
        );
        assert!(out.contains("40 giờ"));
        assert!(out.contains("5 ngày"));
    }

    #[test]
    fn test_duration_ends_before_training_format() {
        // The training-format heading sits within the 50-char stop-scan
        // guard; the truncation still has to remove it.
        let text = "II. Thời lượng: 40 giờ (5 ngày học).\nIII. Hình thức đào tạo: trực tuyến qua Zoom.";
        let out = run(RawSectionKind::Duration, text);
        assert!(out.contains("40 giờ"));
        assert!(!out.contains("Hình thức"));
        assert!(!out.contains("trực tuyến"));
    }

    #[test]
    fn test_content_modules_segmented() {
        let out = run(
            RawSectionKind::Content,
            "Nội dung khóa học: Module 1 giới thiệu kiến trúc. Module 2 hướng dẫn cài đặt hệ thống.",
        );
        let module_lines: Vec<&str> =
            out.lines().filter(|l| l.contains("Module")).collect();
        assert_eq!(module_lines.len(), 2);
    }

    #[test]
    fn test_objectives_bulleted() {
        let out = run(
            RawSectionKind::Objectives,
            "III. Mục tiêu khóa học: Sau khóa học học viên vận hành được hệ thống ảo hóa doanh nghiệp.",
        );
        for line in out.lines().filter(|l| !l.trim().is_empty()) {
            assert!(line.starts_with('•'), "line not bulleted: {line}");
        }
    }
}
