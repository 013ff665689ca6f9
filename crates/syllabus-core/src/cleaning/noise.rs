//! Organizational-noise removal.
//!
//! Brochure PDFs interleave course content with company letterhead,
//! branch-office addresses, hotlines and page footers. Removal runs in four
//! passes: capture course-content blocks so the block deletions cannot eat
//! them, delete known multi-line letterhead blocks, apply the line-level
//! noise pattern library (marker-guarded), then a final keep-or-drop pass
//! per line. A line carrying a course-content marker is never touched.

use regex::Regex;
use std::sync::LazyLock;

/// Course-content keywords that veto a noise-pattern deletion.
const COURSE_KEYWORDS: &[&str] = &[
    "khóa học",
    "course",
    "mục tiêu",
    "objectives",
    "giới thiệu",
    "nội dung",
    "content",
    "học viên",
    "students",
    "yêu cầu",
    "vmware",
    "nsx",
    "bigdata",
    "cloud",
    "thời lượng",
    "duration",
];

/// Course-content blocks, captured up-front. A letterhead deletion that
/// would overlap a captured block is skipped.
static COURSE_BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)(I\.\s*Giới thiệu.*?)(?:Trụ sở|Chi nhánh|\z)",
        r"(?is)(II\.\s*Thời lượng.*?)(?:Trụ sở|Chi nhánh|\z)",
        r"(?is)(III\.\s*Mục tiêu.*?)(?:Trụ sở|Chi nhánh|\z)",
        r"(?is)(IV\.\s*Đối tượng.*?)(?:Trụ sở|Chi nhánh|\z)",
        r"(?is)(V\.\s*Yêu cầu.*?)(?:Trụ sở|Chi nhánh|\z)",
        r"(?is)(VI\.\s*Nội dung.*?)(?:Trụ sở|Chi nhánh|\z)",
        r"(?is)(Khóa học.*?)(?:Trụ sở|Chi nhánh|\z)",
        r"(?is)((?:Module|Chương)\s*\d+.*?)(?:Trụ sở|Chi nhánh|\z)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Multi-line company letterhead/footer blocks.
static LETTERHEAD_BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)Ho Chi Minh.*?City Head Office.*?www\.Robusta\.vn",
        r"(?is)Trụ sở chính.*?www\.Robusta\.vn",
        r"(?is)Chi nhánh.*?Learn@Robusta\.vn",
        r"(?is)Hanoi\s+Office.*?www\.Robusta\.vn",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Line-level noise pattern library: letterhead remnants, addresses,
/// contact info, page numbers, company-name mentions. Each match is removed
/// unless its line carries a course-content marker.
static NOISE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Letterhead remnants
        r"(?i)Trụ sở chính[^\n]*",
        r"(?i)Chi nhánh[^\n]*",
        r"(?i)Head Office[^\n]*",
        r"(?i)Hanoi Office[^\n]*",
        // Addresses
        r"(?i)Lầu \d+[^\n]*",
        r"(?i)Tầng \d+[^\n]*",
        r"(?i)\d+-\d+-\d+\s+[^\n]*?Quận[^\n]*",
        r"(?i)Quận \d+[^\n]*?Tp\.?\s*Hồ Chí Minh[^\n]*",
        r"(?i)P\.\s*[^\n]*?Q\.\s*[^\n]*?Hà Nội[^\n]*",
        r"(?i)Dist\.\s*\d+[^\n]*?HCM[^\n]*",
        r"(?i)Dong Da Dist[^\n]*?Hanoi[^\n]*",
        // Contact info
        r"(?i)Website:[^\n]*",
        r"(?i)Email:[^\n]*",
        r"(?i)Hotline:[^\n]*",
        r"(?i)Tel:[^\n]*",
        r"(?i)Phone:[^\n]*",
        r"(?i)\|\s*Hotline:[^\n]*",
        r"(?i)\+84[^\n]*?\d{3}[^\n]*?\d{3}[^\n]*",
        r"(?i)www\.Robusta\.vn[^\n]*",
        r"(?i)Learn@Robusta\.vn[^\n]*",
        // Page numbers and footer metadata
        r"(?i)Page \d+ of \d+[^\n]*",
        r"(?i)Trang \d+[^\n]*",
        r"©[^\n]*",
        // Company-name mentions
        r"(?i)ROBUSTA[^\n]*",
        r"(?i)Robusta[^\n]*?Technology[^\n]*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Structural markers: roman-numeral section headers, module/chapter
/// references and known technology terms. A line matching any of these is
/// always kept.
static STRUCTURE_KEEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)I\.\s*Giới thiệu|II\.\s*Thời lượng|III\.\s*Mục tiêu|IV\.\s*Đối tượng|V\.\s*Yêu cầu|VI\.\s*Nội dung|Khóa học|Course|Module\s*\d+|Chương\s*\d+|VMware|NSX|BigData|Cloud|OpenStack",
    )
    .expect("valid regex")
});

/// Isolated contact/address/company markers that drop a line in the final
/// pass when no structural marker rescued it.
static ISOLATED_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Head Office|Chi nhánh|Trụ sở|\+84|\(\+84\)|Tel:|Phone:|Hotline:|Website:|Email:|www\.Robusta|Learn@Robusta|97-99-101|Lane 167|Tây Sơn|Dist\.|Quận|HCM City|Hà Nội",
    )
    .expect("valid regex")
});

/// True when a line carries a course-content marker: a course keyword, a
/// structure header, a module/chapter reference or a technology term.
fn has_course_marker(line: &str) -> bool {
    if STRUCTURE_KEEP.is_match(line) {
        return true;
    }
    let lower = line.to_lowercase();
    COURSE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Byte spans of course-content blocks in `text`.
fn protected_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    for re in COURSE_BLOCKS.iter() {
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                spans.push((m.start(), m.end()));
            }
        }
    }
    spans
}

fn overlaps(spans: &[(usize, usize)], start: usize, end: usize) -> bool {
    spans.iter().any(|&(s, e)| start < e && end > s)
}

/// Bounds of the line containing `[start, end)`.
fn line_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let ls = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let le = text[end..].find('\n').map(|i| end + i).unwrap_or(text.len());
    (ls, le)
}

/// Drop matches of `re` from `text`, keeping any match for which `keep`
/// returns true.
fn remove_matches<F>(text: &str, re: &Regex, keep: F) -> String
where
    F: Fn(&str, usize, usize) -> bool,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if keep(text, m.start(), m.end()) {
            out.push_str(m.as_str());
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Remove company information while preserving course content.
pub(crate) fn remove_organizational_noise(text: &str) -> String {
    let mut cleaned = text.to_string();

    // Letterhead blocks, skipping any that would cut into a captured
    // course-content block.
    for re in LETTERHEAD_BLOCKS.iter() {
        if !re.is_match(&cleaned) {
            continue;
        }
        let spans = protected_spans(&cleaned);
        cleaned = remove_matches(&cleaned, re, |_, s, e| overlaps(&spans, s, e));
    }

    // Line-level noise patterns, guarded by course-content markers on the
    // matched line.
    for re in NOISE_PATTERNS.iter() {
        if !re.is_match(&cleaned) {
            continue;
        }
        cleaned = remove_matches(&cleaned, re, |t, s, e| {
            let (ls, le) = line_bounds(t, s, e);
            has_course_marker(&t[ls..le])
        });
    }

    // Final line pass: structural markers always win, isolated contact and
    // address markers drop the line, everything else passes through.
    let mut kept: Vec<&str> = Vec::new();
    for line in cleaned.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if STRUCTURE_KEEP.is_match(line) {
            kept.push(line);
            continue;
        }
        if ISOLATED_NOISE.is_match(line) {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterhead_block_removed() {
        let text = "Nội dung trước\nTrụ sở chính: 97-99-101 Nguyễn Công Trứ\nPhường Nguyễn Thái Bình\nwww.Robusta.vn\nNội dung sau khóa học";
        let cleaned = remove_organizational_noise(text);
        assert!(!cleaned.contains("Nguyễn Công Trứ"));
        assert!(cleaned.contains("Nội dung sau khóa học"));
    }

    #[test]
    fn test_contact_line_removed() {
        let text = "Giới thiệu về ảo hóa\nHotline: 0912 345 678\nHọc viên thực hành trên lab";
        let cleaned = remove_organizational_noise(text);
        assert!(!cleaned.contains("0912"));
        assert!(cleaned.contains("Học viên thực hành trên lab"));
    }

    #[test]
    fn test_page_footer_removed() {
        let text = "Module 1: Tổng quan hệ thống\nPage 3 of 12\nModule 2: Cài đặt";
        let cleaned = remove_organizational_noise(text);
        assert!(!cleaned.contains("Page 3"));
        assert!(cleaned.contains("Module 1"));
        assert!(cleaned.contains("Module 2"));
    }

    #[test]
    fn test_marker_line_retained_verbatim() {
        // An address fragment sharing a line with a module reference must
        // survive untouched.
        let text = "Module 3 - Tầng 5, Quận 1";
        let cleaned = remove_organizational_noise(text);
        assert_eq!(cleaned, "Module 3 - Tầng 5, Quận 1");
    }

    #[test]
    fn test_isolated_address_line_dropped() {
        let text = "Khóa học dành cho quản trị viên\nLầu 5, Quận 3, Tp. Hồ Chí Minh";
        let cleaned = remove_organizational_noise(text);
        assert!(!cleaned.contains("Quận 3"));
        assert!(cleaned.contains("Khóa học dành cho quản trị viên"));
    }

    #[test]
    fn test_blank_lines_dropped() {
        let text = "Khóa học A\n\n\nKhóa học B";
        let cleaned = remove_organizational_noise(text);
        assert_eq!(cleaned, "Khóa học A\nKhóa học B");
    }
}
