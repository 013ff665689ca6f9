//! Canonical-slot extraction: pattern-anchored candidate lists per slot,
//! tried in declared order, first match wins. Each slot also carries its
//! own broader Tier-A fallback list.
//!
//! The `regex` crate has no lookahead, so every candidate captures its
//! content in group 1 and lists its terminators as a trailing non-capturing
//! alternation.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{ExtractionTier, RawSectionKind};
use crate::sections::char_offset;
use crate::sections::extract::{post_process, truncate_training_format};
use crate::ExtractOptions;

/// Text produced for one canonical slot plus the tier that produced it.
pub(crate) struct SlotResult {
    pub text: String,
    pub tier: ExtractionTier,
}

/// An ordered candidate list with header-strip patterns applied to the
/// winning capture.
struct PartList {
    candidates: Vec<Regex>,
    strips: Vec<Regex>,
}

impl PartList {
    fn new(candidates: &[&str], strips: &[&str]) -> Self {
        PartList {
            candidates: candidates
                .iter()
                .map(|p| Regex::new(p).expect("valid regex"))
                .collect(),
            strips: strips
                .iter()
                .map(|p| Regex::new(p).expect("valid regex"))
                .collect(),
        }
    }

    /// First candidate to match wins; no scoring.
    fn find(&self, text: &str) -> Option<String> {
        for re in &self.candidates {
            if let Some(caps) = re.captures(text) {
                let mut content = caps.get(1)?.as_str().trim().to_string();
                for strip in &self.strips {
                    content = strip.replace(&content, "").to_string();
                }
                let content = content.trim();
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
        None
    }
}

static INTRO: LazyLock<PartList> = LazyLock::new(|| {
    PartList::new(
        &[
            r"(?is)(I\.\s*(?:Giới thiệu|Tổng quan).*?)(?:II\.|III\.|Thời lượng|\z)",
            r"(?is)((?:Giới thiệu|Tổng quan)(?:\s+về)?\s+(?:khóa học|khoá học).*?)(?:II\.|Thời lượng|Mục tiêu|\z)",
            r"(?is)(Khóa học.*?cung cấp.*?)(?:II\.|Thời lượng|Mục tiêu|\z)",
            r"(?is)(Trong bối cảnh.*?)(?:II\.|Thời lượng|Mục tiêu|\z)",
        ],
        &[
            r"(?i)^I\.\s*(?:Giới thiệu|Tổng quan).*?:\s*",
            r"(?i)^(?:Giới thiệu|Tổng quan).*?:\s*",
        ],
    )
});

static DURATION: LazyLock<PartList> = LazyLock::new(|| {
    PartList::new(
        &[
            r"(?is)(II\.\s*Thời lượng.*?)(?:III\.|IV\.|Hình thức|Mục tiêu|\z)",
            r"(?is)(Thời lượng(?:\s+khóa học)?:.*?(?:giờ|ngày|tuần).*?)(?:III\.|IV\.|Hình thức|Mục tiêu|Đối tượng|\z)",
        ],
        &[r"(?i)^II\.\s*Thời lượng.*?:\s*", r"(?i)^Thời lượng.*?:\s*"],
    )
});

/// Broader intro fallback: any sentence that reads like a course opening.
static INTRO_FALLBACK: LazyLock<PartList> = LazyLock::new(|| {
    PartList::new(
        &[
            r"(?is)((?:khóa học|khoá học).*?(?:cung cấp|giúp|trang bị).*?)(?:Mục tiêu|Đối tượng|\d+\.|\z)",
            r"(?s)([A-Z][a-z]+ là.*?)(?:Mục tiêu|Đối tượng|\d+\.|\z)",
            r"(?is)(Trong bối cảnh.*?)(?:Mục tiêu|Đối tượng|\d+\.|\z)",
        ],
        &[],
    )
});

static OBJECTIVES: LazyLock<PartList> = LazyLock::new(|| {
    PartList::new(
        &[
            r"(?is)(IV\.\s*Mục tiêu.*?)(?:V\.|VI\.|Đối tượng|\z)",
            r"(?is)(Mục tiêu khóa học.*?)(?:V\.|Đối tượng|Điều kiện|\z)",
            r"(?is)(Kết thúc khóa học.*?)(?:V\.|Đối tượng|\z)",
            r"(?is)(.*?học viên.*?(?:nắm|hiểu|có thể|sẽ).*?)(?:Đối tượng|Điều kiện|Nội dung|\z)",
        ],
        &[r"(?i)^IV\.\s*Mục tiêu.*?:\s*", r"(?i)^Mục tiêu.*?:\s*"],
    )
});

static AUDIENCE: LazyLock<PartList> = LazyLock::new(|| {
    PartList::new(
        &[
            r"(?is)(III\.\s*Đối tượng.*?)(?:IV\.|V\.|Yêu cầu|Điều kiện|Nội dung|\z)",
            r"(?is)(V\.\s*Đối tượng.*?)(?:VI\.|VII\.|Điều kiện|Nội dung|\z)",
            r"(?is)(Đối tượng(?:\s+tham gia|\s+học)?.*?)(?:IV\.|V\.|VI\.|Yêu cầu|Điều kiện|Nội dung|\z)",
        ],
        &[
            r"(?i)^(?:III\.|V\.)\s*Đối tượng.*?:\s*",
            r"(?i)^Đối tượng.*?:\s*",
        ],
    )
});

static PREREQUISITES: LazyLock<PartList> = LazyLock::new(|| {
    PartList::new(
        &[
            r"(?is)(IV\.\s*(?:Yêu cầu|Điều kiện).*?)(?:V\.|VI\.|Nội dung|\z)",
            r"(?is)(VI\.\s*Điều kiện.*?)(?:VII\.|VIII\.|Nội dung|\z)",
            r"(?is)((?:Điều kiện tiên quyết|Yêu cầu trước khóa học).*?)(?:V\.|VI\.|VII\.|Nội dung|\z)",
        ],
        &[
            r"(?i)^(?:IV\.|VI\.)\s*(?:Điều kiện|Yêu cầu).*?:\s*",
            r"(?i)^(?:Điều kiện|Yêu cầu).*?:\s*",
        ],
    )
});

/// Broader slot-2 fallback: role mentions or prerequisite phrasing.
static OBJECTIVES_AUDIENCE_FALLBACK: LazyLock<PartList> = LazyLock::new(|| {
    PartList::new(
        &[
            r"(?is)(.*?(?:Quản trị|Admin|Developer|Kỹ sư|Chuyên viên).*?)(?:Nội dung|\d+\.|\z)",
            r"(?is)(.*?(?:kiến thức|kinh nghiệm|yêu cầu).*?(?:Linux|cơ bản|nền tảng).*?)(?:Nội dung|\d+\.|\z)",
        ],
        &[],
    )
});

/// Explicit content headings; a hit captures through to the end of text.
static CONTENT_HEADING: LazyLock<PartList> = LazyLock::new(|| {
    PartList::new(
        &[
            r"(?is)((?:VII|VI|V)\.\s*Nội dung.*)",
            r"(?is)(Nội dung khóa học.*)",
        ],
        &[
            r"(?i)^(?:VII\.|VI\.|V\.)\s*Nội dung.*?:\s*",
            r"(?i)^Nội dung khóa học\s*:\s*",
        ],
    )
});

/// Weak module-number anchors; a hit only yields a bounded window.
static CONTENT_ANCHORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Module\s*1",
        r"(?i)Chương\s*1",
        r"\d+\.\s*(?:Introduction|Tổng quan|Overview)",
        r"1\.\s",
        r"(?i)Introduction to",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Slot 1: introduction plus duration, excluding any training-format body.
pub(crate) fn extract_intro_duration(text: &str, opts: &ExtractOptions) -> Option<SlotResult> {
    let mut parts = Vec::new();

    if let Some(intro) = INTRO.find(text) {
        parts.push(format!("Tổng quan khóa học:\n{intro}"));
    }
    if let Some(duration) = DURATION.find(text) {
        let duration = truncate_training_format(&duration);
        let duration = duration.trim();
        if !duration.is_empty() {
            parts.push(format!("Thời lượng:\n{duration}"));
        }
    }

    let primary = parts.join("\n\n");
    if primary.chars().count() >= opts.min_slot_chars {
        return Some(SlotResult {
            text: primary,
            tier: ExtractionTier::Structured,
        });
    }

    if let Some(fallback) = INTRO_FALLBACK.find(text) {
        return Some(SlotResult {
            text: format!("Tổng quan khóa học:\n{fallback}"),
            tier: ExtractionTier::Partial,
        });
    }

    (!primary.is_empty()).then_some(SlotResult {
        text: primary,
        tier: ExtractionTier::Structured,
    })
}

/// Slot 2: objectives, audience and prerequisites; any subset may be
/// absent as long as one part is found.
pub(crate) fn extract_objectives_audience(
    text: &str,
    opts: &ExtractOptions,
) -> Option<SlotResult> {
    let mut parts = Vec::new();

    if let Some(objectives) = OBJECTIVES.find(text) {
        parts.push(format!("Mục tiêu khóa học:\n{objectives}"));
    }
    if let Some(audience) = AUDIENCE.find(text) {
        parts.push(format!("Đối tượng tham gia:\n{audience}"));
    }
    if let Some(prereq) = PREREQUISITES.find(text) {
        parts.push(format!("Điều kiện tiên quyết:\n{prereq}"));
    }

    let primary = parts.join("\n\n");
    if primary.chars().count() >= opts.min_slot_chars {
        return Some(SlotResult {
            text: primary,
            tier: ExtractionTier::Structured,
        });
    }

    if let Some(fallback) = OBJECTIVES_AUDIENCE_FALLBACK.find(text) {
        return Some(SlotResult {
            text: format!("Đối tượng và yêu cầu:\n{fallback}"),
            tier: ExtractionTier::Partial,
        });
    }

    (!primary.is_empty()).then_some(SlotResult {
        text: primary,
        tier: ExtractionTier::Structured,
    })
}

/// Slot 3: curriculum content. A weak module-number anchor only captures a
/// bounded window to avoid run-away captures.
pub(crate) fn extract_content(text: &str, opts: &ExtractOptions) -> Option<SlotResult> {
    let primary = CONTENT_HEADING
        .find(text)
        .map(|c| post_process(&c, RawSectionKind::Content));

    if let Some(content) = &primary {
        if content.chars().count() >= opts.min_content_chars {
            return Some(SlotResult {
                text: format!("Nội dung khóa học:\n{content}"),
                tier: ExtractionTier::Structured,
            });
        }
    }

    for re in CONTENT_ANCHORS.iter() {
        if let Some(m) = re.find(text) {
            let tail = &text[m.start()..];
            let window = &tail[..char_offset(tail, opts.content_window_chars)];
            let window = post_process(window, RawSectionKind::Content);
            if !window.is_empty() {
                return Some(SlotResult {
                    text: format!("Nội dung khóa học:\n{window}"),
                    tier: ExtractionTier::Partial,
                });
            }
        }
    }

    primary.filter(|c| !c.is_empty()).map(|content| SlotResult {
        text: format!("Nội dung khóa học:\n{content}"),
        tier: ExtractionTier::Structured,
    })
}
