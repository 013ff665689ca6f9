//! Static section-detection configuration.
//!
//! One `SectionSpec` per raw section type: ordered start patterns (most
//! specific first), plain-keyword fallback matchers and stop patterns. The
//! catalogue is compiled once and never mutated.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::RawSectionKind;

/// How a section start was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    Pattern,
    Keyword,
}

/// An ordered start matcher: either a start pattern or a line-anchored,
/// optionally bulleted keyword.
pub(crate) enum StartMatcher {
    Pattern(Regex),
    Keyword(Regex),
}

impl StartMatcher {
    pub(crate) fn try_match(&self, text: &str) -> Option<(usize, DetectionMethod)> {
        match self {
            StartMatcher::Pattern(re) => {
                re.find(text).map(|m| (m.start(), DetectionMethod::Pattern))
            }
            StartMatcher::Keyword(re) => {
                re.find(text).map(|m| (m.start(), DetectionMethod::Keyword))
            }
        }
    }
}

/// Detection configuration for one raw section type.
pub struct SectionSpec {
    pub kind: RawSectionKind,
    pub(crate) start_matchers: Vec<StartMatcher>,
    pub(crate) stop_patterns: Vec<Regex>,
    /// Strips a leftover section-title fragment from extracted content.
    pub(crate) title_strip: Regex,
}

fn pattern(p: &str) -> StartMatcher {
    StartMatcher::Pattern(Regex::new(&format!("(?im){p}")).expect("valid regex"))
}

fn keyword(kw: &str) -> StartMatcher {
    StartMatcher::Keyword(
        Regex::new(&format!(r"(?im)^\s*[•\-\*]?\s*{}", regex::escape(kw))).expect("valid regex"),
    )
}

fn stop(p: &str) -> Regex {
    Regex::new(&format!("(?im){p}")).expect("valid regex")
}

fn spec(
    kind: RawSectionKind,
    patterns: &[&str],
    keywords: &[&str],
    stops: &[&str],
) -> SectionSpec {
    SectionSpec {
        kind,
        start_matchers: patterns
            .iter()
            .map(|p| pattern(p))
            .chain(keywords.iter().map(|kw| keyword(kw)))
            .collect(),
        stop_patterns: stops.iter().map(|p| stop(p)).collect(),
        title_strip: Regex::new(&format!(r"(?i){}:?", regex::escape(kind.title())))
            .expect("valid regex"),
    }
}

/// The raw section catalogue, in scan order.
pub fn section_specs() -> &'static [SectionSpec] {
    static SPECS: LazyLock<Vec<SectionSpec>> = LazyLock::new(|| {
        vec![
            spec(
                RawSectionKind::Overview,
                &[
                    r"i+\.\s*tổng quan",
                    r"i+\.\s*giới thiệu",
                    r"tổng quan\s*$",
                    r"giới thiệu về khóa học",
                ],
                &["tổng quan", "giới thiệu khóa học", "mô tả khóa học"],
                &[r"ii+\.\s*thời lượng", r"thời lượng\s*\d+"],
            ),
            spec(
                RawSectionKind::Duration,
                &[
                    r"ii+\.\s*thời lượng",
                    r"thời lượng\s*\d+",
                    r"thời lượng.*giờ",
                ],
                &["thời lượng", "hình thức đào tạo", "thời gian học"],
                &[r"iii+\.\s*mục tiêu", r"mục tiêu khóa học"],
            ),
            spec(
                RawSectionKind::Objectives,
                &[
                    r"iii+\.\s*mục tiêu khóa học",
                    r"mục tiêu khóa học",
                    r"mục tiêu\s*$",
                ],
                &["mục tiêu khóa học", "mục tiêu", "sau khóa học"],
                &[r"iv+\.\s*đối tượng", r"đối tượng tham gia"],
            ),
            spec(
                RawSectionKind::Audience,
                &[
                    r"iv+\.\s*đối tượng tham gia",
                    r"đối tượng tham gia",
                    r"đối tượng\s*$",
                ],
                &["đối tượng tham gia", "đối tượng", "học viên"],
                &[r"v+\.\s*nội dung", r"nội dung khóa học", r"chương trình"],
            ),
            // Content is the last section of a brochure: no stop patterns,
            // only the generic structural boundaries apply.
            spec(
                RawSectionKind::Content,
                &[
                    r"v+\.\s*nội dung khóa học",
                    r"nội dung khóa học",
                    r"chương trình học",
                    r"module\s*\d+",
                ],
                &["nội dung khóa học", "chương trình", "module", "nội dung đào tạo"],
                &[],
            ),
        ]
    });
    &SPECS
}

/// Spec for a single raw section kind.
pub fn spec_for(kind: RawSectionKind) -> &'static SectionSpec {
    section_specs()
        .iter()
        .find(|s| s.kind == kind)
        .expect("catalogue covers all kinds")
}
