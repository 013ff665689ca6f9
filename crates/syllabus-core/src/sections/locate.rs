//! Section boundary location.
//!
//! Start detection walks the spec's matchers in priority order (patterns
//! before keywords, first hit wins). End detection starts at the text end
//! and tightens toward the earliest stop-pattern or generic structural
//! boundary. Stop scans begin a fixed number of characters after the start
//! so a stop pattern cannot re-match the section's own header line.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::char_offset;
use super::spec::{DetectionMethod, SectionSpec};
use crate::ExtractOptions;

/// A located section: byte offsets into the cleaned text, plus how the
/// start was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
    pub method: DetectionMethod,
}

/// Generic structural boundaries that end any section: a following
/// roman-numeral heading, or a numbered heading starting with a capital.
static GENERIC_STOPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\n\s*[ivx]+\.\s*[a-zA-ZÀ-ỹ]").expect("valid regex"),
        Regex::new(r"\n\s*\d+\.\s*[A-ZÀÁẢÃẠ]").expect("valid regex"),
    ]
});

/// Find the `[start, end)` span of a section, or `None` when no start
/// matcher hits.
pub fn locate(text: &str, spec: &SectionSpec, opts: &ExtractOptions) -> Option<SectionSpan> {
    let (start, method) = spec
        .start_matchers
        .iter()
        .find_map(|m| m.try_match(text))?;

    let mut end = text.len();

    let stop_from = start + char_offset(&text[start..], opts.stop_scan_chars);
    for re in &spec.stop_patterns {
        if let Some(m) = re.find(&text[stop_from..]) {
            end = end.min(stop_from + m.start());
        }
    }

    let generic_from = start + char_offset(&text[start..], opts.generic_scan_chars);
    for re in GENERIC_STOPS.iter() {
        if let Some(m) = re.find(&text[generic_from..]) {
            end = end.min(generic_from + m.start());
        }
    }

    debug!(
        section = %spec.kind,
        start,
        end,
        length = end - start,
        ?method,
        "located section boundaries"
    );

    Some(SectionSpan { start, end, method })
}
