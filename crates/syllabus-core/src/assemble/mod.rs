//! Fixed-section assembly: exactly three canonical sections per document.
//!
//! Structured extraction runs first (raw-section sweep plus the three slot
//! extractors). Slots that stay empty degrade through the fallback tiers:
//! broader per-slot patterns, an all-or-nothing equal-thirds split of the
//! whole cleaned text, and finally a fixed placeholder sentence. A
//! completed run never yields an empty section.

mod slots;

use tracing::{debug, warn};

use crate::cleaning;
use crate::model::{CanonicalSection, CanonicalSlot, ExtractionTier, RawSectionKind};
use crate::sections::{self, char_offset};
use crate::ExtractOptions;

use slots::SlotResult;

/// Assemble the three canonical sections from raw brochure text.
///
/// Returns `None` for empty or sub-threshold input; the caller decides
/// whether to skip the document or fall back to per-page records.
pub fn assemble(full_text: &str, opts: &ExtractOptions) -> Option<[CanonicalSection; 3]> {
    if full_text.trim().chars().count() < opts.min_document_chars {
        return None;
    }

    let cleaned = cleaning::clean_text(full_text);
    let raw = sections::extract_raw_sections(&cleaned, opts);
    debug!(raw_sections = raw.len(), "structured sweep complete");

    let intro_duration = slots::extract_intro_duration(&cleaned, opts);
    let objectives_audience = slots::extract_objectives_audience(&cleaned, opts);
    let content = slots::extract_content(&cleaned, opts);

    // Equal-thirds is a document-level decision: only when every slot came
    // up empty is the structured result discarded wholesale.
    if intro_duration.is_none()
        && objectives_audience.is_none()
        && content.is_none()
        && !cleaned.is_empty()
    {
        warn!("no structured section signal, splitting document into equal thirds");
        return Some(equal_thirds(&cleaned));
    }

    let found: Vec<RawSectionKind> = raw.keys().copied().collect();
    Some([
        finish_slot(
            CanonicalSlot::IntroDuration,
            intro_duration,
            &found,
            &[RawSectionKind::Overview, RawSectionKind::Duration],
        ),
        finish_slot(
            CanonicalSlot::ObjectivesAudience,
            objectives_audience,
            &found,
            &[RawSectionKind::Objectives, RawSectionKind::Audience],
        ),
        finish_slot(
            CanonicalSlot::Content,
            content,
            &found,
            &[RawSectionKind::Content],
        ),
    ])
}

/// Resolve one slot: structured/partial text when available, otherwise the
/// slot's placeholder sentence.
fn finish_slot(
    slot: CanonicalSlot,
    result: Option<SlotResult>,
    found: &[RawSectionKind],
    feeds: &[RawSectionKind],
) -> CanonicalSection {
    match result {
        Some(r) => CanonicalSection {
            slot,
            text: r.text,
            sources: feeds
                .iter()
                .copied()
                .filter(|k| found.contains(k))
                .collect(),
            tier: r.tier,
        },
        None => {
            warn!(slot = %slot, "slot empty after fallbacks, emitting placeholder");
            CanonicalSection {
                slot,
                text: placeholder(slot).to_string(),
                sources: Vec::new(),
                tier: ExtractionTier::Placeholder,
            }
        }
    }
}

fn placeholder(slot: CanonicalSlot) -> &'static str {
    match slot {
        CanonicalSlot::IntroDuration => "Thông tin giới thiệu và thời lượng khóa học.",
        CanonicalSlot::ObjectivesAudience => "Thông tin mục tiêu và đối tượng khóa học.",
        CanonicalSlot::Content => "Nội dung khóa học: Thông tin chi tiết về chương trình học.",
    }
}

/// Split the cleaned text into three contiguous thirds by character count,
/// remainder to the last slot.
fn equal_thirds(cleaned: &str) -> [CanonicalSection; 3] {
    let total = cleaned.chars().count();
    let third = total / 3;
    let first = char_offset(cleaned, third);
    let second = char_offset(cleaned, 2 * third);

    let texts = [
        &cleaned[..first],
        &cleaned[first..second],
        &cleaned[second..],
    ];

    let mut iter = CanonicalSlot::ALL.iter().zip(texts);
    std::array::from_fn(|_| {
        let (slot, text) = iter.next().expect("three slots");
        CanonicalSection {
            slot: *slot,
            text: text.to_string(),
            sources: Vec::new(),
            tier: ExtractionTier::EqualSplit,
        }
    })
}
