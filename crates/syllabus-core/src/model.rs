use serde::{Deserialize, Serialize};
use std::fmt;

/// The five raw section types a course brochure is scanned for.
///
/// Raw sections are an intermediate result: they are merged into the three
/// canonical slots by the assembler and also feed the course summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawSectionKind {
    Overview,
    Duration,
    Objectives,
    Audience,
    Content,
}

impl RawSectionKind {
    pub const ALL: [RawSectionKind; 5] = [
        RawSectionKind::Overview,
        RawSectionKind::Duration,
        RawSectionKind::Objectives,
        RawSectionKind::Audience,
        RawSectionKind::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RawSectionKind::Overview => "overview",
            RawSectionKind::Duration => "duration",
            RawSectionKind::Objectives => "objectives",
            RawSectionKind::Audience => "audience",
            RawSectionKind::Content => "content",
        }
    }

    /// Display title used when stripping header fragments and when
    /// building the course summary.
    pub fn title(&self) -> &'static str {
        match self {
            RawSectionKind::Overview => "Giới thiệu/Tổng quan khóa học",
            RawSectionKind::Duration => "Thời lượng & Hình thức đào tạo",
            RawSectionKind::Objectives => "Mục tiêu khóa học",
            RawSectionKind::Audience => "Đối tượng tham gia",
            RawSectionKind::Content => "Nội dung khóa học",
        }
    }
}

impl fmt::Display for RawSectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three fixed output slots every processed document gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalSlot {
    IntroDuration,
    ObjectivesAudience,
    Content,
}

impl CanonicalSlot {
    /// Slots in their fixed output order.
    pub const ALL: [CanonicalSlot; 3] = [
        CanonicalSlot::IntroDuration,
        CanonicalSlot::ObjectivesAudience,
        CanonicalSlot::Content,
    ];

    /// Stable section key carried in document metadata.
    pub fn key(&self) -> &'static str {
        match self {
            CanonicalSlot::IntroDuration => "section1_intro_duration",
            CanonicalSlot::ObjectivesAudience => "section2_objectives_audience",
            CanonicalSlot::Content => "section3_content",
        }
    }

    /// Fixed display title per slot.
    pub fn title(&self) -> &'static str {
        match self {
            CanonicalSlot::IntroDuration => "Giới thiệu và Thời lượng",
            CanonicalSlot::ObjectivesAudience => "Mục tiêu và Đối tượng",
            CanonicalSlot::Content => "Nội dung Khóa học",
        }
    }

    /// Section-type tag carried in document metadata.
    pub fn section_type(&self) -> &'static str {
        match self {
            CanonicalSlot::IntroDuration => "intro_duration",
            CanonicalSlot::ObjectivesAudience => "objectives_audience",
            CanonicalSlot::Content => "course_content",
        }
    }
}

impl fmt::Display for CanonicalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which fallback level produced a slot's text.
///
/// `Structured` means the primary pattern-anchored extraction succeeded.
/// `Partial` means the slot's broader secondary patterns were needed.
/// `EqualSplit` means structured extraction failed for the whole document
/// and the text is a contiguous third of the cleaned input.
/// `Placeholder` is the last resort: a fixed sentence naming the slot's
/// purpose, used only when sibling slots succeeded or no text survived
/// cleaning at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionTier {
    Structured,
    Partial,
    EqualSplit,
    Placeholder,
}

/// A completed canonical section. Never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalSection {
    pub slot: CanonicalSlot,
    pub text: String,
    /// Raw section kinds that were found in the document and feed this slot.
    pub sources: Vec<RawSectionKind>,
    pub tier: ExtractionTier,
}

/// Metadata attached to every emitted course document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Source file name (with extension).
    pub source: String,
    /// Course name, derived from the file name without extension.
    pub course_name: String,
    /// Section key (e.g. "section1_intro_duration"), or "raw_content" for
    /// per-page fallback documents.
    pub section: String,
    pub section_title: String,
    pub section_type: String,
}

/// A consumer-facing document record, ready for embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDocument {
    pub content: String,
    pub metadata: DocumentMetadata,
}
