//! Text normalization for course-brochure text.
//!
//! `clean_text` is a pure function applied in a strict order: encoding
//! repair, organizational-noise removal, character filtering, whitespace
//! normalization, formatting standardization, incomplete-line removal.
//! Cleaning an already-cleaned text yields the same text.

mod encoding;
mod noise;

use regex::Regex;
use std::sync::LazyLock;

/// Characters outside this set are replaced with a space: word characters,
/// the Vietnamese accented-letter range, whitespace and a small set of
/// punctuation/bullet characters.
static NON_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\sÀ-ỹ\n.,!?\-•:()]").expect("valid regex"));

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("valid regex"));

static SPACE_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\n *").expect("valid regex"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"•[ \t]*").expect("valid regex"));

static NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.[ \t]*").expect("valid regex"));

/// Clean and normalize raw brochure text. Never fails; empty input yields
/// an empty string.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = encoding::fix_vietnamese_encoding(text);
    let text = noise::remove_organizational_noise(&text);
    let text = filter_characters(&text);
    let text = normalize_whitespace(&text);
    let text = standardize_formatting(&text);
    let text = remove_incomplete_lines(&text);

    text.trim().to_string()
}

/// Replace characters outside the permitted set with a single space.
fn filter_characters(text: &str) -> String {
    NON_TEXT.replace_all(text, " ").to_string()
}

/// Collapse whitespace runs, strip spaces around line breaks and cap
/// consecutive newlines at two.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    let text = HORIZONTAL_SPACE.replace_all(text, " ");
    let text = SPACE_AROUND_NEWLINE.replace_all(&text, "\n");
    EXCESS_NEWLINES.replace_all(&text, "\n\n").to_string()
}

/// Normalize bullet markers to "• " and "N." numbering to exactly one
/// space after the period.
pub(crate) fn standardize_formatting(text: &str) -> String {
    let text = BULLET.replace_all(text, "• ");
    NUMBERING.replace_all(&text, "$1. ").to_string()
}

/// Drop noise fragments: lines shorter than 10 characters, and lines
/// longer than 20 characters that trail off in an ellipsis without a
/// terminal punctuation mark before it (mid-sentence truncation).
pub(crate) fn remove_incomplete_lines(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let len = line.chars().count();
        if len < 10 {
            continue;
        }

        if len > 20 && line.ends_with("...") {
            let stem = line.trim_end_matches('.');
            if !matches!(stem.chars().last(), Some('!' | '?' | ')' | ':')) {
                continue;
            }
        }

        kept.push(line);
    }

    kept.join("\n")
}
