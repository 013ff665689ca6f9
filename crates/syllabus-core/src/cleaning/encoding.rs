//! Repair of split-diacritic artifacts left by PDF text extraction.
//!
//! PDF extractors frequently insert a space inside a Vietnamese word right
//! before its diacritic-bearing syllable ("h ọc" for "học"). A fixed table
//! of known fragments is applied first, then a small set of generic rules
//! merges any remaining letter + space + diacritic-vowel pairs. This is a
//! best-effort heuristic, not a Unicode normalization pass.

use regex::Regex;
use std::sync::LazyLock;

/// Known split-diacritic fragments and their repaired forms.
const SPLIT_DIACRITIC_FIXES: &[(&str, &str)] = &[
    ("h ọc", "học"),
    ("gi ảng", "giảng"),
    ("vi ện", "viện"),
    ("cơ b ản", "cơ bản"),
    ("đào t ạo", "đào tạo"),
    ("hệ th ống", "hệ thống"),
    ("công ngh ệ", "công nghệ"),
    ("ki ến th ức", "kiến thức"),
    ("ứng d ụng", "ứng dụng"),
    ("quản tr ị", "quản trị"),
    ("th ực hiện", "thực hiện"),
    ("phát tri ển", "phát triển"),
    ("ngư ời", "người"),
    ("d ự án", "dự án"),
    ("đ ể", "để"),
    ("c ần", "cần"),
    ("gi ờ", "giờ"),
    ("đ ề", "đề"),
    ("c ấp", "cấp"),
    ("c ách", "cách"),
    ("c ó th ể", "có thể"),
    ("c ung c ấp", "cung cấp"),
    ("ph ương pháp", "phương pháp"),
    ("c ông c ụ", "công cụ"),
    ("ph ân tích", "phân tích"),
    ("d ữ liệu", "dữ liệu"),
    ("b ằng c ách", "bằng cách"),
    ("gi ải quy ết", "giải quyết"),
    ("yêu c ầu", "yêu cầu"),
    ("liên quan đ ến", "liên quan đến"),
    ("ki nh doanh", "kinh doanh"),
    ("nh ững", "những"),
    ("căn b ản", "căn bản"),
    ("g ồm", "gồm"),
    ("đư ợc", "được"),
    ("c ách th ức", "cách thức"),
    ("áp d ụng", "áp dụng"),
    ("th ực t ế", "thực tế"),
    ("môi trư ờng", "môi trường"),
    ("k ỹ thu ật", "kỹ thuật"),
    ("cu ối", "cuối"),
    ("v ới", "với"),
    ("ch ứng ch ỉ", "chứng chỉ"),
    ("c ài đ ặt", "cài đặt"),
    ("tri ển khai", "triển khai"),
    ("c ấu hình", "cấu hình"),
    ("ph ục v ụ", "phục vụ"),
];

/// Generic merge rules: a letter, whitespace, then a diacritic vowel of one
/// vowel family. Applied after the fixed table to catch fragments the table
/// does not list.
static DIACRITIC_MERGES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"([a-zA-ZÀ-ỹ])\s+([ọệấởảắằẳẵặ])",
        r"([a-zA-ZÀ-ỹ])\s+([ụũúùủưứừửữự])",
        r"([a-zA-ZÀ-ỹ])\s+([ịĩíìỉ])",
        r"([a-zA-ZÀ-ỹ])\s+([ỗốồổộ])",
        r"([a-zA-ZÀ-ỹ])\s+([ỹýỳỷỵ])",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Fix split-diacritic encoding artifacts in extracted text.
pub(crate) fn fix_vietnamese_encoding(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut fixed = text.to_string();
    for (wrong, correct) in SPLIT_DIACRITIC_FIXES {
        if fixed.contains(wrong) {
            fixed = fixed.replace(wrong, correct);
        }
    }

    for re in DIACRITIC_MERGES.iter() {
        fixed = re.replace_all(&fixed, "$1$2").to_string();
    }

    fixed
}
