use std::collections::BTreeMap;

use syllabus_core::model::{CourseDocument, RawSectionKind};

/// Human-readable rendering of extracted course documents.
pub fn format_documents(documents: &[CourseDocument]) -> String {
    let mut out = String::new();

    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "=== {} ({}) ===\n\n",
            doc.metadata.section_title, doc.metadata.section_type
        ));
        out.push_str(&doc.content);
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} document(s) for course '{}'\n",
        documents.len(),
        documents
            .first()
            .map(|d| d.metadata.course_name.as_str())
            .unwrap_or("?")
    ));

    out
}

/// Human-readable rendering of the raw-section sweep.
pub fn format_raw_sections(raw_sections: &BTreeMap<RawSectionKind, String>) -> String {
    let mut out = String::new();

    for (kind, content) in raw_sections {
        out.push_str(&format!(
            "--- {} ({} chars) ---\n",
            kind.title(),
            content.chars().count()
        ));
        out.push_str(content);
        out.push_str("\n\n");
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_core::model::DocumentMetadata;

    #[test]
    fn test_format_documents_includes_titles() {
        let docs = vec![CourseDocument {
            content: "nội dung mẫu".to_string(),
            metadata: DocumentMetadata {
                source: "a.pdf".to_string(),
                course_name: "a".to_string(),
                section: "section1_intro_duration".to_string(),
                section_title: "Giới thiệu và Thời lượng".to_string(),
                section_type: "intro_duration".to_string(),
            },
        }];
        let rendered = format_documents(&docs);
        assert!(rendered.contains("Giới thiệu và Thời lượng"));
        assert!(rendered.contains("nội dung mẫu"));
        assert!(rendered.contains("1 document(s)"));
    }

    #[test]
    fn test_format_raw_sections_lists_kinds() {
        let mut raw = BTreeMap::new();
        raw.insert(RawSectionKind::Duration, "40 giờ".to_string());
        let rendered = format_raw_sections(&raw);
        assert!(rendered.contains("Thời lượng"));
        assert!(rendered.contains("40 giờ"));
    }
}
