use std::path::PathBuf;

use syllabus_core::error::SyllabusError;
use syllabus_core::extraction::pdftotext::PdftotextExtractor;
use syllabus_core::{process_pdf, process_text, ExtractOptions};

use crate::commands::{course_name_of, is_pdf, source_of};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), SyllabusError> {
    let opts = ExtractOptions::default();

    let documents = if is_pdf(&input_file) {
        let pdf_bytes = std::fs::read(&input_file)?;
        let extractor = PdftotextExtractor::new();
        process_pdf(
            &pdf_bytes,
            &extractor,
            &input_file.to_string_lossy(),
            &opts,
        )?
    } else {
        let text = std::fs::read_to_string(&input_file)?;
        process_text(
            &text,
            &source_of(&input_file),
            &course_name_of(&input_file),
            &opts,
        )
    };

    if documents.is_empty() {
        eprintln!("No course content found in {}", input_file.display());
        return Ok(());
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&documents)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} document(s), written to {}",
                documents.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => println!("{}", serde_json::to_string_pretty(&documents)?),
            _ => println!("{}", output::table::format_documents(&documents)),
        },
    }

    Ok(())
}
