use std::path::PathBuf;

use syllabus_core::error::SyllabusError;
use syllabus_core::{extract_raw_sections, ExtractOptions};

use crate::commands::read_input;
use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), SyllabusError> {
    let text = read_input(&input_file)?;
    let raw_sections = extract_raw_sections(&text, &ExtractOptions::default());

    if raw_sections.is_empty() {
        eprintln!("No raw sections found in {}", input_file.display());
        return Ok(());
    }

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&raw_sections)?),
        _ => println!("{}", output::table::format_raw_sections(&raw_sections)),
    }

    Ok(())
}
