use std::path::PathBuf;

use syllabus_core::cleaning;
use syllabus_core::error::SyllabusError;

use crate::commands::read_input;

pub fn run(input_file: PathBuf) -> Result<(), SyllabusError> {
    let text = read_input(&input_file)?;
    println!("{}", cleaning::clean_text(&text));
    Ok(())
}
