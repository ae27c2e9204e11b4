use hplc_core::error::HplcError;
use hplc_core::extraction::pdftotext::PdftotextExtractor;
use hplc_core::progress::LogProgress;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    preset: &str,
    pattern_file: Option<PathBuf>,
) -> Result<(), HplcError> {
    let parser = super::patterns::load_parser(preset, pattern_file.as_deref())?;
    if !PdftotextExtractor::is_available() {
        return Err(HplcError::PdftotextNotFound);
    }
    let extractor = PdftotextExtractor::new();
    let progress = LogProgress::new(pdf_file.display().to_string());
    let parsed = hplc_core::parse_pdf_file(&pdf_file, &extractor, &parser, &progress)?;

    let output_str = match output_format {
        "json" => output::json::format(&parsed)?,
        _ => output::table::format_parsed(&parsed),
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            std::fs::write(&path, output::json::format(&parsed)?)?;
            eprintln!(
                "Parsed {} sample(s) and {} molecule(s), written to {}",
                parsed.samples.len(),
                parsed.molecules.len(),
                path.display()
            );
            if !parsed.skipped_rows.is_empty() {
                eprintln!(
                    "  {} row(s) skipped during parsing",
                    parsed.skipped_rows.len()
                );
            }
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}
