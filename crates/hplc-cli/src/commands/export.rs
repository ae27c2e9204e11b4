use hplc_core::batch::export_batch;
use hplc_core::error::HplcError;
use hplc_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_files: Vec<PathBuf>,
    out_dir: PathBuf,
    jobs: usize,
    preset: &str,
    pattern_file: Option<PathBuf>,
) -> Result<(), HplcError> {
    let parser = super::patterns::load_parser(preset, pattern_file.as_deref())?;

    let mut inputs: Vec<PathBuf> = Vec::new();
    for path in input_files {
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            log::warn!("skipping {}: not a .pdf file", path.display());
            continue;
        }
        if !inputs.contains(&path) {
            inputs.push(path);
        }
    }

    if inputs.is_empty() {
        return Err(HplcError::NoInputs);
    }

    if !PdftotextExtractor::is_available() {
        return Err(HplcError::PdftotextNotFound);
    }
    std::fs::create_dir_all(&out_dir)?;

    let extractor = PdftotextExtractor::new();
    let outcomes = export_batch(&inputs, &out_dir, &extractor, &parser, jobs);

    output::table::print_outcomes(&outcomes);

    let failed = outcomes.iter().filter(|o| !o.status.is_exported()).count();
    if failed > 0 {
        return Err(HplcError::BatchIncomplete {
            failed,
            total: outcomes.len(),
        });
    }

    Ok(())
}
