pub mod batch;
pub mod calibration;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod patterns;
pub mod progress;
pub mod report;

use error::HplcError;
use extraction::PdfExtractor;
use model::ParseResult;
use parsing::ReportParser;
use progress::ProgressSink;
use std::path::Path;

/// Main API entry point: extract the pages of a PDF and parse them.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    parser: &ReportParser,
    progress: &dyn ProgressSink,
) -> Result<ParseResult, HplcError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(parser.parse_pages(&pages, progress))
}

/// Open a PDF file and parse it.
///
/// Opening fails with [`HplcError::FileLocked`] before any parsing when the
/// file is held by another program or access is denied.
pub fn parse_pdf_file(
    path: &Path,
    extractor: &dyn PdfExtractor,
    parser: &ReportParser,
    progress: &dyn ProgressSink,
) -> Result<ParseResult, HplcError> {
    let pdf_bytes = extraction::read_pdf_file(path)?;
    let result = parse_pdf(&pdf_bytes, extractor, parser, progress)?;

    log::info!(
        "{} ({}): {} page(s), {} sample(s), {} calibrated molecule(s) of {}",
        path.display(),
        extractor.backend_name(),
        result.pages,
        result.samples.len(),
        result
            .molecules
            .iter()
            .filter(|m| result.has_calibration(m))
            .count(),
        result.molecules.len()
    );

    Ok(result)
}
