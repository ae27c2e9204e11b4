pub mod pdftotext;

use crate::error::HplcError;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    pub fn new(page_number: usize, lines: Vec<String>) -> Self {
        PageContent { page_number, lines }
    }

    /// The page as one text block, lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, HplcError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

const PDF_MARKER: &[u8] = b"%PDF";
const PDF_HEADER_WINDOW: usize = 1024;

/// Read a PDF file, telling a locked file apart from a missing or foreign one.
///
/// Access denied (and, on Windows, a sharing violation from a file held
/// open by another program) maps to [`HplcError::FileLocked`]. Bytes without
/// the `%PDF` marker in their first kilobyte map to [`HplcError::NotPdf`].
pub fn read_pdf_file(path: &Path) -> Result<Vec<u8>, HplcError> {
    let mut file = std::fs::File::open(path).map_err(|e| open_error(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| open_error(path, e))?;

    let head = &bytes[..bytes.len().min(PDF_HEADER_WINDOW)];
    if !head.windows(PDF_MARKER.len()).any(|w| w == PDF_MARKER) {
        return Err(HplcError::NotPdf {
            path: path.to_path_buf(),
        });
    }

    Ok(bytes)
}

pub(crate) fn open_error(path: &Path, e: std::io::Error) -> HplcError {
    if e.kind() == ErrorKind::PermissionDenied || is_sharing_violation(&e) {
        HplcError::FileLocked {
            path: path.to_path_buf(),
        }
    } else {
        HplcError::Open {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

#[cfg(windows)]
fn is_sharing_violation(e: &std::io::Error) -> bool {
    // ERROR_SHARING_VIOLATION, ERROR_LOCK_VIOLATION
    matches!(e.raw_os_error(), Some(32) | Some(33))
}

#[cfg(not(windows))]
fn is_sharing_violation(_e: &std::io::Error) -> bool {
    false
}
