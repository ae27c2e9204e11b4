use crate::error::HplcError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so each table row comes out as one line with
/// its columns separated by runs of spaces.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, HplcError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| HplcError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| HplcError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    HplcError::PdftotextNotFound
                } else {
                    HplcError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(HplcError::PdftotextFailed { code, stderr });
        }

        Ok(split_pages(&String::from_utf8_lossy(&output.stdout)))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages on form feeds.
///
/// pdftotext terminates every page with `\x0c`, so the piece after the last
/// one is dropped when it is empty.
fn split_pages(text: &str) -> Vec<PageContent> {
    let mut pieces: Vec<&str> = text.split('\x0c').collect();
    if pieces.len() > 1 && pieces.last().is_some_and(|p| p.trim().is_empty()) {
        pieces.pop();
    }

    pieces
        .into_iter()
        .enumerate()
        .map(|(i, page_text)| {
            let lines = page_text
                .lines()
                .map(|l| l.trim_end_matches('\r').to_string())
                .collect();
            PageContent::new(i + 1, lines)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_name() {
        assert_eq!(PdftotextExtractor::new().backend_name(), "pdftotext");
    }

    #[test]
    fn test_split_pages_on_form_feed() {
        let text = "Sample Name: A\n  Name  Area\n\x0cSample Name: B\n\x0c";
        let pages = split_pages(text);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].lines, vec!["Sample Name: A", "  Name  Area"]);
        assert_eq!(pages[1].lines, vec!["Sample Name: B"]);
    }

    #[test]
    fn test_split_pages_keeps_empty_middle_page() {
        let pages = split_pages("A\n\x0c\x0cB\n\x0c");
        assert_eq!(pages.len(), 3);
        assert!(pages[1].lines.is_empty());
        assert_eq!(pages[2].page_number, 3);
    }

    #[test]
    fn test_split_pages_strips_carriage_returns() {
        let pages = split_pages("Sample Name: A\r\n");
        assert_eq!(pages[0].lines, vec!["Sample Name: A"]);
    }
}
