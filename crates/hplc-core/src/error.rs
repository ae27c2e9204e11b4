use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HplcError {
    #[error("file is locked or access was denied: {}", path.display())]
    FileLocked { path: PathBuf },

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a PDF file: {}", path.display())]
    NotPdf { path: PathBuf },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load pattern set from {path}: {reason}")]
    PatternsLoad { path: PathBuf, reason: String },

    #[error("invalid pattern set: {0}")]
    PatternsInvalid(String),

    #[error("no PDF files to process")]
    NoInputs,

    #[error("{failed} of {total} file(s) were not exported")]
    BatchIncomplete { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HplcError {
    /// True when the file exists but another process holds it or access is denied.
    pub fn is_locked(&self) -> bool {
        matches!(self, HplcError::FileLocked { .. })
    }

    /// True when the input could be read but not decoded as a PDF.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            HplcError::NotPdf { .. } | HplcError::Extraction(_) | HplcError::PdftotextFailed { .. }
        )
    }
}
