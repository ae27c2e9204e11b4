//! Parse and export several reports on a bounded pool of worker threads.

use crate::error::HplcError;
use crate::extraction::PdfExtractor;
use crate::parsing::ReportParser;
use crate::progress::NullProgress;
use crate::report::{build_workbook, write_workbook};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportStatus {
    Exported {
        output: PathBuf,
        sheets: usize,
        /// Sheets rendered without calibration data.
        uncalibrated: usize,
    },
    /// The input or the output file is held by another program.
    Locked,
    /// The input is not a readable PDF.
    Malformed { reason: String },
    Failed { reason: String },
}

impl ExportStatus {
    pub fn is_exported(&self) -> bool {
        matches!(self, ExportStatus::Exported { .. })
    }

    fn from_error(e: &HplcError) -> Self {
        if e.is_locked() {
            ExportStatus::Locked
        } else if e.is_malformed() {
            ExportStatus::Malformed {
                reason: e.to_string(),
            }
        } else {
            ExportStatus::Failed {
                reason: e.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    #[serde(flatten)]
    pub status: ExportStatus,
}

/// Parse one report and write its workbook into `out_dir` under `stem`.
pub fn export_file(
    input: &Path,
    out_dir: &Path,
    stem: &str,
    extractor: &dyn PdfExtractor,
    parser: &ReportParser,
) -> Result<ExportStatus, HplcError> {
    let result = crate::parse_pdf_file(input, extractor, parser, &NullProgress)?;
    let workbook = build_workbook(&result, parser.patterns());
    let output = write_workbook(&workbook, out_dir, stem)?;

    Ok(ExportStatus::Exported {
        output,
        sheets: workbook.sheets.len(),
        uncalibrated: workbook.uncalibrated(),
    })
}

/// Output stem of every input, unique within the batch.
///
/// Inputs sharing a file stem (`a/run.pdf`, `b/run.pdf`) keep it for the
/// first one and get `run (2)`, `run (3)` and so on after that.
pub fn output_stems(inputs: &[PathBuf]) -> Vec<String> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let base = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "report".into());
            let mut stem = base.clone();
            let mut n = 2;
            while !used.insert(stem.to_lowercase()) {
                stem = format!("{base} ({n})");
                n += 1;
            }
            stem
        })
        .collect()
}

/// Export every input, running at most `workers` files at a time.
///
/// A failing file never stops the batch. Outcomes come back in input order.
/// Each input writes its own workbook, see [`output_stems`].
pub fn export_batch(
    inputs: &[PathBuf],
    out_dir: &Path,
    extractor: &dyn PdfExtractor,
    parser: &ReportParser,
    workers: usize,
) -> Vec<FileOutcome> {
    let workers = workers.clamp(1, inputs.len().max(1));
    let stems = output_stems(inputs);
    let next = AtomicUsize::new(0);
    let mut statuses: Vec<Option<ExportStatus>> = vec![None; inputs.len()];

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(|| {
                    let mut done = Vec::new();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(input) = inputs.get(i) else {
                            break;
                        };
                        let exported = export_file(input, out_dir, &stems[i], extractor, parser);
                        let status = match exported {
                            Ok(status) => status,
                            Err(e) => {
                                log::warn!("{}: {}", input.display(), e);
                                ExportStatus::from_error(&e)
                            }
                        };
                        done.push((i, status));
                    }
                    done
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(done) => {
                    for (i, status) in done {
                        statuses[i] = Some(status);
                    }
                }
                Err(_) => log::error!("export worker panicked"),
            }
        }
    });

    inputs
        .iter()
        .zip(statuses)
        .map(|(input, status)| FileOutcome {
            input: input.clone(),
            status: status.unwrap_or_else(|| ExportStatus::Failed {
                reason: "export worker panicked".into(),
            }),
        })
        .collect()
}
