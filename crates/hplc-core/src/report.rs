//! Per-molecule result sheets built from a [`ParseResult`].

use crate::calibration::{fit_series, CalibrationCurve};
use crate::error::HplcError;
use crate::model::ParseResult;
use crate::patterns::PatternSet;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One calibration point of a molecule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardPoint {
    pub concentration: Decimal,
    pub area: Decimal,
}

/// One sample's line on a molecule sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleLine {
    pub sample: String,
    /// `None` when the molecule was not detected in the sample.
    pub area: Option<Decimal>,
    /// Back-calculated from the calibration curve, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concentration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeSheet {
    pub molecule: String,
    pub standards: Vec<StandardPoint>,
    /// `None` renders as "calibration data not found".
    pub calibration: Option<CalibrationCurve>,
    pub samples: Vec<SampleLine>,
    /// Some sample back-calculates to a concentration below zero.
    pub negative_concentration: bool,
}

impl MoleculeSheet {
    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<MoleculeSheet>,
}

impl Workbook {
    /// Number of sheets without a usable calibration curve.
    pub fn uncalibrated(&self) -> usize {
        self.sheets.iter().filter(|s| !s.is_calibrated()).count()
    }
}

/// Build one sheet per molecule, in molecule name order.
///
/// Internal standard molecules, as named by `patterns`, list the areas
/// recorded for internal standards; all other molecules list the sample areas.
pub fn build_workbook(result: &ParseResult, patterns: &PatternSet) -> Workbook {
    let sheets = result
        .molecules
        .iter()
        .map(|molecule| {
            let series = result.standards.get(molecule);
            let standards = series
                .map(|s| {
                    s.iter()
                        .map(|(conc, area)| StandardPoint {
                            concentration: *conc,
                            area: *area,
                        })
                        .collect()
                })
                .unwrap_or_default();
            let calibration = series.and_then(fit_series);

            let source = if patterns.is_internal_standard(molecule) {
                &result.int_standards
            } else {
                &result.samples
            };

            let samples: Vec<SampleLine> = source
                .iter()
                .map(|(sample, areas)| {
                    let area = areas.get(molecule).copied();
                    let concentration = match (&calibration, area) {
                        (Some(curve), Some(area)) => curve.concentration_for(area),
                        _ => None,
                    };
                    SampleLine {
                        sample: sample.clone(),
                        area,
                        concentration,
                    }
                })
                .collect();

            let negative_concentration = samples
                .iter()
                .any(|line| line.concentration.is_some_and(|c| c < 0.0));

            MoleculeSheet {
                molecule: molecule.clone(),
                standards,
                calibration,
                samples,
                negative_concentration,
            }
        })
        .collect();

    Workbook { sheets }
}

/// File name of the workbook written for an input report.
pub fn workbook_file_name(stem: &str) -> String {
    format!("Resultados {stem}.json")
}

/// Write the workbook as pretty JSON into `out_dir`.
///
/// Never replaces an existing file: a workbook already at the target path
/// fails with [`HplcError::Open`].
pub fn write_workbook(workbook: &Workbook, out_dir: &Path, stem: &str) -> Result<PathBuf, HplcError> {
    let path = out_dir.join(workbook_file_name(stem));
    let json = serde_json::to_string_pretty(workbook)?;
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| crate::extraction::open_error(&path, e))?;
    file.write_all(json.as_bytes())
        .map_err(|e| crate::extraction::open_error(&path, e))?;
    Ok(path)
}
