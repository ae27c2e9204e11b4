use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Molecule name -> peak area for one sample.
pub type AreaMap = BTreeMap<String, Decimal>;

/// Declared concentration -> peak area for one molecule.
pub type StandardSeries = BTreeMap<Decimal, Decimal>;

/// A data row dropped because one of its numeric fields did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub page_number: usize,
    pub line_text: String,
    pub reason: String,
}

/// Everything recovered from one report.
///
/// All mappings are ordered, so two parses of the same input serialize
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Sample key -> molecule -> area.
    pub samples: BTreeMap<String, AreaMap>,
    /// Molecule -> concentration -> area, from calibration standard pages.
    pub standards: BTreeMap<String, StandardSeries>,
    /// Sample key -> internal standard molecule -> area.
    pub int_standards: BTreeMap<String, AreaMap>,
    /// Every molecule name seen in an accepted row.
    pub molecules: BTreeSet<String>,
    /// Number of pages handed to the parser.
    pub pages: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_rows: Vec<SkippedRow>,
}

impl ParseResult {
    /// Molecule names in lexicographic order.
    pub fn molecule_names(&self) -> Vec<&str> {
        self.molecules.iter().map(String::as_str).collect()
    }

    /// Whether `molecule` has enough distinct concentrations for a fit.
    pub fn has_calibration(&self, molecule: &str) -> bool {
        self.standards
            .get(molecule)
            .map(|series| series.len() >= 2)
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty() && self.standards.is_empty() && self.int_standards.is_empty()
    }
}
