use serde::{Deserialize, Serialize};

/// Text patterns and column labels describing one report layout.
///
/// Regexes are matched against the whole page text, so they normally use
/// the `(?m)` flag to anchor on line starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Captures the sample name in group 1.
    pub sample_name: String,
    /// Matches pages of blank or control injections, which are ignored.
    pub blank_sample: String,
    /// Matches pages whose sample name marks a calibration standard.
    pub standard_name: String,
    /// Matches pages whose vial or sample type marks a calibration standard.
    pub standard_vial_type: String,
    /// Header token of the free-text molecule name column.
    pub name_column: String,
    /// Header token of the peak area column.
    pub area_column: String,
    /// Header token of the concentration column on standard pages.
    pub conc_column: String,
    /// Case-insensitive molecule name suffix of internal standards.
    #[serde(default = "default_internal_standard_suffix")]
    pub internal_standard_suffix: String,
    /// Sample key used when the sample name field is present but empty.
    #[serde(default = "default_unnamed_sample")]
    pub unnamed_sample: String,
}

fn default_internal_standard_suffix() -> String {
    "_is".to_string()
}

fn default_unnamed_sample() -> String {
    "unnamed".to_string()
}
