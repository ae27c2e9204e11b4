pub mod builtin;
pub mod schema;

use crate::error::HplcError;
use regex::Regex;
use schema::PatternSetDef;
use std::path::Path;

/// Load a pattern set from a JSON file.
pub fn load_patterns(path: &Path) -> Result<PatternSetDef, HplcError> {
    let content = std::fs::read_to_string(path).map_err(|e| HplcError::PatternsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_patterns(&content, path)
}

/// Parse and validate a pattern set from a JSON string read from `source`.
pub fn parse_patterns(json: &str, source: &Path) -> Result<PatternSetDef, HplcError> {
    let def: PatternSetDef = serde_json::from_str(json).map_err(|e| HplcError::PatternsLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_patterns(&def)?;
    Ok(def)
}

/// Validate that a pattern set is well-formed.
pub fn validate_patterns(def: &PatternSetDef) -> Result<(), HplcError> {
    PatternSet::compile(def).map(|_| ())
}

/// A pattern set with its regexes compiled, owned by one parser.
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub sample_name: Regex,
    pub blank_sample: Regex,
    pub standard_name: Regex,
    pub standard_vial_type: Regex,
    pub name_column: String,
    pub area_column: String,
    pub conc_column: String,
    /// Stored lowercased.
    pub internal_standard_suffix: String,
    pub unnamed_sample: String,
}

impl PatternSet {
    pub fn compile(def: &PatternSetDef) -> Result<Self, HplcError> {
        let sample_name = compile_regex("sample_name", &def.sample_name)?;
        if sample_name.captures_len() < 2 {
            return Err(HplcError::PatternsInvalid(
                "sample_name must capture the name in group 1".into(),
            ));
        }

        for (field, value) in [
            ("name_column", &def.name_column),
            ("area_column", &def.area_column),
            ("conc_column", &def.conc_column),
        ] {
            if value.is_empty() || value.contains(char::is_whitespace) {
                return Err(HplcError::PatternsInvalid(format!(
                    "{field} must be a single non-empty header token, got '{value}'"
                )));
            }
        }

        if def.name_column == def.area_column {
            return Err(HplcError::PatternsInvalid(
                "name_column and area_column must differ".into(),
            ));
        }

        if def.unnamed_sample.trim().is_empty() {
            return Err(HplcError::PatternsInvalid(
                "unnamed_sample must not be empty".into(),
            ));
        }

        Ok(PatternSet {
            sample_name,
            blank_sample: compile_regex("blank_sample", &def.blank_sample)?,
            standard_name: compile_regex("standard_name", &def.standard_name)?,
            standard_vial_type: compile_regex("standard_vial_type", &def.standard_vial_type)?,
            name_column: def.name_column.clone(),
            area_column: def.area_column.clone(),
            conc_column: def.conc_column.clone(),
            internal_standard_suffix: def.internal_standard_suffix.to_lowercase(),
            unnamed_sample: def.unnamed_sample.clone(),
        })
    }

    /// Whether a molecule name carries the internal standard suffix.
    pub fn is_internal_standard(&self, molecule: &str) -> bool {
        !self.internal_standard_suffix.is_empty()
            && molecule
                .to_lowercase()
                .ends_with(&self.internal_standard_suffix)
    }
}

fn compile_regex(field: &str, pattern: &str) -> Result<Regex, HplcError> {
    Regex::new(pattern)
        .map_err(|e| HplcError::PatternsInvalid(format!("{field}: invalid regex: {e}")))
}
