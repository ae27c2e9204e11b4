use crate::error::HplcError;
use crate::patterns::schema::PatternSetDef;

const EMPOWER_EN_JSON: &str = include_str!("../../../../patterns/empower-en.json");
const EMPOWER_ES_JSON: &str = include_str!("../../../../patterns/empower-es.json");

/// Available predefined pattern sets.
pub const PRESETS: &[&str] = &["en", "es"];

/// Preset used when none is requested.
pub const DEFAULT_PRESET: &str = "en";

/// Load a predefined pattern set by name.
pub fn load_preset(name: &str) -> Result<PatternSetDef, HplcError> {
    match name {
        "en" => Ok(serde_json::from_str(EMPOWER_EN_JSON)?),
        "es" => Ok(serde_json::from_str(EMPOWER_ES_JSON)?),
        _ => Err(HplcError::PatternsInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
