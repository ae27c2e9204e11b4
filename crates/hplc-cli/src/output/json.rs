use hplc_core::error::HplcError;
use serde::Serialize;

pub fn format<T: Serialize>(value: &T) -> Result<String, HplcError> {
    Ok(serde_json::to_string_pretty(value)?)
}
