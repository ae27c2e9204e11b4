use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a numeric report field.
///
/// Handles formats like:
/// - "1000" -> Some(1000)
/// - "3.4" -> Some(3.4)
/// - "1,2" -> Some(1.2) (decimal comma)
/// - "1.5e3" -> Some(1500)
/// - "", "-", "n.a." -> None (no value reported)
pub fn parse_value(s: &str) -> Result<Option<Decimal>, rust_decimal::Error> {
    let s = s.trim();

    if s.is_empty() || s == "-" || s == "---" || s == "n.a." || s.eq_ignore_ascii_case("N/A") {
        return Ok(None);
    }

    parse_decimal(s).map(Some)
}

/// Parse a decimal value, accepting a comma as decimal separator.
pub fn parse_decimal(s: &str) -> Result<Decimal, rust_decimal::Error> {
    let normalized = s.trim().replace(',', ".");
    if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        Decimal::from_str(&normalized)
    }
}
