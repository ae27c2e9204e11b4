use hplc_core::batch::{ExportStatus, FileOutcome};
use hplc_core::model::{AreaMap, ParseResult};
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn format_parsed(parsed: &ParseResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} page(s), {} molecule(s): {}\n",
        parsed.pages,
        parsed.molecules.len(),
        parsed.molecule_names().join(", ")
    );

    let _ = writeln!(out, "=== Calibration standards ===\n");
    if parsed.standards.is_empty() {
        let _ = writeln!(out, "  (none)\n");
    }
    for (molecule, series) in &parsed.standards {
        let marker = if series.len() < 2 {
            "  (fewer than 2 points)"
        } else {
            ""
        };
        let _ = writeln!(out, "  {molecule}{marker}");
        for (conc, area) in series {
            let _ = writeln!(out, "    {:>10}  {:>14}", conc, area);
        }
        out.push('\n');
    }

    write_area_section(&mut out, "Samples", &parsed.samples);
    write_area_section(&mut out, "Internal standards", &parsed.int_standards);

    if !parsed.skipped_rows.is_empty() {
        let _ = writeln!(out, "=== Skipped rows ===\n");
        for row in &parsed.skipped_rows {
            let _ = writeln!(out, "  p.{:<3} {}  ({})", row.page_number, row.line_text, row.reason);
        }
    }

    out.trim_end().to_string()
}

fn write_area_section(out: &mut String, title: &str, records: &BTreeMap<String, AreaMap>) {
    let _ = writeln!(out, "=== {title} ===\n");
    if records.is_empty() {
        let _ = writeln!(out, "  (none)\n");
        return;
    }

    let width = records
        .values()
        .flat_map(|areas| areas.keys())
        .map(|m| m.chars().count())
        .max()
        .unwrap_or(10);

    for (sample, areas) in records {
        let _ = writeln!(out, "  {sample}");
        for (molecule, area) in areas {
            let _ = writeln!(out, "    {:<width$}  {:>14}", molecule, area, width = width);
        }
        out.push('\n');
    }
}

pub fn print_outcomes(outcomes: &[FileOutcome]) {
    let width = outcomes
        .iter()
        .map(|o| o.input.display().to_string().chars().count())
        .max()
        .unwrap_or(10);

    for outcome in outcomes {
        let status = match &outcome.status {
            ExportStatus::Exported {
                output,
                sheets,
                uncalibrated,
            } => {
                let missing = if *uncalibrated > 0 {
                    format!(", {uncalibrated} without calibration data")
                } else {
                    String::new()
                };
                format!("OK      {} sheet(s){} -> {}", sheets, missing, output.display())
            }
            ExportStatus::Locked => "LOCKED  file is open in another program".to_string(),
            ExportStatus::Malformed { reason } => format!("INVALID {reason}"),
            ExportStatus::Failed { reason } => format!("FAILED  {reason}"),
        };
        println!(
            "  {:<width$}  {}",
            outcome.input.display().to_string(),
            status,
            width = width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hplc_core::model::StandardSeries;
    use std::str::FromStr;

    fn dec(s: &str) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_parsed_sections() {
        let mut parsed = ParseResult::default();
        parsed.pages = 2;
        parsed.molecules.insert("Glucose".into());
        let mut series = StandardSeries::new();
        series.insert(dec("10"), dec("1000"));
        parsed.standards.insert("Glucose".into(), series);
        parsed
            .samples
            .entry("M1".into())
            .or_default()
            .insert("Glucose".into(), dec("1520"));

        let text = format_parsed(&parsed);
        assert!(text.starts_with("2 page(s), 1 molecule(s): Glucose"));
        assert!(text.contains("Glucose  (fewer than 2 points)"));
        assert!(text.contains("=== Samples ===\n\n  M1\n    Glucose"));
        assert!(text.contains("=== Internal standards ===\n\n  (none)"));
    }
}
