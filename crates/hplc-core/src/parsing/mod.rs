pub mod columns;
pub mod header;
pub mod table;
pub mod values;

use crate::error::HplcError;
use crate::extraction::PageContent;
use crate::model::{ParseResult, SkippedRow};
use crate::patterns::schema::PatternSetDef;
use crate::patterns::PatternSet;
use crate::progress::ProgressSink;
use columns::{align_columns, AlignedRow};
use header::{parse_header, PageHeader};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use table::find_table;
use values::parse_value;

/// Turns the pages of one HPLC report into a [`ParseResult`].
///
/// The parser only holds compiled patterns; all per-report state lives in
/// the call to [`ReportParser::parse_pages`], so one instance can serve
/// several reports at once.
#[derive(Debug, Clone)]
pub struct ReportParser {
    patterns: PatternSet,
}

impl ReportParser {
    pub fn new(def: &PatternSetDef) -> Result<Self, HplcError> {
        Ok(ReportParser {
            patterns: PatternSet::compile(def)?,
        })
    }

    /// Parser for a built-in preset (see [`crate::patterns::builtin::PRESETS`]).
    pub fn from_preset(name: &str) -> Result<Self, HplcError> {
        Self::new(&crate::patterns::builtin::load_preset(name)?)
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Parse all pages in order, reporting progress after each one.
    pub fn parse_pages(&self, pages: &[PageContent], progress: &dyn ProgressSink) -> ParseResult {
        let mut state = ParseState::default();
        state.result.pages = pages.len();

        for (i, page) in pages.iter().enumerate() {
            self.parse_page(page, &mut state);
            progress.report((i + 1) as f64 / pages.len() as f64);
        }

        state.result
    }

    fn parse_page(&self, page: &PageContent, state: &mut ParseState) {
        let text = page.text();

        let (sample_name, standard_marker) = match parse_header(&text, &self.patterns) {
            PageHeader::Blank => {
                log::debug!("page {}: blank/control injection, skipped", page.page_number);
                return;
            }
            PageHeader::Unnamed => {
                log::debug!("page {}: no sample name, skipped", page.page_number);
                return;
            }
            PageHeader::Sample {
                sample_name,
                standard_marker,
            } => (sample_name, standard_marker),
        };

        let is_standard = state.commit_standard(&sample_name, standard_marker);
        let sample_key = state.samples.resolve(&sample_name);
        log::debug!(
            "page {}: sample '{}' (key '{}'){}",
            page.page_number,
            sample_name,
            sample_key,
            if is_standard { ", standard" } else { "" }
        );

        let lines: Vec<&str> = page.lines.iter().map(String::as_str).collect();
        let Some(table) = find_table(&lines, &self.patterns.name_column, &self.patterns.area_column)
        else {
            log::debug!("page {}: no peak table header", page.page_number);
            return;
        };

        for row in &table.rows {
            let Some(aligned) = align_columns(&table.columns, &row.tokens, &self.patterns.name_column)
            else {
                continue;
            };
            if let Err(reason) = self.fold_row(&aligned, &sample_key, is_standard, &mut state.result)
            {
                log::debug!("page {}: dropped '{}': {}", page.page_number, row.text.trim(), reason);
                state.result.skipped_rows.push(SkippedRow {
                    page_number: page.page_number,
                    line_text: row.text.trim().to_string(),
                    reason,
                });
            }
        }
    }

    /// Record one aligned row. Returns the reason when the row is dropped.
    fn fold_row(
        &self,
        row: &AlignedRow<'_>,
        sample_key: &str,
        is_standard: bool,
        result: &mut ParseResult,
    ) -> Result<(), String> {
        let molecule = match row.get(&self.patterns.name_column) {
            Some(name) if !name.is_empty() => name,
            _ => return Err("empty name".into()),
        };
        let Some(area_raw) = row.get(&self.patterns.area_column) else {
            return Err("no area column".into());
        };

        result.molecules.insert(molecule.to_string());

        let area = parse_field(area_raw, "area")?;

        if is_standard {
            // Without a concentration column the last column is taken as one.
            let conc_raw = row
                .get(&self.patterns.conc_column)
                .or_else(|| row.last())
                .unwrap_or("");
            let conc = parse_field(conc_raw, "concentration")?;
            result
                .standards
                .entry(molecule.to_string())
                .or_default()
                .insert(conc, area);
        } else if self.patterns.is_internal_standard(molecule) {
            result
                .int_standards
                .entry(sample_key.to_string())
                .or_default()
                .insert(molecule.to_string(), area);
        } else {
            result
                .samples
                .entry(sample_key.to_string())
                .or_default()
                .insert(molecule.to_string(), area);
        }

        Ok(())
    }
}

fn parse_field(raw: &str, field: &str) -> Result<Decimal, String> {
    match parse_value(raw) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(format!("no {field} value")),
        Err(e) => Err(format!("invalid {field} '{raw}': {e}")),
    }
}

/// Per-report state threaded through the page loop.
#[derive(Default)]
struct ParseState {
    result: ParseResult,
    /// Sample names committed as calibration standards.
    standards: HashSet<String>,
    samples: SampleKeys,
}

impl ParseState {
    /// A sample seen once as a standard stays a standard on later pages.
    fn commit_standard(&mut self, sample_name: &str, standard_marker: bool) -> bool {
        if standard_marker {
            self.standards.insert(sample_name.to_string());
            true
        } else {
            self.standards.contains(sample_name)
        }
    }
}

/// Assigns result keys to sample names.
///
/// Consecutive pages with the same name share a key. A name that comes back
/// after a different sample gets a fresh key with a ` (n)` suffix.
#[derive(Default)]
struct SampleKeys {
    last: Option<(String, String)>,
    used: HashSet<String>,
    repeats: HashMap<String, usize>,
}

impl SampleKeys {
    fn resolve(&mut self, sample_name: &str) -> String {
        if let Some((name, key)) = &self.last {
            if name == sample_name {
                return key.clone();
            }
        }

        let mut key = sample_name.to_string();
        while self.used.contains(&key) {
            let n = self.repeats.entry(sample_name.to_string()).or_insert(1);
            *n += 1;
            key = format!("{sample_name} ({n})");
        }

        self.used.insert(key.clone());
        self.last = Some((sample_name.to_string(), key.clone()));
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;
    use rust_decimal_macros::dec;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent::new(number, lines.iter().map(|s| s.to_string()).collect())
    }

    fn parse(pages: &[PageContent]) -> ParseResult {
        ReportParser::from_preset("en")
            .unwrap()
            .parse_pages(pages, &NullProgress)
    }

    #[test]
    fn test_sample_keys_contiguous_repeat_shares_key() {
        let mut keys = SampleKeys::default();
        assert_eq!(keys.resolve("A"), "A");
        assert_eq!(keys.resolve("A"), "A");
    }

    #[test]
    fn test_sample_keys_non_contiguous_repeat_disambiguated() {
        let mut keys = SampleKeys::default();
        assert_eq!(keys.resolve("A"), "A");
        assert_eq!(keys.resolve("B"), "B");
        assert_eq!(keys.resolve("A"), "A (2)");
        assert_eq!(keys.resolve("B"), "B (2)");
        assert_eq!(keys.resolve("A"), "A (3)");
    }

    #[test]
    fn test_sample_keys_avoid_literal_suffix_collision() {
        let mut keys = SampleKeys::default();
        assert_eq!(keys.resolve("A (2)"), "A (2)");
        assert_eq!(keys.resolve("A"), "A");
        assert_eq!(keys.resolve("B"), "B");
        assert_eq!(keys.resolve("A"), "A (3)");
    }

    #[test]
    fn test_sample_rows() {
        let result = parse(&[page(
            1,
            &[
                "Sample Name: M1",
                "      Name        RT      Area",
                "      Glucose     5.21    1000",
                "      Fructose    6.02    2000,5",
            ],
        )]);
        let m1 = &result.samples["M1"];
        assert_eq!(m1["Glucose"], dec!(1000));
        assert_eq!(m1["Fructose"], dec!(2000.5));
        assert!(result.standards.is_empty());
    }

    #[test]
    fn test_unparsable_area_dropped_but_molecule_recorded() {
        let result = parse(&[page(
            1,
            &[
                "Sample Name: M1",
                "  Name   RT   Area",
                "  Glucose   5.21   n/q",
                "  Fructose   6.02   2000",
            ],
        )]);
        assert!(!result.samples["M1"].contains_key("Glucose"));
        assert!(result.molecules.contains("Glucose"));
        assert_eq!(result.skipped_rows.len(), 1);
        assert_eq!(result.skipped_rows[0].page_number, 1);
    }

    #[test]
    fn test_standard_without_conc_column_uses_last_column() {
        let result = parse(&[page(
            1,
            &[
                "Sample Name: Std5",
                "  Name   RT   Area   Amount",
                "  Glucose   5.21   500   5",
            ],
        )]);
        assert_eq!(result.standards["Glucose"][&dec!(5)], dec!(500));
    }

    #[test]
    fn test_standard_later_point_overwrites() {
        let result = parse(&[
            page(1, &["Sample Name: Std5", "  Name  Area  Conc", "  Glucose  500  5"]),
            page(2, &["Sample Name: Std5b", "  Name  Area  Conc", "  Glucose  510  5,0"]),
        ]);
        assert_eq!(result.standards["Glucose"].len(), 1);
        assert_eq!(result.standards["Glucose"][&dec!(5)], dec!(510));
    }

    #[test]
    fn test_blank_page_does_not_break_continuation() {
        let result = parse(&[
            page(1, &["Sample Name: A", "  Name  Area", "  Glucose  100"]),
            page(2, &["Sample Name: Blank", "  Name  Area", "  Glucose  1"]),
            page(3, &["Sample Name: A", "  Name  Area", "  Fructose  200"]),
        ]);
        assert_eq!(result.samples.len(), 1);
        assert_eq!(result.samples["A"].len(), 2);
    }

    #[test]
    fn test_progress_reaches_one() {
        use std::sync::mpsc;
        let (tx, rx) = mpsc::channel::<f64>();
        let parser = ReportParser::from_preset("en").unwrap();
        parser.parse_pages(
            &[page(1, &["Sample Name: A"]), page(2, &["no header"])],
            &tx,
        );
        drop(tx);
        let fractions: Vec<f64> = rx.iter().collect();
        assert_eq!(fractions, vec![0.5, 1.0]);
    }
}
