use crate::patterns::PatternSet;

/// How a page header classifies the page, before any cross-page state is
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageHeader {
    /// Blank or control injection; the page is ignored.
    Blank,
    /// No sample name line; the page carries no data of its own.
    Unnamed,
    /// A result page for `sample_name`.
    Sample {
        sample_name: String,
        /// The page itself marks the sample as a calibration standard.
        standard_marker: bool,
    },
}

/// Classify a page from its header text.
pub fn parse_header(text: &str, patterns: &PatternSet) -> PageHeader {
    if patterns.blank_sample.is_match(text) {
        return PageHeader::Blank;
    }

    let Some(sample_name) = extract_sample_name(text, patterns) else {
        return PageHeader::Unnamed;
    };

    let standard_marker =
        patterns.standard_name.is_match(text) || patterns.standard_vial_type.is_match(text);

    PageHeader::Sample {
        sample_name,
        standard_marker,
    }
}

/// Extract the sample name captured by the sample name pattern.
///
/// An empty capture yields the placeholder name. Layout output places other
/// header fields on the same line, so the capture is cut at the next large
/// whitespace gap (3+ spaces).
pub fn extract_sample_name(text: &str, patterns: &PatternSet) -> Option<String> {
    let caps = patterns.sample_name.captures(text)?;
    let raw = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let trimmed = raw.trim();
    let value = match trimmed.find("   ") {
        Some(gap_pos) => trimmed[..gap_pos].trim(),
        None => trimmed,
    };

    if value.is_empty() {
        Some(patterns.unnamed_sample.clone())
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::builtin::load_preset;

    fn english() -> PatternSet {
        PatternSet::compile(&load_preset("en").unwrap()).unwrap()
    }

    #[test]
    fn test_sample_page() {
        let text = "Project: Sugars\nSample Name: M1\nVial: 4\n";
        assert_eq!(
            parse_header(text, &english()),
            PageHeader::Sample {
                sample_name: "M1".into(),
                standard_marker: false
            }
        );
    }

    #[test]
    fn test_sample_name_cut_at_layout_gap() {
        let text = "  Sample Name: Grape juice 2      Injection Volume: 10.00\n";
        assert_eq!(
            extract_sample_name(text, &english()).as_deref(),
            Some("Grape juice 2")
        );
    }

    #[test]
    fn test_empty_sample_name_uses_placeholder() {
        let text = "Sample Name:\nVial: 1\n";
        assert_eq!(extract_sample_name(text, &english()).as_deref(), Some("unnamed"));
    }

    #[test]
    fn test_standard_by_name() {
        let text = "Sample Name: Std10\n";
        assert!(matches!(
            parse_header(text, &english()),
            PageHeader::Sample {
                standard_marker: true,
                ..
            }
        ));
    }

    #[test]
    fn test_standard_by_vial_type() {
        let text = "Sample Name: Level 3\nSample Type: Standard\n";
        assert!(matches!(
            parse_header(text, &english()),
            PageHeader::Sample {
                standard_marker: true,
                ..
            }
        ));
    }

    #[test]
    fn test_blank_page() {
        assert_eq!(parse_header("Sample Name: Blank 1\n", &english()), PageHeader::Blank);
        assert_eq!(parse_header("Sample Name: control\n", &english()), PageHeader::Blank);
    }

    #[test]
    fn test_page_without_sample_name() {
        assert_eq!(
            parse_header("  Name  RT  Area\n  Glucose 5.2 100\n", &english()),
            PageHeader::Unnamed
        );
    }

    #[test]
    fn test_spanish_preset() {
        let set = PatternSet::compile(&load_preset("es").unwrap()).unwrap();
        assert_eq!(
            parse_header("Nombre muestra: Patrón 5\n", &set),
            PageHeader::Sample {
                sample_name: "Patrón 5".into(),
                standard_marker: true
            }
        );
    }
}
