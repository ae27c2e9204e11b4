//! Locate the peak table on a page of layout text.
//!
//! The header row names the columns; the rows below it are split on
//! whitespace and handed to the column aligner.

/// Minimum token count for a row once the table has started. Shorter lines
/// after the first accepted row are footer text.
const MIN_ROW_TOKENS: usize = 3;

/// A located peak table: the header columns and the candidate data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegion<'a> {
    /// Index of the header line within the page.
    pub header_line: usize,
    pub columns: Vec<&'a str>,
    pub rows: Vec<CandidateRow<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow<'a> {
    pub line_index: usize,
    pub text: &'a str,
    pub tokens: Vec<&'a str>,
}

/// Detect if a line is the peak table header: its tokens include both the
/// name and the area column labels.
pub fn is_table_header(line: &str, name_column: &str, area_column: &str) -> bool {
    let mut has_name = false;
    let mut has_area = false;
    for token in line.split_whitespace() {
        has_name |= token == name_column;
        has_area |= token == area_column;
    }
    has_name && has_area
}

/// Find the first peak table on a page.
///
/// Rows run from the line after the header until the first blank line that
/// follows an accepted row. Lines with fewer tokens than the header are
/// skipped as noise, except that once a row has been accepted a line with
/// fewer than three tokens ends the table.
pub fn find_table<'a>(
    lines: &[&'a str],
    name_column: &str,
    area_column: &str,
) -> Option<TableRegion<'a>> {
    let header_line = lines
        .iter()
        .position(|line| is_table_header(line, name_column, area_column))?;
    let columns: Vec<&str> = lines[header_line].split_whitespace().collect();

    let mut rows = Vec::new();
    for (offset, &line) in lines[header_line + 1..].iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.is_empty() {
            if rows.is_empty() {
                continue;
            }
            break;
        }

        if !rows.is_empty() && tokens.len() < MIN_ROW_TOKENS {
            break;
        }

        if tokens.len() < columns.len() {
            continue;
        }

        rows.push(CandidateRow {
            line_index: header_line + 1 + offset,
            text: line,
            tokens,
        });
    }

    Some(TableRegion {
        header_line,
        columns,
        rows,
    })
}
