/// One data line assigned to the header columns.
///
/// Values are the raw tokens; numeric conversion happens in the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow<'a> {
    fields: Vec<(&'a str, String)>,
}

impl<'a> AlignedRow<'a> {
    /// Value of the first column named `column`.
    ///
    /// Headers like `Area  % Area` repeat a token, and the leftmost one is
    /// the one that carries the peak area.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the rightmost column.
    pub fn last(&self) -> Option<&str> {
        self.fields.last().map(|(_, value)| value.as_str())
    }
}

/// Assign whitespace tokens of a data line to the header columns.
///
/// Every column except `name_column` holds a single token. When the line has
/// more tokens than there are columns, the surplus belongs to the name, so
/// the columns left of the name take tokens from the start of the line, the
/// columns right of it take tokens from the end, and whatever is left in the
/// middle is joined back into the name.
///
/// Returns `None` when the line has fewer tokens than columns, or more tokens
/// than columns while `name_column` is not among them.
pub fn align_columns<'a>(
    columns: &[&'a str],
    tokens: &[&str],
    name_column: &str,
) -> Option<AlignedRow<'a>> {
    if tokens.len() < columns.len() {
        return None;
    }

    if tokens.len() == columns.len() {
        let fields = columns
            .iter()
            .zip(tokens)
            .map(|(column, token)| (*column, token.to_string()))
            .collect();
        return Some(AlignedRow { fields });
    }

    let name_idx = columns.iter().position(|c| *c == name_column)?;
    let right_count = columns.len() - 1 - name_idx;

    let (left, rest) = tokens.split_at(name_idx);
    let (middle, right) = rest.split_at(rest.len() - right_count);

    let mut fields = Vec::with_capacity(columns.len());
    for (column, token) in columns[..name_idx].iter().zip(left) {
        fields.push((*column, token.to_string()));
    }
    fields.push((columns[name_idx], middle.join(" ")));
    for (column, token) in columns[name_idx + 1..].iter().zip(right) {
        fields.push((*column, token.to_string()));
    }

    Some(AlignedRow { fields })
}
