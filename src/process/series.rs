use tracing::warn;

use crate::process::columns::Column;

/// Outcome of parsing a single cell.
///
/// Placeholder tokens are expected missing data and skipped silently;
/// anything else that fails numeric parsing is malformed and worth a
/// warning. Keeping the distinction explicit lets callers surface
/// malformed counts instead of only the final aggregate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellParse {
    Value(f64),
    Missing,
    Malformed,
}

/// Fixed tokens recognized as intentionally missing values.
const PLACEHOLDER_TOKENS: &[&str] = &["", "NA", "N/A", "-"];

pub fn parse_cell(raw: &str) -> CellParse {
    let trimmed = raw.trim();
    if PLACEHOLDER_TOKENS.contains(&trimmed) {
        return CellParse::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => CellParse::Value(value),
        Err(_) => CellParse::Malformed,
    }
}

/// Collect the numeric series for `column` across `rows`, in row order.
/// Returns the parsed values plus the number of malformed cells skipped.
/// A row too short to hold the column is treated as missing.
pub fn extract(rows: &[Vec<String>], column: &Column) -> (Vec<f64>, usize) {
    let mut values = Vec::with_capacity(rows.len());
    let mut malformed = 0usize;

    for row in rows {
        let raw = row.get(column.index).map(String::as_str).unwrap_or("");
        match parse_cell(raw) {
            CellParse::Value(v) => values.push(v),
            CellParse::Missing => {}
            CellParse::Malformed => {
                warn!(column = %column.header, value = raw, "skipping non-numeric value");
                malformed += 1;
            }
        }
    }

    (values, malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn par_column() -> Column {
        Column {
            index: 0,
            header: "PAR/Gm".to_string(),
        }
    }

    #[test]
    fn placeholders_are_missing() {
        for token in ["", "  ", "NA", "N/A", "-", " NA "] {
            assert_eq!(parse_cell(token), CellParse::Missing, "token {token:?}");
        }
    }

    #[test]
    fn numeric_cells_parse_and_trim() {
        assert_eq!(parse_cell(" 1.5 "), CellParse::Value(1.5));
        assert_eq!(parse_cell("-0.25"), CellParse::Value(-0.25));
    }

    #[test]
    fn non_numeric_cells_are_malformed() {
        assert_eq!(parse_cell("x"), CellParse::Malformed);
        assert_eq!(parse_cell("1.5.2"), CellParse::Malformed);
    }

    #[test]
    fn extract_skips_missing_and_counts_malformed() {
        let rows: Vec<Vec<String>> = [["1.5"], ["NA"], ["2.5"], ["x"]]
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        let (values, malformed) = extract(&rows, &par_column());
        assert_eq!(values, vec![1.5, 2.5]);
        assert_eq!(malformed, 1);
    }

    #[test]
    fn short_rows_count_as_missing() {
        let column = Column {
            index: 2,
            header: "PAR/Gm".to_string(),
        };
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        let (values, malformed) = extract(&rows, &column);
        assert!(values.is_empty());
        assert_eq!(malformed, 0);
    }
}
