use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::info;

use crate::process::text_count::count_occurrences;
use crate::report;

/// Letter address of the column scanned in the workbook.
pub const TARGET_COLUMN: &str = "D";

/// Phrase counted across that column's string cells.
pub const TARGET_PHRASE: &str = "Cody Schrader";

/// Zero-based index for an Excel column letter ("A" → 0, "D" → 3, "AA" → 26).
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for ch in letters.chars() {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        index = index * 26 + (upper as usize - 'A' as usize + 1);
    }
    Some(index - 1)
}

/// Count case-insensitive occurrences of `phrase` in the string cells of
/// the letter-addressed column, first worksheet only. Non-string cells
/// are skipped.
pub fn count_in_column(path: &Path, letters: &str, phrase: &str) -> Result<usize> {
    let column = column_index(letters)
        .ok_or_else(|| anyhow!("invalid column letter {letters:?}"))?;

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("opening workbook {}", path.display()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook {} has no sheets", path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("reading sheet {sheet_name:?}"))?;

    let mut count = 0usize;
    for row in range.rows() {
        if let Some(Data::String(cell)) = row.get(column) {
            count += count_occurrences(cell, phrase);
        }
    }
    Ok(count)
}

/// Scan the workbook and write a one-line occurrence report.
pub fn process_file(input: &Path, output: &Path) -> Result<()> {
    let count = count_in_column(input, TARGET_COLUMN, TARGET_PHRASE)?;

    report::write(
        output,
        &format!("Occurrences of '{TARGET_PHRASE}' in column {TARGET_COLUMN}: {count}\n"),
    )?;
    info!(
        input = %input.display(),
        output = %output.display(),
        count,
        "wrote workbook occurrence report"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn single_letters_map_to_indices() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("D"), Some(3));
        assert_eq!(column_index("Z"), Some(25));
        assert_eq!(column_index("d"), Some(3));
    }

    #[test]
    fn double_letters_continue_past_z() {
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_index("AB"), Some(27));
        assert_eq!(column_index("BA"), Some(52));
    }

    #[test]
    fn invalid_letters_are_rejected() {
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("4"), None);
        assert_eq!(column_index("A1"), None);
    }

    #[test]
    fn missing_workbook_aborts_without_report() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("cody_schrader.txt");
        let missing = dir.path().join("nope.xlsx");

        assert!(process_file(&missing, &output).is_err());
        assert!(!output.exists());
    }
}
