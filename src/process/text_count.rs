use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

use crate::report;

/// Word counted across the full text.
pub const TARGET_WORD: &str = "Ahab";

/// Case-insensitive, non-overlapping occurrence count of `needle` in
/// `haystack`. Matches inside longer words count too ("Ahab's" counts).
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .to_lowercase()
        .matches(&needle.to_lowercase())
        .count()
}

/// Read the text file, count occurrences of the target word, and write a
/// one-line report.
pub fn process_file(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("reading text {}", input.display()))?;
    let count = count_occurrences(&content, TARGET_WORD);

    report::write(output, &format!("Occurrences of '{TARGET_WORD}': {count}\n"))?;
    info!(
        input = %input.display(),
        output = %output.display(),
        count,
        "wrote word count report"
    );
    Ok(())
}
