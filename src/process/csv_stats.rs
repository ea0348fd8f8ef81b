use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{error, info, warn};

use crate::process::{columns, series, stats::Summary};
use crate::report;

/// Preferred header for the numeric column; a hint, not a requirement.
pub const COLUMN_HINT: &str = "PAR/Gm";

/// Normalized aliases tried when the hint is absent, in priority order.
const FALLBACK_ALIASES: &[&str] = &["par", "qbpar", "pointsabovereplacement"];

const REPORT_HEADING: &str = "QB PAR Statistics:";
const FALLBACK_NOTE: &str = "No stats produced. Check column name in the CSV; see logs.";

/// Analyze the hinted numeric column of the CSV at `path`.
///
/// `Ok(None)` means the column could not be located or held no numeric
/// values; the caller writes the fallback report instead of failing.
/// Only I/O and CSV decoding failures are errors.
pub fn analyze_numeric_column(path: &Path, hint: &str) -> Result<Option<Summary>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(str::to_string)
        .collect();

    let column = match columns::locate(&headers, hint, FALLBACK_ALIASES) {
        Some(column) => column,
        None => {
            error!(hint, ?headers, "target column not found");
            return Ok(None);
        }
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("reading CSV record")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let (values, malformed) = series::extract(&rows, &column);
    if malformed > 0 {
        warn!(malformed, column = %column.header, "skipped non-numeric cells");
    }

    match Summary::compute(&values) {
        Some(summary) => Ok(Some(summary)),
        None => {
            error!(column = %column.header, "no numeric values found");
            Ok(None)
        }
    }
}

/// Read the QB PAR CSV, compute statistics, and write the report.
/// A structural mismatch still produces a report (the fallback text), so
/// downstream consumers always find one; only I/O failures abort.
pub fn process_file(input: &Path, output: &Path) -> Result<()> {
    let body = match analyze_numeric_column(input, COLUMN_HINT)? {
        Some(s) => format!(
            "{REPORT_HEADING}\n\
             Minimum: {:.2}\n\
             Maximum: {:.2}\n\
             Mean: {:.2}\n\
             Median: {:.2}\n\
             Standard Deviation: {:.2}\n",
            s.min, s.max, s.mean, s.median, s.stdev
        ),
        None => format!("{REPORT_HEADING}\n{FALLBACK_NOTE}\n"),
    };

    report::write(output, &body)?;
    info!(input = %input.display(), output = %output.display(), "wrote CSV statistics report");
    Ok(())
}
