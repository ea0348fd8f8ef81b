//! Print "column letter | header" for the fetched NCAA workbook.
//! Diagnostic used to pick the target column for the occurrence scan.

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Reader};
use statfetch::fetch::datasets;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

/// Letter address for a zero-based column index (0 → "A", 26 → "AA").
fn column_letters(index: usize) -> String {
    let mut letters = String::new();
    let mut remaining = index;
    loop {
        letters.insert(0, (b'A' + (remaining % 26) as u8) as char);
        if remaining < 26 {
            break;
        }
        remaining = remaining / 26 - 1;
    }
    letters
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let path = Path::new("data").join(datasets::NCAA_XLSX.file_name);
    let mut workbook = open_workbook_auto(&path)
        .with_context(|| format!("opening workbook {}", path.display()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook {} has no sheets", path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("reading sheet {sheet_name:?}"))?;

    println!("Column Letter | Column Name");
    println!("--------------------------");
    if let Some(header_row) = range.rows().next() {
        for (index, cell) in header_row.iter().enumerate() {
            println!("{:>13} | {}", column_letters(index), cell);
        }
    }

    Ok(())
}
