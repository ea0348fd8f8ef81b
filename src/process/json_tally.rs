use anyhow::{Context, Result};
use serde_json::Value;
use std::{collections::HashMap, fs, path::Path};
use tracing::info;

use crate::report;

/// Key tallied across the competitions list.
pub const TALLY_KEY: &str = "competition_name";

const REPORT_HEADING: &str = "Seasons per competition:";

/// Bucket for records that lack the key or hold a non-string value.
const UNKNOWN: &str = "Unknown";

/// Count records per value of `key`, sorted by descending count then
/// ascending name so the ordering is stable across runs.
pub fn tally_by_key(records: &[Value], key: &str) -> Vec<(String, u64)> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records {
        let name = record.get(key).and_then(Value::as_str).unwrap_or(UNKNOWN);
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }

    let mut tally: Vec<(String, u64)> = counts.into_iter().collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tally
}

/// Read the competitions JSON, tally seasons per competition, and write
/// the report: one `<name>: <count>` line per competition.
pub fn process_file(input: &Path, output: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("reading JSON {}", input.display()))?;
    let records: Vec<Value> = serde_json::from_str(&text)
        .with_context(|| format!("decoding JSON {}", input.display()))?;

    let tally = tally_by_key(&records, TALLY_KEY);

    let mut body = String::from(REPORT_HEADING);
    body.push('\n');
    for (name, count) in &tally {
        body.push_str(&format!("{name}: {count}\n"));
    }

    report::write(output, &body)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        competitions = tally.len(),
        "wrote season tally report"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn tallies_by_descending_count_then_name() {
        let records = vec![
            json!({"competition_name": "A"}),
            json!({"competition_name": "B"}),
            json!({"competition_name": "A"}),
        ];
        let tally = tally_by_key(&records, TALLY_KEY);
        assert_eq!(tally, vec![("A".to_string(), 2), ("B".to_string(), 1)]);
    }

    #[test]
    fn equal_counts_sort_alphabetically() {
        let records = vec![
            json!({"competition_name": "Serie A"}),
            json!({"competition_name": "La Liga"}),
            json!({"competition_name": "Bundesliga"}),
        ];
        let tally = tally_by_key(&records, TALLY_KEY);
        let names: Vec<&str> = tally.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Bundesliga", "La Liga", "Serie A"]);
    }

    #[test]
    fn missing_key_buckets_as_unknown() {
        let records = vec![json!({"competition_name": "A"}), json!({"season": 2023})];
        let tally = tally_by_key(&records, TALLY_KEY);
        assert!(tally.contains(&("Unknown".to_string(), 1)));
    }

    #[test]
    fn writes_one_line_per_competition() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(
            br#"[{"competition_name":"A"},{"competition_name":"B"},{"competition_name":"A"}]"#,
        )?;
        let dir = tempdir()?;
        let output = dir.path().join("json_seasons_per_competition.txt");

        process_file(file.path(), &output)?;

        let report = fs::read_to_string(&output)?;
        assert_eq!(report, "Seasons per competition:\nA: 2\nB: 1\n");
        Ok(())
    }

    #[test]
    fn invalid_json_aborts_without_report() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"not json")?;
        let dir = tempdir()?;
        let output = dir.path().join("json_seasons_per_competition.txt");

        assert!(process_file(file.path(), &output).is_err());
        assert!(!output.exists());
        Ok(())
    }
}
