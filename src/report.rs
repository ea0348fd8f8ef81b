use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Write a UTF-8 text report to `path`, creating parent directories as needed.
/// The file is written in one shot so a failed analysis never leaves a
/// partial report behind.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
