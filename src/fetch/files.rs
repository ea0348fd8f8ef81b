use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::fetch::datasets::Dataset;

/// Download `dataset` and save it under `dest_dir` using its fixed filename.
/// Returns the full path of the saved file. A non-success HTTP status or a
/// filesystem failure aborts this one download; nothing is written in that case.
pub fn download(client: &Client, dataset: &Dataset, dest_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dest_path = dest_dir.as_ref().join(dataset.file_name);

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }

    let resp = client
        .get(dataset.url)
        .send()
        .with_context(|| format!("requesting {}", dataset.url))?
        .error_for_status()
        .with_context(|| format!("fetching {}", dataset.url))?;
    let bytes = resp
        .bytes()
        .with_context(|| format!("reading response body from {}", dataset.url))?;
    fs::write(&dest_path, &bytes)
        .with_context(|| format!("saving {}", dest_path.display()))?;

    Ok(dest_path)
}
