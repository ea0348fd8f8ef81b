use anyhow::Result;
use reqwest::blocking::Client;
use statfetch::{
    fetch::{datasets, files},
    process,
};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const DATA_DIR: &str = "data";
const PROCESSED_DIR: &str = "processed";

/// Run one independent step; a failure is logged and must not stop the rest.
fn run_step(name: &str, step: impl FnOnce() -> Result<()>) {
    if let Err(err) = step() {
        error!(step = name, "failed: {err:#}");
    }
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let client = Client::new();
    let data_dir = Path::new(DATA_DIR);
    let processed_dir = Path::new(PROCESSED_DIR);

    // ─── 2) fetch all datasets ───────────────────────────────────────
    for dataset in datasets::ALL {
        info!(name = dataset.name, url = dataset.url, "downloading");
        match files::download(&client, dataset, data_dir) {
            Ok(path) => info!(name = dataset.name, path = %path.display(), "downloaded"),
            Err(err) => error!(name = dataset.name, "download failed: {err:#}"),
        }
    }

    // ─── 3) process each dataset ─────────────────────────────────────
    run_step("csv-statistics", || {
        process::csv_stats::process_file(
            &data_dir.join(datasets::QB_PAR_CSV.file_name),
            &processed_dir.join("qb_par_stats.txt"),
        )
    });
    run_step("excel-occurrences", || {
        process::excel_count::process_file(
            &data_dir.join(datasets::NCAA_XLSX.file_name),
            &processed_dir.join("cody_schrader.txt"),
        )
    });
    run_step("json-tally", || {
        process::json_tally::process_file(
            &data_dir.join(datasets::COMPETITIONS_JSON.file_name),
            &processed_dir.join("json_seasons_per_competition.txt"),
        )
    });
    run_step("text-word-count", || {
        process::text_count::process_file(
            &data_dir.join(datasets::MOBY_DICK_TXT.file_name),
            &processed_dir.join("text_ahab_word_count.txt"),
        )
    });

    info!("all done");
    Ok(())
}
