//! Binary entry point: parse CLI arguments, load the dataset, run the viewer.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use volcanoscope::{load_csv_path, run_volcanoscope, VolcanoScopeConfig};

#[derive(Parser, Debug)]
#[command(name = "volcanoscope", about = "Interactive volcano map viewer")]
struct Args {
    /// Path to the volcano CSV file.
    #[arg(default_value = "data.csv")]
    csv: PathBuf,

    /// Window title.
    #[arg(long)]
    title: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dataset = load_csv_path(&args.csv)
        .with_context(|| format!("failed to load dataset from {:?}", args.csv))?;
    log::info!(
        "dataset ready: {} records, {} categories",
        dataset.records.len(),
        dataset.category_counts.len()
    );

    let mut config = VolcanoScopeConfig::default();
    if let Some(title) = args.title {
        config.title = title;
    }

    run_volcanoscope(dataset, config).map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
